//! Board, piece and coordinate types.
//!
//! The board is a plain 8x8 grid of optional pieces. Row 0 is the Black back
//! rank, row 7 the White back rank; White pawns advance toward row 0.

use crate::error::{ChessError, ChessResult};
use serde::{Deserialize, Serialize};
use strum::Display;

/// One of the two turn-taking sides.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
pub enum Side {
    White,
    Black,
}

impl Side {
    pub fn opponent(self) -> Side {
        match self {
            Side::White => Side::Black,
            Side::Black => Side::White,
        }
    }

    /// Signed row delta of a forward pawn step for this side.
    pub fn forward(self) -> i8 {
        match self {
            Side::White => -1,
            Side::Black => 1,
        }
    }
}

/// The six piece ranks.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceKind {
    /// Glyph used by the terminal front-end. One symbol set for both sides;
    /// the side is conveyed by color.
    pub fn symbol(self) -> char {
        match self {
            PieceKind::King => '♔',
            PieceKind::Queen => '♕',
            PieceKind::Rook => '♖',
            PieceKind::Bishop => '♗',
            PieceKind::Knight => '♘',
            PieceKind::Pawn => '♙',
        }
    }
}

/// A piece: rank plus owning side.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Piece {
    pub kind: PieceKind,
    pub side: Side,
}

impl Piece {
    pub fn new(kind: PieceKind, side: Side) -> Self {
        Piece { kind, side }
    }
}

/// A validated board coordinate; `row` and `col` are always in `0..8`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Coord {
    row: u8,
    col: u8,
}

impl Coord {
    pub fn new(row: u8, col: u8) -> ChessResult<Coord> {
        if row > 7 || col > 7 {
            return Err(ChessError::OffBoard { row, col });
        }
        Ok(Coord { row, col })
    }

    pub fn row(self) -> u8 {
        self.row
    }

    pub fn col(self) -> u8 {
        self.col
    }
}

impl std::fmt::Display for Coord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // File letter then rank number, rank 8 at row 0.
        write!(f, "{}{}", (b'a' + self.col) as char, 8 - self.row)
    }
}

/// 8x8 grid holding at most one piece per cell.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    cells: [[Option<Piece>; 8]; 8],
}

const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

impl Board {
    /// Board with no pieces.
    pub fn empty() -> Self {
        Board {
            cells: [[None; 8]; 8],
        }
    }

    /// The fixed starting position: Black on rows 0-1, White on rows 6-7,
    /// queens on column 3.
    pub fn initial() -> Self {
        let mut board = Board::empty();
        for col in 0..8 {
            board.cells[0][col] = Some(Piece::new(BACK_RANK[col], Side::Black));
            board.cells[1][col] = Some(Piece::new(PieceKind::Pawn, Side::Black));
            board.cells[6][col] = Some(Piece::new(PieceKind::Pawn, Side::White));
            board.cells[7][col] = Some(Piece::new(BACK_RANK[col], Side::White));
        }
        board
    }

    pub fn piece_at(&self, at: Coord) -> Option<Piece> {
        self.cells[at.row() as usize][at.col() as usize]
    }

    pub fn is_empty(&self, at: Coord) -> bool {
        self.piece_at(at).is_none()
    }

    pub fn set(&mut self, at: Coord, piece: Option<Piece>) {
        self.cells[at.row() as usize][at.col() as usize] = piece;
    }

    /// Total pieces on the board.
    pub fn piece_count(&self) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|cell| cell.is_some())
            .count()
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::initial()
    }
}
