//! Movement legality rules for each piece kind.
//!
//! Pure functions with no side effects - easy to test.
//!
//! Two quirks are contractual and must not be "fixed" toward full chess:
//! sliding pieces (bishop, rook, queen) never test the cells between source
//! and destination, and only the pawn rule inspects the destination's owner,
//! so any other piece may land on - and thereby discard - a friendly piece.

use crate::board::{Board, Coord, PieceKind, Side};

/// Check whether `side` may move the piece on `from` to `to`.
///
/// Returns `false` when `from` holds no piece of `side`, when `to` equals
/// `from`, or when the piece's movement shape does not cover the step.
pub fn is_legal_move(board: &Board, side: Side, from: Coord, to: Coord) -> bool {
    let Some(piece) = board.piece_at(from) else {
        return false;
    };
    if piece.side != side {
        return false;
    }
    // A move must go somewhere.
    if from == to {
        return false;
    }

    let row_diff = (to.row() as i8 - from.row() as i8).abs();
    let col_diff = (to.col() as i8 - from.col() as i8).abs();

    match piece.kind {
        PieceKind::Pawn => is_legal_pawn_move(board, side, from, to),
        PieceKind::Knight => {
            (row_diff == 2 && col_diff == 1) || (row_diff == 1 && col_diff == 2)
        }
        PieceKind::Bishop => row_diff == col_diff,
        PieceKind::Rook => row_diff == 0 || col_diff == 0,
        PieceKind::Queen => row_diff == col_diff || row_diff == 0 || col_diff == 0,
        PieceKind::King => row_diff <= 1 && col_diff <= 1,
    }
}

fn is_legal_pawn_move(board: &Board, side: Side, from: Coord, to: Coord) -> bool {
    // Exactly one row forward; no double step from the starting rank.
    if to.row() as i8 - from.row() as i8 != side.forward() {
        return false;
    }

    match (to.col() as i8 - from.col() as i8).abs() {
        // Straight ahead only onto an empty cell - pawns never capture forward.
        0 => board.is_empty(to),
        // Diagonal only onto an opposing piece - never onto an empty cell.
        1 => board
            .piece_at(to)
            .is_some_and(|target| target.side == side.opponent()),
        _ => false,
    }
}

/// All destinations `is_legal_move` accepts for the piece on `position`.
pub fn legal_destinations(board: &Board, side: Side, position: Coord) -> Vec<Coord> {
    let mut moves = Vec::new();
    for row in 0..8 {
        for col in 0..8 {
            let to = Coord::new(row, col).expect("coordinates in 0..8");
            if is_legal_move(board, side, position, to) {
                moves.push(to);
            }
        }
    }
    moves
}
