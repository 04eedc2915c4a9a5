//! Match controller: selection state machine and move application.
//!
//! The interaction contract is click-driven and two-phased: with nothing
//! selected, a click on a piece of the side to move selects it; with a
//! selection pending, the next click is a move attempt against the selected
//! cell, and the selection clears regardless of the outcome. Illegal attempts
//! are silent no-ops - no error, no state change beyond the cleared
//! selection.

use crate::board::{Board, Coord, Piece, Side};
use crate::rules::is_legal_move;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Record of an applied move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRecord {
    pub piece: Piece,
    pub from: Coord,
    pub to: Coord,
    /// Destination occupant discarded by this move, if any.
    pub captured: Option<Piece>,
}

/// What a click did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClickOutcome {
    /// Nothing was selected and the cell held no piece of the side to move.
    Ignored,
    /// The clicked piece became the pending selection.
    Selected(Coord),
    /// A pending selection was played and the move applied.
    Moved(MoveRecord),
    /// A pending selection was played but the move was illegal; the only
    /// state change is the cleared selection.
    Rejected,
}

/// A running match: board, side to move, move counter and pending selection.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Match {
    board: Board,
    turn: Side,
    move_counter: u32,
    selection: Option<Coord>,
}

impl Match {
    /// Fresh match: initial position, White to move, counter at 1.
    pub fn new() -> Self {
        Match {
            board: Board::initial(),
            turn: Side::White,
            move_counter: 1,
            selection: None,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn turn(&self) -> Side {
        self.turn
    }

    pub fn move_counter(&self) -> u32 {
        self.move_counter
    }

    pub fn selection(&self) -> Option<Coord> {
        self.selection
    }

    /// Feed one cell click through the selection state machine.
    pub fn click(&mut self, at: Coord) -> ClickOutcome {
        match self.selection.take() {
            None => {
                let holds_own_piece = self
                    .board
                    .piece_at(at)
                    .is_some_and(|piece| piece.side == self.turn);
                if holds_own_piece {
                    debug!("[CHESS] selected {at}");
                    self.selection = Some(at);
                    ClickOutcome::Selected(at)
                } else {
                    ClickOutcome::Ignored
                }
            }
            // Selection always clears after a move attempt, legal or not.
            Some(from) => match self.try_move(from, at) {
                Some(record) => ClickOutcome::Moved(record),
                None => {
                    debug!("[CHESS] rejected {from} -> {at}");
                    ClickOutcome::Rejected
                }
            },
        }
    }

    /// Validate and apply a move directly. Returns `None` and leaves the
    /// match untouched when the move is illegal.
    pub fn try_move(&mut self, from: Coord, to: Coord) -> Option<MoveRecord> {
        if !is_legal_move(&self.board, self.turn, from, to) {
            return None;
        }
        let piece = self.board.piece_at(from).expect("validated source piece");
        let captured = self.board.piece_at(to);
        self.board.set(to, Some(piece));
        self.board.set(from, None);
        self.turn = self.turn.opponent();
        self.move_counter += 1;
        debug!(
            "[CHESS] move {} {} -> {}, next turn {}",
            piece.kind, from, to, self.turn
        );
        Some(MoveRecord {
            piece,
            from,
            to,
            captured,
        })
    }

    /// Restore the starting state: initial board, White to move, counter 1.
    pub fn reset(&mut self) {
        debug!("[CHESS] match reset");
        *self = Match::new();
    }
}

impl Default for Match {
    fn default() -> Self {
        Match::new()
    }
}
