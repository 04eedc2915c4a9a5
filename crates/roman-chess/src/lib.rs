//! Simplified chess rules - pure game logic without a rendering layer.
//!
//! This crate implements the deliberately reduced ruleset of the Roman chess
//! mini-game: per-piece movement shapes only. There is no check or checkmate
//! detection, no castling, promotion or en passant, and sliding pieces do not
//! test for blocking pieces along their path. That last point is part of the
//! contract, not an omission to repair: the rules here are the testable
//! behavior, not FIDE chess.
//!
//! # Module Structure
//!
//! - `board` - piece, side and board types plus the fixed initial layout
//! - `rules` - movement legality predicates (pure functions)
//! - `game` - the [`Match`] controller: click/selection state machine, move
//!   application, turn and move-counter bookkeeping

pub mod board;
pub mod error;
pub mod game;
pub mod rules;

#[cfg(test)]
mod tests;

pub use board::{Board, Coord, Piece, PieceKind, Side};
pub use error::{ChessError, ChessResult};
pub use game::{ClickOutcome, Match, MoveRecord};
pub use rules::is_legal_move;
