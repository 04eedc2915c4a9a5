//! Turn economy simulator - a dice-driven race around a 16-cell board.
//!
//! Each turn one participant rolls a die (with an animated sequence of
//! displayed faces), advances cell by cell with a visible delay, then
//! resolves the landed cell: buy or decline an unowned property, pay
//! mandatory rent on someone else's, or draw a timed penalty/reward card.
//! There is no win condition and no bankruptcy; cash may go negative and
//! property ownership, once set, never clears.
//!
//! The engine is a pure state machine. All delays live in a
//! [`ludus_core::Timeline`] of virtual-time events, so a front-end can drive
//! it against the wall clock while tests fast-forward deterministically, and
//! all randomness comes through a [`ludus_core::DiceSource`].
//!
//! # Module Structure
//!
//! - `board` - cell kinds and the fixed 16-cell standard board
//! - `cards` - the two fixed four-card event pools
//! - `player` - participant state and the default pair
//! - `engine` - the [`RaceEngine`] turn state machine

pub mod board;
pub mod cards;
pub mod engine;
pub mod player;


pub use board::{standard_board, BoardCell, CellKind, BOARD_LEN};
pub use cards::{Card, CardKind, PENALTY_CARDS, REWARD_CARDS};
pub use engine::{
    BuyOutcome, PendingChoice, RaceEngine, RaceError, RaceEvent, RaceResult, RaceState,
    TurnPhase,
};
pub use player::Participant;
