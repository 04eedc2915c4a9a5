//! The cyclic board: cell kinds and the fixed standard layout.

use serde::Serialize;
use strum::Display;

/// Number of cells on the standard board.
pub const BOARD_LEN: usize = 16;

/// What landing on a cell does.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Display)]
pub enum CellKind {
    /// No effect.
    Start,
    /// Ownable; earns rent for its owner from other participants.
    Property { price: i64, rent: i64 },
    /// Draw from the penalty card pool.
    Penalty,
    /// Draw from the reward card pool.
    Reward,
}

/// One board cell. `owner` is a participant index and is only ever set on
/// property cells; once set it never clears.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct BoardCell {
    pub name: &'static str,
    pub kind: CellKind,
    pub owner: Option<usize>,
}

impl BoardCell {
    const fn start(name: &'static str) -> Self {
        BoardCell {
            name,
            kind: CellKind::Start,
            owner: None,
        }
    }

    const fn property(name: &'static str, price: i64, rent: i64) -> Self {
        BoardCell {
            name,
            kind: CellKind::Property { price, rent },
            owner: None,
        }
    }

    const fn penalty() -> Self {
        BoardCell {
            name: "Penalty",
            kind: CellKind::Penalty,
            owner: None,
        }
    }

    const fn reward() -> Self {
        BoardCell {
            name: "Reward",
            kind: CellKind::Reward,
            owner: None,
        }
    }

    pub fn price(&self) -> Option<i64> {
        match self.kind {
            CellKind::Property { price, .. } => Some(price),
            _ => None,
        }
    }

    pub fn rent(&self) -> Option<i64> {
        match self.kind {
            CellKind::Property { rent, .. } => Some(rent),
            _ => None,
        }
    }
}

/// The fixed 16-cell cycle, position 0 being the start cell.
pub fn standard_board() -> Vec<BoardCell> {
    vec![
        BoardCell::start("Start"),
        BoardCell::property("Roma", 1000, 200),
        BoardCell::penalty(),
        BoardCell::property("Ostia Harbor", 800, 150),
        BoardCell::reward(),
        BoardCell::property("Colosseum", 1200, 250),
        BoardCell::penalty(),
        BoardCell::property("Pompeii", 600, 100),
        BoardCell::reward(),
        BoardCell::property("Forum Romanum", 900, 180),
        BoardCell::penalty(),
        BoardCell::property("Pantheon", 1100, 220),
        BoardCell::property("Carthage", 950, 190),
        BoardCell::reward(),
        BoardCell::property("Alexandria", 1300, 260),
        BoardCell::penalty(),
    ]
}
