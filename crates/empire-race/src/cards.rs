//! Event card pools.
//!
//! Two fixed four-card pools, one per drawing cell kind. A draw picks
//! uniformly from the matching pool; the cash delta is applied to the
//! drawing participant only, with no counter-entry anywhere - cards inject
//! or destroy money rather than transfer it.

use serde::Serialize;
use strum::Display;

/// Which pool a card comes from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Display)]
pub enum CardKind {
    Penalty,
    Reward,
}

/// A narrative event with a fixed cash delta (negative for penalties).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Card {
    pub description: &'static str,
    pub amount: i64,
}

pub const PENALTY_CARDS: [Card; 4] = [
    Card {
        description: "Barbarians plundered your treasury!",
        amount: -500,
    },
    Card {
        description: "Treatment costs for a plague outbreak",
        amount: -300,
    },
    Card {
        description: "The military campaign failed",
        amount: -400,
    },
    Card {
        description: "You fell victim to a palace conspiracy",
        amount: -600,
    },
];

pub const REWARD_CARDS: [Card; 4] = [
    Card {
        description: "Trade routes are safe, extra income!",
        amount: 500,
    },
    Card {
        description: "A new gold mine was discovered",
        amount: 400,
    },
    Card {
        description: "The emperor rewarded you",
        amount: 600,
    },
    Card {
        description: "You won the spoils of war",
        amount: 300,
    },
];

impl CardKind {
    /// The fixed pool for this kind.
    pub fn pool(self) -> &'static [Card; 4] {
        match self {
            CardKind::Penalty => &PENALTY_CARDS,
            CardKind::Reward => &REWARD_CARDS,
        }
    }
}
