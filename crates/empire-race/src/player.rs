//! Participant state.

use serde::Serialize;

/// Starting cash for the default pair.
pub const START_CASH: i64 = 5000;

/// One turn-taking actor: cash, board position and property holdings.
///
/// Cash is signed and unbounded below - there is no bankruptcy mechanic.
/// `properties` holds board cell indices and only ever grows.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Participant {
    pub name: String,
    pub cash: i64,
    pub position: usize,
    pub properties: Vec<usize>,
}

impl Participant {
    pub fn new(name: impl Into<String>, cash: i64) -> Self {
        Participant {
            name: name.into(),
            cash,
            position: 0,
            properties: Vec::new(),
        }
    }

    /// The default two-participant lineup.
    pub fn default_pair() -> Vec<Participant> {
        vec![
            Participant::new("Caesar", START_CASH),
            Participant::new("Augustus", START_CASH),
        ]
    }
}
