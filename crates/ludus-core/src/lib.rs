//! Shared infrastructure for the ludus game engines.
//!
//! Both game crates are pure state machines driven by discrete events. The two
//! things they cannot own themselves without losing determinism live here:
//!
//! - [`dice`] - a seedable randomness source behind the [`DiceSource`] trait,
//!   so tests can assert exact rolls instead of ranges.
//! - [`timeline`] - a virtual-clock queue of delayed events, replacing
//!   wall-clock timers for animated multi-step sequences. A front-end drives
//!   it in real time; tests fast-forward it.

pub mod dice;
pub mod timeline;

pub use dice::{DiceSource, RngDice, ScriptedDice};
pub use timeline::Timeline;
