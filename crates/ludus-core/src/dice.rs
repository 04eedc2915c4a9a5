//! Randomness behind a trait so game engines stay deterministic under test.
//!
//! Production code hands an engine an [`RngDice`] (seeded or OS-entropy);
//! tests hand it a seeded rng for exact replay, or a [`ScriptedDice`] when a
//! test wants to dictate each draw outright.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::VecDeque;

/// Source of the two kinds of randomness the game engines consume.
pub trait DiceSource {
    /// Uniform integer in `[1, 6]`.
    fn roll_d6(&mut self) -> u8;

    /// Uniform index in `[0, len)`. `len` must be non-zero.
    fn pick_index(&mut self, len: usize) -> usize;
}

/// [`DiceSource`] backed by any [`rand::Rng`].
pub struct RngDice<R: Rng>(pub R);

impl RngDice<StdRng> {
    /// Reproducible source for a given seed.
    pub fn seeded(seed: u64) -> Self {
        RngDice(StdRng::seed_from_u64(seed))
    }

    /// Source seeded from OS entropy.
    pub fn from_entropy() -> Self {
        RngDice(StdRng::from_os_rng())
    }
}

impl<R: Rng> DiceSource for RngDice<R> {
    fn roll_d6(&mut self) -> u8 {
        self.0.random_range(1..=6)
    }

    fn pick_index(&mut self, len: usize) -> usize {
        self.0.random_range(0..len)
    }
}

/// Test double that replays a fixed sequence of values.
///
/// Every call, `roll_d6` or `pick_index`, pops the front of the same queue,
/// which lets a test count exactly how many draws an operation consumes.
/// Panics when the script runs dry; a test that under-provisions its script
/// is wrong.
#[derive(Debug, Default, Clone)]
pub struct ScriptedDice {
    values: VecDeque<u64>,
}

impl ScriptedDice {
    pub fn new(values: impl IntoIterator<Item = u64>) -> Self {
        ScriptedDice {
            values: values.into_iter().collect(),
        }
    }

    pub fn remaining(&self) -> usize {
        self.values.len()
    }

    fn next(&mut self) -> u64 {
        self.values
            .pop_front()
            .unwrap_or_else(|| panic!("scripted dice exhausted"))
    }
}

impl DiceSource for ScriptedDice {
    fn roll_d6(&mut self) -> u8 {
        let v = self.next();
        debug_assert!((1..=6).contains(&v), "scripted d6 out of range: {v}");
        v as u8
    }

    fn pick_index(&mut self, len: usize) -> usize {
        let v = self.next() as usize;
        debug_assert!(v < len, "scripted index {v} out of range for len {len}");
        v
    }
}
