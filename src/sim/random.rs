//! Injectable randomness for spawning
//!
//! The simulation never reaches for a global RNG. Production runs use a seeded
//! `Pcg32`; tests script the exact draws they need.

use std::collections::VecDeque;

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

/// A source of uniform floats in `[0, 1)`
pub trait RandomSource {
    fn next_unit(&mut self) -> f32;
}

impl RandomSource for Pcg32 {
    fn next_unit(&mut self) -> f32 {
        self.random::<f32>()
    }
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    fn next_unit(&mut self) -> f32 {
        (**self).next_unit()
    }
}

/// Seeded production RNG
pub fn seeded(seed: u64) -> Pcg32 {
    Pcg32::seed_from_u64(seed)
}

/// Replays a fixed list of draws, then repeats `fallback` forever.
///
/// A fallback of `1.0` never passes a `< chance` roll, so
/// `ScriptedRandom::never()` keeps the track empty.
#[derive(Debug, Clone, Default)]
pub struct ScriptedRandom {
    draws: VecDeque<f32>,
    fallback: f32,
}

impl ScriptedRandom {
    pub fn new(draws: impl IntoIterator<Item = f32>, fallback: f32) -> Self {
        Self {
            draws: draws.into_iter().collect(),
            fallback,
        }
    }

    /// Every roll fails
    pub fn never() -> Self {
        Self::new([], 1.0)
    }

    /// Every roll succeeds
    pub fn always() -> Self {
        Self::new([], 0.0)
    }

    /// Queue more draws behind the pending ones
    pub fn push(&mut self, draws: impl IntoIterator<Item = f32>) {
        self.draws.extend(draws);
    }

    pub fn pending(&self) -> usize {
        self.draws.len()
    }
}

impl RandomSource for ScriptedRandom {
    fn next_unit(&mut self) -> f32 {
        self.draws.pop_front().unwrap_or(self.fallback)
    }
}
