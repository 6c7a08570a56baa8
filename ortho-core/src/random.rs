//! Random streams driving the walk.
//!
//! The generator never touches ambient randomness. Every draw goes through a
//! [`RandomStream`] passed in by the caller, so the same stream always
//! reproduces the same paths.

use std::collections::VecDeque;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Source of uniform integer draws.
pub trait RandomStream {
    /// Draw uniformly from the half-open range `[min, max)`.
    ///
    /// An empty range (`max <= min`) yields `min` without consuming a draw.
    fn next_in_range(&mut self, min: i32, max: i32) -> i32;
}

impl<R: RandomStream + ?Sized> RandomStream for &mut R {
    fn next_in_range(&mut self, min: i32, max: i32) -> i32 {
        (**self).next_in_range(min, max)
    }
}

/// Reproducible stream backed by a seeded [`StdRng`].
#[derive(Debug, Clone)]
pub struct SeededStream {
    seed: u64,
    rng: StdRng,
}

impl SeededStream {
    /// Create a stream from a 64-bit seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// The seed this stream was created from.
    #[must_use]
    pub const fn seed(&self) -> u64 {
        self.seed
    }
}

impl RandomStream for SeededStream {
    fn next_in_range(&mut self, min: i32, max: i32) -> i32 {
        if max <= min {
            return min;
        }
        self.rng.gen_range(min..max)
    }
}

/// Replays a fixed list of draws.
///
/// Each scripted value is clamped into the requested range. Once the script
/// runs out every draw returns the range minimum.
#[derive(Debug, Clone, Default)]
pub struct ScriptedStream {
    draws: VecDeque<i32>,
    consumed: usize,
}

impl ScriptedStream {
    /// Create a stream replaying `draws` in order.
    #[must_use]
    pub fn new(draws: impl IntoIterator<Item = i32>) -> Self {
        Self {
            draws: draws.into_iter().collect(),
            consumed: 0,
        }
    }

    /// Draws still queued.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.draws.len()
    }

    /// Draws handed out so far.
    #[must_use]
    pub const fn consumed(&self) -> usize {
        self.consumed
    }
}

impl RandomStream for ScriptedStream {
    fn next_in_range(&mut self, min: i32, max: i32) -> i32 {
        if max <= min {
            return min;
        }
        self.consumed += 1;
        self.draws
            .pop_front()
            .map_or(min, |value| value.clamp(min, max - 1))
    }
}

/// Derive an independent seed for tile `index` from a base seed.
///
/// SplitMix64 finalizer over `base + index * golden-ratio`, so neighbouring
/// tiles get uncorrelated streams.
#[must_use]
pub fn tile_seed(base: u64, index: usize) -> u64 {
    let offset = (index as u64).wrapping_add(1);
    let mut z = base.wrapping_add(offset.wrapping_mul(0x9E37_79B9_7F4A_7C15));
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}
