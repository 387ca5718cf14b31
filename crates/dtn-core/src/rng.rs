//! Deterministic RNG wrappers.
//!
//! # Determinism strategy
//!
//! Every shard (independent trial worker) of a policy case owns two private
//! `SmallRng` streams, seeded by:
//!
//!   sampler seed = global_seed XOR (shard * MIXING_CONSTANT)
//!   policy seed  = global_seed XOR ((shard + POLICY_STREAM) * MIXING_CONSTANT)
//!
//! The mixing constant is the 64-bit fractional part of the golden ratio,
//! which spreads consecutive shard indices uniformly across the seed space.
//! This means:
//!
//! - Shards never share RNG state, so they may run on any thread in any order.
//! - The sampler stream is independent of the policy being evaluated: every
//!   policy case draws the same sequence of (origin, destination, send-time)
//!   triples for a given seed.
//! - Priority-override draws consume only the policy stream, so they cannot
//!   perturb pair selection.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::ShardId;

/// 64-bit fractional golden-ratio constant for seed mixing.
const MIXING_CONSTANT: u64 = 0x9e37_79b9_7f4a_7c15;

/// Offset separating the policy stream from the sampler stream.
const POLICY_STREAM: u64 = 1 << 32;

// ── SimRng ────────────────────────────────────────────────────────────────────

/// Seedable random source.  Injected explicitly wherever randomness is needed;
/// there is no global generator.
pub struct SimRng(SmallRng);

impl SimRng {
    pub fn new(seed: u64) -> Self {
        SimRng(SmallRng::seed_from_u64(seed))
    }

    #[inline]
    pub fn random<T>(&mut self) -> T
    where
        rand::distributions::Standard: rand::distributions::Distribution<T>,
    {
        self.0.r#gen()
    }

    /// Generate a value uniformly in `range`.
    #[inline]
    pub fn gen_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distributions::uniform::SampleUniform,
        R: rand::distributions::uniform::SampleRange<T>,
    {
        self.0.gen_range(range)
    }

    /// `true` with probability `p` (clamped to [0, 1]).
    #[inline]
    pub fn gen_bool(&mut self, p: f64) -> bool {
        self.0.gen_bool(p.clamp(0.0, 1.0))
    }

    /// Choose a random element from a slice.
    /// Returns `None` if the slice is empty.
    #[inline]
    pub fn choose<'a, T>(&mut self, slice: &'a [T]) -> Option<&'a T> {
        use rand::seq::SliceRandom;
        slice.choose(&mut self.0)
    }
}

// ── ShardRngs ─────────────────────────────────────────────────────────────────

/// The pair of private random streams owned by one trial worker.
pub struct ShardRngs {
    /// Drives pair sampling (send-time, origin, destination).
    pub sampler: SimRng,
    /// Drives per-decision priority-override draws.
    pub policy:  SimRng,
}

impl ShardRngs {
    /// Seed both streams deterministically from the run's global seed and a
    /// shard index.
    pub fn new(global_seed: u64, shard: ShardId) -> Self {
        let shard = shard.0 as u64;
        Self {
            sampler: SimRng::new(global_seed ^ shard.wrapping_mul(MIXING_CONSTANT)),
            policy:  SimRng::new(
                global_seed ^ (shard + POLICY_STREAM).wrapping_mul(MIXING_CONSTANT),
            ),
        }
    }
}
