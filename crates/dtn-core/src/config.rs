//! Run configuration.
//!
//! Every tunable of an experiment lives in one immutable [`SimConfig`] that is
//! handed to the experiment runner and, from there, to the propagation
//! engine.  Applications typically load it from a TOML file (with the `serde`
//! feature) and override individual fields from the command line.

use crate::{DtnError, DtnResult};

/// Top-level simulation configuration.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, deny_unknown_fields))]
pub struct SimConfig {
    /// A sampled (origin, destination) pair is only accepted if the two nodes
    /// are at least this far apart (metres) at some shared timestamp.
    pub min_separation_m: f64,

    /// Two nodes are in contact when their distance is at most this (metres).
    pub comm_radius_m: f64,

    /// Number of *initiated* trials to run per policy case.
    pub trials_per_case: u32,

    /// Nodes whose battery is strictly below this level are selfish.
    pub battery_threshold: u8,

    /// Probability that a single relay decision is priority-overridden.
    pub priority_probability: f64,

    /// Holders whose hop count has reached this limit stop relaying.
    pub max_hops: u32,

    /// Rejected sampling attempts allowed per case (summed over shards), as
    /// a multiple of `trials_per_case`.
    pub retry_multiplier: u32,

    /// Master RNG seed.  The same seed and trace always produce identical
    /// results.
    pub seed: u64,

    /// Independent trial workers per case.  Each gets private RNG streams;
    /// all of them draw on one case-wide trial target and retry budget.
    pub shards: u32,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            min_separation_m:     500.0,
            comm_radius_m:        10.0,
            trials_per_case:      100,
            battery_threshold:    30,
            priority_probability: 0.8,
            max_hops:             10,
            retry_multiplier:     200,
            seed:                 42,
            shards:               1,
        }
    }
}

impl SimConfig {
    /// Check value ranges.  Called by the experiment runner before any case
    /// runs.
    pub fn validate(&self) -> DtnResult<()> {
        if !self.min_separation_m.is_finite() || self.min_separation_m < 0.0 {
            return Err(DtnError::Config(format!(
                "min_separation_m must be a non-negative number, got {}",
                self.min_separation_m
            )));
        }
        if !self.comm_radius_m.is_finite() || self.comm_radius_m < 0.0 {
            return Err(DtnError::Config(format!(
                "comm_radius_m must be a non-negative number, got {}",
                self.comm_radius_m
            )));
        }
        if !(0.0..=1.0).contains(&self.priority_probability) {
            return Err(DtnError::Config(format!(
                "priority_probability must lie in [0, 1], got {}",
                self.priority_probability
            )));
        }
        if self.trials_per_case == 0 {
            return Err(DtnError::Config("trials_per_case must be at least 1".into()));
        }
        if self.retry_multiplier == 0 {
            return Err(DtnError::Config("retry_multiplier must be at least 1".into()));
        }
        if self.shards == 0 {
            return Err(DtnError::Config("shards must be at least 1".into()));
        }
        Ok(())
    }

    /// Upper bound on rejected sampling attempts for a whole case,
    /// however many shards share it.
    #[inline]
    pub fn retry_bound(&self) -> u64 {
        self.trials_per_case as u64 * self.retry_multiplier as u64
    }
}

/// Split `total` into `parts` shares that differ by at most one.  The first
/// `total % parts` shares take the extra unit, so any zero shares come last.
pub fn split_evenly(total: u64, parts: u32) -> Vec<u64> {
    let parts = u64::from(parts.max(1));
    let base = total / parts;
    let extra = total % parts;
    (0..parts).map(|i| base + u64::from(i < extra)).collect()
}
