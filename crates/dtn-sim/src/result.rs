//! Trial and case result types.

use dtn_policy::PolicyKind;

use crate::Pair;

// ── TrialResult ───────────────────────────────────────────────────────────────

/// Terminal outcome of one trial.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum TrialOutcome {
    /// The destination entered the buffer.  `latency_secs` is the delivery
    /// timestamp minus the send timestamp.
    Delivered { hops: u32, latency_secs: u64 },
    /// The timeline ended first.
    Exhausted,
}

/// Everything recorded about one initiated trial.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct TrialResult {
    pub pair:    Pair,
    pub outcome: TrialOutcome,
    /// Timestamps evaluated, including the delivery timestamp.
    pub steps:   usize,
}

impl TrialResult {
    #[inline]
    pub fn is_delivered(&self) -> bool {
        matches!(self.outcome, TrialOutcome::Delivered { .. })
    }

    pub fn hops(&self) -> Option<u32> {
        match self.outcome {
            TrialOutcome::Delivered { hops, .. } => Some(hops),
            TrialOutcome::Exhausted => None,
        }
    }

    pub fn latency_secs(&self) -> Option<u64> {
        match self.outcome {
            TrialOutcome::Delivered { latency_secs, .. } => Some(latency_secs),
            TrialOutcome::Exhausted => None,
        }
    }
}

// ── AggregateResult ───────────────────────────────────────────────────────────

/// Summed counters over the trials of one case.
///
/// Merging is plain addition, so partial results from independent workers
/// can be combined in any order.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct AggregateResult {
    pub initiated:          u64,
    pub delivered:          u64,
    pub total_hops:         u64,
    pub total_latency_secs: u64,
}

impl AggregateResult {
    /// Account for one finished trial.
    pub fn record(&mut self, trial: &TrialResult) {
        self.initiated += 1;
        if let TrialOutcome::Delivered { hops, latency_secs } = trial.outcome {
            self.delivered += 1;
            self.total_hops += hops as u64;
            self.total_latency_secs += latency_secs;
        }
    }

    pub fn merge(&mut self, other: &AggregateResult) {
        self.initiated += other.initiated;
        self.delivered += other.delivered;
        self.total_hops += other.total_hops;
        self.total_latency_secs += other.total_latency_secs;
    }

    /// `delivered / initiated × 100`, or 0 with no initiated trials.
    pub fn delivery_rate_pct(&self) -> f64 {
        if self.initiated == 0 {
            return 0.0;
        }
        self.delivered as f64 / self.initiated as f64 * 100.0
    }

    /// Mean latency over delivered trials, or 0 with no deliveries.
    pub fn mean_latency_secs(&self) -> f64 {
        if self.delivered == 0 {
            return 0.0;
        }
        self.total_latency_secs as f64 / self.delivered as f64
    }

    /// Mean hop count over delivered trials, or 0 with no deliveries.
    pub fn mean_hops(&self) -> f64 {
        if self.delivered == 0 {
            return 0.0;
        }
        self.total_hops as f64 / self.delivered as f64
    }
}

impl<'a> FromIterator<&'a TrialResult> for AggregateResult {
    fn from_iter<I: IntoIterator<Item = &'a TrialResult>>(iter: I) -> Self {
        let mut agg = AggregateResult::default();
        for trial in iter {
            agg.record(trial);
        }
        agg
    }
}

// ── CaseReport ────────────────────────────────────────────────────────────────

/// How a case ended.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum CaseStatus {
    /// The target number of initiated trials was reached.
    Completed,
    /// The sampler's rejection budget ran out first.  The report still
    /// carries every trial completed before that point.
    InsufficientConnectivity,
}

/// Outcome of one policy case.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct CaseReport {
    pub policy:            PolicyKind,
    pub result:            AggregateResult,
    pub status:            CaseStatus,
    /// Sampling attempts rejected across all shards.
    pub rejected_attempts: u64,
}

impl CaseReport {
    #[inline]
    pub fn is_complete(&self) -> bool {
        self.status == CaseStatus::Completed
    }
}
