//! Plain data row types written by output backends.

use dtn_policy::PolicyKind;
use dtn_sim::{CaseReport, CaseStatus, TrialResult};

/// One initiated trial.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrialRow {
    pub policy:         PolicyKind,
    pub origin:         u32,
    pub destination:    u32,
    pub send_time_secs: i64,
    pub delivered:      bool,
    /// Hops at delivery; `None` if not delivered.
    pub hops:           Option<u32>,
    /// Seconds from send to delivery; `None` if not delivered.
    pub latency_secs:   Option<u64>,
}

impl TrialRow {
    pub fn new(policy: PolicyKind, trial: &TrialResult) -> Self {
        Self {
            policy,
            origin:         trial.pair.origin.0,
            destination:    trial.pair.destination.0,
            send_time_secs: trial.pair.send_time.0,
            delivered:      trial.is_delivered(),
            hops:           trial.hops(),
            latency_secs:   trial.latency_secs(),
        }
    }
}

/// Aggregated result of one policy case: raw counts plus derived values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CaseSummaryRow {
    pub policy:             PolicyKind,
    pub completed:          bool,
    pub initiated:          u64,
    pub delivered:          u64,
    pub total_hops:         u64,
    pub total_latency_secs: u64,
    pub rejected_attempts:  u64,
    pub delivery_rate_pct:  f64,
    pub mean_latency_secs:  f64,
    pub mean_hops:          f64,
}

impl From<&CaseReport> for CaseSummaryRow {
    fn from(report: &CaseReport) -> Self {
        let r = &report.result;
        Self {
            policy:             report.policy,
            completed:          report.status == CaseStatus::Completed,
            initiated:          r.initiated,
            delivered:          r.delivered,
            total_hops:         r.total_hops,
            total_latency_secs: r.total_latency_secs,
            rejected_attempts:  report.rejected_attempts,
            delivery_rate_pct:  r.delivery_rate_pct(),
            mean_latency_secs:  r.mean_latency_secs(),
            mean_hops:          r.mean_hops(),
        }
    }
}
