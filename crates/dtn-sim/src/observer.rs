//! Observer traits for progress reporting and data collection.

use dtn_core::{SimConfig, Timestamp};
use dtn_policy::PolicyKind;

use crate::{CaseReport, MessageState, TrialResult};

/// Callbacks invoked by [`ExperimentRunner`][crate::ExperimentRunner].
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.  Calls always arrive on the caller's
/// thread, in shard order, even with the `parallel` feature.
///
/// # Example: delivery counter
///
/// ```rust,ignore
/// struct Deliveries(u64);
///
/// impl ExperimentObserver for Deliveries {
///     fn on_trial_end(&mut self, _policy: PolicyKind, trial: &TrialResult) {
///         if trial.is_delivered() {
///             self.0 += 1;
///         }
///     }
/// }
/// ```
pub trait ExperimentObserver {
    /// Called before the first trial of a case.
    fn on_case_start(&mut self, _policy: PolicyKind, _config: &SimConfig) {}

    /// Called once per initiated trial.
    fn on_trial_end(&mut self, _policy: PolicyKind, _trial: &TrialResult) {}

    /// Called after the last trial of a case with the aggregated result.
    fn on_case_end(&mut self, _report: &CaseReport) {}

    /// Called once after every requested case has run.
    fn on_experiment_end(&mut self) {}
}

/// Step-level hook for a single trial run by
/// [`PropagationEngine`][crate::PropagationEngine].
pub trait TrialObserver {
    /// Called after each evaluated timestamp, once pending relays have been
    /// merged into the buffer.
    fn on_step(&mut self, _time: Timestamp, _state: &MessageState) {}
}

/// An observer that does nothing.  Use when you need to call `run_*` but
/// don't want callbacks.
pub struct NoopObserver;

impl ExperimentObserver for NoopObserver {}

impl TrialObserver for NoopObserver {}
