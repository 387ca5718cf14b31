//! `ReportObserver<W>` bridges `ExperimentObserver` to an `OutputWriter`.

use dtn_policy::PolicyKind;
use dtn_sim::{CaseReport, ExperimentObserver, TrialResult};

use crate::writer::OutputWriter;
use crate::{CaseSummaryRow, OutputError, OutputResult, TrialRow};

/// An [`ExperimentObserver`] that writes every trial and case summary to any
/// [`OutputWriter`] backend.
///
/// Errors from the writer are stored internally because observer methods
/// have no return value.  After the run returns, check for errors with
/// [`take_error`][Self::take_error].
pub struct ReportObserver<W: OutputWriter> {
    writer:     W,
    last_error: Option<OutputError>,
}

impl<W: OutputWriter> ReportObserver<W> {
    pub fn new(writer: W) -> Self {
        Self { writer, last_error: None }
    }

    /// Take the stored write error (if any).
    ///
    /// Returns `None` if all writes succeeded.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Unwrap the inner writer.
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn store_err(&mut self, result: OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: OutputWriter> ExperimentObserver for ReportObserver<W> {
    fn on_trial_end(&mut self, policy: PolicyKind, trial: &TrialResult) {
        let result = self.writer.write_trial(&TrialRow::new(policy, trial));
        self.store_err(result);
    }

    fn on_case_end(&mut self, report: &CaseReport) {
        let result = self.writer.write_case_summary(&CaseSummaryRow::from(report));
        self.store_err(result);
    }

    fn on_experiment_end(&mut self) {
        let result = self.writer.finish();
        self.store_err(result);
    }
}
