//! The `OutputWriter` trait implemented by all backend writers.

use crate::{CaseSummaryRow, OutputResult, TrialRow};

/// Trait implemented by result writers.
///
/// Errors are stored by [`ReportObserver`][crate::ReportObserver] and
/// retrieved with [`take_error`][crate::ReportObserver::take_error].
pub trait OutputWriter {
    /// Write one trial row.
    fn write_trial(&mut self, row: &TrialRow) -> OutputResult<()>;

    /// Write one case summary row.
    fn write_case_summary(&mut self, row: &CaseSummaryRow) -> OutputResult<()>;

    /// Flush and close all underlying file handles.
    ///
    /// Calling it more than once is a no-op.
    fn finish(&mut self) -> OutputResult<()>;
}
