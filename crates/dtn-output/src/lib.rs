//! `dtn-output`: experiment result writers and reports.
//!
//! | Backend / helper        | Produces                                        |
//! |-------------------------|-------------------------------------------------|
//! | [`CsvWriter`]           | `trials.csv`, `case_summaries.csv`              |
//! | [`format_case_report`]  | the three headline values as human-readable text |
//!
//! Writers implement [`OutputWriter`] and are driven by [`ReportObserver`],
//! which implements `dtn_sim::ExperimentObserver`.
//!
//! # Usage
//!
//! ```rust,ignore
//! use dtn_output::{CsvWriter, ReportObserver};
//!
//! let writer = CsvWriter::new(Path::new("./output"))?;
//! let mut obs = ReportObserver::new(writer);
//! let reports = runner.run_all(&PolicyKind::ALL, &mut obs);
//! if let Some(e) = obs.take_error() {
//!     eprintln!("output error: {e}");
//! }
//! ```

pub mod csv;
pub mod error;
pub mod format;
pub mod observer;
pub mod row;
pub mod writer;

#[cfg(test)]
mod tests;

pub use csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use format::{format_case_report, format_hms};
pub use observer::ReportObserver;
pub use row::{CaseSummaryRow, TrialRow};
pub use writer::OutputWriter;
