//! CSV output backend.
//!
//! Creates two files in the configured output directory:
//! - `trials.csv`
//! - `case_summaries.csv`
//!
//! Undelivered trials leave `hops` and `latency_secs` empty.

use std::fs::File;
use std::path::Path;

use csv::Writer;

use crate::writer::OutputWriter;
use crate::{CaseSummaryRow, OutputResult, TrialRow};

/// Writes experiment output to two CSV files.
pub struct CsvWriter {
    trials:    Writer<File>,
    summaries: Writer<File>,
    finished:  bool,
}

impl CsvWriter {
    /// Open (or create) the two CSV files in `dir` and write the header rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let mut trials = Writer::from_path(dir.join("trials.csv"))?;
        trials.write_record([
            "policy", "origin", "destination", "send_time_secs", "delivered", "hops", "latency_secs",
        ])?;

        let mut summaries = Writer::from_path(dir.join("case_summaries.csv"))?;
        summaries.write_record([
            "policy",
            "completed",
            "initiated",
            "delivered",
            "total_hops",
            "total_latency_secs",
            "rejected_attempts",
            "delivery_rate_pct",
            "mean_latency_secs",
            "mean_hops",
        ])?;

        Ok(Self { trials, summaries, finished: false })
    }
}

fn opt<T: ToString>(v: Option<T>) -> String {
    v.map(|x| x.to_string()).unwrap_or_default()
}

impl OutputWriter for CsvWriter {
    fn write_trial(&mut self, row: &TrialRow) -> OutputResult<()> {
        self.trials.write_record(&[
            row.policy.as_str().to_owned(),
            row.origin.to_string(),
            row.destination.to_string(),
            row.send_time_secs.to_string(),
            (row.delivered as u8).to_string(),
            opt(row.hops),
            opt(row.latency_secs),
        ])?;
        Ok(())
    }

    fn write_case_summary(&mut self, row: &CaseSummaryRow) -> OutputResult<()> {
        self.summaries.write_record(&[
            row.policy.as_str().to_owned(),
            (row.completed as u8).to_string(),
            row.initiated.to_string(),
            row.delivered.to_string(),
            row.total_hops.to_string(),
            row.total_latency_secs.to_string(),
            row.rejected_attempts.to_string(),
            format!("{:.4}", row.delivery_rate_pct),
            format!("{:.4}", row.mean_latency_secs),
            format!("{:.4}", row.mean_hops),
        ])?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.trials.flush()?;
        self.summaries.flush()?;
        Ok(())
    }
}
