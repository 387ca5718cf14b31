//! Integration tests for dtn-output.

#[cfg(test)]
mod fixtures {
    use dtn_core::{NodeId, Timestamp};
    use dtn_policy::PolicyKind;
    use dtn_sim::{AggregateResult, CaseReport, CaseStatus, Pair, TrialOutcome, TrialResult};

    pub fn pair(origin: u32, destination: u32) -> Pair {
        Pair {
            origin:      NodeId(origin),
            destination: NodeId(destination),
            send_index:  0,
            send_time:   Timestamp(1_000),
        }
    }

    pub fn delivered(hops: u32, latency_secs: u64) -> TrialResult {
        TrialResult {
            pair:    pair(1, 2),
            outcome: TrialOutcome::Delivered { hops, latency_secs },
            steps:   3,
        }
    }

    pub fn exhausted() -> TrialResult {
        TrialResult { pair: pair(3, 4), outcome: TrialOutcome::Exhausted, steps: 5 }
    }

    pub fn report(policy: PolicyKind, trials: &[TrialResult], status: CaseStatus) -> CaseReport {
        CaseReport {
            policy,
            result: trials.iter().collect::<AggregateResult>(),
            status,
            rejected_attempts: 7,
        }
    }
}

#[cfg(test)]
mod row_tests {
    use dtn_policy::PolicyKind;
    use dtn_sim::CaseStatus;

    use super::fixtures::*;
    use crate::{CaseSummaryRow, TrialRow};

    #[test]
    fn trial_row_delivered() {
        let row = TrialRow::new(PolicyKind::Epidemic, &delivered(2, 90));
        assert_eq!(row.origin, 1);
        assert_eq!(row.destination, 2);
        assert_eq!(row.send_time_secs, 1_000);
        assert!(row.delivered);
        assert_eq!(row.hops, Some(2));
        assert_eq!(row.latency_secs, Some(90));
    }

    #[test]
    fn trial_row_exhausted_has_no_metrics() {
        let row = TrialRow::new(PolicyKind::BatteryAware, &exhausted());
        assert!(!row.delivered);
        assert_eq!(row.hops, None);
        assert_eq!(row.latency_secs, None);
    }

    #[test]
    fn summary_row_derived_values() {
        let trials = [delivered(2, 90), delivered(4, 30), exhausted(), exhausted()];
        let row = CaseSummaryRow::from(&report(PolicyKind::Epidemic, &trials, CaseStatus::Completed));
        assert!(row.completed);
        assert_eq!(row.initiated, 4);
        assert_eq!(row.delivered, 2);
        assert_eq!(row.total_hops, 6);
        assert_eq!(row.total_latency_secs, 120);
        assert_eq!(row.rejected_attempts, 7);
        assert!((row.delivery_rate_pct - 50.0).abs() < 1e-9);
        assert!((row.mean_latency_secs - 60.0).abs() < 1e-9);
        assert!((row.mean_hops - 3.0).abs() < 1e-9);
    }

    #[test]
    fn summary_row_insufficient_connectivity() {
        let row = CaseSummaryRow::from(&report(
            PolicyKind::BatteryAwareWithPriority,
            &[],
            CaseStatus::InsufficientConnectivity,
        ));
        assert!(!row.completed);
        assert_eq!(row.initiated, 0);
        assert_eq!(row.delivery_rate_pct, 0.0);
    }
}

#[cfg(test)]
mod csv_tests {
    use dtn_policy::PolicyKind;
    use dtn_sim::CaseStatus;
    use tempfile::TempDir;

    use super::fixtures::*;
    use crate::csv::CsvWriter;
    use crate::writer::OutputWriter;
    use crate::{CaseSummaryRow, TrialRow};

    fn tmp() -> TempDir {
        tempfile::tempdir().expect("create temp dir")
    }

    #[test]
    fn csv_files_created() {
        let dir = tmp();
        let _w = CsvWriter::new(dir.path()).unwrap();
        assert!(dir.path().join("trials.csv").exists());
        assert!(dir.path().join("case_summaries.csv").exists());
    }

    #[test]
    fn csv_headers_correct() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join("trials.csv")).unwrap();
        let headers: Vec<_> = rdr.headers().unwrap().iter().map(str::to_owned).collect();
        assert_eq!(
            headers,
            ["policy", "origin", "destination", "send_time_secs", "delivered", "hops", "latency_secs"]
        );

        let mut rdr2 = csv::Reader::from_path(dir.path().join("case_summaries.csv")).unwrap();
        let headers2: Vec<_> = rdr2.headers().unwrap().iter().map(str::to_owned).collect();
        assert_eq!(headers2.len(), 10);
        assert_eq!(headers2[0], "policy");
        assert_eq!(headers2[7], "delivery_rate_pct");
    }

    #[test]
    fn csv_trial_rows() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.write_trial(&TrialRow::new(PolicyKind::Epidemic, &delivered(2, 90))).unwrap();
        w.write_trial(&TrialRow::new(PolicyKind::BatteryAware, &exhausted())).unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join("trials.csv")).unwrap();
        let records: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(records.len(), 2);
        assert_eq!(&records[0][0], "epidemic");
        assert_eq!(&records[0][4], "1");
        assert_eq!(&records[0][5], "2");
        assert_eq!(&records[0][6], "90");
        assert_eq!(&records[1][0], "battery-aware");
        assert_eq!(&records[1][4], "0");
        assert_eq!(&records[1][5], "");
        assert_eq!(&records[1][6], "");
    }

    #[test]
    fn csv_summary_row() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        let trials = [delivered(1, 60), exhausted()];
        let row = CaseSummaryRow::from(&report(PolicyKind::Epidemic, &trials, CaseStatus::Completed));
        w.write_case_summary(&row).unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join("case_summaries.csv")).unwrap();
        let records: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(records.len(), 1);
        assert_eq!(&records[0][1], "1");
        assert_eq!(&records[0][2], "2");
        assert_eq!(&records[0][7], "50.0000");
        assert_eq!(&records[0][8], "60.0000");
    }

    #[test]
    fn csv_finish_idempotent() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.finish().unwrap();
        w.finish().unwrap();
    }
}

#[cfg(test)]
mod format_tests {
    use dtn_policy::PolicyKind;
    use dtn_sim::CaseStatus;

    use super::fixtures::*;
    use crate::{format_case_report, format_hms};

    #[test]
    fn hms_formatting() {
        assert_eq!(format_hms(0), "0:00:00");
        assert_eq!(format_hms(59), "0:00:59");
        assert_eq!(format_hms(750), "0:12:30");
        assert_eq!(format_hms(3_600 * 27 + 61), "27:01:01");
    }

    #[test]
    fn report_contains_headline_values() {
        let trials = [delivered(3, 100), delivered(4, 51), exhausted()];
        let text = format_case_report(&report(PolicyKind::Epidemic, &trials, CaseStatus::Completed));
        assert!(text.starts_with("Epidemic routing (no selfish nodes) [epidemic]"));
        assert!(text.contains("66.67% (2 of 3 messages)"));
        // 151 / 2 = 75.5 s, truncated.
        assert!(text.contains("mean latency  : 0:01:15"));
        assert!(text.contains("mean hops     : 3.50"));
        assert!(!text.contains("warning"));
    }

    #[test]
    fn report_flags_insufficient_connectivity() {
        let text = format_case_report(&report(
            PolicyKind::BatteryAware,
            &[],
            CaseStatus::InsufficientConnectivity,
        ));
        assert!(text.contains("insufficient connectivity"));
        assert!(text.contains("0.00% (0 of 0 messages)"));
        assert!(text.contains("mean latency  : 0:00:00"));
    }
}

#[cfg(test)]
mod observer_tests {
    use dtn_core::{GeoPoint, NodeId, SimConfig, Timestamp};
    use dtn_policy::PolicyKind;
    use dtn_sim::{ExperimentObserver, ExperimentRunner};
    use dtn_trace::{NodeSnapshot, TimelineBuilder};

    use super::fixtures::*;
    use crate::writer::OutputWriter;
    use crate::{CaseSummaryRow, OutputError, OutputResult, ReportObserver, TrialRow};

    #[derive(Default)]
    struct MemWriter {
        trials:    Vec<TrialRow>,
        summaries: Vec<CaseSummaryRow>,
        finished:  usize,
        fail:      bool,
    }

    impl OutputWriter for MemWriter {
        fn write_trial(&mut self, row: &TrialRow) -> OutputResult<()> {
            if self.fail {
                return Err(OutputError::Io(std::io::Error::other("disk full")));
            }
            self.trials.push(*row);
            Ok(())
        }

        fn write_case_summary(&mut self, row: &CaseSummaryRow) -> OutputResult<()> {
            self.summaries.push(*row);
            Ok(())
        }

        fn finish(&mut self) -> OutputResult<()> {
            self.finished += 1;
            Ok(())
        }
    }

    #[test]
    fn forwards_callbacks_to_writer() {
        let mut obs = ReportObserver::new(MemWriter::default());
        obs.on_trial_end(PolicyKind::Epidemic, &delivered(1, 10));
        obs.on_trial_end(PolicyKind::Epidemic, &exhausted());
        obs.on_case_end(&report(PolicyKind::Epidemic, &[], dtn_sim::CaseStatus::Completed));
        obs.on_experiment_end();
        assert!(obs.take_error().is_none());

        let w = obs.into_writer();
        assert_eq!(w.trials.len(), 2);
        assert_eq!(w.summaries.len(), 1);
        assert_eq!(w.finished, 1);
    }

    #[test]
    fn keeps_first_error() {
        let mut obs = ReportObserver::new(MemWriter { fail: true, ..Default::default() });
        obs.on_trial_end(PolicyKind::Epidemic, &delivered(1, 10));
        obs.on_trial_end(PolicyKind::Epidemic, &delivered(1, 10));
        assert!(matches!(obs.take_error(), Some(OutputError::Io(_))));
        assert!(obs.take_error().is_none());
    }

    #[test]
    fn end_to_end_with_runner() {
        // Two nodes in contact every minute, 1 km apart from a third node.
        let base = GeoPoint::new(-23.5505, -46.6333);
        let mut b = TimelineBuilder::new();
        for i in 0..5i64 {
            let t = Timestamp(1_751_184_000 + 60 * i);
            b.push(t, NodeSnapshot::new(NodeId(1), base, 80));
            b.push(t, NodeSnapshot::new(NodeId(2), base.north_by(5.0), 80));
            b.push(t, NodeSnapshot::new(NodeId(3), base.north_by(1_000.0), 80));
        }
        let timeline = b.build();
        let config = SimConfig { trials_per_case: 10, ..SimConfig::default() };
        let runner = ExperimentRunner::new(&timeline, config).unwrap();

        let mut obs = ReportObserver::new(MemWriter::default());
        let reports = runner.run_all(&PolicyKind::ALL, &mut obs);
        assert!(obs.take_error().is_none());

        let w = obs.into_writer();
        assert_eq!(reports.len(), 3);
        assert_eq!(w.summaries.len(), 3);
        assert_eq!(w.trials.len(), 30);
        assert_eq!(w.finished, 1);
        for (summary, report) in w.summaries.iter().zip(&reports) {
            assert_eq!(summary.policy, report.policy);
            assert_eq!(summary.initiated, report.result.initiated);
        }
    }
}
