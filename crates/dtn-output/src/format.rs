//! Human-readable case reports.

use std::fmt::Write;

use dtn_sim::{CaseReport, CaseStatus};

/// Render whole seconds as `H:MM:SS`.  Hours are not wrapped at 24.
pub fn format_hms(secs: u64) -> String {
    format!("{}:{:02}:{:02}", secs / 3_600, (secs % 3_600) / 60, secs % 60)
}

/// Multi-line summary of one case: description, delivery rate with raw
/// counts, mean latency (truncated to whole seconds), and mean hops.
///
/// ```text
/// Epidemic routing (no selfish nodes) [epidemic]
///   delivery rate : 45.00% (45 of 100 messages)
///   mean latency  : 0:12:30
///   mean hops     : 3.27
/// ```
pub fn format_case_report(report: &CaseReport) -> String {
    let r = &report.result;
    let mut out = String::new();
    let _ = writeln!(out, "{} [{}]", report.policy.description(), report.policy);
    if report.status == CaseStatus::InsufficientConnectivity {
        let _ = writeln!(
            out,
            "  warning       : ended early after {} rejected pairs (insufficient connectivity)",
            report.rejected_attempts
        );
    }
    let _ = writeln!(
        out,
        "  delivery rate : {:.2}% ({} of {} messages)",
        r.delivery_rate_pct(),
        r.delivered,
        r.initiated
    );
    let _ = writeln!(out, "  mean latency  : {}", format_hms(r.mean_latency_secs() as u64));
    let _ = writeln!(out, "  mean hops     : {:.2}", r.mean_hops());
    out
}
