//! Semicolon-delimited trace loader.
//!
//! # Record format
//!
//! One record per line, no header row:
//!
//! ```text
//! node_id;date;time;lat,lon;battery
//! 17;29/06/2025;08:15:00;-23.561234,-46.655678;84
//! 17;29/06/2025;08:16:00;-23.561301,-46.655702;84
//! 42;29/06/2025;08:15:00;-23.561250,-46.655690;12
//! ```
//!
//! | Field     | Format                                   |
//! |-----------|------------------------------------------|
//! | `node_id` | unsigned integer                         |
//! | `date`    | `dd/mm/YYYY`                             |
//! | `time`    | `HH:MM:SS` (24 h)                        |
//! | `lat,lon` | two decimal degrees joined by a comma    |
//! | `battery` | integer percent, 0–255 accepted          |
//!
//! Malformed records are skipped and counted in [`LoadReport`]; they never
//! abort ingestion.  Only a failure of the underlying reader is an error.

use std::io::Read;
use std::path::Path;

use chrono::NaiveDateTime;
use csv::StringRecord;
use tracing::{debug, info};

use dtn_core::{GeoPoint, NodeId, Timestamp};

use crate::timeline::{NodeSnapshot, Timeline, TimelineBuilder};
use crate::{TraceError, TraceResult};

const DATETIME_FORMAT: &str = "%d/%m/%Y %H:%M:%S";

/// Ingestion counters.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct LoadReport {
    /// Records turned into snapshots.
    pub accepted: usize,
    /// Records dropped as malformed.
    pub skipped:  usize,
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Load a trace file into a [`Timeline`].
pub fn load_trace_file(path: &Path) -> TraceResult<(Timeline, LoadReport)> {
    let file = std::fs::File::open(path).map_err(TraceError::Io)?;
    info!(path = %path.display(), "loading trace");
    load_trace_reader(file)
}

/// Like [`load_trace_file`] but accepts any `Read` source.
///
/// Useful for testing (pass a `std::io::Cursor`).
pub fn load_trace_reader<R: Read>(reader: R) -> TraceResult<(Timeline, LoadReport)> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .delimiter(b';')
        .has_headers(false)
        .flexible(true)
        .from_reader(reader);

    let mut builder = TimelineBuilder::new();
    let mut report = LoadReport::default();

    for (index, result) in csv_reader.records().enumerate() {
        let record = match result {
            Ok(r) => r,
            Err(e) if e.is_io_error() => return Err(TraceError::Csv(e)),
            Err(e) => {
                debug!(record_index = index, error = %e, "skipping unreadable trace record");
                report.skipped += 1;
                continue;
            }
        };

        match parse_record(&record) {
            Some((time, snap)) => {
                builder.push(time, snap);
                report.accepted += 1;
            }
            None => {
                debug!(record_index = index, record = ?record, "skipping malformed trace record");
                report.skipped += 1;
            }
        }
    }

    let timeline = builder.build();
    info!(
        timestamps = timeline.len(),
        nodes      = timeline.node_ids().len(),
        accepted   = report.accepted,
        skipped    = report.skipped,
        "trace loaded"
    );
    Ok((timeline, report))
}

// ── Helpers ───────────────────────────────────────────────────────────────────

/// Parse one record.  `None` means malformed.
fn parse_record(record: &StringRecord) -> Option<(Timestamp, NodeSnapshot)> {
    let id: u32 = record.get(0)?.trim().parse().ok()?;
    let time = parse_timestamp(record.get(1)?, record.get(2)?)?;
    let pos = parse_coordinates(record.get(3)?)?;
    let battery: u8 = record.get(4)?.trim().parse().ok()?;
    Some((time, NodeSnapshot::new(NodeId(id), pos, battery)))
}

fn parse_timestamp(date: &str, time: &str) -> Option<Timestamp> {
    let joined = format!("{} {}", date.trim(), time.trim());
    NaiveDateTime::parse_from_str(&joined, DATETIME_FORMAT)
        .ok()
        .map(|dt| Timestamp(dt.and_utc().timestamp()))
}

fn parse_coordinates(field: &str) -> Option<GeoPoint> {
    let mut parts = field.split(',');
    let lat: f64 = parts.next()?.trim().parse().ok()?;
    let lon: f64 = parts.next()?.trim().parse().ok()?;
    if parts.next().is_some() || !lat.is_finite() || !lon.is_finite() {
        return None;
    }
    Some(GeoPoint::new(lat, lon))
}
