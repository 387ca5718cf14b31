//! `dtn-trace`: the recorded mobility/power timeline and its loader.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                  |
//! |--------------|-----------------------------------------------------------|
//! | [`timeline`] | `NodeSnapshot`, `Frame`, `Timeline`, `TimelineBuilder`    |
//! | [`loader`]   | `load_trace_file`, `load_trace_reader`, `LoadReport`      |
//! | [`error`]    | `TraceError`, `TraceResult<T>`                            |
//!
//! # Timeline model
//!
//! ```text
//! Timeline = [Frame(t0), Frame(t1), …]     t0 < t1 < … (strictly increasing)
//! Frame(t) = nodes observed at t, sorted by NodeId, one snapshot per node
//! ```
//!
//! Nodes are intermittently present: a node absent from a frame simply did
//! not report at that instant.

pub mod error;
pub mod loader;
pub mod timeline;


pub use error::{TraceError, TraceResult};
pub use loader::{LoadReport, load_trace_file, load_trace_reader};
pub use timeline::{Frame, NodeSnapshot, Timeline, TimelineBuilder};
