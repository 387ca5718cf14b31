//! `dtn-core`: foundational types for the battery-aware DTN simulator.
//!
//! Every other `dtn-*` crate depends on this one.  It has no `dtn-*`
//! dependencies and minimal external ones (`rand` and `thiserror`, plus the
//! optional `serde` and `rustc-hash`).
//!
//! # What lives here
//!
//! | Module       | Contents                                               |
//! |--------------|--------------------------------------------------------|
//! | [`ids`]      | `NodeId`, `ShardId`                                    |
//! | [`geo`]      | `GeoPoint`, haversine distance                         |
//! | [`time`]     | `Timestamp` (whole seconds)                            |
//! | [`rng`]      | `SimRng`, `ShardRngs` (sampler + policy streams)       |
//! | [`config`]   | `SimConfig`, every tunable of a run                    |
//! | [`hash`]     | `IdMap` (SipHash or FxHash)                            |
//! | [`error`]    | `DtnError`, `DtnResult`                                |
//!
//! # Feature flags
//!
//! | Flag      | Effect                                                   |
//! |-----------|----------------------------------------------------------|
//! | `serde`   | Adds `Serialize`/`Deserialize` to all public types.      |
//! | `fx-hash` | Backs `IdMap` with `rustc_hash::FxHasher`.               |

pub mod config;
pub mod error;
pub mod geo;
pub mod hash;
pub mod ids;
pub mod rng;
pub mod time;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::{SimConfig, split_evenly};
pub use error::{DtnError, DtnResult};
pub use geo::GeoPoint;
pub use hash::IdMap;
pub use ids::{NodeId, ShardId};
pub use rng::{ShardRngs, SimRng};
pub use time::Timestamp;
