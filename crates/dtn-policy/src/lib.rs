//! `dtn-policy`: relay decision rules.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                       |
//! |-------------|----------------------------------------------------------------|
//! | [`model`]   | `ForwardingPolicy` trait                                       |
//! | [`kind`]    | `PolicyKind`: the three named cases, parseable from text      |
//! | [`rules`]   | `Epidemic`, `BatteryAware`, `PriorityOverride`                 |
//! | [`policy`]  | `Policy`: config-selected enum over the three rules           |
//! | [`error`]   | `PolicyError`                                                  |
//!
//! # Design notes
//!
//! A policy is consulted once per candidate relay `(holder → neighbor)` per
//! timestep.  It must not mutate simulation state; the only side effect
//! allowed is consuming the injected RNG (priority draws), so outcomes are
//! reproducible under a fixed seed.

pub mod error;
pub mod kind;
pub mod model;
pub mod policy;
pub mod rules;


pub use error::PolicyError;
pub use kind::PolicyKind;
pub use model::ForwardingPolicy;
pub use policy::Policy;
pub use rules::{BatteryAware, Epidemic, PriorityOverride};
