//! `dtn-sim`: trial state machine and experiment orchestration.
//!
//! # One trial
//!
//! ```text
//! PairSampler        → (origin, destination, send-time)      rejection sampling
//! MessageState::new  → INIT: buffer = {origin}, hops[origin] = 0
//! for frame in timeline[send_index..]:
//!   ① ContactGraph::for_frame(frame, comm_radius)
//!   ② every holder with hops < max_hops offers the message to every
//!      neighbor not yet holding it; ForwardingPolicy decides
//!   ③ approved neighbors merge into the buffer after the whole frame
//!      (hops = sender's hops + 1, minimum over approving senders)
//!   ④ destination in buffer → DELIVERED (hops, latency); stop
//! timeline exhausted → EXHAUSTED
//! ```
//!
//! # One case
//!
//! [`ExperimentRunner`] repeats trials for one [`ForwardingPolicy`] until
//! `trials_per_case` trials have been *initiated*, or the sampler has been
//! rejected `retry_multiplier × trials_per_case` times, in which case the
//! case ends early with [`CaseStatus::InsufficientConnectivity`].
//!
//! # Cargo features
//!
//! | Feature    | Effect                                                 |
//! |------------|--------------------------------------------------------|
//! | `parallel` | Runs a case's shards on Rayon's thread pool.           |
//! | `fx-hash`  | FxHash for id-keyed maps.                              |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use dtn_core::SimConfig;
//! use dtn_policy::PolicyKind;
//! use dtn_sim::{ExperimentRunner, NoopObserver};
//!
//! let (timeline, _report) = dtn_trace::load_trace_file(path)?;
//! let runner = ExperimentRunner::new(&timeline, SimConfig::default())?;
//! for report in runner.run_all(&PolicyKind::ALL, &mut NoopObserver) {
//!     println!("{}: {:.2}%", report.policy, report.result.delivery_rate_pct());
//! }
//! ```
//!
//! [`ForwardingPolicy`]: dtn_policy::ForwardingPolicy

pub mod engine;
pub mod error;
pub mod observer;
pub mod result;
pub mod runner;
pub mod sampler;
pub mod state;


pub use engine::PropagationEngine;
pub use error::{SimError, SimResult};
pub use observer::{ExperimentObserver, NoopObserver, TrialObserver};
pub use result::{AggregateResult, CaseReport, CaseStatus, TrialOutcome, TrialResult};
pub use runner::ExperimentRunner;
pub use sampler::{Pair, PairSampler, Sampled};
pub use state::{MessageState, TrialPhase};
