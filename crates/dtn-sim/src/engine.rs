//! The per-trial propagation driver.

use dtn_core::SimRng;
use dtn_policy::ForwardingPolicy;
use dtn_spatial::ContactGraph;
use dtn_trace::Timeline;

use crate::{MessageState, NoopObserver, Pair, TrialObserver, TrialResult};

/// Runs one message from its send-time frame to delivery or the end of the
/// timeline.
///
/// Holds only shared references and copies of the two limits it needs, so a
/// single engine can be used by many trials (and, with `&P: Sync`, by many
/// threads).
pub struct PropagationEngine<'a, P: ForwardingPolicy + ?Sized> {
    timeline:      &'a Timeline,
    policy:        &'a P,
    comm_radius_m: f64,
    max_hops:      u32,
}

impl<'a, P: ForwardingPolicy + ?Sized> PropagationEngine<'a, P> {
    pub fn new(timeline: &'a Timeline, policy: &'a P, comm_radius_m: f64, max_hops: u32) -> Self {
        Self { timeline, policy, comm_radius_m, max_hops }
    }

    /// Run a trial for `pair`.  `rng` feeds the policy's random draws.
    pub fn run(&self, pair: Pair, rng: &mut SimRng) -> TrialResult {
        self.run_observed(pair, rng, &mut NoopObserver)
    }

    /// Like [`run`][Self::run] but reports every evaluated timestamp to
    /// `observer`.
    pub fn run_observed<O: TrialObserver>(
        &self,
        pair:     Pair,
        rng:      &mut SimRng,
        observer: &mut O,
    ) -> TrialResult {
        let mut state = MessageState::new(pair);

        let frames = self.timeline.frames().get(pair.send_index..).unwrap_or_default();
        for frame in frames {
            // Skip the O(n²) graph build when no holder could relay anyway.
            let contacts = if state.can_relay_in(frame, self.max_hops) {
                ContactGraph::for_frame(frame, self.comm_radius_m)
            } else {
                ContactGraph::empty()
            };

            state.step(frame, &contacts, self.policy, self.max_hops, rng);
            observer.on_step(frame.time(), &state);

            if state.phase().is_terminal() {
                break;
            }
        }

        state.exhaust();
        state.into_result()
    }
}
