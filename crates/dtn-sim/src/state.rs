//! Per-trial message state and its transition functions.
//!
//! # Phases
//!
//! ```text
//!            step()                       step() with destination merged
//!   INIT ───────────▶ PROPAGATING ──────────────────────────────▶ DELIVERED
//!     │                    │
//!     └────── exhaust() ───┴──────────────────────────────────────▶ EXHAUSTED
//! ```
//!
//! `DELIVERED` and `EXHAUSTED` are terminal: further `step`/`exhaust` calls
//! are no-ops.
//!
//! # Buffer
//!
//! The buffer (set of holders) and the hop-count map are one
//! `BTreeMap<NodeId, u32>`, so "hop count is defined for exactly the buffer's
//! members" holds by construction.  Entries are only ever inserted, never
//! removed or rewritten, so the buffer is append-only and a holder's hop
//! count never changes once set.

use std::collections::BTreeMap;

use dtn_core::{NodeId, SimRng};
use dtn_policy::ForwardingPolicy;
use dtn_spatial::ContactGraph;
use dtn_trace::Frame;

use crate::{Pair, TrialOutcome, TrialResult};

/// Lifecycle of one message.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum TrialPhase {
    Init,
    Propagating,
    Delivered { hops: u32, latency_secs: u64 },
    Exhausted,
}

impl TrialPhase {
    #[inline]
    pub fn is_terminal(self) -> bool {
        matches!(self, TrialPhase::Delivered { .. } | TrialPhase::Exhausted)
    }
}

/// Mutable state of one message instance.
#[derive(Clone, Debug)]
pub struct MessageState {
    pair:    Pair,
    holders: BTreeMap<NodeId, u32>,
    phase:   TrialPhase,
    steps:   usize,
}

impl MessageState {
    /// INIT: only the origin holds the message, at hop 0.
    pub fn new(pair: Pair) -> Self {
        let mut holders = BTreeMap::new();
        holders.insert(pair.origin, 0);
        Self { pair, holders, phase: TrialPhase::Init, steps: 0 }
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    #[inline]
    pub fn pair(&self) -> &Pair {
        &self.pair
    }

    #[inline]
    pub fn phase(&self) -> TrialPhase {
        self.phase
    }

    /// Number of timestamps evaluated so far.
    #[inline]
    pub fn steps(&self) -> usize {
        self.steps
    }

    /// `(holder, hops)` in ascending id order.
    pub fn holders(&self) -> impl Iterator<Item = (NodeId, u32)> + '_ {
        self.holders.iter().map(|(&id, &hops)| (id, hops))
    }

    #[inline]
    pub fn holder_count(&self) -> usize {
        self.holders.len()
    }

    #[inline]
    pub fn holds(&self, id: NodeId) -> bool {
        self.holders.contains_key(&id)
    }

    /// Hops from the origin to `id`, if `id` holds the message.
    #[inline]
    pub fn hops(&self, id: NodeId) -> Option<u32> {
        self.holders.get(&id).copied()
    }

    /// `true` if at least one holder under the hop limit is active in
    /// `frame`.  When `false`, no relay can happen at this timestamp.
    pub fn can_relay_in(&self, frame: &Frame, max_hops: u32) -> bool {
        self.holders
            .iter()
            .any(|(&id, &hops)| hops < max_hops && frame.contains(id))
    }

    // ── Transitions ───────────────────────────────────────────────────────

    /// Evaluate one timestamp.
    ///
    /// All relay decisions see the buffer as it was at the start of the
    /// step; approved neighbors are merged only after every holder has been
    /// considered.  A neighbor approved by several senders takes the
    /// smallest resulting hop count.  Returns the number of new holders.
    pub fn step<P: ForwardingPolicy + ?Sized>(
        &mut self,
        frame:    &Frame,
        contacts: &ContactGraph,
        policy:   &P,
        max_hops: u32,
        rng:      &mut SimRng,
    ) -> usize {
        if self.phase.is_terminal() {
            return 0;
        }
        self.phase = TrialPhase::Propagating;
        self.steps += 1;

        let mut pending: BTreeMap<NodeId, u32> = BTreeMap::new();
        for (&holder, &hops) in &self.holders {
            if hops >= max_hops {
                continue;
            }
            let Some(sender) = frame.get(holder) else {
                continue;
            };
            for neighbor in contacts.neighbors(holder) {
                if self.holders.contains_key(&neighbor) {
                    continue;
                }
                let Some(receiver) = frame.get(neighbor) else {
                    continue;
                };
                if policy.should_relay(sender, receiver, rng) {
                    pending
                        .entry(neighbor)
                        .and_modify(|h| *h = (*h).min(hops + 1))
                        .or_insert(hops + 1);
                }
            }
        }

        let relayed = pending.len();
        self.holders.extend(pending);

        if let Some(hops) = self.hops(self.pair.destination) {
            let elapsed = frame.time().secs_since(self.pair.send_time);
            self.phase = TrialPhase::Delivered {
                hops,
                latency_secs: u64::try_from(elapsed).unwrap_or(0),
            };
        }
        relayed
    }

    /// Mark the trial as having run out of timeline without delivery.
    pub fn exhaust(&mut self) {
        if !self.phase.is_terminal() {
            self.phase = TrialPhase::Exhausted;
        }
    }

    /// Final result.  A state that never reached a terminal phase is
    /// reported as exhausted.
    pub fn into_result(self) -> TrialResult {
        let outcome = match self.phase {
            TrialPhase::Delivered { hops, latency_secs } => {
                TrialOutcome::Delivered { hops, latency_secs }
            }
            _ => TrialOutcome::Exhausted,
        };
        TrialResult { pair: self.pair, outcome, steps: self.steps }
    }
}
