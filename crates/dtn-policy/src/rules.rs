//! The three relay rules.

use dtn_core::SimRng;
use dtn_trace::NodeSnapshot;

use crate::{ForwardingPolicy, PolicyKind};

// ── Epidemic ──────────────────────────────────────────────────────────────────

/// Unconditional flooding: every holder relays to every reachable neighbor.
#[derive(Copy, Clone, Debug, Default)]
pub struct Epidemic;

impl ForwardingPolicy for Epidemic {
    #[inline]
    fn should_relay(&self, _holder: &NodeSnapshot, _neighbor: &NodeSnapshot, _rng: &mut SimRng) -> bool {
        true
    }

    fn kind(&self) -> PolicyKind {
        PolicyKind::Epidemic
    }
}

// ── BatteryAware ──────────────────────────────────────────────────────────────

/// Neighbors whose battery is below `threshold` are selfish and refuse to
/// carry the message.
#[derive(Copy, Clone, Debug)]
pub struct BatteryAware {
    pub threshold: u8,
}

impl BatteryAware {
    pub fn new(threshold: u8) -> Self {
        Self { threshold }
    }

    /// `true` if `node` refuses to carry messages.
    #[inline]
    pub fn is_selfish(&self, node: &NodeSnapshot) -> bool {
        node.battery < self.threshold
    }
}

impl ForwardingPolicy for BatteryAware {
    #[inline]
    fn should_relay(&self, _holder: &NodeSnapshot, neighbor: &NodeSnapshot, _rng: &mut SimRng) -> bool {
        !self.is_selfish(neighbor)
    }

    fn kind(&self) -> PolicyKind {
        PolicyKind::BatteryAware
    }
}

// ── PriorityOverride ──────────────────────────────────────────────────────────

/// Battery-aware relaying where a selfish neighbor still accepts the message
/// if an independent Bernoulli(`probability`) draw marks this particular
/// relay decision as priority.
///
/// The draw is taken afresh for every candidate relay that the battery rule
/// refuses, not once per message.  Non-selfish neighbors never consume a
/// draw.
#[derive(Copy, Clone, Debug)]
pub struct PriorityOverride {
    pub battery:     BatteryAware,
    pub probability: f64,
}

impl PriorityOverride {
    pub fn new(threshold: u8, probability: f64) -> Self {
        Self { battery: BatteryAware::new(threshold), probability }
    }
}

impl ForwardingPolicy for PriorityOverride {
    #[inline]
    fn should_relay(&self, _holder: &NodeSnapshot, neighbor: &NodeSnapshot, rng: &mut SimRng) -> bool {
        !self.battery.is_selfish(neighbor) || rng.gen_bool(self.probability)
    }

    fn kind(&self) -> PolicyKind {
        PolicyKind::BatteryAwareWithPriority
    }
}
