//! Config-selected policy value.

use dtn_core::{SimConfig, SimRng};
use dtn_trace::NodeSnapshot;

use crate::{BatteryAware, Epidemic, ForwardingPolicy, PolicyKind, PriorityOverride};

/// One of the three built-in rules, chosen at runtime from a [`PolicyKind`].
///
/// Static dispatch through a `match`; the engine is generic over
/// [`ForwardingPolicy`], so custom rules can bypass this enum entirely.
#[derive(Copy, Clone, Debug)]
pub enum Policy {
    Epidemic(Epidemic),
    BatteryAware(BatteryAware),
    Priority(PriorityOverride),
}

impl Policy {
    /// Instantiate `kind` with the thresholds from `config`.
    pub fn from_kind(kind: PolicyKind, config: &SimConfig) -> Self {
        match kind {
            PolicyKind::Epidemic => Policy::Epidemic(Epidemic),
            PolicyKind::BatteryAware => {
                Policy::BatteryAware(BatteryAware::new(config.battery_threshold))
            }
            PolicyKind::BatteryAwareWithPriority => Policy::Priority(PriorityOverride::new(
                config.battery_threshold,
                config.priority_probability,
            )),
        }
    }
}

impl ForwardingPolicy for Policy {
    #[inline]
    fn should_relay(&self, holder: &NodeSnapshot, neighbor: &NodeSnapshot, rng: &mut SimRng) -> bool {
        match self {
            Policy::Epidemic(p)     => p.should_relay(holder, neighbor, rng),
            Policy::BatteryAware(p) => p.should_relay(holder, neighbor, rng),
            Policy::Priority(p)     => p.should_relay(holder, neighbor, rng),
        }
    }

    fn kind(&self) -> PolicyKind {
        match self {
            Policy::Epidemic(p)     => p.kind(),
            Policy::BatteryAware(p) => p.kind(),
            Policy::Priority(p)     => p.kind(),
        }
    }
}
