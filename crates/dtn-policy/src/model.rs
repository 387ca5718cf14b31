//! The `ForwardingPolicy` trait: the relay decision extension point.

use dtn_core::SimRng;
use dtn_trace::NodeSnapshot;

use crate::PolicyKind;

/// Pluggable relay decision.
///
/// Called by the propagation engine for every candidate relay: a `holder`
/// that already carries the message and is still under the hop limit, and a
/// `neighbor` in range that does not carry it yet.  Both snapshots are taken
/// from the frame being evaluated.
///
/// # Thread safety
///
/// Independent trial workers share one policy value, so implementations
/// must be `Send + Sync`.  Randomness comes only from the `rng` argument,
/// which each worker owns privately.
///
/// # Example
///
/// ```rust,ignore
/// struct FullBatteryOnly;
///
/// impl ForwardingPolicy for FullBatteryOnly {
///     fn should_relay(&self, _holder: &NodeSnapshot, neighbor: &NodeSnapshot, _rng: &mut SimRng) -> bool {
///         neighbor.battery == 100
///     }
///     fn kind(&self) -> PolicyKind { PolicyKind::BatteryAware }
/// }
/// ```
pub trait ForwardingPolicy: Send + Sync {
    /// `true` if `holder` hands the message to `neighbor` this timestep.
    fn should_relay(
        &self,
        holder:   &NodeSnapshot,
        neighbor: &NodeSnapshot,
        rng:      &mut SimRng,
    ) -> bool;

    /// Which named case this policy implements (for reporting).
    fn kind(&self) -> PolicyKind;
}
