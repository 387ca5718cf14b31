//! The three named policy cases.

use std::fmt;
use std::str::FromStr;

use crate::PolicyError;

/// Identifies a forwarding policy case.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum PolicyKind {
    /// Relay to every neighbor unconditionally.
    Epidemic,
    /// Relay only to neighbors at or above the battery threshold.
    BatteryAware,
    /// As `BatteryAware`, but each refused relay may be overridden by a
    /// priority draw.
    BatteryAwareWithPriority,
}

impl PolicyKind {
    /// All cases in their canonical run order.
    pub const ALL: [PolicyKind; 3] = [
        PolicyKind::Epidemic,
        PolicyKind::BatteryAware,
        PolicyKind::BatteryAwareWithPriority,
    ];

    /// Short machine-friendly label, used in CSV columns and on the CLI.
    pub fn as_str(self) -> &'static str {
        match self {
            PolicyKind::Epidemic                 => "epidemic",
            PolicyKind::BatteryAware             => "battery-aware",
            PolicyKind::BatteryAwareWithPriority => "priority",
        }
    }

    /// Human-readable case description.
    pub fn description(self) -> &'static str {
        match self {
            PolicyKind::Epidemic                 => "Epidemic routing (no selfish nodes)",
            PolicyKind::BatteryAware             => "Battery-selfish nodes (no priority)",
            PolicyKind::BatteryAwareWithPriority => "Battery-selfish nodes (with priority messages)",
        }
    }
}

impl fmt::Display for PolicyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PolicyKind {
    type Err = PolicyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "epidemic" => Ok(PolicyKind::Epidemic),
            "battery-aware" | "battery" => Ok(PolicyKind::BatteryAware),
            "priority" | "battery-aware-with-priority" => Ok(PolicyKind::BatteryAwareWithPriority),
            _ => Err(PolicyError::Unknown(s.to_owned())),
        }
    }
}
