//! Criticality bands a residual risk index is classified into.

use serde::{Deserialize, Serialize};

/// Criticality level attached to a classification band.
///
/// `Unknown` is never configured; it marks a value outside every band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CriticalityLevel {
    Acceptable,
    Tolerable,
    Moderate,
    High,
    Critical,
    Unknown,
}

impl CriticalityLevel {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Acceptable => "acceptable",
            Self::Tolerable => "tolerable",
            Self::Moderate => "moderate",
            Self::High => "high",
            Self::Critical => "critical",
            Self::Unknown => "unknown",
        }
    }

    /// Whether the level calls for mitigation (moderate or worse).
    pub fn requires_treatment(&self) -> bool {
        matches!(self, Self::Moderate | Self::High | Self::Critical)
    }
}

impl std::fmt::Display for CriticalityLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
