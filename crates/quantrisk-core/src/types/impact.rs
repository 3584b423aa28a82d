//! Impact categories and their default relative weights.

use serde::{Deserialize, Serialize};

/// Category of harm a risk can cause.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ImpactCategory {
    Human,
    Operational,
    Economic,
    Reputational,
    Legal,
}

impl ImpactCategory {
    /// All 5 categories.
    pub const ALL: &'static [ImpactCategory] = &[
        Self::Human,
        Self::Operational,
        Self::Economic,
        Self::Reputational,
        Self::Legal,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Self::Human => "human",
            Self::Operational => "operational",
            Self::Economic => "economic",
            Self::Reputational => "reputational",
            Self::Legal => "legal",
        }
    }

    /// Default weight of this category (percent). The five defaults sum to 100.
    pub fn default_weight(&self) -> f64 {
        match self {
            Self::Human => 25.0,
            Self::Operational => 20.0,
            Self::Economic => 30.0,
            Self::Reputational => 15.0,
            Self::Legal => 10.0,
        }
    }
}

impl std::fmt::Display for ImpactCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
