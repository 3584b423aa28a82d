//! How the simulator samples inputs for sensitivity correlations.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::ConfigError;

/// Source of the input samples correlated against the loss samples.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CorrelationSampling {
    /// Correlate against a second, independent set of draws.
    #[default]
    Decoupled,
    /// Correlate against the same draws that produced the losses.
    Paired,
}

impl CorrelationSampling {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Decoupled => "decoupled",
            Self::Paired => "paired",
        }
    }
}

impl FromStr for CorrelationSampling {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "decoupled" => Ok(Self::Decoupled),
            "paired" => Ok(Self::Paired),
            other => Err(ConfigError::InvalidValue {
                field: "simulation.correlation_sampling".to_string(),
                message: format!("expected 'decoupled' or 'paired', got '{other}'"),
            }),
        }
    }
}
