//! Monte Carlo simulation errors.

use super::error_code::{self, QuantRiskErrorCode};
use super::ScoringError;

/// Errors that abort a simulation run. No partial results survive.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SimulationError {
    #[error("Asset economic value must be positive and finite, got {value}")]
    InvalidAssetValue { value: f64 },

    #[error("Cannot build sampling distribution for {variable}: {message}")]
    InvalidDistribution {
        variable: &'static str,
        message: String,
    },

    #[error("Trial {trial} produced a non-finite loss")]
    NonFiniteSample { trial: usize },

    #[error("Base factors rejected: {0}")]
    Scoring(#[from] ScoringError),
}

impl SimulationError {
    /// Degenerate runs are expected outcomes, not failures.
    pub fn is_degenerate(&self) -> bool {
        matches!(self, Self::InvalidAssetValue { .. })
    }
}

impl QuantRiskErrorCode for SimulationError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidAssetValue { .. } => error_code::DEGENERATE_SIMULATION,
            Self::Scoring(e) => e.error_code(),
            _ => error_code::SIMULATION_ERROR,
        }
    }
}
