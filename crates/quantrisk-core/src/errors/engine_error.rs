//! Engine-level errors aggregating subsystem errors.

use super::error_code::QuantRiskErrorCode;
use super::{ClassificationError, ConfigError, ScoringError, SimulationError};

/// Errors surfaced by the engine facade.
/// Aggregates subsystem errors via `From` conversions.
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Classification error: {0}")]
    Classification(#[from] ClassificationError),

    #[error("Scoring error: {0}")]
    Scoring(#[from] ScoringError),

    #[error("Simulation error: {0}")]
    Simulation(#[from] SimulationError),
}

impl QuantRiskErrorCode for EngineError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Config(e) => e.error_code(),
            Self::Classification(e) => e.error_code(),
            Self::Scoring(e) => e.error_code(),
            Self::Simulation(e) => e.error_code(),
        }
    }
}
