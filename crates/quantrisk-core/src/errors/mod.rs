//! Error handling for QuantRisk.
//! One error enum per subsystem, `thiserror` only, zero `anyhow`.

pub mod classification_error;
pub mod config_error;
pub mod engine_error;
pub mod error_code;
pub mod scoring_error;
pub mod simulation_error;

pub use classification_error::ClassificationError;
pub use config_error::ConfigError;
pub use engine_error::EngineError;
pub use error_code::QuantRiskErrorCode;
pub use scoring_error::ScoringError;
pub use simulation_error::SimulationError;
