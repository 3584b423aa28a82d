//! Risk scoring errors.

use super::error_code::{self, QuantRiskErrorCode};

/// Errors raised while coercing or scoring risk factors.
///
/// These replace the silent all-zero result: callers that need the old
/// behavior use the collapsing adapters in the analysis crate.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ScoringError {
    #[error("Invalid input for {field}: '{value}' is not a number")]
    InvalidInput { field: &'static str, value: String },

    #[error("Non-finite input for {field}")]
    NonFinite { field: &'static str },
}

impl ScoringError {
    /// Name of the offending factor.
    pub fn field(&self) -> &'static str {
        match self {
            Self::InvalidInput { field, .. } | Self::NonFinite { field } => field,
        }
    }
}

impl QuantRiskErrorCode for ScoringError {
    fn error_code(&self) -> &'static str {
        error_code::INVALID_INPUT
    }
}
