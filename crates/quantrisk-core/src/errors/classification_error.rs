//! Classification table construction errors.
//!
//! Lookups never fail; only building a malformed table does.

use super::error_code::{self, QuantRiskErrorCode};

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ClassificationError {
    #[error("Classification table has no bands")]
    EmptyTable,

    #[error("Band {index} is invalid: {message}")]
    InvalidBand { index: usize, message: String },

    #[error("Gap between band {index} (ends at {previous_max}) and the next band (starts at {next_min})")]
    Gap {
        index: usize,
        previous_max: f64,
        next_min: f64,
    },

    #[error("Band {index} overlaps the previous band")]
    Overlap { index: usize },

    #[error("Bands must span [0, 1] exactly, got [{min}, {max}]")]
    Coverage { min: f64, max: f64 },
}

impl QuantRiskErrorCode for ClassificationError {
    fn error_code(&self) -> &'static str {
        error_code::CLASSIFICATION_ERROR
    }
}
