//! QuantRiskErrorCode trait for the presentation boundary.

/// Trait for converting QuantRisk errors to structured error codes.
/// Every error enum implements this so callers can distinguish failure
/// kinds without matching on message text.
pub trait QuantRiskErrorCode {
    /// Returns the error code string (e.g., "INVALID_INPUT").
    fn error_code(&self) -> &'static str;

    /// Returns the formatted boundary string: `[ERROR_CODE] message`.
    fn coded_string(&self) -> String
    where
        Self: std::fmt::Display,
    {
        format!("[{}] {}", self.error_code(), self)
    }
}

// Error code constants.
pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
pub const INVALID_INPUT: &str = "INVALID_INPUT";
pub const SIMULATION_ERROR: &str = "SIMULATION_ERROR";
pub const DEGENERATE_SIMULATION: &str = "DEGENERATE_SIMULATION";
pub const CLASSIFICATION_ERROR: &str = "CLASSIFICATION_ERROR";
