//! Shared constants for the QuantRisk engine.

/// Percentage inputs (control effectiveness, impact value, impact weight)
/// are divided by this to obtain a [0, 1] factor.
pub const PERCENT_SCALE: f64 = 100.0;

/// Required sum of the impact-category weights.
pub const IMPACT_WEIGHT_TOTAL: f64 = 100.0;

/// Tolerance applied when checking that impact weights sum to 100.
pub const IMPACT_WEIGHT_TOLERANCE: f64 = 1e-6;

// ---- Monte Carlo defaults ----

/// Default number of Monte Carlo trials.
pub const DEFAULT_ITERATIONS: u32 = 10_000;

/// Standard deviation of the probability perturbation.
pub const DEFAULT_PROBABILITY_STD_DEV: f64 = 0.10;

/// Standard deviation of the exposure perturbation.
pub const DEFAULT_EXPOSURE_STD_DEV: f64 = 0.10;

/// Standard deviation of the control-effectiveness factor perturbation.
pub const DEFAULT_CONTROL_STD_DEV: f64 = 0.10;

/// Loss-factor standard deviation as a fraction of the base loss factor.
pub const DEFAULT_LOSS_STD_DEV_RATIO: f64 = 0.20;

/// Loss-factor standard deviation used when the proportional one rounds to zero.
pub const DEFAULT_MIN_LOSS_STD_DEV: f64 = 0.05;

/// Lower clip bound for sampled probability and exposure.
pub const DEFAULT_PROBABILITY_FLOOR: f64 = 0.01;

/// Decimal places used when deciding whether a loss std dev "rounds to zero".
pub const LOSS_STD_DEV_ROUNDING_DECIMALS: i32 = 2;

// ---- Classification ----

/// Label returned when a value falls outside every configured band.
pub const UNKNOWN_LABEL: &str = "UNKNOWN";

/// Color returned when a value falls outside every configured band.
pub const UNKNOWN_COLOR: &str = "gray";
