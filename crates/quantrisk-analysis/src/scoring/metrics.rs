//! Output of the risk scorer.

use serde::{Deserialize, Serialize};

/// The four risk metrics derived from a set of [`RiskFactors`](super::RiskFactors).
///
/// `residual_risk_index` is always within [0, 1]. `adjusted_residual_threat`
/// is left unclamped so the deliberate-threat doubling stays observable; it
/// can reach 2.0 for valid inputs.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct RiskMetrics {
    /// probability × exposure.
    pub inherent_threat: f64,
    /// Inherent threat after mitigating controls.
    pub residual_threat: f64,
    /// Residual threat after the deliberate-threat multiplier.
    pub adjusted_residual_threat: f64,
    /// Final criticality score in [0, 1].
    pub residual_risk_index: f64,
}

impl RiskMetrics {
    /// All-zero metrics, returned by the collapsing adapters on invalid input.
    pub const ZERO: RiskMetrics = RiskMetrics {
        inherent_threat: 0.0,
        residual_threat: 0.0,
        adjusted_residual_threat: 0.0,
        residual_risk_index: 0.0,
    };

    pub fn is_zero(&self) -> bool {
        *self == Self::ZERO
    }
}
