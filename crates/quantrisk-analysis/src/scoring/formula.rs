use quantrisk_core::errors::ScoringError;

use super::factors::{NormalizedFactors, RawRiskFactors, RiskFactors};
use super::metrics::RiskMetrics;

/// Threat chain over normalized factors.
///
/// ```text
/// inherent  = probability × exposure
/// residual  = inherent × (1 − control)
/// adjusted  = residual × (1 + deliberate)
/// index     = clip(adjusted × impact × weight, 0, 1)
/// ```
///
/// Only the index is clamped. A NaN product (e.g. ∞ × 0 from extreme
/// inputs) maps to an index of 0.
pub fn compute(n: &NormalizedFactors) -> RiskMetrics {
    let inherent_threat = n.probability * n.exposure;
    let residual_threat = inherent_threat * (1.0 - n.control_factor);
    let adjusted_residual_threat = residual_threat * (1.0 + n.deliberate_threat);
    let raw_index = adjusted_residual_threat * n.impact_factor * n.weight_factor;

    RiskMetrics {
        inherent_threat,
        residual_threat,
        adjusted_residual_threat,
        residual_risk_index: clip_unit(raw_index),
    }
}

/// Score typed factors, reporting non-finite input as an error.
pub fn try_score(factors: &RiskFactors) -> Result<RiskMetrics, ScoringError> {
    factors.validate()?;
    Ok(compute(&factors.normalize()))
}

/// Parse text factors, then score them.
pub fn try_score_raw(raw: &RawRiskFactors) -> Result<RiskMetrics, ScoringError> {
    let factors = RiskFactors::parse(raw)?;
    try_score(&factors)
}

/// Score typed factors; invalid input yields [`RiskMetrics::ZERO`].
pub fn score(factors: &RiskFactors) -> RiskMetrics {
    try_score(factors).unwrap_or_else(collapse)
}

/// Parse and score text factors; invalid input yields [`RiskMetrics::ZERO`].
pub fn score_raw(raw: &RawRiskFactors) -> RiskMetrics {
    try_score_raw(raw).unwrap_or_else(collapse)
}

fn collapse(err: ScoringError) -> RiskMetrics {
    tracing::warn!(field = err.field(), error = %err, "invalid risk factors, returning zero metrics");
    RiskMetrics::ZERO
}

pub(crate) fn clip_unit(value: f64) -> f64 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-12;

    #[test]
    fn reference_example() {
        let m = try_score(&RiskFactors::new(0.5, 0.5, 0.0, 50.0, 60.0, 30.0)).unwrap();
        assert!((m.inherent_threat - 0.25).abs() < EPS);
        assert!((m.residual_threat - 0.125).abs() < EPS);
        assert!((m.adjusted_residual_threat - 0.125).abs() < EPS);
        assert!((m.residual_risk_index - 0.0225).abs() < EPS);
    }

    #[test]
    fn deliberate_threat_doubles_adjusted() {
        let incidental = score(&RiskFactors::new(0.7, 0.9, 0.0, 20.0, 80.0, 25.0));
        let deliberate = score(&RiskFactors::new(0.7, 0.9, 1.0, 20.0, 80.0, 25.0));
        assert_eq!(
            deliberate.adjusted_residual_threat,
            incidental.adjusted_residual_threat * 2.0
        );
    }

    #[test]
    fn fractional_flag_scales_linearly() {
        let m = score(&RiskFactors::new(1.0, 1.0, 0.5, 0.0, 100.0, 100.0));
        assert!((m.adjusted_residual_threat - 1.5).abs() < EPS);
        assert_eq!(m.residual_risk_index, 1.0);
    }

    #[test]
    fn index_is_clamped_for_out_of_range_inputs() {
        let m = score(&RiskFactors::new(10.0, 10.0, 1.0, -100.0, 100.0, 100.0));
        assert!(m.adjusted_residual_threat > 1.0);
        assert_eq!(m.residual_risk_index, 1.0);

        let m = score(&RiskFactors::new(0.5, 0.5, 0.0, 250.0, 100.0, 100.0));
        assert!(m.residual_threat < 0.0);
        assert_eq!(m.residual_risk_index, 0.0);
    }

    #[test]
    fn overflow_to_nan_maps_to_zero_index() {
        let m = score(&RiskFactors::new(1e300, 1e300, 0.0, 100.0, 100.0, 100.0));
        assert!(m.residual_threat.is_nan());
        assert_eq!(m.residual_risk_index, 0.0);
    }

    #[test]
    fn invalid_input_collapses_to_zero() {
        let raw = RawRiskFactors::new("abc", "0.5", "0", "50", "60", "30");
        assert!(try_score_raw(&raw).is_err());
        assert!(score_raw(&raw).is_zero());

        let nan = RiskFactors::new(f64::NAN, 0.5, 0.0, 50.0, 60.0, 30.0);
        assert!(score(&nan).is_zero());
    }

    #[test]
    fn zero_impact_gives_zero_index_but_nonzero_threat() {
        let m = score(&RiskFactors::new(0.5, 0.5, 0.0, 0.0, 0.0, 30.0));
        assert_eq!(m.residual_risk_index, 0.0);
        assert!(m.inherent_threat > 0.0);
        assert!(!m.is_zero());
    }
}
