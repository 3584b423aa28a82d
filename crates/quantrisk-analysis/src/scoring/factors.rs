//! Risk factor inputs: typed, raw (text), and normalized forms.

use quantrisk_core::constants::PERCENT_SCALE;
use quantrisk_core::errors::ScoringError;
use serde::{Deserialize, Serialize};

/// Input to the risk scorer, in caller units.
///
/// `control_effectiveness`, `impact_value` and `impact_weight` are
/// percentages in [0, 100]. Passing an already-normalized [0, 1] value for
/// any of them silently produces a result 100× too small.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct RiskFactors {
    /// Likelihood of the threat occurring, [0, 1].
    pub probability: f64,
    /// Frequency of exposure to the threat, [0, 1].
    pub exposure: f64,
    /// 1 for an intentional (adversarial) threat, 0 otherwise.
    /// Intermediate values scale the doubling linearly.
    pub deliberate_threat: f64,
    /// Risk reduction from mitigating controls, percent.
    pub control_effectiveness: f64,
    /// Magnitude of harm if the risk materializes, percent.
    pub impact_value: f64,
    /// Relative weight of the impact category, percent.
    pub impact_weight: f64,
}

impl RiskFactors {
    pub fn new(
        probability: f64,
        exposure: f64,
        deliberate_threat: f64,
        control_effectiveness: f64,
        impact_value: f64,
        impact_weight: f64,
    ) -> Self {
        Self {
            probability,
            exposure,
            deliberate_threat,
            control_effectiveness,
            impact_value,
            impact_weight,
        }
    }

    /// Factors paired with their names, in declaration order.
    pub fn named(&self) -> [(&'static str, f64); 6] {
        [
            ("probability", self.probability),
            ("exposure", self.exposure),
            ("deliberate_threat", self.deliberate_threat),
            ("control_effectiveness", self.control_effectiveness),
            ("impact_value", self.impact_value),
            ("impact_weight", self.impact_weight),
        ]
    }

    /// Reject NaN and infinite factors.
    pub fn validate(&self) -> Result<(), ScoringError> {
        match self.named().into_iter().find(|(_, v)| !v.is_finite()) {
            Some((field, _)) => Err(ScoringError::NonFinite { field }),
            None => Ok(()),
        }
    }

    /// Coerce text inputs into numeric factors.
    pub fn parse(raw: &RawRiskFactors) -> Result<Self, ScoringError> {
        let factors = Self {
            probability: parse_number("probability", &raw.probability)?,
            exposure: parse_number("exposure", &raw.exposure)?,
            deliberate_threat: parse_flag("deliberate_threat", &raw.deliberate_threat)?,
            control_effectiveness: parse_number(
                "control_effectiveness",
                &raw.control_effectiveness,
            )?,
            impact_value: parse_number("impact_value", &raw.impact_value)?,
            impact_weight: parse_number("impact_weight", &raw.impact_weight)?,
        };
        factors.validate()?;
        Ok(factors)
    }

    /// Scale percentages to [0, 1] factors.
    ///
    /// The impact value is only divided when positive; zero and negative
    /// values map to 0.
    pub fn normalize(&self) -> NormalizedFactors {
        NormalizedFactors {
            probability: self.probability,
            exposure: self.exposure,
            deliberate_threat: self.deliberate_threat,
            control_factor: self.control_effectiveness / PERCENT_SCALE,
            impact_factor: if self.impact_value > 0.0 {
                self.impact_value / PERCENT_SCALE
            } else {
                0.0
            },
            weight_factor: self.impact_weight / PERCENT_SCALE,
        }
    }
}

/// Risk factors as text, the way form widgets hand them over.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawRiskFactors {
    pub probability: String,
    pub exposure: String,
    pub deliberate_threat: String,
    pub control_effectiveness: String,
    pub impact_value: String,
    pub impact_weight: String,
}

impl RawRiskFactors {
    pub fn new(
        probability: impl Into<String>,
        exposure: impl Into<String>,
        deliberate_threat: impl Into<String>,
        control_effectiveness: impl Into<String>,
        impact_value: impl Into<String>,
        impact_weight: impl Into<String>,
    ) -> Self {
        Self {
            probability: probability.into(),
            exposure: exposure.into(),
            deliberate_threat: deliberate_threat.into(),
            control_effectiveness: control_effectiveness.into(),
            impact_value: impact_value.into(),
            impact_weight: impact_weight.into(),
        }
    }
}

/// Factors scaled to [0, 1], the form the formula and the simulator share.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NormalizedFactors {
    pub probability: f64,
    pub exposure: f64,
    pub deliberate_threat: f64,
    pub control_factor: f64,
    pub impact_factor: f64,
    pub weight_factor: f64,
}

fn parse_number(field: &'static str, raw: &str) -> Result<f64, ScoringError> {
    let value = raw
        .trim()
        .parse::<f64>()
        .map_err(|_| ScoringError::InvalidInput {
            field,
            value: raw.to_string(),
        })?;
    if value.is_finite() {
        Ok(value)
    } else {
        Err(ScoringError::NonFinite { field })
    }
}

/// Like `parse_number`, but also accepts boolean spellings.
fn parse_flag(field: &'static str, raw: &str) -> Result<f64, ScoringError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "true" | "yes" => Ok(1.0),
        "false" | "no" => Ok(0.0),
        _ => parse_number(field, raw),
    }
}
