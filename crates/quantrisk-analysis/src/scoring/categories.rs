//! Multi-category assessment: one threat scored against every impact category.

use std::collections::BTreeMap;

use quantrisk_core::config::ImpactConfig;
use quantrisk_core::constants::{IMPACT_WEIGHT_TOLERANCE, IMPACT_WEIGHT_TOTAL};
use quantrisk_core::errors::{ConfigError, ScoringError};
use quantrisk_core::types::ImpactCategory;
use serde::{Deserialize, Serialize};

use super::factors::RiskFactors;
use super::formula::{clip_unit, try_score};
use super::metrics::RiskMetrics;

/// Immutable category → weight (percent) table. Weights sum to 100.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImpactWeights {
    weights: BTreeMap<ImpactCategory, f64>,
}

impl ImpactWeights {
    /// Build from configuration, checking the weights sum to 100.
    pub fn from_config(config: &ImpactConfig) -> Result<Self, ConfigError> {
        let weights: BTreeMap<_, _> = ImpactCategory::ALL
            .iter()
            .map(|c| (*c, config.effective_weight(*c)))
            .collect();

        if let Some((category, _)) = weights.iter().find(|(_, w)| !w.is_finite() || **w < 0.0) {
            return Err(ConfigError::ValidationFailed {
                field: format!("impact.{}", category.name()),
                message: "must be a finite, non-negative percentage".to_string(),
            });
        }

        let total: f64 = weights.values().sum();
        if (total - IMPACT_WEIGHT_TOTAL).abs() > IMPACT_WEIGHT_TOLERANCE {
            return Err(ConfigError::ValidationFailed {
                field: "impact".to_string(),
                message: format!("category weights must sum to 100, got {total}"),
            });
        }

        Ok(Self { weights })
    }

    /// Weight of `category` in percent.
    pub fn weight(&self, category: ImpactCategory) -> f64 {
        self.weights.get(&category).copied().unwrap_or(0.0)
    }

    pub fn iter(&self) -> impl Iterator<Item = (ImpactCategory, f64)> + '_ {
        self.weights.iter().map(|(c, w)| (*c, *w))
    }
}

impl Default for ImpactWeights {
    fn default() -> Self {
        Self {
            weights: ImpactCategory::ALL
                .iter()
                .map(|c| (*c, c.default_weight()))
                .collect(),
        }
    }
}

/// Score of a single impact category.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CategoryScore {
    pub category: ImpactCategory,
    /// Impact value used for this category (percent).
    pub impact_value: f64,
    /// Category weight (percent).
    pub weight: f64,
    pub metrics: RiskMetrics,
}

/// Result of scoring one threat across all impact categories.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryAssessment {
    /// One entry per category, in [`ImpactCategory::ALL`] order.
    pub scores: Vec<CategoryScore>,
    /// Sum of per-category indices, clamped to [0, 1].
    pub combined_index: f64,
}

impl CategoryAssessment {
    /// Category contributing the largest residual risk index, if any is non-zero.
    pub fn dominant_category(&self) -> Option<ImpactCategory> {
        self.scores
            .iter()
            .filter(|s| s.metrics.residual_risk_index > 0.0)
            .max_by(|a, b| {
                a.metrics
                    .residual_risk_index
                    .total_cmp(&b.metrics.residual_risk_index)
            })
            .map(|s| s.category)
    }
}

/// Score `threat` once per impact category.
///
/// `threat.impact_value` and `threat.impact_weight` are ignored: each
/// category uses its entry from `impacts` (missing → 0) and its weight from
/// `weights`. Since weights sum to 100, the combined index is the threat
/// scaled by the weighted-average impact.
pub fn assess_categories(
    threat: &RiskFactors,
    impacts: &BTreeMap<ImpactCategory, f64>,
    weights: &ImpactWeights,
) -> Result<CategoryAssessment, ScoringError> {
    let mut scores = Vec::with_capacity(ImpactCategory::ALL.len());

    for category in ImpactCategory::ALL {
        let impact_value = impacts.get(category).copied().unwrap_or(0.0);
        let weight = weights.weight(*category);
        let factors = RiskFactors {
            impact_value,
            impact_weight: weight,
            ..*threat
        };
        let metrics = try_score(&factors)?;
        scores.push(CategoryScore {
            category: *category,
            impact_value,
            weight,
            metrics,
        });
    }

    let combined_index = clip_unit(
        scores
            .iter()
            .map(|s| s.metrics.residual_risk_index)
            .sum(),
    );

    Ok(CategoryAssessment {
        scores,
        combined_index,
    })
}
