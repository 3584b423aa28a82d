//! Impact-category weight configuration.

use serde::{Deserialize, Serialize};

use crate::types::ImpactCategory;

/// Relative weight (percent) of each impact category.
/// Unset categories fall back to their default weight.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ImpactConfig {
    pub human: Option<f64>,
    pub operational: Option<f64>,
    pub economic: Option<f64>,
    pub reputational: Option<f64>,
    pub legal: Option<f64>,
}

impl ImpactConfig {
    fn slot(&self, category: ImpactCategory) -> Option<f64> {
        match category {
            ImpactCategory::Human => self.human,
            ImpactCategory::Operational => self.operational,
            ImpactCategory::Economic => self.economic,
            ImpactCategory::Reputational => self.reputational,
            ImpactCategory::Legal => self.legal,
        }
    }

    /// Returns the effective weight for `category`.
    pub fn effective_weight(&self, category: ImpactCategory) -> f64 {
        self.slot(category).unwrap_or_else(|| category.default_weight())
    }

    /// Sum of the effective weights across all categories.
    pub fn effective_total(&self) -> f64 {
        ImpactCategory::ALL
            .iter()
            .map(|c| self.effective_weight(*c))
            .sum()
    }

    /// Sets the weight of `category`.
    pub fn set(&mut self, category: ImpactCategory, weight: f64) {
        let slot = match category {
            ImpactCategory::Human => &mut self.human,
            ImpactCategory::Operational => &mut self.operational,
            ImpactCategory::Economic => &mut self.economic,
            ImpactCategory::Reputational => &mut self.reputational,
            ImpactCategory::Legal => &mut self.legal,
        };
        *slot = Some(weight);
    }

    pub(crate) fn merge_from(&mut self, other: &ImpactConfig) {
        for category in ImpactCategory::ALL {
            if let Some(weight) = other.slot(*category) {
                self.set(*category, weight);
            }
        }
    }
}
