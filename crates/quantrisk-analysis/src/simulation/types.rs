//! Simulation engine types: perturbed variables, sensitivities, results.

use serde::{Deserialize, Serialize};

use super::summary::LossSummary;

/// An input the simulator perturbs on every trial.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PerturbedVariable {
    Probability,
    Exposure,
    ControlEffectiveness,
    LossFactor,
}

impl PerturbedVariable {
    /// All 4 perturbed variables.
    pub const ALL: &'static [PerturbedVariable] = &[
        Self::Probability,
        Self::Exposure,
        Self::ControlEffectiveness,
        Self::LossFactor,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Self::Probability => "probability",
            Self::Exposure => "exposure",
            Self::ControlEffectiveness => "control_effectiveness",
            Self::LossFactor => "loss_factor",
        }
    }
}

impl std::fmt::Display for PerturbedVariable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Absolute Pearson correlation of one input with the loss samples.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Sensitivity {
    pub variable: PerturbedVariable,
    /// |r| in [0, 1].
    pub correlation: f64,
}

/// Complete simulation result.
///
/// Both sample vectors have the same length: the iteration count, or 0 for
/// a degenerate or aborted run. `sensitivities` is `None` exactly when the
/// run produced no samples.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SimulationResult {
    pub residual_risk_samples: Vec<f64>,
    pub economic_loss_samples: Vec<f64>,
    /// Ranked by correlation, descending.
    pub sensitivities: Option<Vec<Sensitivity>>,
}

impl SimulationResult {
    /// The explicit empty result: no samples, no correlation ranking.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.economic_loss_samples.is_empty()
    }

    /// Number of trials.
    pub fn len(&self) -> usize {
        self.economic_loss_samples.len()
    }

    /// Correlation of `variable`, if it was ranked.
    pub fn sensitivity(&self, variable: PerturbedVariable) -> Option<f64> {
        self.sensitivities
            .as_deref()?
            .iter()
            .find(|s| s.variable == variable)
            .map(|s| s.correlation)
    }

    /// Most influential input, if any was ranked.
    pub fn top_driver(&self) -> Option<PerturbedVariable> {
        self.sensitivities.as_deref()?.first().map(|s| s.variable)
    }

    /// Descriptive statistics of the loss samples; `None` when empty.
    pub fn summary(&self) -> Option<LossSummary> {
        LossSummary::from_samples(&self.economic_loss_samples)
    }
}
