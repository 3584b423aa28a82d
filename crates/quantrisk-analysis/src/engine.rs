//! RiskEngine: immutable configuration plus the three public operations.

use std::collections::BTreeMap;

use quantrisk_core::config::{QuantRiskConfig, SimulationConfig};
use quantrisk_core::errors::{EngineError, ScoringError, SimulationError};
use quantrisk_core::types::{ImpactCategory, Language};

use crate::classification::{Classification, ClassificationTable};
use crate::scoring::{
    self, CategoryAssessment, ImpactWeights, RawRiskFactors, RiskFactors, RiskMetrics,
};
use crate::simulation::{MonteCarloSimulator, SimulationResult};

/// Entry point for a presentation layer.
///
/// Holds the classification bands, impact weights and simulation settings
/// as explicit values, so differently configured engines can coexist.
#[derive(Debug, Clone)]
pub struct RiskEngine {
    table: ClassificationTable,
    weights: ImpactWeights,
    simulation: SimulationConfig,
    language: Language,
}

impl RiskEngine {
    /// Build an engine from resolved configuration.
    pub fn from_config(config: &QuantRiskConfig) -> Result<Self, EngineError> {
        QuantRiskConfig::validate(config)?;
        let engine = Self {
            table: ClassificationTable::from_config(&config.classification)?,
            weights: ImpactWeights::from_config(&config.impact)?,
            simulation: config.simulation.clone(),
            language: config.classification.effective_language(),
        };
        tracing::debug!(
            bands = engine.table.len(),
            language = %engine.language,
            "risk engine ready"
        );
        Ok(engine)
    }

    pub fn with_table(mut self, table: ClassificationTable) -> Self {
        self.table = table;
        self
    }

    pub fn with_language(mut self, language: Language) -> Self {
        self.language = language;
        self
    }

    pub fn table(&self) -> &ClassificationTable {
        &self.table
    }

    pub fn weights(&self) -> &ImpactWeights {
        &self.weights
    }

    pub fn language(&self) -> Language {
        self.language
    }

    /// Score factors; invalid input yields all-zero metrics.
    pub fn score(&self, factors: &RiskFactors) -> RiskMetrics {
        scoring::score(factors)
    }

    /// Score text factors; invalid input yields all-zero metrics.
    pub fn score_raw(&self, raw: &RawRiskFactors) -> RiskMetrics {
        scoring::score_raw(raw)
    }

    pub fn try_score(&self, factors: &RiskFactors) -> Result<RiskMetrics, ScoringError> {
        scoring::try_score(factors)
    }

    /// Score one threat against every impact category with this engine's weights.
    pub fn assess_categories(
        &self,
        threat: &RiskFactors,
        impacts: &BTreeMap<ImpactCategory, f64>,
    ) -> Result<CategoryAssessment, ScoringError> {
        scoring::assess_categories(threat, impacts, &self.weights)
    }

    /// Simulate `iterations` trials; degenerate or failed runs are empty.
    pub fn simulate(
        &self,
        base: &RiskFactors,
        asset_value: f64,
        iterations: u32,
    ) -> SimulationResult {
        self.simulator(iterations).simulate(base, asset_value)
    }

    pub fn try_simulate(
        &self,
        base: &RiskFactors,
        asset_value: f64,
        iterations: u32,
    ) -> Result<SimulationResult, SimulationError> {
        self.simulator(iterations).try_simulate(base, asset_value)
    }

    /// Classify a risk index in `language`. Never fails.
    pub fn classify(&self, value: f64, language: Language) -> Classification<'_> {
        self.table.classify(value, language)
    }

    /// Classify a risk index in the engine's default language.
    pub fn classify_default(&self, value: f64) -> Classification<'_> {
        self.table.classify(value, self.language)
    }

    fn simulator(&self, iterations: u32) -> MonteCarloSimulator {
        MonteCarloSimulator::from_config(&self.simulation).with_iterations(iterations)
    }
}

impl Default for RiskEngine {
    fn default() -> Self {
        Self {
            table: ClassificationTable::default(),
            weights: ImpactWeights::default(),
            simulation: SimulationConfig::default(),
            language: Language::default(),
        }
    }
}
