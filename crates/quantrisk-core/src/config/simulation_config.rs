//! Monte Carlo simulation configuration.

use serde::{Deserialize, Serialize};

use crate::constants;
use crate::types::CorrelationSampling;

/// Configuration for the Monte Carlo simulator.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct SimulationConfig {
    /// Number of trials per run. Default: 10 000.
    pub iterations: Option<u32>,
    /// RNG seed. `None` seeds from OS entropy (non-reproducible).
    pub seed: Option<u64>,
    /// Run trials on the rayon pool. Default: true.
    pub parallel: Option<bool>,
    /// Sampling used for the sensitivity correlations. Default: decoupled.
    pub correlation_sampling: Option<CorrelationSampling>,
    /// Std dev of the probability perturbation. Default: 0.10.
    pub probability_std_dev: Option<f64>,
    /// Std dev of the exposure perturbation. Default: 0.10.
    pub exposure_std_dev: Option<f64>,
    /// Std dev of the control-effectiveness factor perturbation. Default: 0.10.
    pub control_std_dev: Option<f64>,
    /// Loss-factor std dev as a fraction of the base loss factor. Default: 0.20.
    pub loss_std_dev_ratio: Option<f64>,
    /// Minimum loss-factor std dev when the proportional one rounds to zero. Default: 0.05.
    pub min_loss_std_dev: Option<f64>,
    /// Lower clip bound for probability and exposure draws. Default: 0.01.
    pub probability_floor: Option<f64>,
}

impl SimulationConfig {
    pub fn effective_iterations(&self) -> u32 {
        self.iterations.unwrap_or(constants::DEFAULT_ITERATIONS)
    }

    pub fn effective_parallel(&self) -> bool {
        self.parallel.unwrap_or(true)
    }

    pub fn effective_correlation_sampling(&self) -> CorrelationSampling {
        self.correlation_sampling.unwrap_or_default()
    }

    pub fn effective_probability_std_dev(&self) -> f64 {
        self.probability_std_dev.unwrap_or(constants::DEFAULT_PROBABILITY_STD_DEV)
    }

    pub fn effective_exposure_std_dev(&self) -> f64 {
        self.exposure_std_dev.unwrap_or(constants::DEFAULT_EXPOSURE_STD_DEV)
    }

    pub fn effective_control_std_dev(&self) -> f64 {
        self.control_std_dev.unwrap_or(constants::DEFAULT_CONTROL_STD_DEV)
    }

    pub fn effective_loss_std_dev_ratio(&self) -> f64 {
        self.loss_std_dev_ratio.unwrap_or(constants::DEFAULT_LOSS_STD_DEV_RATIO)
    }

    pub fn effective_min_loss_std_dev(&self) -> f64 {
        self.min_loss_std_dev.unwrap_or(constants::DEFAULT_MIN_LOSS_STD_DEV)
    }

    pub fn effective_probability_floor(&self) -> f64 {
        self.probability_floor.unwrap_or(constants::DEFAULT_PROBABILITY_FLOOR)
    }

    /// Named std-dev style fields, for validation.
    pub(crate) fn spreads(&self) -> [(&'static str, Option<f64>); 5] {
        [
            ("simulation.probability_std_dev", self.probability_std_dev),
            ("simulation.exposure_std_dev", self.exposure_std_dev),
            ("simulation.control_std_dev", self.control_std_dev),
            ("simulation.loss_std_dev_ratio", self.loss_std_dev_ratio),
            ("simulation.min_loss_std_dev", self.min_loss_std_dev),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_reference_model() {
        let cfg = SimulationConfig::default();
        assert_eq!(cfg.effective_iterations(), 10_000);
        assert_eq!(cfg.effective_probability_std_dev(), 0.10);
        assert_eq!(cfg.effective_exposure_std_dev(), 0.10);
        assert_eq!(cfg.effective_control_std_dev(), 0.10);
        assert_eq!(cfg.effective_loss_std_dev_ratio(), 0.20);
        assert_eq!(cfg.effective_min_loss_std_dev(), 0.05);
        assert_eq!(cfg.effective_probability_floor(), 0.01);
        assert!(cfg.effective_parallel());
        assert_eq!(cfg.effective_correlation_sampling(), CorrelationSampling::Decoupled);
    }
}
