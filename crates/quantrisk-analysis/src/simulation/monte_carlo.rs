//! Monte Carlo simulation of the economic loss of a single risk.
//!
//! Every trial gets its own RNG derived from the run seed, so a seeded run
//! is reproducible whether trials execute sequentially or on the rayon pool.

use std::time::Instant;

use quantrisk_core::config::SimulationConfig;
use quantrisk_core::errors::{QuantRiskErrorCode, SimulationError};
use quantrisk_core::types::CorrelationSampling;
use rayon::prelude::*;

use super::sampler::{trial_rng, PerturbationModel, TrialDraw};
use super::sensitivity;
use super::types::SimulationResult;
use crate::scoring::RiskFactors;

/// RNG stream feeding the scored trials.
const SCORING_STREAM: u64 = 1;
/// RNG stream feeding the decoupled correlation draws.
const CORRELATION_STREAM: u64 = 2;

/// Monte Carlo simulator for economic-loss estimation.
#[derive(Debug, Clone)]
pub struct MonteCarloSimulator {
    /// Number of simulation trials.
    iterations: u32,
    /// Random seed for reproducibility (None = seeded from entropy per run).
    seed: Option<u64>,
    config: SimulationConfig,
}

impl MonteCarloSimulator {
    /// Create a new simulator with the given trial count and default settings.
    pub fn new(iterations: u32) -> Self {
        Self {
            iterations,
            seed: None,
            config: SimulationConfig::default(),
        }
    }

    /// Create a simulator from configuration (iterations, seed, spreads).
    pub fn from_config(config: &SimulationConfig) -> Self {
        Self {
            iterations: config.effective_iterations(),
            seed: config.seed,
            config: config.clone(),
        }
    }

    /// Set a deterministic seed for reproducible results.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_iterations(mut self, iterations: u32) -> Self {
        self.iterations = iterations;
        self
    }

    pub fn with_correlation_sampling(mut self, sampling: CorrelationSampling) -> Self {
        self.config.correlation_sampling = Some(sampling);
        self
    }

    /// Run trials on the rayon pool (`true`) or on the calling thread.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.config.parallel = Some(parallel);
        self
    }

    pub fn iterations(&self) -> u32 {
        self.iterations
    }

    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Run the simulation; any failure yields [`SimulationResult::empty`].
    ///
    /// Callers must check `is_empty()` before reading samples.
    pub fn simulate(&self, base: &RiskFactors, asset_value: f64) -> SimulationResult {
        match self.try_simulate(base, asset_value) {
            Ok(result) => result,
            Err(e) if e.is_degenerate() => {
                tracing::debug!(asset_value, "degenerate simulation, returning empty result");
                SimulationResult::empty()
            }
            Err(e) => {
                tracing::warn!(
                    code = e.error_code(),
                    error = %e,
                    "simulation aborted, returning empty result"
                );
                SimulationResult::empty()
            }
        }
    }

    /// Run the simulation, reporting why a run produced nothing.
    ///
    /// A non-positive asset value is `SimulationError::InvalidAssetValue`;
    /// zero iterations is an `Ok` empty result.
    pub fn try_simulate(
        &self,
        base: &RiskFactors,
        asset_value: f64,
    ) -> Result<SimulationResult, SimulationError> {
        if !(asset_value.is_finite() && asset_value > 0.0) {
            return Err(SimulationError::InvalidAssetValue { value: asset_value });
        }
        base.validate()?;

        let n = self.iterations as usize;
        if n == 0 {
            return Ok(SimulationResult::empty());
        }

        let sampling = self.config.effective_correlation_sampling();
        tracing::debug!(
            iterations = n,
            seeded = self.seed.is_some(),
            sampling = sampling.name(),
            "simulation started"
        );

        let start = Instant::now();
        let model = PerturbationModel::new(base, &self.config)?;
        let seed = self.seed.unwrap_or_else(rand::random);

        let trials: Vec<(TrialDraw, f64)> = self.run_trials(n, |trial| {
            let draw = model.draw(&mut trial_rng(seed, SCORING_STREAM, trial));
            let index = model.score(&draw).residual_risk_index;
            (draw, index)
        });

        let mut residual_risk_samples = Vec::with_capacity(n);
        let mut economic_loss_samples = Vec::with_capacity(n);
        for (trial, (_, index)) in trials.iter().enumerate() {
            let loss = index * asset_value;
            if !loss.is_finite() {
                return Err(SimulationError::NonFiniteSample { trial });
            }
            residual_risk_samples.push(*index);
            economic_loss_samples.push(loss);
        }

        let sensitivities = match sampling {
            CorrelationSampling::Paired => {
                let draws: Vec<TrialDraw> = trials.iter().map(|(draw, _)| *draw).collect();
                sensitivity::rank(&draws, &economic_loss_samples)
            }
            CorrelationSampling::Decoupled => {
                let draws = self.run_trials(n, |trial| {
                    model.draw(&mut trial_rng(seed, CORRELATION_STREAM, trial))
                });
                sensitivity::rank(&draws, &economic_loss_samples)
            }
        };

        tracing::debug!(
            iterations = n,
            sampling = sampling.name(),
            loss_std_dev = model.loss_std_dev(),
            ranked = sensitivities.len(),
            elapsed_ms = start.elapsed().as_millis() as u64,
            "simulation complete"
        );

        Ok(SimulationResult {
            residual_risk_samples,
            economic_loss_samples,
            sensitivities: Some(sensitivities),
        })
    }

    /// Map every trial index through `f`, in index order.
    fn run_trials<T, F>(&self, n: usize, f: F) -> Vec<T>
    where
        T: Send,
        F: Fn(usize) -> T + Sync + Send,
    {
        if self.config.effective_parallel() {
            (0..n).into_par_iter().map(f).collect()
        } else {
            (0..n).map(f).collect()
        }
    }
}

impl Default for MonteCarloSimulator {
    fn default() -> Self {
        Self::from_config(&SimulationConfig::default())
    }
}
