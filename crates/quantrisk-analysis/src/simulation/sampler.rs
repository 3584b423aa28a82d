//! Per-trial perturbation of the base risk factors.

use quantrisk_core::config::SimulationConfig;
use quantrisk_core::constants::{LOSS_STD_DEV_ROUNDING_DECIMALS, PERCENT_SCALE};
use quantrisk_core::errors::SimulationError;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::{Distribution, Normal};

use super::types::PerturbedVariable;
use crate::scoring::{compute, NormalizedFactors, RiskFactors, RiskMetrics};

/// Inputs drawn for one trial, all in [0, 1].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrialDraw {
    pub probability: f64,
    pub exposure: f64,
    pub control_factor: f64,
    pub loss_factor: f64,
}

impl TrialDraw {
    pub fn get(&self, variable: PerturbedVariable) -> f64 {
        match variable {
            PerturbedVariable::Probability => self.probability,
            PerturbedVariable::Exposure => self.exposure,
            PerturbedVariable::ControlEffectiveness => self.control_factor,
            PerturbedVariable::LossFactor => self.loss_factor,
        }
    }
}

/// Sampling distributions built once from the base factors.
///
/// The deliberate-threat flag and the impact weight are held fixed.
#[derive(Debug, Clone)]
pub struct PerturbationModel {
    probability: Normal<f64>,
    exposure: Normal<f64>,
    control: Normal<f64>,
    loss: Normal<f64>,
    loss_std_dev: f64,
    probability_floor: f64,
    deliberate_threat: f64,
    weight_factor: f64,
}

impl PerturbationModel {
    pub fn new(base: &RiskFactors, config: &SimulationConfig) -> Result<Self, SimulationError> {
        let base_loss = base.impact_value / PERCENT_SCALE;
        let loss_sd = loss_std_dev(
            base_loss,
            config.effective_loss_std_dev_ratio(),
            config.effective_min_loss_std_dev(),
        );

        let probability_floor = config.effective_probability_floor();
        if !(0.0..=1.0).contains(&probability_floor) {
            return Err(SimulationError::InvalidDistribution {
                variable: PerturbedVariable::Probability.name(),
                message: format!("probability floor {probability_floor} outside [0, 1]"),
            });
        }

        Ok(Self {
            probability: normal(
                PerturbedVariable::Probability,
                base.probability,
                config.effective_probability_std_dev(),
            )?,
            exposure: normal(
                PerturbedVariable::Exposure,
                base.exposure,
                config.effective_exposure_std_dev(),
            )?,
            control: normal(
                PerturbedVariable::ControlEffectiveness,
                base.control_effectiveness / PERCENT_SCALE,
                config.effective_control_std_dev(),
            )?,
            loss: normal(PerturbedVariable::LossFactor, base_loss, loss_sd)?,
            loss_std_dev: loss_sd,
            probability_floor,
            deliberate_threat: base.deliberate_threat,
            weight_factor: base.impact_weight / PERCENT_SCALE,
        })
    }

    /// Draw one trial. Draw order is fixed: probability, exposure, control, loss.
    pub fn draw<R: Rng + ?Sized>(&self, rng: &mut R) -> TrialDraw {
        TrialDraw {
            probability: self.probability.sample(rng).clamp(self.probability_floor, 1.0),
            exposure: self.exposure.sample(rng).clamp(self.probability_floor, 1.0),
            control_factor: self.control.sample(rng).clamp(0.0, 1.0),
            loss_factor: self.loss.sample(rng).clamp(0.0, 1.0),
        }
    }

    /// Score a trial with the risk scorer's threat chain, using the drawn
    /// loss factor as the impact term.
    pub fn score(&self, draw: &TrialDraw) -> RiskMetrics {
        compute(&NormalizedFactors {
            probability: draw.probability,
            exposure: draw.exposure,
            deliberate_threat: self.deliberate_threat,
            control_factor: draw.control_factor,
            impact_factor: draw.loss_factor,
            weight_factor: self.weight_factor,
        })
    }

    /// Standard deviation used for the loss factor.
    pub fn loss_std_dev(&self) -> f64 {
        self.loss_std_dev
    }
}

/// Loss-factor standard deviation: `ratio × base`, zero when there is no
/// base impact, and `min` when the proportional value rounds to zero at
/// two decimal places.
pub fn loss_std_dev(base_loss: f64, ratio: f64, min: f64) -> f64 {
    if base_loss == 0.0 {
        return 0.0;
    }
    let proportional = ratio * base_loss;
    let scale = 10f64.powi(LOSS_STD_DEV_ROUNDING_DECIMALS);
    if (proportional * scale).round() == 0.0 {
        min
    } else {
        proportional
    }
}

/// Independent, reproducible RNG for one trial of one stream.
///
/// Seeding per trial keeps results identical between sequential and
/// parallel execution.
pub fn trial_rng(seed: u64, stream: u64, trial: usize) -> StdRng {
    let stream_key = splitmix64(splitmix64(seed) ^ stream);
    StdRng::seed_from_u64(splitmix64(stream_key ^ trial as u64))
}

fn splitmix64(mut z: u64) -> u64 {
    z = z.wrapping_add(0x9E37_79B9_7F4A_7C15);
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}

fn normal(
    variable: PerturbedVariable,
    mean: f64,
    std_dev: f64,
) -> Result<Normal<f64>, SimulationError> {
    // Normal::new only rejects non-finite spreads.
    if std_dev.is_nan() || std_dev < 0.0 {
        return Err(SimulationError::InvalidDistribution {
            variable: variable.name(),
            message: format!("mean {mean}, std dev {std_dev}: std dev must be non-negative"),
        });
    }
    Normal::new(mean, std_dev).map_err(|e| SimulationError::InvalidDistribution {
        variable: variable.name(),
        message: format!("mean {mean}, std dev {std_dev}: {e}"),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base() -> RiskFactors {
        RiskFactors::new(0.5, 0.5, 0.0, 50.0, 60.0, 30.0)
    }

    #[test]
    fn loss_std_dev_rules() {
        assert_eq!(loss_std_dev(0.0, 0.2, 0.05), 0.0);
        assert!((loss_std_dev(0.6, 0.2, 0.05) - 0.12).abs() < 1e-12);
        // 0.2 × 0.01 = 0.002 rounds to 0.00 → floor
        assert_eq!(loss_std_dev(0.01, 0.2, 0.05), 0.05);
    }

    #[test]
    fn draws_respect_clip_ranges() {
        let model = PerturbationModel::new(
            &RiskFactors::new(0.0, 1.0, 0.0, 100.0, 100.0, 30.0),
            &SimulationConfig::default(),
        )
        .unwrap();
        let mut rng = trial_rng(1, 1, 0);
        for _ in 0..2_000 {
            let d = model.draw(&mut rng);
            assert!((0.01..=1.0).contains(&d.probability));
            assert!((0.01..=1.0).contains(&d.exposure));
            assert!((0.0..=1.0).contains(&d.control_factor));
            assert!((0.0..=1.0).contains(&d.loss_factor));
        }
    }

    #[test]
    fn zero_impact_never_varies() {
        let model = PerturbationModel::new(
            &RiskFactors::new(0.5, 0.5, 0.0, 50.0, 0.0, 30.0),
            &SimulationConfig::default(),
        )
        .unwrap();
        assert_eq!(model.loss_std_dev(), 0.0);
        let mut rng = trial_rng(3, 1, 0);
        assert!((0..100).all(|_| model.draw(&mut rng).loss_factor == 0.0));
    }

    #[test]
    fn trial_rng_is_reproducible_and_stream_distinct() {
        let a: u64 = trial_rng(42, 1, 7).gen();
        let b: u64 = trial_rng(42, 1, 7).gen();
        let c: u64 = trial_rng(42, 2, 7).gen();
        let d: u64 = trial_rng(42, 1, 8).gen();
        assert_eq!(a, b);
        assert_ne!(a, c);
        assert_ne!(a, d);
    }

    #[test]
    fn score_matches_scorer_for_unperturbed_draw() {
        let model = PerturbationModel::new(&base(), &SimulationConfig::default()).unwrap();
        let draw = TrialDraw {
            probability: 0.5,
            exposure: 0.5,
            control_factor: 0.5,
            loss_factor: 0.6,
        };
        let m = model.score(&draw);
        assert_eq!(m, crate::scoring::score(&base()));
    }

    #[test]
    fn different_seeds_do_not_share_shifted_streams() {
        let shifted: u64 = trial_rng(0, 1, 1).gen();
        let other_seed: u64 = trial_rng(0x9E37_79B9_7F4A_7C15, 1, 0).gen();
        assert_ne!(shifted, other_seed);

        let first: Vec<u64> = (0..64).map(|t| trial_rng(1, 1, t).gen()).collect();
        let second: Vec<u64> = (0..64).map(|t| trial_rng(2, 1, t).gen()).collect();
        assert!(first.iter().all(|x| !second.contains(x)));
    }

    #[test]
    fn probability_floor_outside_unit_interval_is_rejected() {
        for floor in [1.5, -0.1, f64::NAN] {
            let config = SimulationConfig {
                probability_floor: Some(floor),
                ..Default::default()
            };
            let err = PerturbationModel::new(&base(), &config).unwrap_err();
            assert!(matches!(
                err,
                SimulationError::InvalidDistribution { variable: "probability", .. }
            ));
        }
    }

    #[test]
    fn negative_configured_spread_is_rejected() {
        let config = SimulationConfig {
            exposure_std_dev: Some(-0.1),
            ..Default::default()
        };
        let err = PerturbationModel::new(&base(), &config).unwrap_err();
        assert!(matches!(
            err,
            SimulationError::InvalidDistribution { variable: "exposure", .. }
        ));
    }

    #[test]
    fn negative_impact_is_invalid_distribution() {
        let err = PerturbationModel::new(
            &RiskFactors::new(0.5, 0.5, 0.0, 50.0, -50.0, 30.0),
            &SimulationConfig::default(),
        )
        .unwrap_err();
        assert!(matches!(
            err,
            SimulationError::InvalidDistribution { variable: "loss_factor", .. }
        ));
    }
}
