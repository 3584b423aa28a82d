//! Monte Carlo Simulator: economic-loss distribution of a single risk.
//!
//! Perturbs probability, exposure, control effectiveness and the loss
//! factor around their base values, rescores every trial, and ranks the
//! perturbed inputs by absolute Pearson correlation with the losses.

pub mod monte_carlo;
pub mod sampler;
pub mod sensitivity;
pub mod summary;
pub mod types;

pub use monte_carlo::MonteCarloSimulator;
pub use sampler::{PerturbationModel, TrialDraw};
pub use summary::LossSummary;
pub use types::*;
