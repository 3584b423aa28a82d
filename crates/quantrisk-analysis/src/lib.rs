//! # quantrisk-analysis
//!
//! Quantitative risk analysis:
//! - Risk Scorer: five normalized factors to four risk metrics
//! - Monte Carlo Simulator: perturbed trials, loss distribution, sensitivity ranking
//! - Classification Table: risk index to criticality band, label, and color
//!
//! [`RiskEngine`] bundles the immutable configuration and exposes the
//! three operations a presentation layer calls: `score`, `simulate`,
//! `classify`.

pub mod classification;
pub mod engine;
pub mod scoring;
pub mod simulation;

pub use classification::{Classification, ClassificationBand, ClassificationTable};
pub use engine::RiskEngine;
pub use scoring::{RawRiskFactors, RiskFactors, RiskMetrics};
pub use simulation::{MonteCarloSimulator, SimulationResult};
