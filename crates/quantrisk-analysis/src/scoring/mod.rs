//! Risk Scorer: five normalized risk factors to four risk metrics.
//!
//! `try_score` reports invalid input as a `ScoringError`; `score` and
//! `score_raw` keep the never-fail contract by collapsing errors to
//! [`RiskMetrics::ZERO`].

pub mod categories;
pub mod factors;
pub mod formula;
pub mod metrics;

pub use categories::{assess_categories, CategoryAssessment, CategoryScore, ImpactWeights};
pub use factors::{NormalizedFactors, RawRiskFactors, RiskFactors};
pub use formula::{compute, score, score_raw, try_score, try_score_raw};
pub use metrics::RiskMetrics;
