//! Configuration system for QuantRisk.
//! TOML-based, layered resolution: overrides > env > project > user > defaults.

pub mod classification_config;
pub mod impact_config;
pub mod quantrisk_config;
pub mod simulation_config;

pub use classification_config::{BandConfig, ClassificationConfig};
pub use impact_config::ImpactConfig;
pub use quantrisk_config::{ConfigOverrides, QuantRiskConfig};
pub use simulation_config::SimulationConfig;
