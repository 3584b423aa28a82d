//! Top-level QuantRisk configuration with layered resolution.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::{ClassificationConfig, ImpactConfig, SimulationConfig};
use crate::constants;
use crate::errors::ConfigError;
use crate::types::{CorrelationSampling, Language};

/// Project config file name, looked up in the project root.
pub const PROJECT_CONFIG_FILE: &str = "quantrisk.toml";

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. Explicit overrides (applied via `apply_overrides`)
/// 2. Environment variables (`QUANTRISK_*`)
/// 3. Project config (`quantrisk.toml` in project root)
/// 4. User config (`~/.quantrisk/config.toml`)
/// 5. Compiled defaults
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct QuantRiskConfig {
    pub simulation: SimulationConfig,
    pub classification: ClassificationConfig,
    pub impact: ImpactConfig,
}

/// Caller-supplied overrides, the highest-priority layer.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub iterations: Option<u32>,
    pub seed: Option<u64>,
    pub parallel: Option<bool>,
    pub correlation_sampling: Option<CorrelationSampling>,
    pub language: Option<Language>,
}

impl QuantRiskConfig {
    /// Load configuration with layered resolution rooted at `root`.
    pub fn load(root: &Path, overrides: Option<&ConfigOverrides>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        // Layer 4 (lowest priority): user config
        if let Some(user_config_path) = Self::user_config_path() {
            if user_config_path.exists() {
                match Self::merge_toml_file(&mut config, &user_config_path) {
                    Ok(()) => {}
                    Err(e @ ConfigError::ParseError { .. }) => return Err(e),
                    Err(e) => {
                        tracing::warn!(
                            path = %user_config_path.display(),
                            error = %e,
                            "ignoring unreadable user config"
                        );
                    }
                }
            }
        }

        // Layer 3: project config
        let project_config_path = root.join(PROJECT_CONFIG_FILE);
        if project_config_path.exists() {
            Self::merge_toml_file(&mut config, &project_config_path)?;
        }

        // Layer 2: environment variables
        Self::apply_env_overrides(&mut config)?;

        // Layer 1 (highest priority): explicit overrides
        if let Some(overrides) = overrides {
            Self::apply_overrides(&mut config, overrides);
        }

        Self::validate(&config)?;

        tracing::debug!(
            iterations = config.simulation.effective_iterations(),
            seeded = config.simulation.seed.is_some(),
            custom_bands = config.classification.has_custom_bands(),
            "configuration resolved"
        );

        Ok(config)
    }

    /// Load configuration from a TOML string.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })?;
        Self::validate(&config)?;
        Ok(config)
    }

    /// Validate the configuration values.
    ///
    /// Band layout is checked when the classification table is built.
    pub fn validate(config: &QuantRiskConfig) -> Result<(), ConfigError> {
        let sim = &config.simulation;

        if sim.iterations == Some(0) {
            return Err(ConfigError::ValidationFailed {
                field: "simulation.iterations".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }

        for (field, value) in sim.spreads() {
            if let Some(v) = value {
                if !v.is_finite() || v < 0.0 {
                    return Err(ConfigError::ValidationFailed {
                        field: field.to_string(),
                        message: "must be a finite, non-negative number".to_string(),
                    });
                }
            }
        }

        if let Some(floor) = sim.probability_floor {
            if !(0.0..=1.0).contains(&floor) {
                return Err(ConfigError::ValidationFailed {
                    field: "simulation.probability_floor".to_string(),
                    message: "must be between 0.0 and 1.0".to_string(),
                });
            }
        }

        for category in crate::types::ImpactCategory::ALL {
            let weight = config.impact.effective_weight(*category);
            if !weight.is_finite() || weight < 0.0 {
                return Err(ConfigError::ValidationFailed {
                    field: format!("impact.{}", category.name()),
                    message: "must be a finite, non-negative percentage".to_string(),
                });
            }
        }

        let total = config.impact.effective_total();
        if (total - constants::IMPACT_WEIGHT_TOTAL).abs() > constants::IMPACT_WEIGHT_TOLERANCE {
            return Err(ConfigError::ValidationFailed {
                field: "impact".to_string(),
                message: format!("category weights must sum to 100, got {total}"),
            });
        }

        Ok(())
    }

    /// Returns the user config path: `~/.quantrisk/config.toml`.
    fn user_config_path() -> Option<std::path::PathBuf> {
        dirs_path().map(|d| d.join("config.toml"))
    }

    /// Merge a TOML file into the existing config.
    /// Unknown keys are silently ignored (forward-compatible).
    fn merge_toml_file(config: &mut QuantRiskConfig, path: &Path) -> Result<(), ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;

        let file_config: QuantRiskConfig =
            toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;

        Self::merge(config, &file_config);
        Ok(())
    }

    /// Merge `other` into `base`, where `other` values override `base` values
    /// only when `other` has a `Some` value.
    fn merge(base: &mut QuantRiskConfig, other: &QuantRiskConfig) {
        // Simulation
        let (b, o) = (&mut base.simulation, &other.simulation);
        if o.iterations.is_some() {
            b.iterations = o.iterations;
        }
        if o.seed.is_some() {
            b.seed = o.seed;
        }
        if o.parallel.is_some() {
            b.parallel = o.parallel;
        }
        if o.correlation_sampling.is_some() {
            b.correlation_sampling = o.correlation_sampling;
        }
        if o.probability_std_dev.is_some() {
            b.probability_std_dev = o.probability_std_dev;
        }
        if o.exposure_std_dev.is_some() {
            b.exposure_std_dev = o.exposure_std_dev;
        }
        if o.control_std_dev.is_some() {
            b.control_std_dev = o.control_std_dev;
        }
        if o.loss_std_dev_ratio.is_some() {
            b.loss_std_dev_ratio = o.loss_std_dev_ratio;
        }
        if o.min_loss_std_dev.is_some() {
            b.min_loss_std_dev = o.min_loss_std_dev;
        }
        if o.probability_floor.is_some() {
            b.probability_floor = o.probability_floor;
        }

        // Classification
        if other.classification.language.is_some() {
            base.classification.language = other.classification.language;
        }
        if other.classification.has_custom_bands() {
            base.classification.bands = other.classification.bands.clone();
        }

        // Impact
        base.impact.merge_from(&other.impact);
    }

    /// Apply `QUANTRISK_*` environment variables.
    ///
    /// Unparseable numeric values are ignored; unknown enum values are errors.
    fn apply_env_overrides(config: &mut QuantRiskConfig) -> Result<(), ConfigError> {
        if let Ok(val) = std::env::var("QUANTRISK_ITERATIONS") {
            if let Ok(v) = val.parse::<u32>() {
                config.simulation.iterations = Some(v);
            }
        }
        if let Ok(val) = std::env::var("QUANTRISK_SEED") {
            if let Ok(v) = val.parse::<u64>() {
                config.simulation.seed = Some(v);
            }
        }
        if let Ok(val) = std::env::var("QUANTRISK_PARALLEL") {
            if let Ok(v) = val.parse::<bool>() {
                config.simulation.parallel = Some(v);
            }
        }
        if let Ok(val) = std::env::var("QUANTRISK_CORRELATION_SAMPLING") {
            config.simulation.correlation_sampling = Some(val.parse()?);
        }
        if let Ok(val) = std::env::var("QUANTRISK_LANGUAGE") {
            config.classification.language = Some(val.parse()?);
        }
        Ok(())
    }

    /// Apply explicit overrides (highest priority).
    pub fn apply_overrides(config: &mut QuantRiskConfig, overrides: &ConfigOverrides) {
        if let Some(v) = overrides.iterations {
            config.simulation.iterations = Some(v);
        }
        if let Some(v) = overrides.seed {
            config.simulation.seed = Some(v);
        }
        if let Some(v) = overrides.parallel {
            config.simulation.parallel = Some(v);
        }
        if let Some(v) = overrides.correlation_sampling {
            config.simulation.correlation_sampling = Some(v);
        }
        if let Some(v) = overrides.language {
            config.classification.language = Some(v);
        }
    }

    /// Serialize this config to a TOML string.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::InvalidValue {
            field: "<root>".to_string(),
            message: e.to_string(),
        })
    }
}

fn dirs_path() -> Option<std::path::PathBuf> {
    home_dir().map(|h| h.join(".quantrisk"))
}

fn home_dir() -> Option<std::path::PathBuf> {
    std::env::var_os("HOME")
        .or_else(|| std::env::var_os("USERPROFILE"))
        .map(std::path::PathBuf::from)
}
