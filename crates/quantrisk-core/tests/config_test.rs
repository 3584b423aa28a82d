//! Tests for the QuantRisk configuration system.

use std::sync::Mutex;

use quantrisk_core::config::{ConfigOverrides, QuantRiskConfig};
use quantrisk_core::errors::ConfigError;
use quantrisk_core::types::{CorrelationSampling, CriticalityLevel, ImpactCategory, Language};

/// Global mutex to serialize tests that modify environment variables.
static ENV_MUTEX: Mutex<()> = Mutex::new(());

fn tempdir() -> tempfile::TempDir {
    tempfile::TempDir::new().unwrap()
}

/// Clear all QUANTRISK_ env vars to prevent cross-test contamination.
fn clear_quantrisk_env_vars() {
    for key in [
        "QUANTRISK_ITERATIONS",
        "QUANTRISK_SEED",
        "QUANTRISK_PARALLEL",
        "QUANTRISK_CORRELATION_SAMPLING",
        "QUANTRISK_LANGUAGE",
    ] {
        std::env::remove_var(key);
    }
}

#[test]
fn test_layered_resolution() {
    let _lock = ENV_MUTEX.lock().unwrap();
    clear_quantrisk_env_vars();

    let dir = tempdir();
    std::fs::write(
        dir.path().join("quantrisk.toml"),
        r#"
[simulation]
iterations = 2_000
seed = 7

[classification]
language = "es"
"#,
    )
    .unwrap();

    std::env::set_var("QUANTRISK_SEED", "99");

    let overrides = ConfigOverrides {
        iterations: Some(50),
        ..Default::default()
    };

    let config = QuantRiskConfig::load(dir.path(), Some(&overrides)).unwrap();

    // Overrides beat project config
    assert_eq!(config.simulation.iterations, Some(50));
    // Env beats project config
    assert_eq!(config.simulation.seed, Some(99));
    // Project config beats defaults
    assert_eq!(config.classification.effective_language(), Language::Es);

    clear_quantrisk_env_vars();
}

#[test]
fn test_load_without_files_uses_defaults() {
    let _lock = ENV_MUTEX.lock().unwrap();
    clear_quantrisk_env_vars();

    let dir = tempdir();
    let config = QuantRiskConfig::load(dir.path(), None).unwrap();

    assert_eq!(config.simulation.effective_iterations(), 10_000);
    assert_eq!(config.classification.effective_language(), Language::En);
    assert!(!config.classification.has_custom_bands());
    assert_eq!(config.impact.effective_weight(ImpactCategory::Economic), 30.0);
}

#[test]
fn test_invalid_project_toml_is_parse_error() {
    let _lock = ENV_MUTEX.lock().unwrap();
    clear_quantrisk_env_vars();

    let dir = tempdir();
    std::fs::write(dir.path().join("quantrisk.toml"), "[simulation\niterations = ").unwrap();

    let err = QuantRiskConfig::load(dir.path(), None).unwrap_err();
    assert!(matches!(err, ConfigError::ParseError { .. }));
}

#[test]
fn test_env_correlation_sampling_and_bad_language() {
    let _lock = ENV_MUTEX.lock().unwrap();
    clear_quantrisk_env_vars();

    let dir = tempdir();
    std::env::set_var("QUANTRISK_CORRELATION_SAMPLING", "paired");
    let config = QuantRiskConfig::load(dir.path(), None).unwrap();
    assert_eq!(
        config.simulation.effective_correlation_sampling(),
        CorrelationSampling::Paired
    );

    std::env::set_var("QUANTRISK_LANGUAGE", "klingon");
    let err = QuantRiskConfig::load(dir.path(), None).unwrap_err();
    assert!(matches!(err, ConfigError::InvalidValue { .. }));

    clear_quantrisk_env_vars();
}

#[test]
fn test_from_toml_with_custom_bands() {
    let config = QuantRiskConfig::from_toml(
        r#"
[[classification.bands]]
min = 0.0
max = 0.5
level = "acceptable"
label_en = "LOW"
label_es = "BAJO"
color = "green"

[[classification.bands]]
min = 0.5
max = 1.0
level = "critical"
label_en = "SEVERE"
label_es = "GRAVE"
color = "red"
"#,
    )
    .unwrap();

    assert_eq!(config.classification.bands.len(), 2);
    assert_eq!(config.classification.bands[1].level, CriticalityLevel::Critical);
    assert_eq!(config.classification.bands[0].label_es, "BAJO");
}

#[test]
fn test_impact_weights_must_sum_to_100() {
    let err = QuantRiskConfig::from_toml(
        r#"
[impact]
human = 50.0
"#,
    )
    .unwrap_err();
    assert!(matches!(err, ConfigError::ValidationFailed { ref field, .. } if field == "impact"));

    // Rebalanced weights are accepted.
    let ok = QuantRiskConfig::from_toml(
        r#"
[impact]
human = 35.0
legal = 0.0
"#,
    );
    assert!(ok.is_ok());
}

#[test]
fn test_zero_iterations_rejected() {
    let err = QuantRiskConfig::from_toml("[simulation]\niterations = 0\n").unwrap_err();
    assert!(matches!(err, ConfigError::ValidationFailed { .. }));
}

#[test]
fn test_probability_floor_range() {
    let err = QuantRiskConfig::from_toml("[simulation]\nprobability_floor = 1.5\n").unwrap_err();
    assert!(matches!(
        err,
        ConfigError::ValidationFailed { ref field, .. } if field == "simulation.probability_floor"
    ));
}

#[test]
fn test_toml_roundtrip_preserves_overrides() {
    let mut config = QuantRiskConfig::default();
    QuantRiskConfig::apply_overrides(
        &mut config,
        &ConfigOverrides {
            seed: Some(42),
            correlation_sampling: Some(CorrelationSampling::Paired),
            ..Default::default()
        },
    );
    let text = config.to_toml().unwrap();
    let parsed = QuantRiskConfig::from_toml(&text).unwrap();
    assert_eq!(parsed.simulation.seed, Some(42));
    assert_eq!(
        parsed.simulation.effective_correlation_sampling(),
        CorrelationSampling::Paired
    );
}
