//! A single classification band and the result of a lookup.

use quantrisk_core::config::BandConfig;
use quantrisk_core::constants::{UNKNOWN_COLOR, UNKNOWN_LABEL};
use quantrisk_core::types::{CriticalityLevel, Language};
use serde::{Deserialize, Serialize};

/// Inclusive `[min, max]` range mapped to labels and a display color.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassificationBand {
    pub min: f64,
    pub max: f64,
    pub level: CriticalityLevel,
    pub label_en: String,
    pub label_es: String,
    pub color: String,
}

impl ClassificationBand {
    pub fn new(
        min: f64,
        max: f64,
        level: CriticalityLevel,
        label_en: impl Into<String>,
        label_es: impl Into<String>,
        color: impl Into<String>,
    ) -> Self {
        Self {
            min,
            max,
            level,
            label_en: label_en.into(),
            label_es: label_es.into(),
            color: color.into(),
        }
    }

    /// Inclusive containment. NaN is never contained.
    pub fn contains(&self, value: f64) -> bool {
        self.min <= value && value <= self.max
    }

    pub fn label(&self, language: Language) -> &str {
        match language {
            Language::En => &self.label_en,
            Language::Es => &self.label_es,
        }
    }

    pub fn classify(&self, language: Language) -> Classification<'_> {
        Classification {
            label: self.label(language),
            color: &self.color,
            level: self.level,
        }
    }
}

impl From<&BandConfig> for ClassificationBand {
    fn from(cfg: &BandConfig) -> Self {
        Self {
            min: cfg.min,
            max: cfg.max,
            level: cfg.level,
            label_en: cfg.label_en.clone(),
            label_es: cfg.label_es.clone(),
            color: cfg.color.clone(),
        }
    }
}

/// Outcome of classifying a value: borrowed from the table it came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Classification<'a> {
    pub label: &'a str,
    pub color: &'a str,
    pub level: CriticalityLevel,
}

impl Classification<'static> {
    /// Sentinel for values outside every band.
    pub const UNKNOWN: Classification<'static> = Classification {
        label: UNKNOWN_LABEL,
        color: UNKNOWN_COLOR,
        level: CriticalityLevel::Unknown,
    };
}

impl Classification<'_> {
    pub fn is_unknown(&self) -> bool {
        self.level == CriticalityLevel::Unknown
    }
}
