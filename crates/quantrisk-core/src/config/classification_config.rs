//! Classification band configuration.

use serde::{Deserialize, Serialize};

use crate::types::{CriticalityLevel, Language};

/// One configured band: an inclusive `[min, max]` range with its labels.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BandConfig {
    pub min: f64,
    pub max: f64,
    pub level: CriticalityLevel,
    pub label_en: String,
    pub label_es: String,
    pub color: String,
}

/// Configuration for the classification table.
///
/// An empty `bands` list means "use the built-in five-band table".
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ClassificationConfig {
    /// Default label language. Default: `en`.
    pub language: Option<Language>,
    pub bands: Vec<BandConfig>,
}

impl ClassificationConfig {
    pub fn effective_language(&self) -> Language {
        self.language.unwrap_or_default()
    }

    /// Whether custom bands replace the built-in table.
    pub fn has_custom_bands(&self) -> bool {
        !self.bands.is_empty()
    }
}
