//! Ordered, contiguous set of classification bands spanning [0, 1].

use quantrisk_core::config::ClassificationConfig;
use quantrisk_core::errors::ClassificationError;
use quantrisk_core::types::{CriticalityLevel, Language};

use super::band::{Classification, ClassificationBand};

/// Immutable classification table.
///
/// Bands are ascending and contiguous: each band's `min` equals the previous
/// band's `max`. Lookup returns the first band containing the value, so a
/// shared endpoint belongs to the lower band and the effective ranges are
/// `[0, b1], (b1, b2], ..., (bn-1, 1]`.
#[derive(Debug, Clone, PartialEq)]
pub struct ClassificationTable {
    bands: Vec<ClassificationBand>,
}

impl ClassificationTable {
    /// Build a table, validating band layout.
    pub fn new(bands: Vec<ClassificationBand>) -> Result<Self, ClassificationError> {
        validate(&bands)?;
        Ok(Self { bands })
    }

    /// Build from configuration; no custom bands means the default table.
    pub fn from_config(config: &ClassificationConfig) -> Result<Self, ClassificationError> {
        if !config.has_custom_bands() {
            return Ok(Self::default());
        }
        Self::new(config.bands.iter().map(ClassificationBand::from).collect())
    }

    /// Classify `value`. Values outside every band (including NaN) get the
    /// `UNKNOWN`/gray sentinel; this never fails.
    pub fn classify(&self, value: f64, language: Language) -> Classification<'_> {
        match self.bands.iter().find(|band| band.contains(value)) {
            Some(band) => band.classify(language),
            None => {
                tracing::debug!(value, "value outside every classification band");
                Classification::UNKNOWN
            }
        }
    }

    /// Criticality level of `value`.
    pub fn level(&self, value: f64) -> CriticalityLevel {
        self.classify(value, Language::default()).level
    }

    pub fn bands(&self) -> &[ClassificationBand] {
        &self.bands
    }

    pub fn len(&self) -> usize {
        self.bands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bands.is_empty()
    }
}

impl Default for ClassificationTable {
    /// The five standard bands.
    fn default() -> Self {
        Self {
            bands: vec![
                ClassificationBand::new(
                    0.0,
                    0.1,
                    CriticalityLevel::Acceptable,
                    "ACCEPTABLE",
                    "ACEPTABLE",
                    "green",
                ),
                ClassificationBand::new(
                    0.1,
                    0.2,
                    CriticalityLevel::Tolerable,
                    "TOLERABLE",
                    "TOLERABLE",
                    "lightgreen",
                ),
                ClassificationBand::new(
                    0.2,
                    0.4,
                    CriticalityLevel::Moderate,
                    "MODERATE",
                    "MODERADO",
                    "yellow",
                ),
                ClassificationBand::new(0.4, 0.6, CriticalityLevel::High, "HIGH", "ALTO", "orange"),
                ClassificationBand::new(
                    0.6,
                    1.0,
                    CriticalityLevel::Critical,
                    "CRITICAL",
                    "CRÍTICO",
                    "red",
                ),
            ],
        }
    }
}

fn validate(bands: &[ClassificationBand]) -> Result<(), ClassificationError> {
    let (first, last) = match (bands.first(), bands.last()) {
        (Some(first), Some(last)) => (first, last),
        _ => return Err(ClassificationError::EmptyTable),
    };

    for (index, band) in bands.iter().enumerate() {
        if !band.min.is_finite() || !band.max.is_finite() {
            return Err(ClassificationError::InvalidBand {
                index,
                message: "bounds must be finite".to_string(),
            });
        }
        if band.min > band.max {
            return Err(ClassificationError::InvalidBand {
                index,
                message: format!("min {} exceeds max {}", band.min, band.max),
            });
        }
        if band.label_en.is_empty() || band.label_es.is_empty() {
            return Err(ClassificationError::InvalidBand {
                index,
                message: "labels must not be empty".to_string(),
            });
        }
        if band.level == CriticalityLevel::Unknown {
            return Err(ClassificationError::InvalidBand {
                index,
                message: "the unknown level is reserved for misses".to_string(),
            });
        }
    }

    for (index, pair) in bands.windows(2).enumerate() {
        let (previous, next) = (&pair[0], &pair[1]);
        if next.min < previous.max {
            return Err(ClassificationError::Overlap { index: index + 1 });
        }
        if next.min > previous.max {
            return Err(ClassificationError::Gap {
                index,
                previous_max: previous.max,
                next_min: next.min,
            });
        }
    }

    if first.min != 0.0 || last.max != 1.0 {
        return Err(ClassificationError::Coverage {
            min: first.min,
            max: last.max,
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn band(min: f64, max: f64, level: CriticalityLevel) -> ClassificationBand {
        ClassificationBand::new(min, max, level, "L", "L", "c")
    }

    #[test]
    fn default_table_is_valid() {
        let table = ClassificationTable::default();
        assert!(validate(table.bands()).is_ok());
        assert_eq!(table.len(), 5);
    }

    #[test]
    fn shared_endpoint_belongs_to_lower_band() {
        let table = ClassificationTable::default();
        assert_eq!(table.level(0.1), CriticalityLevel::Acceptable);
        assert_eq!(table.level(0.1000001), CriticalityLevel::Tolerable);
        assert_eq!(table.level(0.6), CriticalityLevel::High);
        assert_eq!(table.level(1.0), CriticalityLevel::Critical);
        assert_eq!(table.level(0.0), CriticalityLevel::Acceptable);
    }

    #[test]
    fn misses_are_unknown() {
        let table = ClassificationTable::default();
        for value in [-0.01, 1.5, f64::NAN, f64::INFINITY] {
            let c = table.classify(value, Language::Es);
            assert!(c.is_unknown());
            assert_eq!(c.label, "UNKNOWN");
            assert_eq!(c.color, "gray");
        }
    }

    #[test]
    fn rejects_empty_table() {
        assert_eq!(
            ClassificationTable::new(vec![]).unwrap_err(),
            ClassificationError::EmptyTable
        );
    }

    #[test]
    fn rejects_gap_and_overlap() {
        let gap = vec![
            band(0.0, 0.4, CriticalityLevel::Acceptable),
            band(0.5, 1.0, CriticalityLevel::Critical),
        ];
        assert!(matches!(
            ClassificationTable::new(gap),
            Err(ClassificationError::Gap { index: 0, .. })
        ));

        let overlap = vec![
            band(0.0, 0.6, CriticalityLevel::Acceptable),
            band(0.5, 1.0, CriticalityLevel::Critical),
        ];
        assert_eq!(
            ClassificationTable::new(overlap).unwrap_err(),
            ClassificationError::Overlap { index: 1 }
        );
    }

    #[test]
    fn rejects_partial_coverage() {
        let partial = vec![band(0.0, 0.8, CriticalityLevel::Acceptable)];
        assert_eq!(
            ClassificationTable::new(partial).unwrap_err(),
            ClassificationError::Coverage { min: 0.0, max: 0.8 }
        );
    }

    #[test]
    fn rejects_inverted_and_reserved_bands() {
        let inverted = vec![band(1.0, 0.0, CriticalityLevel::Acceptable)];
        assert!(matches!(
            ClassificationTable::new(inverted),
            Err(ClassificationError::InvalidBand { index: 0, .. })
        ));

        let reserved = vec![band(0.0, 1.0, CriticalityLevel::Unknown)];
        assert!(matches!(
            ClassificationTable::new(reserved),
            Err(ClassificationError::InvalidBand { index: 0, .. })
        ));
    }
}
