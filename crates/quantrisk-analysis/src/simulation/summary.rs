//! Descriptive statistics of a simulated loss distribution.

use serde::{Deserialize, Serialize};
use statrs::statistics::{Data, OrderStatistics, Statistics};

/// Summary of the economic-loss samples, for downstream presentation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LossSummary {
    pub count: usize,
    pub mean: f64,
    /// Sample standard deviation; 0 for a single sample.
    pub std_dev: f64,
    pub min: f64,
    pub max: f64,
    /// 5th percentile.
    pub p5: f64,
    /// Median.
    pub p50: f64,
    /// 95th percentile, the 95% value at risk.
    pub p95: f64,
}

impl LossSummary {
    /// Summarize `samples`; `None` when empty.
    pub fn from_samples(samples: &[f64]) -> Option<Self> {
        if samples.is_empty() {
            return None;
        }

        let std_dev = if samples.len() > 1 {
            samples.iter().std_dev()
        } else {
            0.0
        };
        let (min, max) = samples
            .iter()
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), x| {
                (lo.min(*x), hi.max(*x))
            });

        let mut data = Data::new(samples.to_vec());
        Some(Self {
            count: samples.len(),
            mean: samples.iter().mean(),
            std_dev,
            min,
            max,
            p5: data.percentile(5),
            p50: data.percentile(50),
            p95: data.percentile(95),
        })
    }

    /// P95 − P5.
    pub fn spread(&self) -> f64 {
        self.p95 - self.p5
    }

    /// Ordering invariant: min <= p5 <= p50 <= p95 <= max.
    pub fn is_valid(&self) -> bool {
        self.min <= self.p5 && self.p5 <= self.p50 && self.p50 <= self.p95 && self.p95 <= self.max
    }
}

/// Loss not exceeded with probability `confidence` (e.g. 0.95).
///
/// `None` for empty samples or a confidence outside [0, 1].
pub fn value_at_risk(samples: &[f64], confidence: f64) -> Option<f64> {
    if samples.is_empty() || !(0.0..=1.0).contains(&confidence) {
        return None;
    }
    Some(Data::new(samples.to_vec()).quantile(confidence))
}

/// Mean loss in the tail at or beyond the value at risk.
pub fn expected_shortfall(samples: &[f64], confidence: f64) -> Option<f64> {
    let var = value_at_risk(samples, confidence)?;
    let tail: Vec<f64> = samples.iter().copied().filter(|x| *x >= var).collect();
    if tail.is_empty() {
        Some(var)
    } else {
        Some(tail.iter().mean())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_has_no_summary() {
        assert!(LossSummary::from_samples(&[]).is_none());
        assert!(value_at_risk(&[], 0.95).is_none());
    }

    #[test]
    fn summary_of_uniform_grid() {
        let samples: Vec<f64> = (0..=100).map(f64::from).collect();
        let s = LossSummary::from_samples(&samples).unwrap();
        assert_eq!(s.count, 101);
        assert!((s.mean - 50.0).abs() < 1e-9);
        assert_eq!(s.min, 0.0);
        assert_eq!(s.max, 100.0);
        assert!((s.p50 - 50.0).abs() < 1e-9);
        assert!(s.is_valid());
        assert!(s.spread() > 80.0);
    }

    #[test]
    fn single_sample_has_zero_spread() {
        let s = LossSummary::from_samples(&[42.0]).unwrap();
        assert_eq!(s.std_dev, 0.0);
        assert_eq!(s.p5, 42.0);
        assert_eq!(s.p95, 42.0);
    }

    #[test]
    fn shortfall_is_at_least_var() {
        let samples: Vec<f64> = (1..=1000).map(f64::from).collect();
        let var = value_at_risk(&samples, 0.95).unwrap();
        let es = expected_shortfall(&samples, 0.95).unwrap();
        assert!(es >= var);
        assert!(value_at_risk(&samples, 1.5).is_none());
    }
}
