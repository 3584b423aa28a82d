//! Sensitivity ranking: |Pearson r| of each perturbed input against losses.

use statrs::statistics::Statistics;

use super::sampler::TrialDraw;
use super::types::{PerturbedVariable, Sensitivity};

/// Pearson correlation of two equal-length series.
///
/// Returns `None` for fewer than two points, mismatched lengths, or when
/// either series is constant (correlation undefined).
pub fn pearson(xs: &[f64], ys: &[f64]) -> Option<f64> {
    if xs.len() != ys.len() || xs.len() < 2 || is_constant(xs) || is_constant(ys) {
        return None;
    }

    let sx = xs.iter().std_dev();
    let sy = ys.iter().std_dev();
    if !(sx > 0.0 && sy > 0.0) {
        return None;
    }

    let r = xs.iter().covariance(ys.iter()) / (sx * sy);
    r.is_finite().then(|| r.clamp(-1.0, 1.0))
}

/// Rank the perturbed inputs by |r| with `losses`, descending.
///
/// Inputs with zero variance are dropped; if none qualify the ranking is
/// empty. Ties keep [`PerturbedVariable::ALL`] order.
pub fn rank(draws: &[TrialDraw], losses: &[f64]) -> Vec<Sensitivity> {
    let mut ranked: Vec<Sensitivity> = PerturbedVariable::ALL
        .iter()
        .filter_map(|variable| {
            let column: Vec<f64> = draws.iter().map(|d| d.get(*variable)).collect();
            pearson(&column, losses).map(|r| Sensitivity {
                variable: *variable,
                correlation: r.abs(),
            })
        })
        .collect();

    // Stable sort keeps declaration order among ties.
    ranked.sort_by(|a, b| b.correlation.total_cmp(&a.correlation));
    ranked
}

fn is_constant(xs: &[f64]) -> bool {
    xs.first().map_or(true, |first| xs.iter().all(|x| x == first))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draw(probability: f64, exposure: f64, control_factor: f64, loss_factor: f64) -> TrialDraw {
        TrialDraw {
            probability,
            exposure,
            control_factor,
            loss_factor,
        }
    }

    #[test]
    fn perfect_correlations() {
        let xs = [1.0, 2.0, 3.0, 4.0];
        let up = [2.0, 4.0, 6.0, 8.0];
        let down = [8.0, 6.0, 4.0, 2.0];
        assert!((pearson(&xs, &up).unwrap() - 1.0).abs() < 1e-12);
        assert!((pearson(&xs, &down).unwrap() + 1.0).abs() < 1e-12);
    }

    #[test]
    fn undefined_cases_are_none() {
        assert_eq!(pearson(&[1.0], &[1.0]), None);
        assert_eq!(pearson(&[1.0, 2.0], &[1.0]), None);
        assert_eq!(pearson(&[0.01, 0.01, 0.01], &[1.0, 2.0, 3.0]), None);
        assert_eq!(pearson(&[1.0, 2.0, 3.0], &[5.0, 5.0, 5.0]), None);
    }

    #[test]
    fn rank_drops_constant_inputs_and_sorts_descending() {
        let draws = vec![
            draw(0.1, 0.9, 0.5, 0.0),
            draw(0.2, 0.1, 0.5, 0.0),
            draw(0.3, 0.7, 0.5, 0.0),
            draw(0.4, 0.2, 0.5, 0.0),
        ];
        let losses = [10.0, 20.0, 30.0, 40.0];
        let ranked = rank(&draws, &losses);

        assert_eq!(ranked.len(), 2);
        assert_eq!(ranked[0].variable, PerturbedVariable::Probability);
        assert!((ranked[0].correlation - 1.0).abs() < 1e-12);
        assert_eq!(ranked[1].variable, PerturbedVariable::Exposure);
        assert!(ranked[0].correlation >= ranked[1].correlation);
        assert!(ranked.iter().all(|s| (0.0..=1.0).contains(&s.correlation)));
    }

    #[test]
    fn rank_is_empty_when_everything_is_constant() {
        let draws = vec![draw(0.5, 0.5, 0.5, 0.5); 10];
        let losses = vec![1.0; 10];
        assert!(rank(&draws, &losses).is_empty());
    }
}
