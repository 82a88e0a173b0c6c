//! Parametric Monte Carlo projection of a stat line
//!
//! Fits Normal(mean, sample stdev) to the input series, draws clamped
//! and display-rounded samples, and derives hit probability, edge,
//! percentile band, volatility bucket, confidence score and a display
//! histogram. Pure function of its input: no I/O, no shared state,
//! bit-identical output for a fixed seed.

use tracing::debug;

use super::sampler::NormalSampler;
use super::stats::{self, STDEV_EPSILON};
use super::{ProjectionInput, ProjectionResult};
use crate::config::EngineConfig;
use crate::domain::{PickDirection, Volatility};
use crate::error::{PropcastError, Result};

pub struct ProjectionEngine {
    config: EngineConfig,
}

impl ProjectionEngine {
    pub fn new(config: EngineConfig) -> Self {
        Self { config }
    }

    /// Engine with the built-in tuning constants
    pub fn with_defaults() -> Self {
        Self::new(EngineConfig::default())
    }

    /// Run one projection.
    ///
    /// Degenerate *data* (empty, single-game or flat series) never
    /// errors; it falls back to the minimum-spread substitution. The
    /// only error paths are caller bugs: a non-finite line or a zero
    /// simulation count.
    pub fn project(&self, input: &ProjectionInput) -> Result<ProjectionResult> {
        if !input.line.is_finite() {
            return Err(PropcastError::Validation(format!(
                "line must be finite, got {}",
                input.line
            )));
        }
        if input.simulations == 0 {
            return Err(PropcastError::Validation(
                "simulations must be a positive integer".to_string(),
            ));
        }

        let sim_cfg = &self.config.simulation;
        // Order the bounds before clamping: `clamp` panics on an
        // inverted range, and a config that skipped `validate` must
        // still clamp defensively rather than fail
        let lo = sim_cfg.min_simulations.min(sim_cfg.max_simulations);
        let hi = sim_cfg.min_simulations.max(sim_cfg.max_simulations);
        let simulations = input.simulations.clamp(lo.max(1), hi.max(1));

        // The preparer owns data hygiene, but a stray NaN must not
        // poison every downstream statistic
        let values: Vec<f64> = input
            .series
            .values()
            .iter()
            .map(|v| if v.is_finite() { *v } else { 0.0 })
            .collect();

        let mean = stats::mean(&values);
        let series_stdev = stats::sample_stdev(&values);
        let mut stdev = series_stdev;
        if stdev < STDEV_EPSILON {
            // Flat or short series: a zero-width distribution would make
            // every sample identical, and one recent game is not proof of
            // zero future variance. The substitute spread scales with the
            // mean so high- and low-volume stats are treated
            // proportionally.
            stdev = (mean.abs() * sim_cfg.min_spread_ratio).max(sim_cfg.min_spread_abs);
            debug!(
                games = values.len(),
                mean,
                spread = stdev,
                "flat series, substituting minimum simulation spread"
            );
        }

        let mut sampler = NormalSampler::new(input.seed);
        let mut samples = Vec::with_capacity(simulations);
        let mut hits = 0usize;
        for _ in 0..simulations {
            // Round to display precision so percentiles and the
            // histogram operate on the same discretization the user sees
            let sample =
                (sampler.sample(mean, stdev).max(input.floor_clamp) * 10.0).round() / 10.0;
            // Strict inequality: a sample exactly on the line is a push
            // and counts for neither side
            let hit = match input.direction {
                PickDirection::Over => sample > input.line,
                PickDirection::Under => sample < input.line,
            };
            if hit {
                hits += 1;
            }
            samples.push(sample);
        }

        let probability = hits as f64 / simulations as f64;
        let projection = stats::mean(&samples);
        let edge = match input.direction {
            PickDirection::Over => projection - input.line,
            PickDirection::Under => input.line - projection,
        };

        samples.sort_by(|a, b| a.total_cmp(b));
        let floor = stats::percentile(&samples, 0.10);
        let median = stats::percentile(&samples, 0.50);
        let ceiling = stats::percentile(&samples, 0.90);
        let histogram = stats::histogram(&samples, sim_cfg.histogram_bins);

        // Volatility reflects the observed series, not the substituted
        // simulation spread
        let volatility = self.classify_volatility(mean, series_stdev);
        let confidence = self.confidence_score(probability, values.len(), volatility);

        debug!(
            games = values.len(),
            line = input.line,
            direction = %input.direction,
            projection,
            probability = probability * 100.0,
            edge,
            %volatility,
            confidence,
            "projection complete"
        );

        Ok(ProjectionResult {
            projection,
            probability: probability * 100.0,
            edge,
            floor,
            median,
            ceiling,
            stdev: series_stdev,
            volatility,
            confidence,
            histogram,
        })
    }

    /// Bucket the coefficient of variation. The `max(1, |mean|)` floor
    /// keeps near-zero-mean series (rarely-recorded blocks) from
    /// blowing up the ratio.
    fn classify_volatility(&self, mean: f64, stdev: f64) -> Volatility {
        let cv = stdev / mean.abs().max(1.0);
        let cfg = &self.config.volatility;
        if cv < cfg.cv_low {
            Volatility::Low
        } else if cv < cfg.cv_moderate {
            Volatility::Moderate
        } else {
            Volatility::High
        }
    }

    /// Blend probability strength, sample size and a volatility penalty
    /// into a 1-99 score. An empty series carries no information at all
    /// and reports the floor outright.
    fn confidence_score(&self, probability: f64, games: usize, volatility: Volatility) -> u8 {
        let cfg = &self.config.confidence;
        if games == 0 {
            return 1;
        }

        let prob_strength = (probability - 0.5).abs() * 2.0;
        let sample_strength = (games as f64 / cfg.sample_saturation as f64).clamp(0.0, 1.0);
        let penalty = match volatility {
            Volatility::Low => cfg.penalty_low,
            Volatility::Moderate => cfg.penalty_moderate,
            Volatility::High => cfg.penalty_high,
        };

        let score =
            (100.0 * (cfg.prob_weight * prob_strength + cfg.sample_weight * sample_strength)
                * penalty)
                .round();
        score.clamp(1.0, 99.0) as u8
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::series::StatSeries;

    fn engine() -> ProjectionEngine {
        ProjectionEngine::with_defaults()
    }

    fn input(values: Vec<f64>, line: f64, direction: PickDirection) -> ProjectionInput {
        ProjectionInput::new(StatSeries::from_values(values), line, direction).with_seed(99)
    }

    #[test]
    fn test_non_finite_line_rejected() {
        let err = engine()
            .project(&input(vec![10.0, 12.0], f64::NAN, PickDirection::Over))
            .unwrap_err();
        assert!(matches!(err, PropcastError::Validation(_)));
    }

    #[test]
    fn test_zero_simulations_rejected() {
        let inp = input(vec![10.0, 12.0], 9.5, PickDirection::Over).with_simulations(0);
        assert!(engine().project(&inp).is_err());
    }

    #[test]
    fn test_simulation_count_clamped() {
        let inp = input(vec![10.0, 12.0], 9.5, PickDirection::Over).with_simulations(50);
        let result = engine().project(&inp).unwrap();
        // Clamped up to the configured minimum of 1000
        assert_eq!(
            result.histogram.iter().map(|b| b.count).sum::<usize>(),
            1000
        );
    }

    #[test]
    fn test_inverted_simulation_range_clamps_instead_of_panicking() {
        // A config that dodged validate() (hand-built, or bounds pushed
        // past each other via env overrides) must still clamp
        let mut cfg = EngineConfig::default();
        cfg.simulation.min_simulations = 30000; // above the default max of 20000
        let result = ProjectionEngine::new(cfg)
            .project(&input(vec![10.0, 12.0, 9.0], 9.5, PickDirection::Over))
            .unwrap();
        // Bounds reorder to [20000, 30000]; the default 5000 clamps up
        assert_eq!(
            result.histogram.iter().map(|b| b.count).sum::<usize>(),
            20000
        );
    }

    #[test]
    fn test_line_far_below_series_is_near_certain_over() {
        let result = engine()
            .project(&input(
                vec![30.0, 32.0, 28.0, 31.0],
                -1000.0,
                PickDirection::Over,
            ))
            .unwrap();
        assert!(result.probability > 99.0, "got {}", result.probability);
    }

    #[test]
    fn test_line_far_above_series_is_near_certain_under() {
        let result = engine()
            .project(&input(
                vec![30.0, 32.0, 28.0, 31.0],
                1000.0,
                PickDirection::Under,
            ))
            .unwrap();
        assert!(result.probability > 99.0, "got {}", result.probability);
    }

    #[test]
    fn test_percentile_band_is_monotone() {
        let result = engine()
            .project(&input(
                vec![5.0, 20.0, 2.0, 18.0, 4.0],
                10.0,
                PickDirection::Over,
            ))
            .unwrap();
        assert!(result.floor <= result.median);
        assert!(result.median <= result.ceiling);
    }

    #[test]
    fn test_seeded_runs_are_identical() {
        let inp = input(vec![12.0, 15.0, 9.0, 14.0], 11.5, PickDirection::Over);
        let a = engine().project(&inp).unwrap();
        let b = engine().project(&inp).unwrap();
        assert_eq!(a.projection, b.projection);
        assert_eq!(a.probability, b.probability);
        assert_eq!(a.floor, b.floor);
        assert_eq!(a.ceiling, b.ceiling);
        assert_eq!(a.confidence, b.confidence);
        assert_eq!(a.histogram, b.histogram);
    }

    #[test]
    fn test_volatility_buckets_follow_cv() {
        // cv ~= 0.10
        let low = engine()
            .project(&input(
                vec![30.0, 32.0, 28.0, 31.0, 29.0, 33.0, 27.0],
                28.5,
                PickDirection::Over,
            ))
            .unwrap();
        assert_eq!(low.volatility, Volatility::Low);

        // cv ~= 0.8
        let high = engine()
            .project(&input(
                vec![5.0, 20.0, 2.0, 18.0, 4.0, 22.0, 1.0, 19.0],
                10.0,
                PickDirection::Over,
            ))
            .unwrap();
        assert_eq!(high.volatility, Volatility::High);
    }

    #[test]
    fn test_flat_series_gets_spread_not_certainty() {
        // Four identical games: stdev 0, minimum spread kicks in, so the
        // simulated distribution still straddles a nearby line
        let result = engine()
            .project(&input(
                vec![20.0, 20.0, 20.0, 20.0],
                20.5,
                PickDirection::Over,
            ))
            .unwrap();
        assert!(result.probability > 5.0 && result.probability < 95.0);
        assert!(result.ceiling > result.floor);
    }

    #[test]
    fn test_empty_series_is_well_formed() {
        let result = engine()
            .project(&input(vec![], 10.0, PickDirection::Over))
            .unwrap();
        assert!(result.probability >= 0.0 && result.probability <= 100.0);
        assert_eq!(result.confidence, 1);
        assert!(result.floor <= result.median && result.median <= result.ceiling);
        assert!(!result.histogram.is_empty());
    }

    #[test]
    fn test_single_game_series_is_well_formed() {
        let result = engine()
            .project(&input(vec![22.0], 21.5, PickDirection::Over))
            .unwrap();
        assert_eq!(result.stdev, 0.0);
        assert!(result.confidence >= 1 && result.confidence <= 99);
        assert!(result.ceiling > result.floor);
    }

    #[test]
    fn test_floor_clamp_respected() {
        // Low-mean stat: spread substitution plus clamping at zero
        let result = engine()
            .project(&input(vec![0.0, 1.0, 0.0, 2.0, 0.0], 0.5, PickDirection::Over))
            .unwrap();
        assert!(result.floor >= 0.0);
        assert!(result.histogram[0].lo >= 0.0);
    }

    #[test]
    fn test_edge_sign_follows_direction() {
        let over = engine()
            .project(&input(vec![30.0, 31.0, 29.0, 30.0], 25.0, PickDirection::Over))
            .unwrap();
        assert!(over.edge > 0.0);

        let under = engine()
            .project(&input(vec![30.0, 31.0, 29.0, 30.0], 25.0, PickDirection::Under))
            .unwrap();
        assert!(under.edge < 0.0);
    }

    #[test]
    fn test_nan_values_coerced_to_zero() {
        let result = engine()
            .project(&input(
                vec![10.0, f64::NAN, 12.0, f64::INFINITY],
                8.0,
                PickDirection::Over,
            ))
            .unwrap();
        assert!(result.projection.is_finite());
        assert!(result.probability.is_finite());
    }
}
