use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;

/// Tuning knobs for the projection engine.
///
/// The blend weights, volatility penalties and CV thresholds are
/// empirically chosen constants, not correctness invariants, so they are
/// kept configurable rather than hard-coded.
#[derive(Debug, Clone, Deserialize)]
pub struct EngineConfig {
    pub simulation: SimulationConfig,
    pub volatility: VolatilityConfig,
    pub confidence: ConfidenceConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SimulationConfig {
    /// Default number of Monte Carlo draws
    #[serde(default = "default_simulations")]
    pub default_simulations: usize,
    /// Lower clamp for caller-supplied simulation counts
    #[serde(default = "default_min_simulations")]
    pub min_simulations: usize,
    /// Upper clamp for caller-supplied simulation counts
    #[serde(default = "default_max_simulations")]
    pub max_simulations: usize,
    /// Substitute spread for flat series, as a fraction of the mean
    #[serde(default = "default_min_spread_ratio")]
    pub min_spread_ratio: f64,
    /// Absolute floor for the substitute spread (keeps an all-zero or
    /// empty series non-degenerate)
    #[serde(default = "default_min_spread_abs")]
    pub min_spread_abs: f64,
    /// Number of equal-width histogram bins
    #[serde(default = "default_histogram_bins")]
    pub histogram_bins: usize,
}

#[derive(Debug, Clone, Deserialize)]
pub struct VolatilityConfig {
    /// CV below this is LOW volatility
    #[serde(default = "default_cv_low")]
    pub cv_low: f64,
    /// CV below this (and >= cv_low) is MODERATE; at or above is HIGH
    #[serde(default = "default_cv_moderate")]
    pub cv_moderate: f64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ConfidenceConfig {
    /// Weight of probability strength in the confidence blend
    #[serde(default = "default_prob_weight")]
    pub prob_weight: f64,
    /// Weight of sample-size strength in the confidence blend
    #[serde(default = "default_sample_weight")]
    pub sample_weight: f64,
    /// Games at which sample-size strength saturates
    #[serde(default = "default_sample_saturation")]
    pub sample_saturation: usize,
    /// Multiplicative penalty for LOW volatility
    #[serde(default = "default_penalty_low")]
    pub penalty_low: f64,
    /// Multiplicative penalty for MODERATE volatility
    #[serde(default = "default_penalty_moderate")]
    pub penalty_moderate: f64,
    /// Multiplicative penalty for HIGH volatility
    #[serde(default = "default_penalty_high")]
    pub penalty_high: f64,
}

fn default_simulations() -> usize {
    5000
}

fn default_min_simulations() -> usize {
    1000
}

fn default_max_simulations() -> usize {
    20000
}

fn default_min_spread_ratio() -> f64 {
    0.25
}

fn default_min_spread_abs() -> f64 {
    0.5
}

fn default_histogram_bins() -> usize {
    12
}

fn default_cv_low() -> f64 {
    0.30
}

fn default_cv_moderate() -> f64 {
    0.55
}

fn default_prob_weight() -> f64 {
    0.65
}

fn default_sample_weight() -> f64 {
    0.35
}

fn default_sample_saturation() -> usize {
    20
}

fn default_penalty_low() -> f64 {
    1.0
}

fn default_penalty_moderate() -> f64 {
    0.75
}

fn default_penalty_high() -> f64 {
    0.55
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            default_simulations: default_simulations(),
            min_simulations: default_min_simulations(),
            max_simulations: default_max_simulations(),
            min_spread_ratio: default_min_spread_ratio(),
            min_spread_abs: default_min_spread_abs(),
            histogram_bins: default_histogram_bins(),
        }
    }
}

impl Default for VolatilityConfig {
    fn default() -> Self {
        Self {
            cv_low: default_cv_low(),
            cv_moderate: default_cv_moderate(),
        }
    }
}

impl Default for ConfidenceConfig {
    fn default() -> Self {
        Self {
            prob_weight: default_prob_weight(),
            sample_weight: default_sample_weight(),
            sample_saturation: default_sample_saturation(),
            penalty_low: default_penalty_low(),
            penalty_moderate: default_penalty_moderate(),
            penalty_high: default_penalty_high(),
        }
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            simulation: SimulationConfig::default(),
            volatility: VolatilityConfig::default(),
            confidence: ConfidenceConfig::default(),
        }
    }
}

impl EngineConfig {
    /// Load configuration from `propcast.toml` and environment
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from("propcast.toml")
    }

    /// Load configuration from a specific file path
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let builder = Config::builder()
            // Start with default values
            .set_default("simulation.default_simulations", 5000)?
            .set_default("simulation.min_simulations", 1000)?
            .set_default("simulation.max_simulations", 20000)?
            .set_default("simulation.min_spread_ratio", 0.25)?
            .set_default("simulation.min_spread_abs", 0.5)?
            .set_default("simulation.histogram_bins", 12)?
            .set_default("volatility.cv_low", 0.30)?
            .set_default("volatility.cv_moderate", 0.55)?
            .set_default("confidence.prob_weight", 0.65)?
            .set_default("confidence.sample_weight", 0.35)?
            .set_default("confidence.sample_saturation", 20)?
            .set_default("confidence.penalty_low", 1.0)?
            .set_default("confidence.penalty_moderate", 0.75)?
            .set_default("confidence.penalty_high", 0.55)?
            // Optional config file
            .add_source(File::from(path.as_ref().to_path_buf()).required(false))
            // Override with environment variables (PROPCAST_SIMULATION__MIN_SIMULATIONS, etc.)
            .add_source(
                Environment::with_prefix("PROPCAST")
                    .separator("__")
                    .try_parsing(true),
            );

        let cfg: Self = builder.build()?.try_deserialize()?;
        cfg.validate()
            .map_err(|errors| ConfigError::Message(errors.join("; ")))?;
        Ok(cfg)
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<(), Vec<String>> {
        let mut errors = Vec::new();

        if self.simulation.min_simulations == 0 {
            errors.push("simulation.min_simulations must be positive".to_string());
        }

        if self.simulation.min_simulations > self.simulation.max_simulations {
            errors.push(format!(
                "simulation range is inverted: min_simulations {} > max_simulations {}",
                self.simulation.min_simulations, self.simulation.max_simulations
            ));
        }

        if self.simulation.min_spread_ratio <= 0.0 || self.simulation.min_spread_abs <= 0.0 {
            errors.push(
                "simulation.min_spread_ratio and min_spread_abs must be positive".to_string(),
            );
        }

        if self.simulation.histogram_bins == 0 {
            errors.push("simulation.histogram_bins must be positive".to_string());
        }

        if self.volatility.cv_low > self.volatility.cv_moderate {
            errors.push(format!(
                "volatility thresholds are inverted: cv_low {} > cv_moderate {}",
                self.volatility.cv_low, self.volatility.cv_moderate
            ));
        }

        if self.confidence.prob_weight < 0.0 || self.confidence.sample_weight < 0.0 {
            errors.push("confidence blend weights must be non-negative".to_string());
        }

        if self.confidence.sample_saturation == 0 {
            errors.push("confidence.sample_saturation must be positive".to_string());
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_spec_constants() {
        let cfg = EngineConfig::default();
        assert_eq!(cfg.simulation.default_simulations, 5000);
        assert_eq!(cfg.simulation.min_simulations, 1000);
        assert_eq!(cfg.simulation.max_simulations, 20000);
        assert_eq!(cfg.volatility.cv_low, 0.30);
        assert_eq!(cfg.volatility.cv_moderate, 0.55);
        assert_eq!(cfg.confidence.prob_weight, 0.65);
        assert_eq!(cfg.confidence.sample_weight, 0.35);
        assert_eq!(cfg.confidence.penalty_moderate, 0.75);
    }

    #[test]
    fn test_validate_accepts_defaults() {
        assert!(EngineConfig::default().validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_inverted_simulation_range() {
        let mut cfg = EngineConfig::default();
        cfg.simulation.min_simulations = 30000;
        let errors = cfg.validate().unwrap_err();
        assert!(
            errors.iter().any(|e| e.contains("inverted")),
            "expected inverted-range error, got {:?}",
            errors
        );
    }

    #[test]
    fn test_validate_rejects_inverted_cv_thresholds() {
        let mut cfg = EngineConfig::default();
        cfg.volatility.cv_low = 0.9;
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn test_load_without_file_uses_defaults() {
        let cfg = EngineConfig::load_from("/nonexistent/propcast.toml")
            .expect("missing file should fall back to defaults");
        assert_eq!(cfg.simulation.default_simulations, 5000);
        assert_eq!(cfg.confidence.sample_saturation, 20);
    }
}
