pub mod engine;
pub mod sampler;
pub mod stats;

pub use engine::*;
pub use sampler::*;

use serde::{Deserialize, Serialize};

use crate::domain::{PickDirection, Volatility};
use crate::series::StatSeries;

/// Default Monte Carlo draws when the caller does not override
pub const DEFAULT_SIMULATIONS: usize = 5000;

/// Everything the engine needs for one projection
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectionInput {
    pub series: StatSeries,
    /// The sportsbook threshold; must be finite
    pub line: f64,
    pub direction: PickDirection,
    /// Monte Carlo draws; clamped into the configured range
    pub simulations: usize,
    /// Minimum permissible simulated value (stat counts cannot go
    /// negative)
    pub floor_clamp: f64,
    /// Fixed seed for reproducible runs; None draws from entropy
    pub seed: Option<u64>,
}

impl ProjectionInput {
    pub fn new(series: StatSeries, line: f64, direction: PickDirection) -> Self {
        Self {
            series,
            line,
            direction,
            simulations: DEFAULT_SIMULATIONS,
            floor_clamp: 0.0,
            seed: None,
        }
    }

    pub fn with_simulations(mut self, simulations: usize) -> Self {
        self.simulations = simulations;
        self
    }

    pub fn with_floor_clamp(mut self, floor_clamp: f64) -> Self {
        self.floor_clamp = floor_clamp;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

/// One bin of the simulated distribution, for charting
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HistogramBin {
    pub lo: f64,
    pub hi: f64,
    pub count: usize,
}

/// Immutable output of one projection run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectionResult {
    /// Point estimate (mean of the simulated samples)
    pub projection: f64,
    /// Chance the requested side hits, 0-100
    pub probability: f64,
    /// Signed distance between projection and line, positive when the
    /// model favors the requested side
    pub edge: f64,
    /// 10th percentile of the simulated distribution
    pub floor: f64,
    /// 50th percentile
    pub median: f64,
    /// 90th percentile
    pub ceiling: f64,
    /// Sample standard deviation of the input series
    pub stdev: f64,
    pub volatility: Volatility,
    /// Heuristic score, clamped to [1, 99]
    pub confidence: u8,
    pub histogram: Vec<HistogramBin>,
}
