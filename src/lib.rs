pub mod config;
pub mod display;
pub mod domain;
pub mod error;
pub mod logging;
pub mod projection;
pub mod series;

pub use config::{ConfidenceConfig, EngineConfig, SimulationConfig, VolatilityConfig};
pub use display::render_histogram;
pub use domain::{GameStatRecord, PickDirection, StatKey, Volatility};
pub use error::{PropcastError, Result};
pub use projection::{
    HistogramBin, NormalSampler, ProjectionEngine, ProjectionInput, ProjectionResult,
    DEFAULT_SIMULATIONS,
};
pub use series::StatSeries;
