//! Series preparation: raw game logs → clean numeric series
//!
//! Turns a list of per-game records into an ordered series for one
//! requested stat, newest game first, with non-games filtered out.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::domain::{GameStatRecord, StatKey};

/// Ordered per-game values for one statistic, most recent game first.
///
/// Every value is finite and >= 0. Empty is valid but degenerate —
/// downstream code treats it as "insufficient data", not an error.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StatSeries {
    values: Vec<f64>,
}

impl StatSeries {
    /// Build a series from raw game logs for the requested stat.
    ///
    /// Drops unplayable records (`minutes <= 0`), stable-sorts the rest
    /// by date descending (same-day ties keep input order), and maps
    /// each survivor to its stat value. Never truncates and never
    /// errors; an empty input yields an empty series.
    pub fn prepare(records: &[GameStatRecord], key: StatKey) -> Self {
        let mut playable: Vec<&GameStatRecord> =
            records.iter().filter(|r| r.is_playable()).collect();
        playable.sort_by(|a, b| b.date.cmp(&a.date));

        let values: Vec<f64> = playable.iter().map(|r| r.value(key)).collect();

        debug!(
            stat = %key,
            total = records.len(),
            playable = values.len(),
            "prepared series"
        );

        Self { values }
    }

    /// Series straight from pre-cleaned values (tests, callers with
    /// their own pipeline)
    pub fn from_values(values: Vec<f64>) -> Self {
        Self { values }
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Sub-series of the `n` most recent games (last-5, last-10 trend
    /// windows). Truncation lives here with the caller, never in
    /// `prepare`.
    pub fn lookback(&self, n: usize) -> StatSeries {
        StatSeries {
            values: self.values.iter().take(n).copied().collect(),
        }
    }
}
