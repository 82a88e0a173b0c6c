use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::stat_key::StatKey;

/// One completed game's box-score line for a player.
///
/// Constructed fresh from each upstream query and never mutated. Stat
/// fields default to 0 on deserialization so one malformed upstream
/// record cannot abort a whole series.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameStatRecord {
    /// Game date, used only for ordering
    pub date: NaiveDate,
    /// Minutes played; `<= 0` marks a non-game (DNP, inactive)
    #[serde(default)]
    pub minutes: f64,
    #[serde(default)]
    pub points: f64,
    #[serde(default)]
    pub rebounds: f64,
    #[serde(default)]
    pub assists: f64,
    #[serde(default)]
    pub steals: f64,
    #[serde(default)]
    pub blocks: f64,
    #[serde(default)]
    pub threes_made: f64,
    #[serde(default)]
    pub threes_attempted: f64,
    #[serde(default)]
    pub turnovers: f64,
}

impl GameStatRecord {
    /// Whether this record counts as a playable game. Zero-minute
    /// appearances have no predictive value and would drag the mean
    /// down and push the variance up.
    pub fn is_playable(&self) -> bool {
        self.minutes > 0.0
    }

    /// Value of a single base stat. Non-finite upstream values resolve
    /// to 0 rather than poisoning downstream statistics.
    fn base_value(&self, key: StatKey) -> f64 {
        let raw = match key {
            StatKey::Pts => self.points,
            StatKey::Reb => self.rebounds,
            StatKey::Ast => self.assists,
            StatKey::Stl => self.steals,
            StatKey::Blk => self.blocks,
            StatKey::Tpm => self.threes_made,
            StatKey::Tpa => self.threes_attempted,
            StatKey::Tov => self.turnovers,
            // Composites are resolved in `value` via components()
            _ => 0.0,
        };
        if raw.is_finite() {
            raw.max(0.0)
        } else {
            0.0
        }
    }

    /// Value of the requested stat for this game; composites sum their
    /// base components.
    pub fn value(&self, key: StatKey) -> f64 {
        key.components().iter().map(|k| self.base_value(*k)).sum()
    }
}
