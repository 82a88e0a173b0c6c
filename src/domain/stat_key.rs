use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::PropcastError;

/// Requested statistic: the eight base box-score counts plus the
/// standard composite props. Composites are derived, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StatKey {
    #[serde(rename = "PTS")]
    Pts,
    #[serde(rename = "REB")]
    Reb,
    #[serde(rename = "AST")]
    Ast,
    #[serde(rename = "STL")]
    Stl,
    #[serde(rename = "BLK")]
    Blk,
    #[serde(rename = "3PM")]
    Tpm,
    #[serde(rename = "3PA")]
    Tpa,
    #[serde(rename = "TO")]
    Tov,
    #[serde(rename = "PRA")]
    Pra,
    #[serde(rename = "PR")]
    Pr,
    #[serde(rename = "PA")]
    Pa,
    #[serde(rename = "RA")]
    Ra,
}

impl StatKey {
    /// Base keys summed to produce this stat. A base key is its own
    /// single component.
    pub fn components(&self) -> &'static [StatKey] {
        match self {
            StatKey::Pts => &[StatKey::Pts],
            StatKey::Reb => &[StatKey::Reb],
            StatKey::Ast => &[StatKey::Ast],
            StatKey::Stl => &[StatKey::Stl],
            StatKey::Blk => &[StatKey::Blk],
            StatKey::Tpm => &[StatKey::Tpm],
            StatKey::Tpa => &[StatKey::Tpa],
            StatKey::Tov => &[StatKey::Tov],
            StatKey::Pra => &[StatKey::Pts, StatKey::Reb, StatKey::Ast],
            StatKey::Pr => &[StatKey::Pts, StatKey::Reb],
            StatKey::Pa => &[StatKey::Pts, StatKey::Ast],
            StatKey::Ra => &[StatKey::Reb, StatKey::Ast],
        }
    }

    pub fn is_composite(&self) -> bool {
        self.components().len() > 1
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            StatKey::Pts => "PTS",
            StatKey::Reb => "REB",
            StatKey::Ast => "AST",
            StatKey::Stl => "STL",
            StatKey::Blk => "BLK",
            StatKey::Tpm => "3PM",
            StatKey::Tpa => "3PA",
            StatKey::Tov => "TO",
            StatKey::Pra => "PRA",
            StatKey::Pr => "PR",
            StatKey::Pa => "PA",
            StatKey::Ra => "RA",
        }
    }
}

impl std::fmt::Display for StatKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StatKey {
    type Err = PropcastError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "PTS" | "POINTS" => Ok(StatKey::Pts),
            "REB" | "REBOUNDS" => Ok(StatKey::Reb),
            "AST" | "ASSISTS" => Ok(StatKey::Ast),
            "STL" | "STEALS" => Ok(StatKey::Stl),
            "BLK" | "BLOCKS" => Ok(StatKey::Blk),
            "3PM" | "FG3M" => Ok(StatKey::Tpm),
            "3PA" | "FG3A" => Ok(StatKey::Tpa),
            "TO" | "TOV" | "TURNOVERS" => Ok(StatKey::Tov),
            "PRA" => Ok(StatKey::Pra),
            "PR" => Ok(StatKey::Pr),
            "PA" => Ok(StatKey::Pa),
            "RA" => Ok(StatKey::Ra),
            other => Err(PropcastError::UnknownStatKey(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_composite_components() {
        assert_eq!(
            StatKey::Pra.components(),
            &[StatKey::Pts, StatKey::Reb, StatKey::Ast]
        );
        assert_eq!(StatKey::Ra.components(), &[StatKey::Reb, StatKey::Ast]);
        assert!(StatKey::Pra.is_composite());
        assert!(!StatKey::Blk.is_composite());
    }

    #[test]
    fn test_parse_tickers() {
        assert_eq!("pts".parse::<StatKey>().unwrap(), StatKey::Pts);
        assert_eq!("3PM".parse::<StatKey>().unwrap(), StatKey::Tpm);
        assert_eq!(" pra ".parse::<StatKey>().unwrap(), StatKey::Pra);
        assert!("XYZ".parse::<StatKey>().is_err());
    }

    #[test]
    fn test_display_round_trip() {
        for key in [StatKey::Pts, StatKey::Tpm, StatKey::Tov, StatKey::Pra] {
            assert_eq!(key.as_str().parse::<StatKey>().unwrap(), key);
        }
    }
}
