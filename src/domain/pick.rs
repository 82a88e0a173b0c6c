use serde::{Deserialize, Serialize};

/// Side of the prop bet (OVER or UNDER the line)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum PickDirection {
    Over,
    Under,
}

impl PickDirection {
    /// Get the opposite side
    pub fn opposite(&self) -> Self {
        match self {
            PickDirection::Over => PickDirection::Under,
            PickDirection::Under => PickDirection::Over,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PickDirection::Over => "OVER",
            PickDirection::Under => "UNDER",
        }
    }
}

impl std::fmt::Display for PickDirection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Volatility bucket derived from the coefficient of variation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Volatility {
    Low,
    Moderate,
    High,
}

impl Volatility {
    pub fn as_str(&self) -> &'static str {
        match self {
            Volatility::Low => "LOW",
            Volatility::Moderate => "MODERATE",
            Volatility::High => "HIGH",
        }
    }
}

impl std::fmt::Display for Volatility {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
