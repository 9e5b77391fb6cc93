use std::fmt;

use serde::{Deserialize, Serialize};

/// Sheen level of a coating product, lowest to highest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Finish {
    #[serde(rename = "Flat/Matte")]
    FlatMatte,
    #[serde(rename = "Low Sheen")]
    LowSheen,
    #[serde(rename = "Satin")]
    Satin,
    #[serde(rename = "Semi-Gloss")]
    SemiGloss,
    #[serde(rename = "Gloss")]
    Gloss,
    #[serde(rename = "High Gloss")]
    HighGloss,
}

impl Finish {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::FlatMatte => "Flat/Matte",
            Self::LowSheen => "Low Sheen",
            Self::Satin => "Satin",
            Self::SemiGloss => "Semi-Gloss",
            Self::Gloss => "Gloss",
            Self::HighGloss => "High Gloss",
        }
    }

    /// Parses the display name, ignoring case. Returns `None` for anything
    /// outside the fixed enumeration.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "flat/matte" | "flat" | "matte" => Some(Self::FlatMatte),
            "low sheen" => Some(Self::LowSheen),
            "satin" => Some(Self::Satin),
            "semi-gloss" | "semigloss" => Some(Self::SemiGloss),
            "gloss" => Some(Self::Gloss),
            "high gloss" => Some(Self::HighGloss),
            _ => None,
        }
    }
}

impl fmt::Display for Finish {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
