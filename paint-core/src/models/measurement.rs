use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// How a measurement's area was entered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EntryKind {
    /// Area derived from one or more length × height pairs.
    Dimensions,
    /// Area typed in directly.
    Direct,
}

/// One length × height pair within a dimension-based measurement.
///
/// Components are optional so a half-filled form row still deserializes;
/// a missing component contributes zero area.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dimension {
    #[serde(default)]
    pub length: Option<Decimal>,
    #[serde(default)]
    pub height: Option<Decimal>,
}

impl Dimension {
    pub fn new(length: Decimal, height: Decimal) -> Self {
        Self {
            length: Some(length),
            height: Some(height),
        }
    }
}

/// One entry contributing to (or deducted from) a surface's total area.
///
/// Interactive editing means any field may be incomplete at any time, so
/// everything defaults on deserialization and area math degrades to zero
/// rather than failing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Measurement {
    pub id: String,

    pub entry_type: EntryKind,

    /// Only meaningful when `entry_type` is `Dimensions`.
    #[serde(default)]
    pub dimensions: Vec<Dimension>,

    /// Only meaningful when `entry_type` is `Direct`.
    #[serde(default)]
    pub total_value: Option<Decimal>,

    /// When true this entry subtracts from the surface total
    /// (a window cut-out within a wall, for example).
    #[serde(default)]
    pub is_deduction: bool,

    /// Per-measurement color, honored only when the owning selection's
    /// `same_color` flag is off.
    #[serde(default)]
    pub color: Option<String>,
}

impl Measurement {
    /// A dimension-based measurement with a single length × height pair.
    pub fn from_dimensions(id: impl Into<String>, pairs: Vec<Dimension>) -> Self {
        Self {
            id: id.into(),
            entry_type: EntryKind::Dimensions,
            dimensions: pairs,
            total_value: None,
            is_deduction: false,
            color: None,
        }
    }

    /// A direct-entry measurement.
    pub fn from_area(id: impl Into<String>, area: Decimal) -> Self {
        Self {
            id: id.into(),
            entry_type: EntryKind::Direct,
            dimensions: Vec::new(),
            total_value: Some(area),
            is_deduction: false,
            color: None,
        }
    }

    pub fn as_deduction(mut self) -> Self {
        self.is_deduction = true;
        self
    }
}
