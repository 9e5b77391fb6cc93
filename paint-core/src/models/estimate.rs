use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculations::common::round_half_up;

/// A non-fatal signal that an estimate was computed from incomplete or
/// degenerate inputs. The worst outcome of bad input is a zero-dollar
/// estimate plus warnings, never an error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", tag = "kind")]
pub enum EstimateWarning {
    /// A selection has no product bound; default per-square-foot pricing
    /// was used instead.
    MissingProduct { selection_id: String },

    /// A selection references a product id the catalog does not contain.
    UnknownProduct {
        selection_id: String,
        product_id: String,
    },

    /// The bound product has non-positive coverage, so the gallon count
    /// was skipped.
    ZeroCoverage { product_id: String },

    /// The production rate for a service type is non-positive, so
    /// production hours were treated as zero.
    ZeroProductionRate { description: String },
}

/// One per-service-group line of the estimate breakdown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItem {
    pub description: String,
    pub area: Decimal,
    pub material_cost: Decimal,
    pub labor_cost: Decimal,
    pub labor_hours: Decimal,
    pub subtotal: Decimal,
    /// Whole gallons of the bound product, when one is bound and its
    /// coverage is usable.
    pub gallons: Option<u32>,
}

/// The priced breakdown of a project. Always derived from current surfaces,
/// selections and pricing; never authoritative state.
///
/// Monetary fields are stored unrounded so the cumulative
/// overhead/profit/tax chain does not compound rounding error;
/// [`Estimate::rounded`] produces the two-decimal copy for display.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Estimate {
    pub materials_cost: Decimal,
    pub labor_cost: Decimal,
    pub labor_hours: Decimal,
    pub subtotal: Decimal,
    pub overhead: Decimal,
    pub profit: Decimal,
    pub tax: Decimal,
    pub total: Decimal,
    #[serde(default)]
    pub breakdown: Vec<LineItem>,
    #[serde(default)]
    pub warnings: Vec<EstimateWarning>,
}

impl Estimate {
    /// A copy with every monetary field rounded half-up to two decimals,
    /// for formatting. The unrounded original remains the source of truth.
    pub fn rounded(&self) -> Self {
        Self {
            materials_cost: round_half_up(self.materials_cost),
            labor_cost: round_half_up(self.labor_cost),
            labor_hours: self.labor_hours,
            subtotal: round_half_up(self.subtotal),
            overhead: round_half_up(self.overhead),
            profit: round_half_up(self.profit),
            tax: round_half_up(self.tax),
            total: round_half_up(self.total),
            breakdown: self
                .breakdown
                .iter()
                .map(|item| LineItem {
                    description: item.description.clone(),
                    area: item.area,
                    material_cost: round_half_up(item.material_cost),
                    labor_cost: round_half_up(item.labor_cost),
                    labor_hours: item.labor_hours,
                    subtotal: round_half_up(item.subtotal),
                    gallons: item.gallons,
                })
                .collect(),
            warnings: self.warnings.clone(),
        }
    }
}
