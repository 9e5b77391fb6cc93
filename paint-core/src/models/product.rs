use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::Finish;

/// Interior vs exterior applicability, used by catalog filters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Application {
    Interior,
    Exterior,
}

/// A per-square-foot price with the negotiable range around it.
///
/// Wire and CSV records carry a single number per tier; those map to a
/// degenerate band where min, max and default coincide.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceBand {
    pub min: Decimal,
    pub max: Decimal,
    pub default: Decimal,
}

impl PriceBand {
    pub fn flat(price: Decimal) -> Self {
        Self {
            min: price,
            max: price,
            default: price,
        }
    }
}

/// A purchasable coating product from the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: String,
    pub brand: String,
    pub name: String,
    pub finish: Finish,
    /// Square feet covered by one gallon. Validated positive at the catalog
    /// boundary, but the engine still guards against zero.
    pub coverage: Decimal,
    pub interior: bool,
    pub exterior: bool,
    pub residential: PriceBand,
    pub commercial: PriceBand,
    #[serde(default)]
    pub primer: bool,
    #[serde(default)]
    pub primer_note: Option<String>,
}

impl Product {
    pub fn supports(&self, application: Application) -> bool {
        match application {
            Application::Interior => self.interior,
            Application::Exterior => self.exterior,
        }
    }
}
