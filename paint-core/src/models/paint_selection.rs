use serde::{Deserialize, Serialize};

use crate::models::Finish;

fn default_true() -> bool {
    true
}

/// Binds a group of surfaces to a product choice and color policy.
///
/// A selection without a product id is still estimable: the engine falls
/// back to the configured default per-square-foot paint cost and flags the
/// estimate as incomplete.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaintSelection {
    pub id: String,

    /// Display label for the group ("Bedrooms", "Exterior trim").
    #[serde(default)]
    pub name: String,

    /// Ids of the surfaces this selection covers.
    #[serde(default)]
    pub surface_ids: Vec<String>,

    /// Chosen catalog product, if any.
    #[serde(default)]
    pub product_id: Option<String>,

    #[serde(default)]
    pub finish: Option<Finish>,

    /// Number of coats; the engine defaults to 2 when unset.
    #[serde(default)]
    pub coats: Option<u32>,

    /// Whether a primer coat is required on top of the finish coats.
    #[serde(default)]
    pub needs_primer: bool,

    /// When true (the default) one color applies to every measurement in
    /// the group; when false each measurement carries its own `color`.
    #[serde(default = "default_true")]
    pub same_color: bool,

    /// Group color, meaningful when `same_color` is true.
    #[serde(default)]
    pub color: Option<String>,
}

impl PaintSelection {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            surface_ids: Vec::new(),
            product_id: None,
            finish: None,
            coats: None,
            needs_primer: false,
            same_color: true,
            color: None,
        }
    }

    pub fn covers(&self, surface_id: &str) -> bool {
        self.surface_ids.iter().any(|id| id == surface_id)
    }
}
