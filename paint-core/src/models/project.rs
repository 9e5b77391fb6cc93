use serde::{Deserialize, Serialize};

use crate::models::{PaintSelection, PricingConfig, Surface};

/// Residential vs commercial job; selects the product price tier.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProjectType {
    #[default]
    Residential,
    Commercial,
}

/// The persisted project snapshot: everything the engine needs, and nothing
/// the engine produces. Estimates are always derived, never stored here.
///
/// Every field defaults on deserialization so snapshots written before a
/// field existed still load.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectState {
    #[serde(default)]
    pub project_type: ProjectType,
    #[serde(default)]
    pub surfaces: Vec<Surface>,
    #[serde(default)]
    pub selections: Vec<PaintSelection>,
    #[serde(default)]
    pub pricing: PricingConfig,
}

impl ProjectState {
    /// Appends a surface to the project.
    pub fn add_surface(&mut self, surface: Surface) {
        self.surfaces.push(surface);
    }

    /// Removes the surface with the given id, if present. Returns whether
    /// anything was removed. Selections referencing the id are left alone;
    /// the engine already skips surface ids that no longer resolve.
    pub fn remove_surface(&mut self, surface_id: &str) -> bool {
        let before = self.surfaces.len();
        self.surfaces.retain(|s| s.id != surface_id);
        self.surfaces.len() != before
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;
    use crate::models::ServiceType;

    #[test]
    fn empty_object_deserializes_to_defaults() {
        let state: ProjectState = serde_json::from_str("{}").unwrap();

        assert_eq!(state.project_type, ProjectType::Residential);
        assert!(state.surfaces.is_empty());
        assert!(state.selections.is_empty());
        assert_eq!(state.pricing, PricingConfig::default());
    }

    #[test]
    fn forward_compatible_merge_keeps_known_fields() {
        let json = r#"{
            "project_type": "commercial",
            "pricing": {"tax_rate": "0.06"}
        }"#;

        let state: ProjectState = serde_json::from_str(json).unwrap();

        assert_eq!(state.project_type, ProjectType::Commercial);
        assert_eq!(state.pricing.tax_rate, dec!(0.06));
        // Everything absent from the snapshot came from defaults.
        assert_eq!(state.pricing.crew_size, 2);
    }

    #[test]
    fn add_surface_appends() {
        let mut state = ProjectState::default();

        state.add_surface(Surface::new("s1", ServiceType::Painting, "North wall"));

        assert_eq!(state.surfaces.len(), 1);
        assert_eq!(state.surfaces[0].id, "s1");
    }

    #[test]
    fn remove_surface_drops_the_matching_id() {
        let mut state = ProjectState::default();
        state.add_surface(Surface::new("s1", ServiceType::Painting, "North wall"));
        state.add_surface(Surface::new("s2", ServiceType::WoodCoating, "Deck"));

        let removed = state.remove_surface("s1");

        assert!(removed);
        assert_eq!(state.surfaces.len(), 1);
        assert_eq!(state.surfaces[0].id, "s2");
    }

    #[test]
    fn remove_unknown_surface_is_a_no_op() {
        let mut state = ProjectState::default();
        state.add_surface(Surface::new("s1", ServiceType::Painting, "North wall"));

        let removed = state.remove_surface("nope");

        assert!(!removed);
        assert_eq!(state.surfaces.len(), 1);
    }

    #[test]
    fn round_trips_through_json() {
        let state = ProjectState::default();

        let json = serde_json::to_string(&state).unwrap();
        let back: ProjectState = serde_json::from_str(&json).unwrap();

        assert_eq!(back, state);
    }
}
