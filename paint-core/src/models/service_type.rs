use std::fmt;

use serde::{Deserialize, Serialize};

/// The kind of work a surface requires.
///
/// Coating services consume materials (paint, sealer, stain); abrasive
/// cleaning is labor-only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ServiceType {
    Painting,
    ConcreteCoating,
    WoodCoating,
    Abrasive,
}

impl ServiceType {
    /// True for services that apply a coating and therefore carry a
    /// material cost.
    pub fn is_coating(&self) -> bool {
        !matches!(self, Self::Abrasive)
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Painting => "Painting",
            Self::ConcreteCoating => "Concrete coating",
            Self::WoodCoating => "Wood coating",
            Self::Abrasive => "Abrasive cleaning",
        }
    }
}

impl fmt::Display for ServiceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn serializes_as_kebab_case() {
        let json = serde_json::to_string(&ServiceType::ConcreteCoating).unwrap();

        assert_eq!(json, "\"concrete-coating\"");
    }

    #[test]
    fn abrasive_is_not_a_coating() {
        assert!(!ServiceType::Abrasive.is_coating());
        assert!(ServiceType::Painting.is_coating());
        assert!(ServiceType::WoodCoating.is_coating());
    }
}
