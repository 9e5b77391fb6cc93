//! Built-in product list: the last-resort catalog tier, embedded so that
//! estimation always has something to price against.

use rust_decimal_macros::dec;

use paint_core::models::{Finish, PriceBand, Product};

/// The embedded default catalog. Non-empty and valid by construction; if
/// every other tier fails, this is what estimates are priced from.
pub fn builtin_products() -> Vec<Product> {
    vec![
        Product {
            id: "default-int-flat".into(),
            brand: "ProCoat".into(),
            name: "Interior Wall Flat".into(),
            finish: Finish::FlatMatte,
            coverage: dec!(400),
            interior: true,
            exterior: false,
            residential: PriceBand {
                min: dec!(0.55),
                max: dec!(0.95),
                default: dec!(0.70),
            },
            commercial: PriceBand {
                min: dec!(0.45),
                max: dec!(0.80),
                default: dec!(0.60),
            },
            primer: false,
            primer_note: None,
        },
        Product {
            id: "default-int-satin".into(),
            brand: "ProCoat".into(),
            name: "Interior Wall Satin".into(),
            finish: Finish::Satin,
            coverage: dec!(375),
            interior: true,
            exterior: false,
            residential: PriceBand {
                min: dec!(0.65),
                max: dec!(1.05),
                default: dec!(0.80),
            },
            commercial: PriceBand {
                min: dec!(0.55),
                max: dec!(0.90),
                default: dec!(0.70),
            },
            primer: false,
            primer_note: None,
        },
        Product {
            id: "default-int-semigloss".into(),
            brand: "ProCoat".into(),
            name: "Trim & Door Semi-Gloss".into(),
            finish: Finish::SemiGloss,
            coverage: dec!(350),
            interior: true,
            exterior: true,
            residential: PriceBand {
                min: dec!(0.75),
                max: dec!(1.20),
                default: dec!(0.95),
            },
            commercial: PriceBand {
                min: dec!(0.65),
                max: dec!(1.05),
                default: dec!(0.85),
            },
            primer: false,
            primer_note: None,
        },
        Product {
            id: "default-ext-lowsheen".into(),
            brand: "WeatherShield".into(),
            name: "Exterior Acrylic Low Sheen".into(),
            finish: Finish::LowSheen,
            coverage: dec!(325),
            interior: false,
            exterior: true,
            residential: PriceBand {
                min: dec!(0.85),
                max: dec!(1.35),
                default: dec!(1.05),
            },
            commercial: PriceBand {
                min: dec!(0.75),
                max: dec!(1.15),
                default: dec!(0.90),
            },
            primer: true,
            primer_note: Some("bare siding needs a primer coat first".into()),
        },
        Product {
            id: "default-concrete-gloss".into(),
            brand: "WeatherShield".into(),
            name: "Concrete Sealer Gloss".into(),
            finish: Finish::Gloss,
            coverage: dec!(250),
            interior: false,
            exterior: true,
            residential: PriceBand {
                min: dec!(0.95),
                max: dec!(1.50),
                default: dec!(1.20),
            },
            commercial: PriceBand {
                min: dec!(0.85),
                max: dec!(1.30),
                default: dec!(1.05),
            },
            primer: false,
            primer_note: None,
        },
        Product {
            id: "default-wood-highgloss".into(),
            brand: "TimberLux".into(),
            name: "Spar Varnish High Gloss".into(),
            finish: Finish::HighGloss,
            coverage: dec!(300),
            interior: true,
            exterior: true,
            residential: PriceBand {
                min: dec!(1.10),
                max: dec!(1.80),
                default: dec!(1.40),
            },
            commercial: PriceBand {
                min: dec!(0.95),
                max: dec!(1.60),
                default: dec!(1.25),
            },
            primer: false,
            primer_note: None,
        },
    ]
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;

    use super::*;

    #[test]
    fn builtin_list_is_never_empty() {
        assert!(!builtin_products().is_empty());
    }

    #[test]
    fn builtin_products_satisfy_boundary_invariants() {
        for product in builtin_products() {
            assert!(product.coverage > Decimal::ZERO, "{}", product.id);
            assert!(product.interior || product.exterior, "{}", product.id);
            assert!(product.residential.min <= product.residential.default);
            assert!(product.residential.default <= product.residential.max);
            assert!(product.commercial.min <= product.commercial.default);
            assert!(product.commercial.default <= product.commercial.max);
        }
    }

    #[test]
    fn builtin_ids_are_unique() {
        let products = builtin_products();
        let mut ids: Vec<&str> = products.iter().map(|p| p.id.as_str()).collect();
        ids.sort();
        ids.dedup();

        assert_eq!(ids.len(), products.len());
    }
}
