//! Pure filters over product lists. All of these borrow; none allocate
//! beyond the returned collection.

use crate::models::{Application, Finish, Product};

/// Products usable for the given application (interior or exterior).
pub fn by_application(products: &[Product], application: Application) -> Vec<&Product> {
    products
        .iter()
        .filter(|p| p.supports(application))
        .collect()
}

/// Products of one brand, matched case-insensitively.
pub fn by_brand<'a>(products: &'a [Product], brand: &str) -> Vec<&'a Product> {
    products
        .iter()
        .filter(|p| p.brand.eq_ignore_ascii_case(brand))
        .collect()
}

/// Products with the given finish.
pub fn by_finish(products: &[Product], finish: Finish) -> Vec<&Product> {
    products.iter().filter(|p| p.finish == finish).collect()
}

/// The product with the given id, if present.
pub fn find<'a>(products: &'a [Product], id: &str) -> Option<&'a Product> {
    products.iter().find(|p| p.id == id)
}

/// All distinct brand names, sorted, first-spelling-wins on case.
pub fn brands(products: &[Product]) -> Vec<String> {
    let mut out: Vec<String> = Vec::new();
    for product in products {
        if !out.iter().any(|b| b.eq_ignore_ascii_case(&product.brand)) {
            out.push(product.brand.clone());
        }
    }
    out.sort();
    out
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;
    use crate::models::PriceBand;

    fn product(id: &str, brand: &str, finish: Finish, interior: bool, exterior: bool) -> Product {
        Product {
            id: id.into(),
            brand: brand.into(),
            name: format!("{brand} {id}"),
            finish,
            coverage: dec!(350),
            interior,
            exterior,
            residential: PriceBand::flat(dec!(0.85)),
            commercial: PriceBand::flat(dec!(0.70)),
            primer: false,
            primer_note: None,
        }
    }

    fn fixture() -> Vec<Product> {
        vec![
            product("p1", "Acme", Finish::FlatMatte, true, false),
            product("p2", "Acme", Finish::Satin, true, true),
            product("p3", "Brightside", Finish::Satin, false, true),
        ]
    }

    #[test]
    fn by_application_checks_flags() {
        let products = fixture();

        let exterior = by_application(&products, Application::Exterior);

        let ids: Vec<&str> = exterior.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["p2", "p3"]);
    }

    #[test]
    fn by_brand_is_case_insensitive() {
        let products = fixture();

        let acme = by_brand(&products, "acme");

        assert_eq!(acme.len(), 2);
    }

    #[test]
    fn by_finish_matches_exactly() {
        let products = fixture();

        let satin = by_finish(&products, Finish::Satin);

        assert_eq!(satin.len(), 2);
    }

    #[test]
    fn brands_are_sorted_and_deduplicated() {
        let products = fixture();

        assert_eq!(brands(&products), vec!["Acme", "Brightside"]);
    }

    #[test]
    fn find_locates_by_id() {
        let products = fixture();

        assert_eq!(find(&products, "p3").map(|p| p.brand.as_str()), Some("Brightside"));
        assert_eq!(find(&products, "p9"), None);
    }
}
