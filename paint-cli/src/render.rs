//! Plain-text rendering of estimates and catalog listings.

use rust_decimal::Decimal;

use paint_core::models::{Estimate, EstimateWarning, Product};

/// Formats a dollar amount with two decimal places, e.g. `$1,493.85`
/// without the thousands separator: `$1493.85`.
pub fn currency(amount: Decimal) -> String {
    format!("${:.2}", amount)
}

/// Renders the estimate breakdown as an aligned plain-text table followed
/// by the markup chain and the total. Amounts are pre-rounded by the
/// caller via [`Estimate::rounded`].
pub fn estimate(estimate: &Estimate) -> String {
    let mut out = String::new();

    if estimate.breakdown.is_empty() {
        out.push_str("No billable work in this project.\n");
    }

    for item in &estimate.breakdown {
        out.push_str(&format!(
            "{:<40} {:>9.1} sqft {:>7.2} h {:>12} {:>12} {:>12}\n",
            item.description,
            item.area,
            item.labor_hours,
            currency(item.material_cost),
            currency(item.labor_cost),
            currency(item.subtotal),
        ));
        if let Some(gallons) = item.gallons {
            out.push_str(&format!("{:<40} {gallons} gallon(s)\n", ""));
        }
    }

    out.push('\n');
    out.push_str(&format!(
        "Materials: {:>12}\n",
        currency(estimate.materials_cost)
    ));
    out.push_str(&format!(
        "Labor:     {:>12}  ({:.2} h)\n",
        currency(estimate.labor_cost),
        estimate.labor_hours
    ));
    out.push_str(&format!("Subtotal:  {:>12}\n", currency(estimate.subtotal)));
    out.push_str(&format!("Overhead:  {:>12}\n", currency(estimate.overhead)));
    out.push_str(&format!("Profit:    {:>12}\n", currency(estimate.profit)));
    out.push_str(&format!("Tax:       {:>12}\n", currency(estimate.tax)));
    out.push_str(&format!("Total:     {:>12}\n", currency(estimate.total)));

    out
}

pub fn warning(warning: &EstimateWarning) -> String {
    match warning {
        EstimateWarning::MissingProduct { selection_id } => {
            format!("selection {selection_id} has no product; priced at the default rate")
        }
        EstimateWarning::UnknownProduct {
            selection_id,
            product_id,
        } => format!(
            "selection {selection_id} references unknown product {product_id}; priced at the default rate"
        ),
        EstimateWarning::ZeroCoverage { product_id } => {
            format!("product {product_id} has no coverage; gallons not computed")
        }
        EstimateWarning::ZeroProductionRate { description } => {
            format!("{description} has no production rate; no labor hours accrued")
        }
    }
}

/// One catalog line: id, brand and name, finish, coverage and the
/// residential default price.
pub fn product_line(product: &Product) -> String {
    let mut line = format!(
        "{:<24} {:<34} {:<12} {:>5} sqft/gal  {}/sqft",
        product.id,
        format!("{} {}", product.brand, product.name),
        product.finish.as_str(),
        product.coverage,
        currency(product.residential.default),
    );
    if product.primer {
        line.push_str("  [self-priming]");
    }
    line
}
