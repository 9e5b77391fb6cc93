//! Project estimation: the pipeline that turns measured surfaces, paint
//! selections and a pricing configuration into a priced, itemized estimate.
//!
//! # Pipeline
//!
//! | Step | Description |
//! |------|-------------|
//! | 1    | For each selection, sum the billable area of its surfaces |
//! | 2    | Material cost: area × unit price × markup + area × supplies, plus primer when required |
//! | 3    | Labor: production hours + setup + cleanup, floored at the minimum |
//! | 4    | Surfaces no selection claims become their own groups (abrasive ones are labor-only) |
//! | 5    | Sum materials and labor into the subtotal |
//! | 6    | Overhead on the subtotal |
//! | 7    | Profit on subtotal + overhead |
//! | 8    | Tax on subtotal + overhead + profit |
//!
//! Steps 6-8 are cumulative by deliberate business rule: each percentage
//! applies to the running total, not to the original subtotal. Tax lands on
//! a base that already includes profit and overhead; that matches the
//! observed contract math and is preserved as-is.
//!
//! The engine is pure and infallible. Incomplete or degenerate input
//! (missing products, zero coverage, deduction-heavy surfaces) degrades to
//! zero-valued contributions plus [`EstimateWarning`]s, never an error.
//! Intermediate values are never rounded; rounding happens at display time
//! via [`Estimate::rounded`].
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use paint_core::calculations::ProjectEstimator;
//! use paint_core::models::{
//!     Finish, Measurement, PaintSelection, PriceBand, PricingConfig, Product,
//!     ProjectType, ServiceType, Surface,
//! };
//!
//! let mut wall = Surface::new("s1", ServiceType::Painting, "North wall");
//! wall.add_measurement(Measurement::from_area("m1", dec!(300)));
//!
//! let product = Product {
//!     id: "p1".into(),
//!     brand: "Acme".into(),
//!     name: "Wall Pro".into(),
//!     finish: Finish::Satin,
//!     coverage: dec!(350),
//!     interior: true,
//!     exterior: false,
//!     residential: PriceBand::flat(dec!(0.85)),
//!     commercial: PriceBand::flat(dec!(0.70)),
//!     primer: false,
//!     primer_note: None,
//! };
//!
//! let mut selection = PaintSelection::new("sel1", "Walls");
//! selection.surface_ids = vec!["s1".into()];
//! selection.product_id = Some("p1".into());
//!
//! let pricing = PricingConfig::default();
//! let estimator = ProjectEstimator::new(&pricing, ProjectType::Residential);
//! let estimate = estimator.calculate(&[wall], &[selection], &[product]);
//!
//! // 300 × 0.85 × 1.25 + 300 × 0.05 = 333.75 in materials.
//! assert_eq!(estimate.materials_cost, dec!(333.75));
//! // 300 / 150 + 1 + 1 = 4 hours, the minimum; 4 × 55 × 2 crew = 440.
//! assert_eq!(estimate.labor_cost, dec!(440.00));
//! assert_eq!(estimate.subtotal, dec!(773.75));
//! assert_eq!(estimate.breakdown.len(), 1);
//! assert_eq!(estimate.breakdown[0].gallons, Some(2));
//! assert!(estimate.warnings.is_empty());
//! ```

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use tracing::debug;

use crate::calculations::area;
use crate::calculations::common::max;
use crate::models::{
    Estimate, EstimateWarning, LineItem, PaintSelection, PricingConfig, Product, ProjectType,
    ServiceType, Surface,
};

/// Coats applied when a selection does not specify a count.
const DEFAULT_COATS: u32 = 2;

/// Primer coverage is fixed at 400 sq ft per gallon, one coat.
fn primer_coverage() -> Decimal {
    Decimal::from(400u32)
}

/// Calculator combining a pricing configuration and a project type into
/// estimates. Construction is cheap; the same estimator can price any
/// number of surface/selection sets.
#[derive(Debug, Clone)]
pub struct ProjectEstimator<'a> {
    pricing: &'a PricingConfig,
    project_type: ProjectType,
}

impl<'a> ProjectEstimator<'a> {
    pub fn new(pricing: &'a PricingConfig, project_type: ProjectType) -> Self {
        Self {
            pricing,
            project_type,
        }
    }

    /// Computes the full estimate for the given surfaces and selections.
    ///
    /// Surface areas are always recomputed from measurements; the cached
    /// `calculated_total_area` field is deliberately not trusted here, so a
    /// stale cache cannot skew pricing. Zero surfaces produce a zero-valued
    /// estimate, not an error.
    pub fn calculate(
        &self,
        surfaces: &[Surface],
        selections: &[PaintSelection],
        products: &[Product],
    ) -> Estimate {
        let mut breakdown = Vec::new();
        let mut warnings = Vec::new();

        for selection in selections {
            let group: Vec<&Surface> = surfaces
                .iter()
                .filter(|s| selection.covers(&s.id))
                .collect();
            if group.is_empty() {
                continue;
            }
            let item = self.price_selection_group(selection, &group, products, &mut warnings);
            breakdown.push(item);
        }

        for surface in surfaces {
            let claimed = selections.iter().any(|sel| sel.covers(&surface.id));
            if !claimed {
                breakdown.push(self.price_unclaimed_surface(surface, &mut warnings));
            }
        }

        let materials_cost: Decimal = breakdown.iter().map(|i| i.material_cost).sum();
        let labor_cost: Decimal = breakdown.iter().map(|i| i.labor_cost).sum();
        let labor_hours: Decimal = breakdown.iter().map(|i| i.labor_hours).sum();
        let subtotal = materials_cost + labor_cost;

        let overhead = self.overhead(subtotal);
        let profit = self.profit(subtotal, overhead);
        let tax = self.tax_amount(subtotal, overhead, profit);
        let total = subtotal + overhead + profit + tax;

        debug!(%subtotal, %overhead, %profit, %tax, %total, "estimate computed");

        Estimate {
            materials_cost,
            labor_cost,
            labor_hours,
            subtotal,
            overhead,
            profit,
            tax,
            total,
            breakdown,
            warnings,
        }
    }

    /// Prices one selection group: material over the coating area, labor
    /// over everything the selection covers.
    fn price_selection_group(
        &self,
        selection: &PaintSelection,
        group: &[&Surface],
        products: &[Product],
        warnings: &mut Vec<EstimateWarning>,
    ) -> LineItem {
        let coating_area: Decimal = group
            .iter()
            .filter(|s| s.service_type.is_coating())
            .map(|s| area::billable_area(s))
            .sum();
        let total_area: Decimal = group.iter().map(|s| area::billable_area(s)).sum();

        let product = self.resolve_product(selection, products, warnings);
        let unit_price = self.unit_price(product, warnings);
        let coats = selection.coats.unwrap_or(DEFAULT_COATS);
        let gallons = product.and_then(|p| self.gallons_needed(coating_area, coats, p.coverage));

        let material_cost =
            self.material_cost(coating_area, unit_price, selection.needs_primer);

        let description = self.selection_description(selection, product);
        let production_hours = self.group_production_hours(group, &description, warnings);
        let labor_hours = self.labor_hours(production_hours);
        let labor_cost = self.labor_cost(labor_hours);

        LineItem {
            description,
            area: total_area,
            material_cost,
            labor_cost,
            labor_hours,
            subtotal: material_cost + labor_cost,
            gallons,
        }
    }

    /// Prices a surface no selection claims. Coating surfaces fall back to
    /// the default per-square-foot paint cost; abrasive surfaces carry labor
    /// only.
    fn price_unclaimed_surface(
        &self,
        surface: &Surface,
        warnings: &mut Vec<EstimateWarning>,
    ) -> LineItem {
        let billable = area::billable_area(surface);

        let material_cost = if surface.service_type.is_coating() {
            self.material_cost(billable, self.pricing.default_paint_cost_per_sq_ft, false)
        } else {
            Decimal::ZERO
        };

        let description = if surface.name.is_empty() {
            surface.service_type.label().to_string()
        } else {
            format!("{} ({})", surface.name, surface.service_type.label())
        };

        let production_hours =
            self.production_hours(surface.service_type, billable, &description, warnings);
        let labor_hours = self.labor_hours(production_hours);
        let labor_cost = self.labor_cost(labor_hours);

        LineItem {
            description,
            area: billable,
            material_cost,
            labor_cost,
            labor_hours,
            subtotal: material_cost + labor_cost,
            gallons: None,
        }
    }

    /// Looks up the selection's product, recording a warning when none is
    /// bound or the id is unknown.
    fn resolve_product<'p>(
        &self,
        selection: &PaintSelection,
        products: &'p [Product],
        warnings: &mut Vec<EstimateWarning>,
    ) -> Option<&'p Product> {
        match &selection.product_id {
            None => {
                warnings.push(EstimateWarning::MissingProduct {
                    selection_id: selection.id.clone(),
                });
                None
            }
            Some(id) => {
                let found = products.iter().find(|p| &p.id == id);
                if found.is_none() {
                    warnings.push(EstimateWarning::UnknownProduct {
                        selection_id: selection.id.clone(),
                        product_id: id.clone(),
                    });
                }
                found
            }
        }
    }

    /// Per-square-foot paint price: the bound product's tier price, or the
    /// configured default when no product is usable. A product with
    /// non-positive coverage is treated as unusable for pricing as well.
    fn unit_price(
        &self,
        product: Option<&Product>,
        warnings: &mut Vec<EstimateWarning>,
    ) -> Decimal {
        match product {
            Some(p) if p.coverage > Decimal::ZERO => match self.project_type {
                ProjectType::Residential => p.residential.default,
                ProjectType::Commercial => p.commercial.default,
            },
            Some(p) => {
                warnings.push(EstimateWarning::ZeroCoverage {
                    product_id: p.id.clone(),
                });
                self.pricing.default_paint_cost_per_sq_ft
            }
            None => self.pricing.default_paint_cost_per_sq_ft,
        }
    }

    /// Material cost for a coating area: paint at the marked-up unit price,
    /// supplies per square foot, and primer when required.
    fn material_cost(&self, coating_area: Decimal, unit_price: Decimal, needs_primer: bool) -> Decimal {
        let paint = coating_area * unit_price * self.pricing.paint_markup;
        let supplies = coating_area * self.pricing.supplies_cost_per_sq_ft;
        let primer = if needs_primer {
            self.primer_charge(coating_area)
        } else {
            Decimal::ZERO
        };
        paint + supplies + primer
    }

    /// Primer: one coat at 400 sq ft per gallon, whole gallons.
    fn primer_charge(&self, coating_area: Decimal) -> Decimal {
        if coating_area <= Decimal::ZERO {
            return Decimal::ZERO;
        }
        let gallons = (coating_area / primer_coverage()).ceil();
        gallons * self.pricing.primer_cost_per_gallon
    }

    /// Whole gallons of finish product, or `None` when coverage is
    /// unusable or the area is zero.
    fn gallons_needed(&self, coating_area: Decimal, coats: u32, coverage: Decimal) -> Option<u32> {
        if coverage <= Decimal::ZERO || coating_area <= Decimal::ZERO {
            return None;
        }
        let gallons = (coating_area * Decimal::from(coats) / coverage).ceil();
        gallons.to_u32()
    }

    /// Production hours across a group, one term per surface at that
    /// surface's service rate.
    fn group_production_hours(
        &self,
        group: &[&Surface],
        description: &str,
        warnings: &mut Vec<EstimateWarning>,
    ) -> Decimal {
        group
            .iter()
            .map(|s| {
                self.production_hours(
                    s.service_type,
                    area::billable_area(s),
                    description,
                    warnings,
                )
            })
            .sum()
    }

    /// Hours of production work for an area, guarding a non-positive rate
    /// as zero hours plus a warning.
    fn production_hours(
        &self,
        service: ServiceType,
        billable: Decimal,
        description: &str,
        warnings: &mut Vec<EstimateWarning>,
    ) -> Decimal {
        let rate = self.pricing.production_rates.for_service(service);
        if rate <= Decimal::ZERO {
            warnings.push(EstimateWarning::ZeroProductionRate {
                description: description.to_string(),
            });
            return Decimal::ZERO;
        }
        billable / rate
    }

    /// Billed hours: production plus setup and cleanup, never below the
    /// configured minimum.
    fn labor_hours(&self, production_hours: Decimal) -> Decimal {
        max(
            production_hours + self.pricing.setup_hours + self.pricing.cleanup_hours,
            self.pricing.minimum_hours,
        )
    }

    /// Labor cost for billed hours across the whole crew.
    fn labor_cost(&self, labor_hours: Decimal) -> Decimal {
        labor_hours * self.pricing.base_hourly_rate * Decimal::from(self.pricing.crew_size)
    }

    fn selection_description(&self, selection: &PaintSelection, product: Option<&Product>) -> String {
        if !selection.name.is_empty() {
            selection.name.clone()
        } else if let Some(p) = product {
            format!("{} {}", p.brand, p.name)
        } else {
            format!("Selection {}", selection.id)
        }
    }

    /// Overhead on the materials + labor subtotal.
    fn overhead(&self, subtotal: Decimal) -> Decimal {
        subtotal * self.pricing.overhead_percentage
    }

    /// Profit on the running total including overhead.
    fn profit(&self, subtotal: Decimal, overhead: Decimal) -> Decimal {
        (subtotal + overhead) * self.pricing.profit_percentage
    }

    /// Tax on the running total including overhead and profit. Taxing after
    /// profit is unusual but matches the observed contract math.
    fn tax_amount(&self, subtotal: Decimal, overhead: Decimal, profit: Decimal) -> Decimal {
        (subtotal + overhead + profit) * self.pricing.tax_rate
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;
    use crate::models::{Finish, Measurement, PriceBand};

    fn test_product() -> Product {
        Product {
            id: "p1".into(),
            brand: "Acme".into(),
            name: "Wall Pro".into(),
            finish: Finish::Satin,
            coverage: dec!(300),
            interior: true,
            exterior: true,
            residential: PriceBand::flat(dec!(0.80)),
            commercial: PriceBand::flat(dec!(0.60)),
            primer: false,
            primer_note: None,
        }
    }

    fn painted_surface(id: &str, sq_ft: Decimal) -> Surface {
        let mut s = Surface::new(id, ServiceType::Painting, format!("Surface {id}"));
        s.add_measurement(Measurement::from_area(format!("{id}-m"), sq_ft));
        s
    }

    fn selection_for(surface_ids: &[&str], product_id: Option<&str>) -> PaintSelection {
        let mut sel = PaintSelection::new("sel1", "Walls");
        sel.surface_ids = surface_ids.iter().map(|s| s.to_string()).collect();
        sel.product_id = product_id.map(|s| s.to_string());
        sel
    }

    // =========================================================================
    // cumulative markup chain
    // =========================================================================

    #[test]
    fn markup_chain_applies_each_percentage_to_the_running_total() {
        let pricing = PricingConfig {
            overhead_percentage: dec!(0.2),
            profit_percentage: dec!(0.15),
            tax_rate: dec!(0.0825),
            ..PricingConfig::default()
        };
        let estimator = ProjectEstimator::new(&pricing, ProjectType::Residential);
        let subtotal = dec!(1000);

        let overhead = estimator.overhead(subtotal);
        let profit = estimator.profit(subtotal, overhead);
        let tax = estimator.tax_amount(subtotal, overhead, profit);

        assert_eq!(overhead, dec!(200.0));
        assert_eq!(profit, dec!(180.00));
        assert_eq!(tax, dec!(113.850000));
        // Tax is on subtotal + overhead + profit, NOT on the bare subtotal:
        // 0.0825 * 1380 = 113.85, where 0.0825 * 1000 would be 82.50.
    }

    #[test]
    fn end_to_end_chain_matches_the_reference_vector() {
        // Engineer a labor-only project with subtotal exactly 1000:
        // 2000 sq ft abrasive at 200 sq ft/h = 10 h; 10 × 50 × 2 = 1000.
        let mut pricing = PricingConfig {
            base_hourly_rate: dec!(50),
            crew_size: 2,
            setup_hours: dec!(0),
            cleanup_hours: dec!(0),
            minimum_hours: dec!(0),
            overhead_percentage: dec!(0.2),
            profit_percentage: dec!(0.15),
            tax_rate: dec!(0.0825),
            ..PricingConfig::default()
        };
        pricing.production_rates.abrasive = dec!(200);
        let mut surface = Surface::new("s1", ServiceType::Abrasive, "Driveway");
        surface.add_measurement(Measurement::from_area("m1", dec!(2000)));
        let estimator = ProjectEstimator::new(&pricing, ProjectType::Residential);

        let estimate = estimator.calculate(&[surface], &[], &[]);

        assert_eq!(estimate.subtotal, dec!(1000));
        assert_eq!(estimate.overhead, dec!(200.0));
        assert_eq!(estimate.profit, dec!(180.00));
        // 0.0825 × (1000 + 200 + 180)
        assert_eq!(estimate.tax, dec!(113.850000));
        assert_eq!(estimate.total, dec!(1493.850000));
    }

    // =========================================================================
    // materials
    // =========================================================================

    #[test]
    fn material_cost_uses_marked_up_unit_price_plus_supplies() {
        let pricing = PricingConfig::default();
        let estimator = ProjectEstimator::new(&pricing, ProjectType::Residential);
        let surface = painted_surface("s1", dec!(400));
        let selection = selection_for(&["s1"], Some("p1"));

        let estimate = estimator.calculate(&[surface], &[selection], &[test_product()]);

        // 400 × 0.80 × 1.25 + 400 × 0.05 = 400 + 20
        assert_eq!(estimate.materials_cost, dec!(420.00));
        assert!(estimate.warnings.is_empty());
    }

    #[test]
    fn commercial_projects_use_the_commercial_tier() {
        let pricing = PricingConfig::default();
        let estimator = ProjectEstimator::new(&pricing, ProjectType::Commercial);
        let surface = painted_surface("s1", dec!(400));
        let selection = selection_for(&["s1"], Some("p1"));

        let estimate = estimator.calculate(&[surface], &[selection], &[test_product()]);

        // 400 × 0.60 × 1.25 + 400 × 0.05 = 300 + 20
        assert_eq!(estimate.materials_cost, dec!(320.00));
    }

    #[test]
    fn gallons_round_up_to_whole_cans() {
        let pricing = PricingConfig::default();
        let estimator = ProjectEstimator::new(&pricing, ProjectType::Residential);
        let surface = painted_surface("s1", dec!(650));
        let selection = selection_for(&["s1"], Some("p1"));

        let estimate = estimator.calculate(&[surface], &[selection], &[test_product()]);

        // ceil(650 × 2 / 300) = ceil(4.33) = 5
        assert_eq!(estimate.breakdown[0].gallons, Some(5));
    }

    #[test]
    fn explicit_coat_count_overrides_the_default() {
        let pricing = PricingConfig::default();
        let estimator = ProjectEstimator::new(&pricing, ProjectType::Residential);
        let surface = painted_surface("s1", dec!(650));
        let mut selection = selection_for(&["s1"], Some("p1"));
        selection.coats = Some(1);

        let estimate = estimator.calculate(&[surface], &[selection], &[test_product()]);

        // ceil(650 / 300) = 3
        assert_eq!(estimate.breakdown[0].gallons, Some(3));
    }

    #[test]
    fn zero_coverage_skips_gallons_and_falls_back_to_default_pricing() {
        let pricing = PricingConfig::default();
        let estimator = ProjectEstimator::new(&pricing, ProjectType::Residential);
        let surface = painted_surface("s1", dec!(400));
        let selection = selection_for(&["s1"], Some("p1"));
        let product = Product {
            coverage: dec!(0),
            ..test_product()
        };

        let estimate = estimator.calculate(&[surface], &[selection], &[product]);

        assert_eq!(estimate.breakdown[0].gallons, None);
        // 400 × 0.65 × 1.25 + 400 × 0.05 = 325 + 20
        assert_eq!(estimate.materials_cost, dec!(345.00));
        assert_eq!(
            estimate.warnings,
            vec![EstimateWarning::ZeroCoverage {
                product_id: "p1".into()
            }]
        );
    }

    #[test]
    fn primer_requirement_adds_whole_gallon_charges() {
        let pricing = PricingConfig::default();
        let estimator = ProjectEstimator::new(&pricing, ProjectType::Residential);
        let surface = painted_surface("s1", dec!(650));
        let mut selection = selection_for(&["s1"], Some("p1"));
        selection.needs_primer = true;

        let estimate = estimator.calculate(&[surface], &[selection], &[test_product()]);

        // ceil(650 / 400) = 2 gallons × $28 primer on top of
        // 650 × 0.80 × 1.25 + 650 × 0.05 = 650 + 32.50.
        assert_eq!(estimate.materials_cost, dec!(738.50));
    }

    #[test]
    fn missing_product_warns_and_uses_default_cost() {
        let pricing = PricingConfig::default();
        let estimator = ProjectEstimator::new(&pricing, ProjectType::Residential);
        let surface = painted_surface("s1", dec!(400));
        let selection = selection_for(&["s1"], None);

        let estimate = estimator.calculate(&[surface], &[selection], &[test_product()]);

        // 400 × 0.65 × 1.25 + 400 × 0.05
        assert_eq!(estimate.materials_cost, dec!(345.00));
        assert_eq!(
            estimate.warnings,
            vec![EstimateWarning::MissingProduct {
                selection_id: "sel1".into()
            }]
        );
    }

    #[test]
    fn unknown_product_id_warns_and_uses_default_cost() {
        let pricing = PricingConfig::default();
        let estimator = ProjectEstimator::new(&pricing, ProjectType::Residential);
        let surface = painted_surface("s1", dec!(400));
        let selection = selection_for(&["s1"], Some("no-such-product"));

        let estimate = estimator.calculate(&[surface], &[selection], &[test_product()]);

        assert_eq!(estimate.materials_cost, dec!(345.00));
        assert_eq!(
            estimate.warnings,
            vec![EstimateWarning::UnknownProduct {
                selection_id: "sel1".into(),
                product_id: "no-such-product".into()
            }]
        );
    }

    // =========================================================================
    // labor
    // =========================================================================

    #[test]
    fn labor_hours_never_fall_below_the_minimum() {
        let pricing = PricingConfig::default();
        let estimator = ProjectEstimator::new(&pricing, ProjectType::Residential);
        // 30 sq ft at 150 sq ft/h is 0.2 production hours; 0.2 + 2 < 4.
        let surface = painted_surface("s1", dec!(30));
        let selection = selection_for(&["s1"], Some("p1"));

        let estimate = estimator.calculate(&[surface], &[selection], &[test_product()]);

        assert_eq!(estimate.labor_hours, dec!(4));
        assert_eq!(estimate.labor_cost, dec!(440));
    }

    #[test]
    fn labor_adds_setup_and_cleanup_above_the_minimum() {
        let pricing = PricingConfig::default();
        let estimator = ProjectEstimator::new(&pricing, ProjectType::Residential);
        // 1500 / 150 = 10 production hours, + 1 + 1 = 12.
        let surface = painted_surface("s1", dec!(1500));
        let selection = selection_for(&["s1"], Some("p1"));

        let estimate = estimator.calculate(&[surface], &[selection], &[test_product()]);

        assert_eq!(estimate.labor_hours, dec!(12));
        assert_eq!(estimate.labor_cost, dec!(1320));
    }

    #[test]
    fn abrasive_surfaces_are_labor_only() {
        let pricing = PricingConfig::default();
        let estimator = ProjectEstimator::new(&pricing, ProjectType::Residential);
        let mut surface = Surface::new("s1", ServiceType::Abrasive, "Deck strip");
        surface.add_measurement(Measurement::from_area("m1", dec!(1000)));

        let estimate = estimator.calculate(&[surface], &[], &[]);

        assert_eq!(estimate.materials_cost, dec!(0));
        // 1000 / 200 = 5 + 2 = 7 hours × 55 × 2.
        assert_eq!(estimate.labor_hours, dec!(7));
        assert_eq!(estimate.labor_cost, dec!(770));
    }

    #[test]
    fn zero_production_rate_is_guarded_not_fatal() {
        let mut pricing = PricingConfig::default();
        pricing.production_rates.painting = dec!(0);
        let estimator = ProjectEstimator::new(&pricing, ProjectType::Residential);
        let surface = painted_surface("s1", dec!(500));
        let selection = selection_for(&["s1"], Some("p1"));

        let estimate = estimator.calculate(&[surface], &[selection], &[test_product()]);

        // Production hours degrade to zero; the floor still applies.
        assert_eq!(estimate.labor_hours, dec!(4));
        assert!(matches!(
            estimate.warnings.as_slice(),
            [EstimateWarning::ZeroProductionRate { .. }]
        ));
    }

    // =========================================================================
    // grouping
    // =========================================================================

    #[test]
    fn unclaimed_coating_surface_gets_default_priced_line() {
        let pricing = PricingConfig::default();
        let estimator = ProjectEstimator::new(&pricing, ProjectType::Residential);
        let surface = painted_surface("s1", dec!(400));

        let estimate = estimator.calculate(&[surface], &[], &[]);

        assert_eq!(estimate.breakdown.len(), 1);
        // 400 × 0.65 × 1.25 + 400 × 0.05
        assert_eq!(estimate.materials_cost, dec!(345.00));
        assert_eq!(estimate.breakdown[0].gallons, None);
    }

    #[test]
    fn selection_covering_multiple_surfaces_sums_their_areas() {
        let pricing = PricingConfig::default();
        let estimator = ProjectEstimator::new(&pricing, ProjectType::Residential);
        let surfaces = vec![
            painted_surface("s1", dec!(200)),
            painted_surface("s2", dec!(100)),
        ];
        let selection = selection_for(&["s1", "s2"], Some("p1"));

        let estimate = estimator.calculate(&surfaces, &[selection], &[test_product()]);

        assert_eq!(estimate.breakdown.len(), 1);
        assert_eq!(estimate.breakdown[0].area, dec!(300));
    }

    #[test]
    fn selection_over_unknown_surfaces_is_skipped() {
        let pricing = PricingConfig::default();
        let estimator = ProjectEstimator::new(&pricing, ProjectType::Residential);
        let selection = selection_for(&["ghost"], Some("p1"));

        let estimate = estimator.calculate(&[], &[selection], &[test_product()]);

        assert_eq!(estimate, Estimate::default());
    }

    #[test]
    fn deduction_heavy_surface_prices_as_zero_area() {
        let pricing = PricingConfig::default();
        let estimator = ProjectEstimator::new(&pricing, ProjectType::Residential);
        let mut surface = Surface::new("s1", ServiceType::Painting, "Odd wall");
        surface.add_measurement(Measurement::from_area("m1", dec!(10)));
        surface.add_measurement(Measurement::from_area("m2", dec!(50)).as_deduction());
        let selection = selection_for(&["s1"], Some("p1"));

        let estimate = estimator.calculate(&[surface], &[selection], &[test_product()]);

        assert_eq!(estimate.materials_cost, dec!(0));
        assert_eq!(estimate.breakdown[0].area, dec!(0));
        // Minimum hours still apply to a claimed group.
        assert_eq!(estimate.labor_hours, dec!(4));
    }

    // =========================================================================
    // whole-estimate properties
    // =========================================================================

    #[test]
    fn empty_project_yields_the_zero_estimate() {
        let pricing = PricingConfig::default();
        let estimator = ProjectEstimator::new(&pricing, ProjectType::Residential);

        let estimate = estimator.calculate(&[], &[], &[]);

        assert_eq!(estimate, Estimate::default());
    }

    #[test]
    fn calculate_is_idempotent() {
        let pricing = PricingConfig::default();
        let estimator = ProjectEstimator::new(&pricing, ProjectType::Residential);
        let surfaces = vec![
            painted_surface("s1", dec!(650)),
            painted_surface("s2", dec!(123.45)),
        ];
        let selection = selection_for(&["s1", "s2"], Some("p1"));
        let products = vec![test_product()];

        let first = estimator.calculate(&surfaces, &[selection.clone()], &products);
        let second = estimator.calculate(&surfaces, &[selection], &products);

        assert_eq!(first, second);
    }

    #[test]
    fn stale_cached_area_does_not_skew_pricing() {
        let pricing = PricingConfig::default();
        let estimator = ProjectEstimator::new(&pricing, ProjectType::Residential);
        let mut surface = painted_surface("s1", dec!(400));
        // Simulate a caller that mutated measurements without recomputing.
        surface.calculated_total_area = dec!(999999);
        let selection = selection_for(&["s1"], Some("p1"));

        let estimate = estimator.calculate(&[surface], &[selection], &[test_product()]);

        assert_eq!(estimate.breakdown[0].area, dec!(400));
    }
}
