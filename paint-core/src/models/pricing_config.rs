use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::ServiceType;

/// Errors raised when a pricing configuration fails boundary validation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PricingConfigError {
    /// The base hourly rate must be non-negative.
    #[error("base hourly rate must be non-negative, got {0}")]
    InvalidHourlyRate(Decimal),

    /// The crew must have at least one member.
    #[error("crew size must be at least 1, got {0}")]
    InvalidCrewSize(u32),

    /// Production rates must be positive.
    #[error("production rate for {0} must be positive, got {1}")]
    InvalidProductionRate(ServiceType, Decimal),

    /// The paint markup is a multiplier and must be at least 1.
    #[error("paint markup must be at least 1, got {0}")]
    InvalidMarkup(Decimal),

    /// Percentages are fractions and must lie in [0, 1].
    #[error("{0} must be a fraction between 0 and 1, got {1}")]
    InvalidPercentage(&'static str, Decimal),

    /// Hour allowances must be non-negative.
    #[error("{0} must be non-negative, got {1}")]
    InvalidHours(&'static str, Decimal),

    /// Per-unit costs must be non-negative.
    #[error("{0} must be non-negative, got {1}")]
    InvalidCost(&'static str, Decimal),
}

/// Square feet of work completable per labor-hour, by service type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductionRates {
    #[serde(default = "defaults::rate_painting")]
    pub painting: Decimal,
    #[serde(default = "defaults::rate_concrete")]
    pub concrete_coating: Decimal,
    #[serde(default = "defaults::rate_wood")]
    pub wood_coating: Decimal,
    #[serde(default = "defaults::rate_abrasive")]
    pub abrasive: Decimal,
}

impl ProductionRates {
    pub fn for_service(&self, service: ServiceType) -> Decimal {
        match service {
            ServiceType::Painting => self.painting,
            ServiceType::ConcreteCoating => self.concrete_coating,
            ServiceType::WoodCoating => self.wood_coating,
            ServiceType::Abrasive => self.abrasive,
        }
    }
}

impl Default for ProductionRates {
    fn default() -> Self {
        Self {
            painting: defaults::rate_painting(),
            concrete_coating: defaults::rate_concrete(),
            wood_coating: defaults::rate_wood(),
            abrasive: defaults::rate_abrasive(),
        }
    }
}

/// Named rates and percentages parameterizing every estimate.
///
/// All percentage fields are fractions (0.20 means 20%), never whole
/// numbers. Mixing the two conventions is the classic way to corrupt an
/// estimate, so the convention is enforced here by `validate` and assumed
/// everywhere downstream.
///
/// Every field is serde-defaulted so snapshots written by older versions
/// load cleanly with the documented defaults filling the gaps.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PricingConfig {
    /// Labor rate per person-hour, in dollars. Default $55.
    #[serde(default = "defaults::base_hourly_rate")]
    pub base_hourly_rate: Decimal,

    /// People on the crew. Default 2.
    #[serde(default = "defaults::crew_size")]
    pub crew_size: u32,

    #[serde(default)]
    pub production_rates: ProductionRates,

    /// Hours to set up a job site. Default 1.
    #[serde(default = "defaults::setup_hours")]
    pub setup_hours: Decimal,

    /// Hours to clean up afterwards. Default 1.
    #[serde(default = "defaults::cleanup_hours")]
    pub cleanup_hours: Decimal,

    /// Floor on billed hours for any service group. Default 4.
    #[serde(default = "defaults::minimum_hours")]
    pub minimum_hours: Decimal,

    /// Multiplier applied to material unit prices. Default 1.25.
    #[serde(default = "defaults::paint_markup")]
    pub paint_markup: Decimal,

    /// Sundries (tape, plastic, rollers) per square foot. Default $0.05.
    #[serde(default = "defaults::supplies_cost_per_sq_ft")]
    pub supplies_cost_per_sq_ft: Decimal,

    /// Primer cost per gallon. Default $28.
    #[serde(default = "defaults::primer_cost_per_gallon")]
    pub primer_cost_per_gallon: Decimal,

    /// Per-square-foot paint cost used when no product is bound. Default $0.65.
    #[serde(default = "defaults::default_paint_cost_per_sq_ft")]
    pub default_paint_cost_per_sq_ft: Decimal,

    /// Overhead fraction applied to the subtotal. Default 0.10.
    #[serde(default = "defaults::overhead_percentage")]
    pub overhead_percentage: Decimal,

    /// Profit fraction applied after overhead. Default 0.20.
    #[serde(default = "defaults::profit_percentage")]
    pub profit_percentage: Decimal,

    /// Tax fraction applied after profit. Default 0.0825.
    #[serde(default = "defaults::tax_rate")]
    pub tax_rate: Decimal,
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self {
            base_hourly_rate: defaults::base_hourly_rate(),
            crew_size: defaults::crew_size(),
            production_rates: ProductionRates::default(),
            setup_hours: defaults::setup_hours(),
            cleanup_hours: defaults::cleanup_hours(),
            minimum_hours: defaults::minimum_hours(),
            paint_markup: defaults::paint_markup(),
            supplies_cost_per_sq_ft: defaults::supplies_cost_per_sq_ft(),
            primer_cost_per_gallon: defaults::primer_cost_per_gallon(),
            default_paint_cost_per_sq_ft: defaults::default_paint_cost_per_sq_ft(),
            overhead_percentage: defaults::overhead_percentage(),
            profit_percentage: defaults::profit_percentage(),
            tax_rate: defaults::tax_rate(),
        }
    }
}

impl PricingConfig {
    /// Rejects configurations the engine should never see. Call this at the
    /// boundary where a configuration is loaded or edited; the engine itself
    /// only guards against division by zero.
    pub fn validate(&self) -> Result<(), PricingConfigError> {
        if self.base_hourly_rate < Decimal::ZERO {
            return Err(PricingConfigError::InvalidHourlyRate(self.base_hourly_rate));
        }
        if self.crew_size == 0 {
            return Err(PricingConfigError::InvalidCrewSize(self.crew_size));
        }
        for service in [
            ServiceType::Painting,
            ServiceType::ConcreteCoating,
            ServiceType::WoodCoating,
            ServiceType::Abrasive,
        ] {
            let rate = self.production_rates.for_service(service);
            if rate <= Decimal::ZERO {
                return Err(PricingConfigError::InvalidProductionRate(service, rate));
            }
        }
        if self.paint_markup < Decimal::ONE {
            return Err(PricingConfigError::InvalidMarkup(self.paint_markup));
        }
        for (name, value) in [
            ("setup hours", self.setup_hours),
            ("cleanup hours", self.cleanup_hours),
            ("minimum hours", self.minimum_hours),
        ] {
            if value < Decimal::ZERO {
                return Err(PricingConfigError::InvalidHours(name, value));
            }
        }
        for (name, value) in [
            ("supplies cost per sq ft", self.supplies_cost_per_sq_ft),
            ("primer cost per gallon", self.primer_cost_per_gallon),
            (
                "default paint cost per sq ft",
                self.default_paint_cost_per_sq_ft,
            ),
        ] {
            if value < Decimal::ZERO {
                return Err(PricingConfigError::InvalidCost(name, value));
            }
        }
        for (name, value) in [
            ("overhead percentage", self.overhead_percentage),
            ("profit percentage", self.profit_percentage),
            ("tax rate", self.tax_rate),
        ] {
            if value < Decimal::ZERO || value > Decimal::ONE {
                return Err(PricingConfigError::InvalidPercentage(name, value));
            }
        }
        Ok(())
    }
}

mod defaults {
    use rust_decimal::Decimal;

    pub fn base_hourly_rate() -> Decimal {
        Decimal::new(55, 0)
    }
    pub fn crew_size() -> u32 {
        2
    }
    pub fn rate_painting() -> Decimal {
        Decimal::new(150, 0)
    }
    pub fn rate_concrete() -> Decimal {
        Decimal::new(125, 0)
    }
    pub fn rate_wood() -> Decimal {
        Decimal::new(100, 0)
    }
    pub fn rate_abrasive() -> Decimal {
        Decimal::new(200, 0)
    }
    pub fn setup_hours() -> Decimal {
        Decimal::ONE
    }
    pub fn cleanup_hours() -> Decimal {
        Decimal::ONE
    }
    pub fn minimum_hours() -> Decimal {
        Decimal::new(4, 0)
    }
    pub fn paint_markup() -> Decimal {
        Decimal::new(125, 2)
    }
    pub fn supplies_cost_per_sq_ft() -> Decimal {
        Decimal::new(5, 2)
    }
    pub fn primer_cost_per_gallon() -> Decimal {
        Decimal::new(28, 0)
    }
    pub fn default_paint_cost_per_sq_ft() -> Decimal {
        Decimal::new(65, 2)
    }
    pub fn overhead_percentage() -> Decimal {
        Decimal::new(10, 2)
    }
    pub fn profit_percentage() -> Decimal {
        Decimal::new(20, 2)
    }
    pub fn tax_rate() -> Decimal {
        Decimal::new(825, 4)
    }
}
