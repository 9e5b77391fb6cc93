use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculations::area;
use crate::models::{Measurement, ServiceType};

/// One measured physical area of work (a wall, a floor section).
///
/// `calculated_total_area` is a cached sum over the measurements and must be
/// refreshed after every mutation; the mutation helpers below do so. The
/// cached value may go negative when deductions exceed additions -- it is
/// clamped only where it is priced or displayed, never in storage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Surface {
    pub id: String,
    pub service_type: ServiceType,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub measurements: Vec<Measurement>,
    #[serde(default)]
    pub calculated_total_area: Decimal,
}

impl Surface {
    pub fn new(id: impl Into<String>, service_type: ServiceType, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            service_type,
            name: name.into(),
            measurements: Vec::new(),
            calculated_total_area: Decimal::ZERO,
        }
    }

    /// Appends a measurement and refreshes the cached total.
    pub fn add_measurement(&mut self, measurement: Measurement) {
        self.measurements.push(measurement);
        self.recompute_total();
    }

    /// Removes the measurement with the given id, if present, and refreshes
    /// the cached total. Returns whether anything was removed.
    pub fn remove_measurement(&mut self, measurement_id: &str) -> bool {
        let before = self.measurements.len();
        self.measurements.retain(|m| m.id != measurement_id);
        let removed = self.measurements.len() != before;
        if removed {
            self.recompute_total();
        }
        removed
    }

    /// Replaces the full measurement list and refreshes the cached total.
    pub fn set_measurements(&mut self, measurements: Vec<Measurement>) {
        self.measurements = measurements;
        self.recompute_total();
    }

    /// Recomputes `calculated_total_area` from the current measurements.
    /// Call this after any direct mutation of `measurements`.
    pub fn recompute_total(&mut self) -> Decimal {
        self.calculated_total_area = area::surface_total(self);
        self.calculated_total_area
    }
}
