//! Area math for measurements and surfaces.
//!
//! A partially filled form is the steady state during interactive editing,
//! so every function here degrades missing or meaningless input to zero
//! area instead of failing.

use rust_decimal::Decimal;

use crate::calculations::common::max;
use crate::models::{EntryKind, Measurement, Surface};

/// Area contributed by one measurement, ignoring its deduction flag.
///
/// Dimension entries sum `length × height` over all pairs, with a missing
/// component counting as zero. Direct entries take the entered value, or
/// zero when none was entered.
pub fn measurement_area(measurement: &Measurement) -> Decimal {
    match measurement.entry_type {
        EntryKind::Dimensions => measurement
            .dimensions
            .iter()
            .map(|d| {
                d.length.unwrap_or(Decimal::ZERO) * d.height.unwrap_or(Decimal::ZERO)
            })
            .sum(),
        EntryKind::Direct => measurement.total_value.unwrap_or(Decimal::ZERO),
    }
}

/// Net surface area: additions minus deductions, unclamped.
///
/// This is the value cached in `Surface::calculated_total_area`; a
/// deduction-heavy surface can legitimately come out negative here.
pub fn surface_total(surface: &Surface) -> Decimal {
    surface
        .measurements
        .iter()
        .map(|m| {
            let a = measurement_area(m);
            if m.is_deduction { -a } else { a }
        })
        .sum()
}

/// Net surface area clamped at zero, the form consumed by pricing and
/// display.
pub fn billable_area(surface: &Surface) -> Decimal {
    max(surface_total(surface), Decimal::ZERO)
}
