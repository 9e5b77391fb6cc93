//! Shared helpers for estimate calculations.

use rust_decimal::Decimal;

/// Rounds a decimal value to exactly two decimal places using half-up
/// rounding, the standard convention for displayed currency.
///
/// The engine stores unrounded values; this is applied at formatting time
/// only, so the cumulative overhead/profit/tax chain never compounds
/// rounding error.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use paint_core::calculations::common::round_half_up;
///
/// assert_eq!(round_half_up(dec!(123.454)), dec!(123.45));
/// assert_eq!(round_half_up(dec!(123.455)), dec!(123.46));
/// ```
pub fn round_half_up(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, rust_decimal::RoundingStrategy::MidpointAwayFromZero)
}

/// Returns the maximum of two decimal values.
pub fn max(a: Decimal, b: Decimal) -> Decimal {
    if a > b { a } else { b }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn round_half_up_rounds_down_below_midpoint() {
        assert_eq!(round_half_up(dec!(97.344)), dec!(97.34));
    }

    #[test]
    fn round_half_up_rounds_up_at_midpoint() {
        assert_eq!(round_half_up(dec!(97.345)), dec!(97.35));
    }

    #[test]
    fn round_half_up_preserves_already_rounded_values() {
        assert_eq!(round_half_up(dec!(1477.35)), dec!(1477.35));
    }

    #[test]
    fn round_half_up_handles_zero() {
        assert_eq!(round_half_up(dec!(0.00)), dec!(0.00));
    }

    #[test]
    fn max_returns_larger_value() {
        assert_eq!(max(dec!(4), dec!(2.5)), dec!(4));
        assert_eq!(max(dec!(2.5), dec!(4)), dec!(4));
    }

    #[test]
    fn max_handles_equal_values() {
        assert_eq!(max(dec!(4), dec!(4)), dec!(4));
    }
}
