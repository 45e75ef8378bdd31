//! Money calculation utilities using rust_decimal for precision
//!
//! Amounts are stored as `f64`; comparisons and sums go through `Decimal`.

use rust_decimal::prelude::*;
use shared::models::Order;
use shared::order::AmountRange;

/// Rounding strategy for monetary values (2 decimal places, half-up)
const DECIMAL_PLACES: u32 = 2;

/// Tolerance for monetary comparisons (0.01)
pub const MONEY_TOLERANCE: Decimal = Decimal::from_parts(1, 0, 0, false, 2);

/// Convert f64 to Decimal for calculations
#[inline]
pub fn to_decimal(value: f64) -> Decimal {
    Decimal::from_f64(value).unwrap_or_default()
}

/// Convert f64 to Decimal; `None` for NaN, infinities and values out of range
#[inline]
pub fn try_decimal(value: f64) -> Option<Decimal> {
    Decimal::from_f64(value)
}

/// Convert Decimal back to f64, rounded to 2 decimal places
#[inline]
pub fn to_f64(value: Decimal) -> f64 {
    value
        .round_dp_with_strategy(DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
        .to_f64()
        .unwrap_or_default()
}

/// Compare two monetary values for equality (within 0.01 tolerance)
pub fn money_eq(a: f64, b: f64) -> bool {
    let diff = (to_decimal(a) - to_decimal(b)).abs();
    diff < MONEY_TOLERANCE
}

/// Sum of quantity × unit price over the order's line items
pub fn items_total(order: &Order) -> f64 {
    let total: Decimal = order
        .items
        .iter()
        .map(|item| to_decimal(item.price) * Decimal::from(item.quantity))
        .sum();
    to_f64(total)
}

/// Difference between the stated total and the line-item sum, if any
///
/// The total is never enforced; this only reports the drift.
pub fn total_mismatch(order: &Order) -> Option<f64> {
    let expected = items_total(order);
    if money_eq(order.total_amount, expected) {
        None
    } else {
        Some(to_f64(to_decimal(order.total_amount) - to_decimal(expected)))
    }
}

/// Inclusive amount-range check with decimal comparison
///
/// A bound `Decimal` cannot hold leaves that side open.
pub fn amount_in_range(amount: f64, range: &AmountRange) -> bool {
    let value = to_decimal(amount);
    range
        .min
        .and_then(try_decimal)
        .is_none_or(|min| value >= min)
        && range
            .max
            .and_then(try_decimal)
            .is_none_or(|max| value <= max)
}

/// Display form used by the table, e.g. `$2,030` or `$1,234.5`
pub fn format_currency(amount: f64) -> String {
    let value = to_decimal(amount)
        .round_dp_with_strategy(DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
        .normalize();
    let sign = if value.is_sign_negative() && !value.is_zero() {
        "-"
    } else {
        ""
    };
    let text = value.abs().to_string();
    let (int_part, frac_part) = match text.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (text.as_str(), None),
    };

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    match frac_part {
        Some(frac) => format!("{sign}${grouped}.{frac}"),
        None => format!("{sign}${grouped}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::orders::seed::seed_orders;

    #[test]
    fn test_to_decimal_precision() {
        let sum_dec = to_decimal(0.1) + to_decimal(0.2);
        assert_eq!(to_f64(sum_dec), 0.3);
    }

    #[test]
    fn test_seed_totals_match_items() {
        for order in seed_orders() {
            assert_eq!(items_total(&order), order.total_amount);
            assert_eq!(total_mismatch(&order), None);
        }
    }

    #[test]
    fn test_total_mismatch_reports_drift() {
        let mut order = seed_orders().remove(0);
        order.total_amount = 2000.0;
        assert_eq!(total_mismatch(&order), Some(-30.0));
    }

    #[test]
    fn test_amount_in_range() {
        let range = AmountRange::new(Some(2030.0), Some(5340.0));
        assert!(amount_in_range(2030.0, &range));
        assert!(amount_in_range(5340.0, &range));
        assert!(!amount_in_range(1250.0, &range));
        assert!(!amount_in_range(5340.01, &range));

        assert!(amount_in_range(1.0, &AmountRange::default()));
        assert!(amount_in_range(9e9, &AmountRange::new(Some(100.0), None)));
    }

    #[test]
    fn test_unrepresentable_bounds_are_open() {
        assert!(amount_in_range(2030.0, &AmountRange::new(None, Some(1e30))));
        assert!(amount_in_range(2030.0, &AmountRange::new(Some(f64::NAN), None)));
        assert!(amount_in_range(
            2030.0,
            &AmountRange::new(Some(f64::NEG_INFINITY), Some(f64::INFINITY))
        ));
        assert!(!amount_in_range(2030.01, &AmountRange::new(Some(1e30), Some(2030.0))));
        assert_eq!(try_decimal(f64::NAN), None);
        assert_eq!(try_decimal(1e30), None);
    }

    #[test]
    fn test_format_currency() {
        assert_eq!(format_currency(2030.0), "$2,030");
        assert_eq!(format_currency(5340.0), "$5,340");
        assert_eq!(format_currency(625.0), "$625");
        assert_eq!(format_currency(1234567.5), "$1,234,567.5");
        assert_eq!(format_currency(0.0), "$0");
        assert_eq!(format_currency(-1250.0), "-$1,250");
        assert_eq!(format_currency(10.256), "$10.26");
    }
}
