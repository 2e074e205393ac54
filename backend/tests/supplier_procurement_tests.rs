//! Supplier and procurement property tests
//!
//! Covers:
//! - Total amount derivation (quantity x rate, 2 decimal places, caller
//!   totals discarded)
//! - Supplier phone-number validation and uniqueness
//! - Quality percentage and TS-rate bounds
//! - Date-range filtering

use proptest::prelude::*;
use rust_decimal::{Decimal, RoundingStrategy};

use shared::models::{calculate_total_amount, TsRateBounds};
use shared::types::DateRange;
use shared::validation::{
    validate_quality_percentage, validate_supplier_number, validate_ts_rate,
};

// ============================================================================
// Helper Functions (mirroring service implementations)
// ============================================================================

/// Uniqueness check the supplier service performs before a write: a non-empty
/// phone number may appear on at most one other record.
fn number_conflicts(candidate: Option<&str>, stored: &[Option<String>]) -> bool {
    match candidate {
        Some(number) if !number.is_empty() => stored
            .iter()
            .any(|existing| existing.as_deref() == Some(number)),
        _ => false,
    }
}

// ============================================================================
// Property Test Strategies
// ============================================================================

/// Milk quantities in liters: 0.1 to 10000.0
fn milk_quantity_strategy() -> impl Strategy<Value = Decimal> {
    (1..=100_000i64).prop_map(|n| Decimal::new(n, 1))
}

/// Rates per liter: 0.01 to 200.00
fn rate_strategy() -> impl Strategy<Value = Decimal> {
    (1..=20_000i64).prop_map(|n| Decimal::new(n, 2))
}

fn ten_digit_number_strategy() -> impl Strategy<Value = String> {
    "[0-9]{10}"
}

// ============================================================================
// Property-Based Tests
// ============================================================================

proptest! {
    /// The stored total is always quantity x rate rounded to 2 decimals,
    /// whatever total the caller claims.
    #[test]
    fn test_total_amount_derivation(
        milk_quantity in milk_quantity_strategy(),
        rate in rate_strategy(),
        claimed_total in 0..1_000_000i64
    ) {
        let expected = (milk_quantity * rate)
            .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
        let total = calculate_total_amount(milk_quantity, rate);

        prop_assert_eq!(total, expected);
        prop_assert_eq!(total.scale(), 2, "total always carries 2 decimal places");
        // The claimed total never participates in the calculation.
        prop_assert_eq!(total, calculate_total_amount(milk_quantity, rate));
        let _ = claimed_total;
    }

    /// Exactly-10-digit numbers validate; everything else is rejected.
    #[test]
    fn test_ten_digit_numbers_validate(number in ten_digit_number_strategy()) {
        prop_assert!(validate_supplier_number(&number).is_ok());
    }

    #[test]
    fn test_wrong_length_numbers_rejected(number in "[0-9]{1,9}|[0-9]{11,15}") {
        prop_assert!(validate_supplier_number(&number).is_err());
    }

    #[test]
    fn test_non_digit_numbers_rejected(number in "[0-9]{4}[a-z-][0-9]{5}") {
        prop_assert!(validate_supplier_number(&number).is_err());
    }

    /// A duplicate non-empty number always conflicts; empty numbers never do.
    #[test]
    fn test_number_uniqueness(number in ten_digit_number_strategy()) {
        let stored = vec![Some(number.clone()), None, None];
        prop_assert!(number_conflicts(Some(&number), &stored));
        prop_assert!(!number_conflicts(Some(""), &stored));
        prop_assert!(!number_conflicts(None, &stored));

        let no_numbers: Vec<Option<String>> = vec![None, None];
        prop_assert!(!number_conflicts(Some(&number), &no_numbers));
    }

    /// Percentages validate exactly on [0, 100].
    #[test]
    fn test_percentage_bounds(value in -50.0f64..150.0) {
        let decimal = Decimal::try_from(value).unwrap();
        let valid = validate_quality_percentage(decimal).is_ok();
        prop_assert_eq!(valid, (0.0..=100.0).contains(&value));
    }

    /// TS rates validate exactly on the configured bounds, inclusive.
    #[test]
    fn test_ts_rate_bounds(rate in 0..1000i64) {
        let bounds = TsRateBounds::new(Decimal::from(100), Decimal::from(400));
        let valid = validate_ts_rate(Decimal::from(rate), &bounds).is_ok();
        prop_assert_eq!(valid, (100..=400).contains(&rate));
    }

    /// A date is inside a range exactly when both bounds admit it.
    #[test]
    fn test_date_range_membership(
        (start, end, probe) in (0u32..3000, 0u32..3000, 0u32..3000)
    ) {
        let base = chrono::NaiveDate::from_ymd_opt(2020, 1, 1).unwrap();
        let day = |offset: u32| base + chrono::Days::new(offset as u64);

        let range = DateRange::new(Some(day(start)), Some(day(end)));
        let inside = probe >= start && probe <= end;
        prop_assert_eq!(range.contains(day(probe)), inside);
    }
}

// ============================================================================
// Unit Tests: Total Amount
// ============================================================================

#[cfg(test)]
mod total_amount_tests {
    use super::*;

    #[test]
    fn test_reference_procurement() {
        // milkQuantity=100, rate=50 -> 5000.00
        let total = calculate_total_amount(Decimal::from(100), Decimal::from(50));
        assert_eq!(total, "5000.00".parse().unwrap());
        assert_eq!(total.to_string(), "5000.00");
    }

    #[test]
    fn test_rounding_half_away_from_zero() {
        let total = calculate_total_amount("0.105".parse().unwrap(), Decimal::from(10));
        assert_eq!(total, "1.05".parse().unwrap());

        let midpoint = calculate_total_amount("3.335".parse().unwrap(), Decimal::ONE);
        assert_eq!(midpoint, "3.34".parse().unwrap());
    }

    #[test]
    fn test_small_quantities() {
        let total = calculate_total_amount("0.5".parse().unwrap(), "36.25".parse().unwrap());
        assert_eq!(total, "18.13".parse().unwrap());
    }
}

// ============================================================================
// Unit Tests: Supplier Number Uniqueness
// ============================================================================

#[cfg(test)]
mod uniqueness_tests {
    use super::*;

    #[test]
    fn test_duplicate_number_conflicts() {
        let stored = vec![Some("9876543210".to_string())];
        assert!(number_conflicts(Some("9876543210"), &stored));
    }

    #[test]
    fn test_different_number_passes() {
        let stored = vec![Some("9876543210".to_string())];
        assert!(!number_conflicts(Some("9123456789"), &stored));
    }

    #[test]
    fn test_empty_numbers_never_conflict() {
        let stored = vec![None, None, None];
        assert!(!number_conflicts(Some(""), &stored));
        assert!(!number_conflicts(None, &stored));
    }
}

// ============================================================================
// Unit Tests: Date Range Filters
// ============================================================================

#[cfg(test)]
mod range_tests {
    use super::*;

    fn d(s: &str) -> chrono::NaiveDate {
        s.parse().unwrap()
    }

    #[test]
    fn test_one_sided_ranges() {
        let from_only = DateRange::new(Some(d("2024-06-01")), None);
        assert!(from_only.contains(d("2024-06-01")));
        assert!(from_only.contains(d("2025-01-01")));
        assert!(!from_only.contains(d("2024-05-31")));

        let until_only = DateRange::new(None, Some(d("2024-06-01")));
        assert!(until_only.contains(d("2024-06-01")));
        assert!(!until_only.contains(d("2024-06-02")));
    }

    #[test]
    fn test_unbounded_range_admits_everything() {
        let range = DateRange::default();
        assert!(range.is_unbounded());
        assert!(range.contains(d("1970-01-01")));
        assert!(range.contains(d("2999-12-31")));
    }
}
