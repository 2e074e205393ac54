//! Procurement models

use rust_decimal::{Decimal, RoundingStrategy};

/// Compute the payable amount for a procurement.
///
/// `milk_quantity * rate`, rounded half-away-from-zero to 2 decimal places.
/// The server always computes this itself; a caller-supplied total is
/// discarded.
pub fn calculate_total_amount(milk_quantity: Decimal, rate: Decimal) -> Decimal {
    let mut total =
        (milk_quantity * rate).round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    // Serialize with both decimal places, e.g. "5000.00" rather than "5000".
    total.rescale(2);
    total
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_amount_whole_numbers() {
        let total = calculate_total_amount(Decimal::from(100), Decimal::from(50));
        assert_eq!(total, "5000.00".parse().unwrap());
        assert_eq!(total.to_string(), "5000.00");
    }

    #[test]
    fn test_total_amount_rounds_to_two_decimals() {
        let total = calculate_total_amount("12.345".parse().unwrap(), Decimal::from(10));
        assert_eq!(total, "123.45".parse().unwrap());
    }

    #[test]
    fn test_total_amount_midpoint_rounds_away_from_zero() {
        let total = calculate_total_amount("3.335".parse().unwrap(), Decimal::ONE);
        assert_eq!(total, "3.34".parse().unwrap());
    }

    #[test]
    fn test_total_amount_fractional_rate() {
        let total = calculate_total_amount("41.7".parse().unwrap(), "36.25".parse().unwrap());
        // 41.7 * 36.25 = 1511.625 -> 1511.63
        assert_eq!(total, "1511.63".parse().unwrap());
    }
}
