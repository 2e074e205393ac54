//! Supplier models

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Configured bounds for a supplier's total-solids pricing rate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TsRateBounds {
    pub min: Decimal,
    pub max: Decimal,
}

impl TsRateBounds {
    pub fn new(min: Decimal, max: Decimal) -> Self {
        Self { min, max }
    }

    /// Whether a rate falls inside the bounds (inclusive).
    pub fn contains(&self, rate: Decimal) -> bool {
        rate >= self.min && rate <= self.max
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounds_inclusive() {
        let bounds = TsRateBounds::new(Decimal::from(10), Decimal::from(300));
        assert!(bounds.contains(Decimal::from(10)));
        assert!(bounds.contains(Decimal::from(300)));
        assert!(bounds.contains(Decimal::from(150)));
        assert!(!bounds.contains(Decimal::from(9)));
        assert!(!bounds.contains(Decimal::from(301)));
    }
}
