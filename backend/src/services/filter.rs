//! Query filter construction for list and history reads
//!
//! Optional request parameters (date range, product) become SQL predicates
//! here. Date bounds are always bound parameters; the product filter resolves
//! through the [`Product`] allow-list, so the only identifier ever spliced
//! into query text is a static column name.

use crate::models::Product;
use shared::types::DateRange;

/// Filter for production list and history reads.
///
/// Queries using this filter bind `range.start` as `$1` and `range.end` as
/// `$2` against `($n::date IS NULL OR ...)` predicates, and append
/// [`ProductionFilter::product_predicate`] to the WHERE clause.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProductionFilter {
    pub range: DateRange,
    pub product: Option<Product>,
}

impl ProductionFilter {
    /// Build a filter from raw query parameters.
    ///
    /// An unrecognized product value never affects query construction.
    pub fn from_params(
        start_date: Option<&str>,
        end_date: Option<&str>,
        product: Option<&str>,
    ) -> Self {
        Self {
            range: DateRange::from_params(start_date, end_date),
            product: product.and_then(Product::from_param),
        }
    }

    /// SQL fragment requiring the selected product's quantity to be present
    /// and positive; empty when no product is selected.
    pub fn product_predicate(&self) -> String {
        match self.product {
            Some(product) => {
                let column = product.quantity_column();
                format!(" AND {} IS NOT NULL AND {} > 0", column, column)
            }
            None => String::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_empty_filter() {
        let filter = ProductionFilter::from_params(None, None, None);
        assert!(filter.range.is_unbounded());
        assert_eq!(filter.product_predicate(), "");
    }

    #[test]
    fn test_date_bounds_parse() {
        let filter = ProductionFilter::from_params(Some("2024-01-01"), Some("2024-01-31"), None);
        assert_eq!(
            filter.range.start,
            Some(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap())
        );
        assert_eq!(
            filter.range.end,
            Some(NaiveDate::from_ymd_opt(2024, 1, 31).unwrap())
        );
    }

    #[test]
    fn test_one_sided_range() {
        let filter = ProductionFilter::from_params(None, Some("2024-01-31"), None);
        assert_eq!(filter.range.start, None);
        assert!(filter.range.end.is_some());
    }

    #[test]
    fn test_known_product_scopes_by_quantity_column() {
        let filter = ProductionFilter::from_params(None, None, Some("paneer"));
        assert_eq!(
            filter.product_predicate(),
            " AND paneer_quantity IS NOT NULL AND paneer_quantity > 0"
        );
    }

    #[test]
    fn test_operator_syntax_in_product_is_ignored() {
        for hostile in ["$where", "milk$gt", "milk_quantity'; --", "a$b"] {
            let filter = ProductionFilter::from_params(None, None, Some(hostile));
            assert!(filter.product.is_none());
            assert_eq!(filter.product_predicate(), "");
        }
    }

    #[test]
    fn test_unknown_product_is_ignored() {
        let filter = ProductionFilter::from_params(Some("2024-01-01"), None, Some("cheese"));
        assert!(filter.range.start.is_some());
        assert_eq!(filter.product_predicate(), "");
    }
}
