//! Procurement service for recording supplier milk deliveries

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use sqlx::PgPool;
use uuid::Uuid;

use crate::error::{AppError, AppResult};
use crate::models::calculate_total_amount;
use shared::types::DateRange;
use shared::validation::{decimal_from_value, parse_entry_date, validate_quality_percentage};

/// Row cap for the bulk history read.
const HISTORY_ROW_CAP: i64 = 5000;

const PROCUREMENT_COLUMNS: &str = "id, supplier_id, date, milk_quantity, fat_percentage, \
     snf_percentage, rate, total_amount, created_at, updated_at";

/// Procurement service for managing supplier milk deliveries
#[derive(Clone)]
pub struct ProcurementService {
    db: PgPool,
}

/// A stored procurement record
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Procurement {
    pub id: Uuid,
    pub supplier_id: Uuid,
    pub date: NaiveDate,
    pub milk_quantity: Decimal,
    pub fat_percentage: Option<Decimal>,
    pub snf_percentage: Option<Decimal>,
    pub rate: Decimal,
    pub total_amount: Decimal,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Projected procurement row for the bulk history view
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct ProcurementHistoryEntry {
    pub id: Uuid,
    pub supplier_id: Uuid,
    pub supplier_name: String,
    pub date: NaiveDate,
    pub milk_quantity: Decimal,
    pub fat_percentage: Option<Decimal>,
    pub snf_percentage: Option<Decimal>,
    pub rate: Decimal,
    pub total_amount: Decimal,
}

/// Input for recording a procurement.
///
/// Numeric fields arrive from forms as either numbers or strings. A caller
/// may send `totalAmount`, but the stored total is always computed here.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordProcurementInput {
    pub supplier_id: Option<String>,
    pub date: Option<String>,
    #[serde(default)]
    pub milk_quantity: Option<Value>,
    #[serde(default)]
    pub fat_percentage: Option<Value>,
    #[serde(default)]
    pub snf_percentage: Option<Value>,
    #[serde(default)]
    pub rate: Option<Value>,
    #[serde(default)]
    pub total_amount: Option<Value>,
}

fn validation_error(field: &str, message: &str) -> AppError {
    AppError::Validation {
        field: field.to_string(),
        message: message.to_string(),
    }
}

/// Parse an optional quality percentage; null and empty values count as absent.
fn optional_percentage(value: Option<&Value>, field: &str) -> AppResult<Option<Decimal>> {
    let Some(value) = value else {
        return Ok(None);
    };
    if value.is_null() {
        return Ok(None);
    }
    if let Value::String(s) = value {
        if s.trim().is_empty() {
            return Ok(None);
        }
    }

    let parsed = decimal_from_value(value)
        .ok_or_else(|| validation_error(field, "Percentage must be a number"))?;
    validate_quality_percentage(parsed).map_err(|msg| validation_error(field, msg))?;
    Ok(Some(parsed))
}

impl ProcurementService {
    /// Create a new ProcurementService instance
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }

    /// List procurements for one supplier, newest first
    pub async fn list_by_supplier(&self, supplier_id: Uuid) -> AppResult<Vec<Procurement>> {
        let procurements = sqlx::query_as::<_, Procurement>(&format!(
            r#"
            SELECT {}
            FROM procurements
            WHERE supplier_id = $1
            ORDER BY date DESC, created_at DESC
            "#,
            PROCUREMENT_COLUMNS
        ))
        .bind(supplier_id)
        .fetch_all(&self.db)
        .await?;

        Ok(procurements)
    }

    /// Record a procurement for an existing supplier.
    ///
    /// Preconditions are checked in order, each as a distinct failure:
    /// required fields, well-formed supplier id, positive quantity and rate,
    /// percentages within [0, 100]. The referenced supplier must exist.
    pub async fn record_procurement(
        &self,
        input: RecordProcurementInput,
    ) -> AppResult<Procurement> {
        let supplier_raw = input
            .supplier_id
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .ok_or_else(|| validation_error("supplierId", "Supplier id is required"))?;
        let date_raw = input
            .date
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .ok_or_else(|| validation_error("date", "Date is required"))?;
        let milk_raw = input
            .milk_quantity
            .as_ref()
            .ok_or_else(|| validation_error("milkQuantity", "Milk quantity is required"))?;
        let rate_raw = input
            .rate
            .as_ref()
            .ok_or_else(|| validation_error("rate", "Rate is required"))?;

        let supplier_id = Uuid::parse_str(supplier_raw)
            .map_err(|_| validation_error("supplierId", "Supplier id is malformed"))?;
        let date = parse_entry_date(date_raw)
            .ok_or_else(|| validation_error("date", "Date must be in YYYY-MM-DD format"))?;

        let milk_quantity = decimal_from_value(milk_raw)
            .filter(|quantity| *quantity > Decimal::ZERO)
            .ok_or_else(|| {
                validation_error("milkQuantity", "Milk quantity must be a positive number")
            })?;
        let rate = decimal_from_value(rate_raw)
            .filter(|rate| *rate > Decimal::ZERO)
            .ok_or_else(|| validation_error("rate", "Rate must be a positive number"))?;

        let fat_percentage = optional_percentage(input.fat_percentage.as_ref(), "fatPercentage")?;
        let snf_percentage = optional_percentage(input.snf_percentage.as_ref(), "snfPercentage")?;

        let supplier_exists =
            sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM suppliers WHERE id = $1")
                .bind(supplier_id)
                .fetch_one(&self.db)
                .await?
                > 0;
        if !supplier_exists {
            return Err(AppError::NotFound("Supplier".to_string()));
        }

        // Caller-supplied totals are discarded.
        let total_amount = calculate_total_amount(milk_quantity, rate);

        let procurement = sqlx::query_as::<_, Procurement>(&format!(
            r#"
            INSERT INTO procurements (supplier_id, date, milk_quantity, fat_percentage,
                                      snf_percentage, rate, total_amount)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING {}
            "#,
            PROCUREMENT_COLUMNS
        ))
        .bind(supplier_id)
        .bind(date)
        .bind(milk_quantity)
        .bind(fat_percentage)
        .bind(snf_percentage)
        .bind(rate)
        .bind(total_amount)
        .fetch_one(&self.db)
        .await?;

        // Best-effort pointer update; the procurement row is already stored
        // and a failure here is logged, not rolled back.
        if let Err(err) = sqlx::query(
            "UPDATE suppliers SET last_procurement_date = $1, updated_at = NOW() WHERE id = $2",
        )
        .bind(date)
        .bind(supplier_id)
        .execute(&self.db)
        .await
        {
            tracing::warn!(
                supplier_id = %supplier_id,
                error = %err,
                "failed to update supplier last procurement date"
            );
        }

        Ok(procurement)
    }

    /// Bulk history read across suppliers, date-range filtered, capped
    pub async fn history(&self, range: &DateRange) -> AppResult<Vec<ProcurementHistoryEntry>> {
        let entries = sqlx::query_as::<_, ProcurementHistoryEntry>(
            r#"
            SELECT p.id, p.supplier_id, s.supplier_name, p.date, p.milk_quantity,
                   p.fat_percentage, p.snf_percentage, p.rate, p.total_amount
            FROM procurements p
            JOIN suppliers s ON s.id = p.supplier_id
            WHERE ($1::date IS NULL OR p.date >= $1)
              AND ($2::date IS NULL OR p.date <= $2)
            ORDER BY p.date DESC, p.created_at DESC
            LIMIT $3
            "#,
        )
        .bind(range.start)
        .bind(range.end)
        .bind(HISTORY_ROW_CAP)
        .fetch_all(&self.db)
        .await?;

        Ok(entries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_optional_percentage_absent_forms() {
        assert_eq!(optional_percentage(None, "fatPercentage").unwrap(), None);
        assert_eq!(
            optional_percentage(Some(&json!(null)), "fatPercentage").unwrap(),
            None
        );
        assert_eq!(
            optional_percentage(Some(&json!("")), "fatPercentage").unwrap(),
            None
        );
    }

    #[test]
    fn test_optional_percentage_parses_and_bounds() {
        assert_eq!(
            optional_percentage(Some(&json!("6.5")), "fatPercentage").unwrap(),
            Some("6.5".parse().unwrap())
        );
        assert!(optional_percentage(Some(&json!(101)), "fatPercentage").is_err());
        assert!(optional_percentage(Some(&json!(-1)), "snfPercentage").is_err());
        assert!(optional_percentage(Some(&json!("abc")), "snfPercentage").is_err());
    }
}
