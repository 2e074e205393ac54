//! Production service for recording and listing daily production entries

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use sqlx::PgPool;
use uuid::Uuid;

use crate::error::{AppError, AppResult};
use crate::services::filter::ProductionFilter;
use shared::validation::{parse_entry_date, parse_quantity};

/// The main list view is capped; history reads are not.
const LIST_LIMIT: i64 = 100;

const PRODUCTION_COLUMNS: &str = "id, date, batch, milk_quantity, curd_quantity, \
     paneer_quantity, low_fat_paneer_quantity, butter_quantity, cream_quantity, \
     ghee_quantity, created_at, updated_at";

/// Production service for managing daily production entries
#[derive(Clone)]
pub struct ProductionService {
    db: PgPool,
}

/// A stored production entry
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct ProductionEntry {
    pub id: Uuid,
    pub date: NaiveDate,
    pub batch: String,
    pub milk_quantity: Option<Decimal>,
    pub curd_quantity: Option<Decimal>,
    pub paneer_quantity: Option<Decimal>,
    pub low_fat_paneer_quantity: Option<Decimal>,
    pub butter_quantity: Option<Decimal>,
    pub cream_quantity: Option<Decimal>,
    pub ghee_quantity: Option<Decimal>,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
    #[serde(rename = "updatedAt")]
    pub updated_at: DateTime<Utc>,
}

/// Input for recording a production entry.
///
/// Quantity fields arrive from forms as either numbers or strings; anything
/// that does not parse as a non-negative number is stored as absent.
#[derive(Debug, Deserialize)]
pub struct RecordProductionInput {
    pub date: Option<String>,
    pub batch: Option<String>,
    #[serde(default)]
    pub milk_quantity: Option<Value>,
    #[serde(default)]
    pub curd_quantity: Option<Value>,
    #[serde(default)]
    pub paneer_quantity: Option<Value>,
    #[serde(default)]
    pub low_fat_paneer_quantity: Option<Value>,
    #[serde(default)]
    pub butter_quantity: Option<Value>,
    #[serde(default)]
    pub cream_quantity: Option<Value>,
    #[serde(default)]
    pub ghee_quantity: Option<Value>,
}

/// Disambiguation suffix for a batch label that collides with a stored one.
/// `entries_on_date` is the number of entries already sharing the candidate's
/// own date.
fn renamed_batch(original: &str, entries_on_date: i64) -> String {
    format!("{} ({})", original, entries_on_date + 1)
}

impl ProductionService {
    /// Create a new ProductionService instance
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }

    /// List production entries matching a filter, newest first, capped at 100
    pub async fn list_entries(&self, filter: &ProductionFilter) -> AppResult<Vec<ProductionEntry>> {
        let query = format!(
            r#"
            SELECT {columns}
            FROM productions
            WHERE ($1::date IS NULL OR date >= $1)
              AND ($2::date IS NULL OR date <= $2){product}
            ORDER BY date DESC, created_at DESC
            LIMIT $3
            "#,
            columns = PRODUCTION_COLUMNS,
            product = filter.product_predicate(),
        );

        let entries = sqlx::query_as::<_, ProductionEntry>(&query)
            .bind(filter.range.start)
            .bind(filter.range.end)
            .bind(LIST_LIMIT)
            .fetch_all(&self.db)
            .await?;

        Ok(entries)
    }

    /// Unbounded history read matching a filter, newest first
    pub async fn history(&self, filter: &ProductionFilter) -> AppResult<Vec<ProductionEntry>> {
        let query = format!(
            r#"
            SELECT {columns}
            FROM productions
            WHERE ($1::date IS NULL OR date >= $1)
              AND ($2::date IS NULL OR date <= $2){product}
            ORDER BY date DESC, created_at DESC
            "#,
            columns = PRODUCTION_COLUMNS,
            product = filter.product_predicate(),
        );

        let entries = sqlx::query_as::<_, ProductionEntry>(&query)
            .bind(filter.range.start)
            .bind(filter.range.end)
            .fetch_all(&self.db)
            .await?;

        Ok(entries)
    }

    /// Record a production entry, disambiguating the batch label on collision.
    ///
    /// Existence is checked against all stored batch labels; the suffix counts
    /// only entries sharing the candidate's own date. A renamed label that
    /// still collides with one stored under another date is rejected by the
    /// unique index and surfaces as a conflict.
    pub async fn record_entry(&self, input: RecordProductionInput) -> AppResult<ProductionEntry> {
        let date_raw = input
            .date
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .ok_or_else(|| AppError::Validation {
                field: "date".to_string(),
                message: "Date is required".to_string(),
            })?;
        let date = parse_entry_date(date_raw).ok_or_else(|| AppError::Validation {
            field: "date".to_string(),
            message: "Date must be in YYYY-MM-DD format".to_string(),
        })?;

        let batch = input
            .batch
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .ok_or_else(|| AppError::Validation {
                field: "batch".to_string(),
                message: "Batch name is required".to_string(),
            })?
            .to_string();

        let milk_quantity = input.milk_quantity.as_ref().and_then(parse_quantity);
        let curd_quantity = input.curd_quantity.as_ref().and_then(parse_quantity);
        let paneer_quantity = input.paneer_quantity.as_ref().and_then(parse_quantity);
        let low_fat_paneer_quantity = input
            .low_fat_paneer_quantity
            .as_ref()
            .and_then(parse_quantity);
        let butter_quantity = input.butter_quantity.as_ref().and_then(parse_quantity);
        let cream_quantity = input.cream_quantity.as_ref().and_then(parse_quantity);
        let ghee_quantity = input.ghee_quantity.as_ref().and_then(parse_quantity);

        let collision = sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM productions WHERE batch = $1",
        )
        .bind(&batch)
        .fetch_one(&self.db)
        .await?
            > 0;

        let final_batch = if collision {
            let entries_on_date =
                sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM productions WHERE date = $1")
                    .bind(date)
                    .fetch_one(&self.db)
                    .await?;
            renamed_batch(&batch, entries_on_date)
        } else {
            batch
        };

        let entry = sqlx::query_as::<_, ProductionEntry>(&format!(
            r#"
            INSERT INTO productions (date, batch, milk_quantity, curd_quantity, paneer_quantity,
                                     low_fat_paneer_quantity, butter_quantity, cream_quantity,
                                     ghee_quantity)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            RETURNING {}
            "#,
            PRODUCTION_COLUMNS
        ))
        .bind(date)
        .bind(&final_batch)
        .bind(milk_quantity)
        .bind(curd_quantity)
        .bind(paneer_quantity)
        .bind(low_fat_paneer_quantity)
        .bind(butter_quantity)
        .bind(cream_quantity)
        .bind(ghee_quantity)
        .fetch_one(&self.db)
        .await
        .map_err(|err| AppError::conflict_on_unique(err, "batch"))?;

        Ok(entry)
    }

    /// Delete a production entry by id
    pub async fn delete_entry(&self, id: Uuid) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM productions WHERE id = $1")
            .bind(id)
            .execute(&self.db)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Production entry".to_string()));
        }

        Ok(())
    }
}
