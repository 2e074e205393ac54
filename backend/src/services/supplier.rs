//! Supplier service for supplier CRUD and phone-number uniqueness

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use sqlx::PgPool;
use uuid::Uuid;

use crate::error::{AppError, AppResult};
use crate::models::TsRateBounds;
use shared::validation::{
    decimal_from_value, validate_supplier_address, validate_supplier_name, validate_supplier_number,
    validate_supplier_type, validate_ts_rate,
};

const SUPPLIER_COLUMNS: &str = "id, supplier_name, supplier_type, supplier_number, \
     supplier_address, supplier_ts_rate, last_procurement_date, created_at, updated_at";

/// Supplier service for managing milk suppliers
#[derive(Clone)]
pub struct SupplierService {
    db: PgPool,
    ts_rate_bounds: TsRateBounds,
}

/// A stored supplier
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Supplier {
    pub id: Uuid,
    pub supplier_name: String,
    pub supplier_type: Option<String>,
    pub supplier_number: Option<String>,
    pub supplier_address: Option<String>,
    #[serde(rename = "supplierTSRate")]
    pub supplier_ts_rate: Decimal,
    pub last_procurement_date: Option<NaiveDate>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Input for creating a supplier
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateSupplierInput {
    pub supplier_name: Option<String>,
    pub supplier_type: Option<String>,
    pub supplier_number: Option<String>,
    pub supplier_address: Option<String>,
    #[serde(rename = "supplierTSRate", default)]
    pub supplier_ts_rate: Option<Value>,
}

/// Input for updating a supplier.
///
/// Only fields present in the request are touched; a present-but-empty
/// optional field clears the stored value.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateSupplierInput {
    pub supplier_name: Option<String>,
    pub supplier_type: Option<String>,
    pub supplier_number: Option<String>,
    pub supplier_address: Option<String>,
    #[serde(rename = "supplierTSRate", default)]
    pub supplier_ts_rate: Option<Value>,
}

fn validation_error(field: &str, message: &str) -> AppError {
    AppError::Validation {
        field: field.to_string(),
        message: message.to_string(),
    }
}

/// Trim an optional field; empty strings become absent.
fn normalize_optional(value: String) -> Option<String> {
    let trimmed = value.trim().to_string();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed)
    }
}

impl SupplierService {
    /// Create a new SupplierService instance
    pub fn new(db: PgPool, ts_rate_bounds: TsRateBounds) -> Self {
        Self { db, ts_rate_bounds }
    }

    /// List all suppliers, name ascending
    pub async fn list_suppliers(&self) -> AppResult<Vec<Supplier>> {
        let suppliers = sqlx::query_as::<_, Supplier>(&format!(
            "SELECT {} FROM suppliers ORDER BY supplier_name ASC",
            SUPPLIER_COLUMNS
        ))
        .fetch_all(&self.db)
        .await?;

        Ok(suppliers)
    }

    /// Get a supplier by id
    pub async fn get_supplier(&self, id: Uuid) -> AppResult<Supplier> {
        sqlx::query_as::<_, Supplier>(&format!(
            "SELECT {} FROM suppliers WHERE id = $1",
            SUPPLIER_COLUMNS
        ))
        .bind(id)
        .fetch_optional(&self.db)
        .await?
        .ok_or_else(|| AppError::NotFound("Supplier".to_string()))
    }

    /// Create a supplier
    pub async fn create_supplier(&self, input: CreateSupplierInput) -> AppResult<Supplier> {
        let supplier_name = input
            .supplier_name
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .ok_or_else(|| validation_error("supplierName", "Supplier name is required"))?
            .to_string();
        validate_supplier_name(&supplier_name)
            .map_err(|msg| validation_error("supplierName", msg))?;

        let supplier_type = input.supplier_type.and_then(normalize_optional);
        if let Some(supplier_type) = &supplier_type {
            validate_supplier_type(supplier_type)
                .map_err(|msg| validation_error("supplierType", msg))?;
        }

        let supplier_number = input.supplier_number.and_then(normalize_optional);
        if let Some(supplier_number) = &supplier_number {
            validate_supplier_number(supplier_number)
                .map_err(|msg| validation_error("supplierNumber", msg))?;
        }

        let supplier_address = input.supplier_address.and_then(normalize_optional);
        if let Some(supplier_address) = &supplier_address {
            validate_supplier_address(supplier_address)
                .map_err(|msg| validation_error("supplierAddress", msg))?;
        }

        let supplier_ts_rate = input
            .supplier_ts_rate
            .as_ref()
            .and_then(decimal_from_value)
            .ok_or_else(|| validation_error("supplierTSRate", "TS rate must be a number"))?;
        validate_ts_rate(supplier_ts_rate, &self.ts_rate_bounds)
            .map_err(|msg| validation_error("supplierTSRate", msg))?;

        if let Some(supplier_number) = &supplier_number {
            self.ensure_number_available(supplier_number, None).await?;
        }

        let supplier = sqlx::query_as::<_, Supplier>(&format!(
            r#"
            INSERT INTO suppliers (supplier_name, supplier_type, supplier_number,
                                   supplier_address, supplier_ts_rate)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING {}
            "#,
            SUPPLIER_COLUMNS
        ))
        .bind(&supplier_name)
        .bind(&supplier_type)
        .bind(&supplier_number)
        .bind(&supplier_address)
        .bind(supplier_ts_rate)
        .fetch_one(&self.db)
        .await
        .map_err(|err| AppError::conflict_on_unique(err, "supplierNumber"))?;

        Ok(supplier)
    }

    /// Update a supplier; fields absent from the input are left untouched
    pub async fn update_supplier(
        &self,
        id: Uuid,
        input: UpdateSupplierInput,
    ) -> AppResult<Supplier> {
        let existing = self.get_supplier(id).await?;

        let supplier_name = match input.supplier_name {
            Some(value) => {
                let value = value.trim().to_string();
                validate_supplier_name(&value)
                    .map_err(|msg| validation_error("supplierName", msg))?;
                value
            }
            None => existing.supplier_name,
        };

        let supplier_type = match input.supplier_type {
            Some(value) => {
                let value = normalize_optional(value);
                if let Some(value) = &value {
                    validate_supplier_type(value)
                        .map_err(|msg| validation_error("supplierType", msg))?;
                }
                value
            }
            None => existing.supplier_type,
        };

        let supplier_number = match input.supplier_number {
            Some(value) => {
                let value = normalize_optional(value);
                if let Some(value) = &value {
                    validate_supplier_number(value)
                        .map_err(|msg| validation_error("supplierNumber", msg))?;
                }
                value
            }
            None => existing.supplier_number,
        };

        let supplier_address = match input.supplier_address {
            Some(value) => {
                let value = normalize_optional(value);
                if let Some(value) = &value {
                    validate_supplier_address(value)
                        .map_err(|msg| validation_error("supplierAddress", msg))?;
                }
                value
            }
            None => existing.supplier_address,
        };

        let supplier_ts_rate = match input.supplier_ts_rate {
            Some(value) => {
                let rate = decimal_from_value(&value)
                    .ok_or_else(|| validation_error("supplierTSRate", "TS rate must be a number"))?;
                validate_ts_rate(rate, &self.ts_rate_bounds)
                    .map_err(|msg| validation_error("supplierTSRate", msg))?;
                rate
            }
            None => existing.supplier_ts_rate,
        };

        // Uniqueness check excludes the row being updated.
        if let Some(supplier_number) = &supplier_number {
            self.ensure_number_available(supplier_number, Some(id))
                .await?;
        }

        let supplier = sqlx::query_as::<_, Supplier>(&format!(
            r#"
            UPDATE suppliers
            SET supplier_name = $1, supplier_type = $2, supplier_number = $3,
                supplier_address = $4, supplier_ts_rate = $5, updated_at = NOW()
            WHERE id = $6
            RETURNING {}
            "#,
            SUPPLIER_COLUMNS
        ))
        .bind(&supplier_name)
        .bind(&supplier_type)
        .bind(&supplier_number)
        .bind(&supplier_address)
        .bind(supplier_ts_rate)
        .bind(id)
        .fetch_one(&self.db)
        .await
        .map_err(|err| AppError::conflict_on_unique(err, "supplierNumber"))?;

        Ok(supplier)
    }

    /// Delete a supplier by id; its procurements go with it
    pub async fn delete_supplier(&self, id: Uuid) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM suppliers WHERE id = $1")
            .bind(id)
            .execute(&self.db)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Supplier".to_string()));
        }

        Ok(())
    }

    async fn ensure_number_available(
        &self,
        supplier_number: &str,
        exclude: Option<Uuid>,
    ) -> AppResult<()> {
        let in_use = match exclude {
            Some(id) => {
                sqlx::query_scalar::<_, i64>(
                    "SELECT COUNT(*) FROM suppliers WHERE supplier_number = $1 AND id <> $2",
                )
                .bind(supplier_number)
                .bind(id)
                .fetch_one(&self.db)
                .await?
            }
            None => {
                sqlx::query_scalar::<_, i64>(
                    "SELECT COUNT(*) FROM suppliers WHERE supplier_number = $1",
                )
                .bind(supplier_number)
                .fetch_one(&self.db)
                .await?
            }
        };

        if in_use > 0 {
            return Err(AppError::DuplicateEntry("supplierNumber".to_string()));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_optional_trims_and_clears() {
        assert_eq!(normalize_optional("  Co-op  ".to_string()), Some("Co-op".to_string()));
        assert_eq!(normalize_optional("".to_string()), None);
        assert_eq!(normalize_optional("   ".to_string()), None);
    }
}
