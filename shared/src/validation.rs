//! Validation rules for the Dairy Production Management Platform
//!
//! The same rules run on the server before any write and in the browser
//! (through the WASM wrapper) before a form is submitted.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde_json::Value;

use crate::models::TsRateBounds;

// ============================================================================
// Supplier Validations
// ============================================================================

/// Validate a supplier name (required, at least 2 characters)
pub fn validate_supplier_name(name: &str) -> Result<(), &'static str> {
    if name.trim().chars().count() < 2 {
        return Err("Supplier name must be at least 2 characters");
    }
    Ok(())
}

/// Validate a supplier type (at least 2 characters when present)
pub fn validate_supplier_type(supplier_type: &str) -> Result<(), &'static str> {
    if supplier_type.trim().chars().count() < 2 {
        return Err("Supplier type must be at least 2 characters");
    }
    Ok(())
}

/// Validate a supplier phone number: exactly 10 digits, nothing else
pub fn validate_supplier_number(number: &str) -> Result<(), &'static str> {
    let number = number.trim();
    if number.len() != 10 || !number.chars().all(|c| c.is_ascii_digit()) {
        return Err("Supplier number must be exactly 10 digits");
    }
    Ok(())
}

/// Validate a supplier address (at least 5 characters when present)
pub fn validate_supplier_address(address: &str) -> Result<(), &'static str> {
    if address.trim().chars().count() < 5 {
        return Err("Supplier address must be at least 5 characters");
    }
    Ok(())
}

/// Validate a total-solids rate against the configured bounds
pub fn validate_ts_rate(rate: Decimal, bounds: &TsRateBounds) -> Result<(), &'static str> {
    if !bounds.contains(rate) {
        return Err("TS rate is outside the allowed range");
    }
    Ok(())
}

// ============================================================================
// Procurement Validations
// ============================================================================

/// Validate a fat/SNF quality percentage (0-100)
pub fn validate_quality_percentage(value: Decimal) -> Result<(), &'static str> {
    if value < Decimal::ZERO || value > Decimal::from(100) {
        return Err("Percentage must be between 0 and 100");
    }
    Ok(())
}

// ============================================================================
// Form Input Parsing
// ============================================================================

/// Parse a `YYYY-MM-DD` entry date
pub fn parse_entry_date(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d").ok()
}

/// Parse a numeric form value that may arrive as a JSON number or a string.
///
/// Returns None for anything that is not a finite number.
pub fn decimal_from_value(value: &Value) -> Option<Decimal> {
    match value {
        Value::Number(n) => n.to_string().parse::<Decimal>().ok(),
        Value::String(s) => {
            let s = s.trim();
            if s.is_empty() {
                None
            } else {
                s.parse::<Decimal>().ok()
            }
        }
        _ => None,
    }
}

/// Parse an optional production quantity field.
///
/// Values that are missing, malformed, or negative are absorbed as absent
/// rather than failing the whole request.
pub fn parse_quantity(value: &Value) -> Option<Decimal> {
    decimal_from_value(value).filter(|quantity| *quantity >= Decimal::ZERO)
}
