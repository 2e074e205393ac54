//! WebAssembly module for the Dairy Production Management Platform
//!
//! Exposes the shared validation rules and derived-amount calculations to the
//! browser so forms can validate before submission:
//! - Supplier field checks (name, phone number, address, TS rate)
//! - Procurement quality percentage checks and total calculation
//! - Production quantity and date parsing

use rust_decimal::Decimal;
use serde_json::Value;
use wasm_bindgen::prelude::*;

// Re-export shared types for use in JavaScript
pub use shared::models::*;
pub use shared::types::*;
pub use shared::validation::*;

/// Check a supplier name (required, at least 2 characters)
#[wasm_bindgen]
pub fn check_supplier_name(name: &str) -> bool {
    validate_supplier_name(name).is_ok()
}

/// Check a supplier phone number (exactly 10 digits)
#[wasm_bindgen]
pub fn check_supplier_number(number: &str) -> bool {
    validate_supplier_number(number).is_ok()
}

/// Check a supplier address (at least 5 characters)
#[wasm_bindgen]
pub fn check_supplier_address(address: &str) -> bool {
    validate_supplier_address(address).is_ok()
}

/// Check a TS rate against the bounds the form was configured with
#[wasm_bindgen]
pub fn check_ts_rate(rate: f64, min: f64, max: f64) -> bool {
    let (Ok(rate), Ok(min), Ok(max)) = (
        Decimal::try_from(rate),
        Decimal::try_from(min),
        Decimal::try_from(max),
    ) else {
        return false;
    };
    validate_ts_rate(rate, &TsRateBounds::new(min, max)).is_ok()
}

/// Check a fat/SNF quality percentage (0-100)
#[wasm_bindgen]
pub fn check_quality_percentage(value: f64) -> bool {
    match Decimal::try_from(value) {
        Ok(value) => validate_quality_percentage(value).is_ok(),
        Err(_) => false,
    }
}

/// Whether a product name is one the platform records
#[wasm_bindgen]
pub fn is_known_product(name: &str) -> bool {
    Product::from_param(name).is_some()
}

/// Check a `YYYY-MM-DD` entry date
#[wasm_bindgen]
pub fn entry_date_is_valid(raw: &str) -> bool {
    parse_entry_date(raw).is_some()
}

/// Parse a quantity form field the way the server does.
///
/// Returns undefined for anything that is not a non-negative number.
#[wasm_bindgen]
pub fn parse_quantity_input(raw: &str) -> Option<f64> {
    parse_quantity(&Value::String(raw.to_string()))
        .and_then(|quantity| quantity.to_string().parse().ok())
}

/// Compute a procurement total: milk quantity times rate, 2 decimal places
#[wasm_bindgen]
pub fn calculate_procurement_total(milk_quantity: f64, rate: f64) -> f64 {
    let (Ok(milk_quantity), Ok(rate)) = (Decimal::try_from(milk_quantity), Decimal::try_from(rate))
    else {
        return 0.0;
    };
    calculate_total_amount(milk_quantity, rate)
        .to_string()
        .parse()
        .unwrap_or(0.0)
}
