//! HTTP handlers for the Dairy Production Management Platform

pub mod health;
pub mod procurement;
pub mod production;
pub mod supplier;

pub use health::*;
pub use procurement::*;
pub use production::*;
pub use supplier::*;

use serde::Deserialize;
use uuid::Uuid;

use crate::error::AppError;

/// Query parameter carrying a record identifier, e.g. `DELETE /supplier?id=`
#[derive(Debug, Deserialize)]
pub struct IdQuery {
    pub id: Option<String>,
}

/// Parse a required UUID query parameter.
pub(crate) fn require_uuid(raw: Option<&str>, field: &str) -> Result<Uuid, AppError> {
    let raw = raw
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .ok_or_else(|| AppError::Validation {
            field: field.to_string(),
            message: format!("Missing {} query parameter", field),
        })?;

    Uuid::parse_str(raw).map_err(|_| AppError::Validation {
        field: field.to_string(),
        message: format!("{} must be a valid UUID", field),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_require_uuid_valid() {
        let id = Uuid::new_v4();
        assert_eq!(require_uuid(Some(&id.to_string()), "id").unwrap(), id);
    }

    #[test]
    fn test_require_uuid_missing_or_malformed() {
        assert!(require_uuid(None, "id").is_err());
        assert!(require_uuid(Some(""), "id").is_err());
        assert!(require_uuid(Some("not-a-uuid"), "id").is_err());
    }
}
