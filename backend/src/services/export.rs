//! CSV export for history reads

use serde::Serialize;

use crate::error::{AppError, AppResult};

/// Serialize rows to a CSV document, header row included.
pub fn to_csv<T: Serialize>(rows: &[T]) -> AppResult<String> {
    let mut writer = csv::Writer::from_writer(vec![]);
    for row in rows {
        writer
            .serialize(row)
            .map_err(|e| AppError::Internal(format!("CSV serialization error: {}", e)))?;
    }
    let bytes = writer
        .into_inner()
        .map_err(|e| AppError::Internal(format!("CSV writer error: {}", e)))?;
    String::from_utf8(bytes).map_err(|e| AppError::Internal(format!("UTF-8 conversion error: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Serialize)]
    struct Row {
        batch: String,
        milk_quantity: Option<i64>,
    }

    #[test]
    fn test_to_csv_writes_header_and_rows() {
        let rows = vec![
            Row {
                batch: "B1".to_string(),
                milk_quantity: Some(100),
            },
            Row {
                batch: "B2".to_string(),
                milk_quantity: None,
            },
        ];

        let csv = to_csv(&rows).unwrap();
        let mut lines = csv.lines();
        assert_eq!(lines.next(), Some("batch,milk_quantity"));
        assert_eq!(lines.next(), Some("B1,100"));
        assert_eq!(lines.next(), Some("B2,"));
    }

    #[test]
    fn test_to_csv_empty_input() {
        let rows: Vec<Row> = vec![];
        assert_eq!(to_csv(&rows).unwrap(), "");
    }
}
