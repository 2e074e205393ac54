//! Production HTTP handlers

use axum::{
    extract::{Query, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::Deserialize;

use crate::error::AppResult;
use crate::services::export;
use crate::services::filter::ProductionFilter;
use crate::services::production::{ProductionService, RecordProductionInput};
use crate::AppState;

use super::{require_uuid, IdQuery};

#[derive(Debug, Deserialize)]
pub struct ProductionQuery {
    #[serde(rename = "startDate")]
    pub start_date: Option<String>,
    #[serde(rename = "endDate")]
    pub end_date: Option<String>,
    pub product: Option<String>,
    /// "json" (default) or "csv"; only honored by the history endpoint
    pub format: Option<String>,
}

impl ProductionQuery {
    fn filter(&self) -> ProductionFilter {
        ProductionFilter::from_params(
            self.start_date.as_deref(),
            self.end_date.as_deref(),
            self.product.as_deref(),
        )
    }
}

/// List production entries (filtered, newest first, capped at 100)
pub async fn list_production(
    State(state): State<AppState>,
    Query(query): Query<ProductionQuery>,
) -> AppResult<Json<serde_json::Value>> {
    let service = ProductionService::new(state.db.clone());
    let entries = service.list_entries(&query.filter()).await?;
    Ok(Json(serde_json::json!({ "entries": entries })))
}

/// Record a production entry with duplicate-aware batch naming
pub async fn record_production(
    State(state): State<AppState>,
    Json(input): Json<RecordProductionInput>,
) -> AppResult<impl IntoResponse> {
    let service = ProductionService::new(state.db.clone());
    let entry = service.record_entry(input).await?;
    Ok((StatusCode::CREATED, Json(entry)))
}

/// Delete a production entry by id
pub async fn delete_production(
    State(state): State<AppState>,
    Query(query): Query<IdQuery>,
) -> AppResult<Json<serde_json::Value>> {
    let id = require_uuid(query.id.as_deref(), "id")?;
    let service = ProductionService::new(state.db.clone());
    service.delete_entry(id).await?;
    Ok(Json(serde_json::json!({ "deleted": true })))
}

/// Unbounded production history, filterable and exportable as CSV
pub async fn production_history(
    State(state): State<AppState>,
    Query(query): Query<ProductionQuery>,
) -> AppResult<Response> {
    let service = ProductionService::new(state.db.clone());
    let entries = service.history(&query.filter()).await?;

    if query.format.as_deref() == Some("csv") {
        let csv = export::to_csv(&entries)?;
        Ok((
            [
                (header::CONTENT_TYPE, "text/csv"),
                (
                    header::CONTENT_DISPOSITION,
                    "attachment; filename=\"production_history.csv\"",
                ),
            ],
            csv,
        )
            .into_response())
    } else {
        Ok(Json(serde_json::json!({ "history": entries })).into_response())
    }
}
