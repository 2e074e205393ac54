//! Procurement HTTP handlers

use axum::{
    extract::{Query, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::Deserialize;

use crate::error::AppResult;
use crate::services::export;
use crate::services::procurement::{ProcurementService, RecordProcurementInput};
use crate::AppState;

use super::require_uuid;

/// The history read serves dashboards; let edges cache it briefly.
const HISTORY_CACHE_CONTROL: &str = "public, max-age=60, stale-while-revalidate=300";

#[derive(Debug, Deserialize)]
pub struct ProcurementListQuery {
    #[serde(rename = "supplierId")]
    pub supplier_id: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ProcurementHistoryQuery {
    #[serde(rename = "startDate")]
    pub start_date: Option<String>,
    #[serde(rename = "endDate")]
    pub end_date: Option<String>,
    /// "json" (default) or "csv"
    pub format: Option<String>,
}

/// List procurements for one supplier
pub async fn list_procurements(
    State(state): State<AppState>,
    Query(query): Query<ProcurementListQuery>,
) -> AppResult<Json<serde_json::Value>> {
    let supplier_id = require_uuid(query.supplier_id.as_deref(), "supplierId")?;
    let service = ProcurementService::new(state.db.clone());
    let procurements = service.list_by_supplier(supplier_id).await?;
    Ok(Json(serde_json::json!({ "procurements": procurements })))
}

/// Record a procurement for an existing supplier
pub async fn record_procurement(
    State(state): State<AppState>,
    Json(input): Json<RecordProcurementInput>,
) -> AppResult<impl IntoResponse> {
    let service = ProcurementService::new(state.db.clone());
    let procurement = service.record_procurement(input).await?;
    Ok((StatusCode::CREATED, Json(procurement)))
}

/// Bulk procurement history (capped, projected), exportable as CSV
pub async fn procurement_history(
    State(state): State<AppState>,
    Query(query): Query<ProcurementHistoryQuery>,
) -> AppResult<Response> {
    let range = shared::types::DateRange::from_params(
        query.start_date.as_deref(),
        query.end_date.as_deref(),
    );
    let service = ProcurementService::new(state.db.clone());
    let entries = service.history(&range).await?;

    if query.format.as_deref() == Some("csv") {
        let csv = export::to_csv(&entries)?;
        Ok((
            [
                (header::CACHE_CONTROL, HISTORY_CACHE_CONTROL),
                (header::CONTENT_TYPE, "text/csv"),
                (
                    header::CONTENT_DISPOSITION,
                    "attachment; filename=\"procurement_history.csv\"",
                ),
            ],
            csv,
        )
            .into_response())
    } else {
        Ok((
            [(header::CACHE_CONTROL, HISTORY_CACHE_CONTROL)],
            Json(serde_json::json!({ "history": entries })),
        )
            .into_response())
    }
}
