//! Supplier HTTP handlers

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::error::AppResult;
use crate::services::supplier::{CreateSupplierInput, Supplier, SupplierService, UpdateSupplierInput};
use crate::AppState;

use super::{require_uuid, IdQuery};

/// List all suppliers
pub async fn list_suppliers(
    State(state): State<AppState>,
) -> AppResult<Json<serde_json::Value>> {
    let service = SupplierService::new(state.db.clone(), state.config.ts_rate_bounds());
    let suppliers = service.list_suppliers().await?;
    Ok(Json(serde_json::json!({ "suppliers": suppliers })))
}

/// Create a supplier
pub async fn create_supplier(
    State(state): State<AppState>,
    Json(input): Json<CreateSupplierInput>,
) -> AppResult<impl IntoResponse> {
    let service = SupplierService::new(state.db.clone(), state.config.ts_rate_bounds());
    let supplier = service.create_supplier(input).await?;
    Ok((StatusCode::CREATED, Json(supplier)))
}

/// Update a supplier; only fields present in the body are touched
pub async fn update_supplier(
    State(state): State<AppState>,
    Query(query): Query<IdQuery>,
    Json(input): Json<UpdateSupplierInput>,
) -> AppResult<Json<Supplier>> {
    let id = require_uuid(query.id.as_deref(), "id")?;
    let service = SupplierService::new(state.db.clone(), state.config.ts_rate_bounds());
    let supplier = service.update_supplier(id, input).await?;
    Ok(Json(supplier))
}

/// Delete a supplier by id
pub async fn delete_supplier(
    State(state): State<AppState>,
    Query(query): Query<IdQuery>,
) -> AppResult<Json<serde_json::Value>> {
    let id = require_uuid(query.id.as_deref(), "id")?;
    let service = SupplierService::new(state.db.clone(), state.config.ts_rate_bounds());
    service.delete_supplier(id).await?;
    Ok(Json(serde_json::json!({ "deleted": true })))
}
