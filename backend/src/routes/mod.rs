//! Route definitions for the Dairy Production Management Platform

use axum::{routing::get, Router};

use crate::{handlers, AppState};

/// Create API routes
pub fn api_routes() -> Router<AppState> {
    Router::new()
        // Health check
        .route("/health", get(handlers::health_check))
        // Production entry management
        .merge(production_routes())
        // Supplier and procurement management
        .merge(supplier_routes())
}

/// Production routes
fn production_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/production",
            get(handlers::list_production)
                .post(handlers::record_production)
                .delete(handlers::delete_production),
        )
        .route("/production/history", get(handlers::production_history))
}

/// Supplier routes, including procurement
fn supplier_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/supplier",
            get(handlers::list_suppliers)
                .post(handlers::create_supplier)
                .put(handlers::update_supplier)
                .delete(handlers::delete_supplier),
        )
        .route(
            "/supplier/procurement",
            get(handlers::list_procurements).post(handlers::record_procurement),
        )
        .route(
            "/supplier/procurement/history",
            get(handlers::procurement_history),
        )
}
