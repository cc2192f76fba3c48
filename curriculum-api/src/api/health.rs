//! Health check endpoint

use axum::{extract::State, routing::get, Json, Router};
use serde::Serialize;

use crate::{AppState, CatalogStatus};

/// Health check response: status, module name, version and load progress
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub module: String,
    pub version: String,
    pub catalog: CatalogStatus,
}

/// GET /health
///
/// Answers even while the catalog is loading.
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let catalog = state.status.borrow().clone();

    Json(HealthResponse {
        status: "ok".to_string(),
        module: "curriculum-api".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        catalog,
    })
}

/// Build health check routes
pub fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
