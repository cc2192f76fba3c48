//! curriculum-api library - HTTP layer for the curriculum catalog
//!
//! Serves two tag-filtered course views out of the course store, plus a
//! health endpoint. Course routes stay behind a readiness gate until the
//! startup load cycle has finished.

use axum::Router;
use curriculum_common::CourseStore;
use tokio::sync::watch;
use tower_http::trace::TraceLayer;

pub mod api;
pub mod catalog;

pub use catalog::CatalogStatus;

/// Application state shared across HTTP handlers
#[derive(Clone)]
pub struct AppState {
    /// Course store; `None` when the startup connection failed
    pub store: Option<CourseStore>,
    /// Progress of the startup load cycle
    pub status: watch::Receiver<CatalogStatus>,
}

impl AppState {
    /// Create new application state
    pub fn new(store: Option<CourseStore>, status: watch::Receiver<CatalogStatus>) -> Self {
        Self { store, status }
    }
}

/// Build application router
///
/// Course routes pass through the readiness gate; health is always reachable.
pub fn build_router(state: AppState) -> Router {
    use axum::middleware;
    use axum::routing::get;

    let gated = Router::new()
        .route("/backend-courses", get(api::get_backend_courses))
        .route("/bsis-bsit-courses", get(api::get_bsis_bsit_courses))
        .layer(middleware::from_fn_with_state(
            state.clone(),
            api::readiness_gate,
        ));

    Router::new()
        .merge(gated)
        .merge(api::health_routes())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
