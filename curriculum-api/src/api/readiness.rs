//! Readiness gate for the course routes

use axum::{extract::Request, extract::State, middleware::Next, response::Response};

use super::ApiError;
use crate::AppState;

/// Reject course requests with 503 while the startup load cycle runs
///
/// Once the cycle has finished, successfully or not, requests go through
/// to the store.
pub async fn readiness_gate(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let loading = state.status.borrow().is_loading();
    if loading {
        return Err(ApiError::NotReady);
    }

    Ok(next.run(request).await)
}
