//! Error responses for the course routes
//!
//! Bodies are always `{"error": <message>}`. Messages are fixed per route;
//! store error details go to the log, never to the caller.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

pub const NOT_READY_MESSAGE: &str = "Course catalog is still loading";

#[derive(Debug)]
pub enum ApiError {
    /// Startup load cycle has not finished
    NotReady,
    /// Store failure while serving a route
    Retrieval(&'static str),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::NotReady => (StatusCode::SERVICE_UNAVAILABLE, NOT_READY_MESSAGE),
            ApiError::Retrieval(message) => (StatusCode::INTERNAL_SERVER_ERROR, message),
        };

        let body = Json(json!({
            "error": message,
        }));

        (status, body).into_response()
    }
}
