//! HTTP API handlers for curriculum-api

pub mod courses;
pub mod error;
pub mod health;
pub mod readiness;

pub use courses::{get_backend_courses, get_bsis_bsit_courses};
pub use error::ApiError;
pub use health::health_routes;
pub use readiness::readiness_gate;
