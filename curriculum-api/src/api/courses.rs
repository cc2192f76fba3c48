//! Tag-filtered course views
//!
//! Neither route takes parameters. An empty match set is `200 []`.

use axum::{extract::State, Json};
use curriculum_common::{query, CourseSummary};
use tracing::error;

use super::ApiError;
use crate::AppState;

const BACKEND_ERROR: &str = "Error retrieving backend courses";
const PROGRAM_ERROR: &str = "Error retrieving BSIS/BSIT courses";

/// GET /backend-courses
///
/// Courses tagged Programming, Database Management or Web Development,
/// sorted by description.
pub async fn get_backend_courses(
    State(state): State<AppState>,
) -> Result<Json<Vec<CourseSummary>>, ApiError> {
    let Some(store) = &state.store else {
        error!("{}: course store is not connected", BACKEND_ERROR);
        return Err(ApiError::Retrieval(BACKEND_ERROR));
    };

    let courses = query::backend_courses(store).await.map_err(|e| {
        error!("{}: {}", BACKEND_ERROR, e);
        ApiError::Retrieval(BACKEND_ERROR)
    })?;

    Ok(Json(courses))
}

/// GET /bsis-bsit-courses
///
/// Courses tagged BSIS or BSIT, in store order.
pub async fn get_bsis_bsit_courses(
    State(state): State<AppState>,
) -> Result<Json<Vec<CourseSummary>>, ApiError> {
    let Some(store) = &state.store else {
        error!("{}: course store is not connected", PROGRAM_ERROR);
        return Err(ApiError::Retrieval(PROGRAM_ERROR));
    };

    let courses = query::program_courses(store).await.map_err(|e| {
        error!("{}: {}", PROGRAM_ERROR, e);
        ApiError::Retrieval(PROGRAM_ERROR)
    })?;

    Ok(Json(courses))
}
