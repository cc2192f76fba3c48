//! Read-only course views served by the HTTP layer

use crate::db::{CourseStore, CourseSummary, SortOrder};
use crate::Result;

/// Subject-area tags that make a course a backend course
pub const BACKEND_TAGS: [&str; 3] = ["Programming", "Database Management", "Web Development"];

/// Program codes for the BSIS / BSIT view
pub const PROGRAM_TAGS: [&str; 2] = ["BSIS", "BSIT"];

/// Backend courses, sorted ascending by description
pub async fn backend_courses(store: &CourseStore) -> Result<Vec<CourseSummary>> {
    store
        .find_by_any_tag(&BACKEND_TAGS, SortOrder::DescriptionAsc)
        .await
}

/// BSIS and BSIT courses in store order
pub async fn program_courses(store: &CourseStore) -> Result<Vec<CourseSummary>> {
    store
        .find_by_any_tag(&PROGRAM_TAGS, SortOrder::Insertion)
        .await
}
