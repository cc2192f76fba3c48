//! Database models

use serde::{Deserialize, Serialize};

/// One curriculum course as persisted in the `courses` table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Course {
    pub code: String,
    pub description: String,
    pub units: f64,
    pub tags: Vec<String>,
}

/// Projection returned by the tag-filtered queries (code and units omitted)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CourseSummary {
    pub description: String,
    pub tags: Vec<String>,
}
