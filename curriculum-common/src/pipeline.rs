//! The load cycle: validate the flattened entries, then swap them into the store

use serde_json::Value;
use std::path::Path;
use tracing::info;

use crate::db::CourseStore;
use crate::loader::load_curriculum;
use crate::validation::validate_batch;
use crate::Result;

/// What one load cycle did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadSummary {
    /// Courses removed by the clear step
    pub removed: u64,
    /// Courses written by the bulk insert
    pub inserted: u64,
}

/// Validate `entries` and replace the stored collection with them
///
/// Validation runs before the store is touched, so a rejected batch leaves
/// the previous collection in place. Clear and insert share one transaction.
pub async fn run_load_cycle(store: &CourseStore, entries: &Value) -> Result<LoadSummary> {
    let courses = validate_batch(entries)?;

    let outcome = store.replace_all(&courses).await?;
    info!(
        "Courses inserted successfully ({} removed, {} inserted)",
        outcome.removed, outcome.inserted
    );

    Ok(LoadSummary {
        removed: outcome.removed,
        inserted: outcome.inserted,
    })
}

/// Read `source` from disk and run a full load cycle with it
pub async fn reload_from_file(store: &CourseStore, source: &Path) -> Result<LoadSummary> {
    let entries = load_curriculum(source)?;
    run_load_cycle(store, &entries).await
}
