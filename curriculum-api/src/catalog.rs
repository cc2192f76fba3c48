//! Startup load cycle and the catalog status it publishes

use chrono::{DateTime, Utc};
use curriculum_common::pipeline::run_load_cycle;
use curriculum_common::CourseStore;
use serde::Serialize;
use serde_json::Value;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::{error, info};

/// Where the startup load cycle stands
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum CatalogStatus {
    /// Load cycle still running; course routes answer 503
    Loading,
    /// Load cycle stored every course
    Ready {
        courses: u64,
        loaded_at: DateTime<Utc>,
    },
    /// Load cycle did not run or was rejected; the store keeps whatever it held
    Failed { reason: String },
}

impl CatalogStatus {
    pub fn is_loading(&self) -> bool {
        matches!(self, CatalogStatus::Loading)
    }
}

/// Run the load cycle once and publish the outcome
pub async fn load_catalog(
    store: CourseStore,
    entries: Value,
    status: watch::Sender<CatalogStatus>,
) {
    let outcome = match run_load_cycle(&store, &entries).await {
        Ok(summary) => {
            info!("✓ Course catalog ready ({} courses)", summary.inserted);
            CatalogStatus::Ready {
                courses: summary.inserted,
                loaded_at: Utc::now(),
            }
        }
        Err(e) => {
            error!("Error inserting courses: {}", e);
            CatalogStatus::Failed {
                reason: e.to_string(),
            }
        }
    };

    status.send_replace(outcome);
}

/// Spawn [`load_catalog`] on the runtime
pub fn spawn_load_catalog(
    store: CourseStore,
    entries: Value,
    status: watch::Sender<CatalogStatus>,
) -> JoinHandle<()> {
    tokio::spawn(load_catalog(store, entries, status))
}
