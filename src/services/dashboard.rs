//! Dashboard service
//!
//! Caches the latest record snapshot from the store and runs the list
//! engine over it. Fetches are serialized (one in flight) and tagged
//! with a monotonically increasing token so a stale response can never
//! overwrite a newer snapshot.

use std::sync::{
    atomic::{AtomicU64, Ordering},
    Arc,
};

use chrono::Local;
use tokio::sync::{Mutex, RwLock};

use crate::{
    engine::{self, ViewPage, ViewState},
    error::AppResult,
    models::VisitorRecord,
    store::RecordStore,
};

#[derive(Default)]
struct Snapshot {
    records: Vec<VisitorRecord>,
    generation: u64,
}

pub struct DashboardService {
    store: Arc<dyn RecordStore>,
    snapshot: RwLock<Snapshot>,
    fetch_seq: AtomicU64,
    fetch_guard: Mutex<()>,
}

impl DashboardService {
    pub fn new(store: Arc<dyn RecordStore>) -> Self {
        Self {
            store,
            snapshot: RwLock::new(Snapshot::default()),
            fetch_seq: AtomicU64::new(0),
            fetch_guard: Mutex::new(()),
        }
    }

    /// Fetch the record set from the store and install it, unless a
    /// newer snapshot landed in the meantime. On failure the previous
    /// snapshot stays in place and the error is logged; callers serve
    /// the stale (or empty) list rather than crash.
    pub async fn refresh(&self) -> AppResult<()> {
        let _serialize = self.fetch_guard.lock().await;
        let token = self.fetch_seq.fetch_add(1, Ordering::SeqCst) + 1;

        match self.store.list_records().await {
            Ok(records) => {
                let mut snapshot = self.snapshot.write().await;
                if token > snapshot.generation {
                    tracing::debug!(count = records.len(), "installed record snapshot");
                    snapshot.records = records;
                    snapshot.generation = token;
                } else {
                    tracing::debug!("discarded stale record fetch");
                }
                Ok(())
            }
            Err(e) => {
                tracing::error!("record fetch failed: {e}");
                Err(e)
            }
        }
    }

    /// Drop the cached snapshot (on sign-out). Also invalidates any
    /// fetch already in flight.
    pub async fn clear(&self) {
        let mut snapshot = self.snapshot.write().await;
        snapshot.records.clear();
        snapshot.generation = self.fetch_seq.fetch_add(1, Ordering::SeqCst) + 1;
    }

    /// Run the list engine over the cached snapshot
    pub async fn view(&self, state: &ViewState) -> ViewPage {
        let snapshot = self.snapshot.read().await;
        engine::run(&snapshot.records, state)
    }

    /// Distinct colleges for the filter dropdown, from the full
    /// (unfiltered) snapshot
    pub async fn colleges(&self) -> Vec<String> {
        let snapshot = self.snapshot.read().await;
        engine::filter::distinct_colleges(&snapshot.records)
    }

    /// CSV of the filtered-and-sorted set plus its download filename
    pub async fn export(&self, state: &ViewState) -> (String, String) {
        let snapshot = self.snapshot.read().await;
        let csv = engine::export_csv(&snapshot.records, state);
        (engine::export::filename(Local::now()), csv)
    }
}
