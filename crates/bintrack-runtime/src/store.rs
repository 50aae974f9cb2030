use bintrack_client::InventoryApi;
use bintrack_types::{Bin, Record, RecordId};
use std::sync::Arc;
use tracing::{info, warn};

use crate::{Error, Result};

/// Authoritative in-memory snapshot of the server's records plus the bin catalog.
///
/// The snapshot is only ever replaced wholesale; there is no incremental patching.
#[derive(Debug, Default)]
pub struct RecordStore {
    records: Vec<Record>,
    bins: Arc<Vec<Bin>>,
}

impl RecordStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Shared handle to the bin catalog, cheap to hand to background tasks.
    pub fn bins(&self) -> Arc<Vec<Bin>> {
        Arc::clone(&self.bins)
    }

    pub fn find(&self, id: RecordId) -> Option<&Record> {
        self.records.iter().find(|r| r.id == id)
    }

    pub fn get(&self, id: RecordId) -> Result<&Record> {
        self.find(id)
            .ok_or_else(|| Error::NotFound("Record not found".to_string()))
    }

    /// Replace the snapshot with the server's current records.
    ///
    /// On any failure the snapshot is cleared, never left stale.
    pub async fn load_all(&mut self, api: &dyn InventoryApi) -> Result<&[Record]> {
        match api.list_records().await {
            Ok(records) => {
                info!(count = records.len(), "records loaded");
                self.records = records;
                Ok(&self.records)
            }
            Err(err) => {
                warn!(error = %err, "record load failed, clearing snapshot");
                self.records.clear();
                Err(err.into())
            }
        }
    }

    /// Refresh the bin catalog. A failure keeps the previous catalog.
    pub async fn load_bins(&mut self, api: &dyn InventoryApi) -> Result<usize> {
        match api.list_bins().await {
            Ok(bins) => {
                info!(count = bins.len(), "bin catalog loaded");
                let count = bins.len();
                self.bins = Arc::new(bins);
                Ok(count)
            }
            Err(err) => {
                warn!(error = %err, "bin catalog load failed, keeping previous catalog");
                Err(err.into())
            }
        }
    }

    pub fn reset(&mut self) {
        self.records.clear();
        self.bins = Arc::new(Vec::new());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bintrack_testing::{FakeFailure, FakeInventoryApi, fixtures};

    #[tokio::test]
    async fn test_load_all_replaces_snapshot() {
        let api = FakeInventoryApi::new().with_records(fixtures::records());
        let mut store = RecordStore::new();

        let loaded = store.load_all(&api).await.unwrap();

        assert_eq!(loaded.len(), 3);
        assert!(store.find(RecordId::new(2)).is_some());
    }

    #[tokio::test]
    async fn test_load_failure_clears_snapshot() {
        let api = FakeInventoryApi::new().with_records(fixtures::records());
        let mut store = RecordStore::new();
        store.load_all(&api).await.unwrap();

        api.fail_next(FakeFailure::Rejected("Failed to load data".into()));
        let err = store.load_all(&api).await.unwrap_err();

        assert_eq!(err.to_string(), "Failed to load data");
        assert!(store.records().is_empty());
    }

    #[tokio::test]
    async fn test_bin_failure_keeps_catalog() {
        let api = FakeInventoryApi::new().with_bins(fixtures::bins());
        let mut store = RecordStore::new();
        assert_eq!(store.load_bins(&api).await.unwrap(), 4);

        api.fail_next(FakeFailure::Rejected("boom".into()));
        assert!(store.load_bins(&api).await.is_err());

        assert_eq!(store.bins().len(), 4);
    }

    #[test]
    fn test_get_missing_record_reports_not_found() {
        let store = RecordStore::new();
        let err = store.get(RecordId::new(99)).unwrap_err();
        assert_eq!(err.to_string(), "Record not found");
    }
}
