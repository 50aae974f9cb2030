use async_trait::async_trait;
use bintrack_types::{
    Adjustment, Bin, HistoryEntry, HistoryFilter, HistoryStats, Product, Record, RecordDraft,
    RecordId,
};

use crate::error::Result;

/// Operations the inventory server exposes.
///
/// Mutations return the server's confirmation message. Product search is
/// expected to be called with at least two characters; shorter queries
/// return an empty list without a request.
#[async_trait]
pub trait InventoryApi: Send + Sync {
    async fn list_records(&self) -> Result<Vec<Record>>;

    async fn list_bins(&self) -> Result<Vec<Bin>>;

    async fn search_products(&self, query: &str) -> Result<Vec<Product>>;

    async fn create_record(&self, draft: &RecordDraft) -> Result<String>;

    async fn update_record(&self, id: RecordId, draft: &RecordDraft) -> Result<String>;

    async fn adjust_record(&self, id: RecordId, adjustment: &Adjustment) -> Result<String>;

    async fn delete_record(&self, id: RecordId) -> Result<String>;

    async fn history(&self, filter: &HistoryFilter) -> Result<Vec<HistoryEntry>>;

    async fn history_stats(&self) -> Result<HistoryStats>;

    async fn health(&self) -> Result<String>;

    async fn logout(&self) -> Result<()>;
}
