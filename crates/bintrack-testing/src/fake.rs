//! In-memory stand-in for the inventory server.
//!
//! Mutations really apply to the in-memory rows so reload-after-write can be
//! observed. Every call is appended to a log that tests inspect afterwards.

use async_trait::async_trait;
use bintrack_client::{ClientError, InventoryApi, Result};
use bintrack_types::{
    Adjustment, Bin, HistoryEntry, HistoryFilter, HistoryStats, Product, Record, RecordDraft,
    RecordId,
};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex, MutexGuard};
use tokio::sync::Notify;

/// One invocation against the fake, with its arguments.
#[derive(Debug, Clone, PartialEq)]
pub enum ApiCall {
    ListRecords,
    ListBins,
    SearchProducts(String),
    Create(RecordDraft),
    Update(RecordId, RecordDraft),
    Adjust(RecordId, Adjustment),
    Delete(RecordId),
    History(HistoryFilter),
    HistoryStats,
    Health,
    Logout,
}

impl ApiCall {
    pub fn is_mutation(&self) -> bool {
        matches!(
            self,
            ApiCall::Create(_) | ApiCall::Update(..) | ApiCall::Adjust(..) | ApiCall::Delete(_)
        )
    }
}

/// Failure the fake should answer with. `ClientError` is not `Clone`, so
/// failures are queued in this form and converted when they fire.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FakeFailure {
    AuthRequired,
    NeedsConfig(String),
    Rejected(String),
}

impl From<FakeFailure> for ClientError {
    fn from(failure: FakeFailure) -> Self {
        match failure {
            FakeFailure::AuthRequired => ClientError::AuthRequired,
            FakeFailure::NeedsConfig(message) => ClientError::NeedsConfig { message },
            FakeFailure::Rejected(message) => ClientError::Rejected(message),
        }
    }
}

#[derive(Debug, Default)]
struct State {
    records: Vec<Record>,
    bins: Vec<Bin>,
    products: Vec<Product>,
    history: Vec<HistoryEntry>,
    calls: Vec<ApiCall>,
    failures: VecDeque<FakeFailure>,
    next_id: i64,
    gate: Option<Arc<Notify>>,
}

#[derive(Debug, Default)]
pub struct FakeInventoryApi {
    state: Mutex<State>,
}

impl FakeInventoryApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_records(self, records: Vec<Record>) -> Self {
        {
            let mut state = self.lock();
            state.next_id = records.iter().map(|r| r.id.get()).max().unwrap_or(0) + 1;
            state.records = records;
        }
        self
    }

    pub fn with_bins(self, bins: Vec<Bin>) -> Self {
        self.lock().bins = bins;
        self
    }

    pub fn with_products(self, products: Vec<Product>) -> Self {
        self.lock().products = products;
        self
    }

    pub fn with_history(self, history: Vec<HistoryEntry>) -> Self {
        self.lock().history = history;
        self
    }

    /// Hold every `list_records` call until `gate` is notified, one permit
    /// per call. Lets tests observe a session while a load is in flight.
    pub fn gated(self, gate: Arc<Notify>) -> Self {
        self.lock().gate = Some(gate);
        self
    }

    /// Queue a failure for the next call, whatever it is.
    pub fn fail_next(&self, failure: FakeFailure) {
        self.lock().failures.push_back(failure);
    }

    pub fn calls(&self) -> Vec<ApiCall> {
        self.lock().calls.clone()
    }

    pub fn count(&self, predicate: impl Fn(&ApiCall) -> bool) -> usize {
        self.lock().calls.iter().filter(|c| predicate(c)).count()
    }

    pub fn list_records_calls(&self) -> usize {
        self.count(|c| matches!(c, ApiCall::ListRecords))
    }

    pub fn mutation_calls(&self) -> usize {
        self.count(ApiCall::is_mutation)
    }

    pub fn product_queries(&self) -> Vec<String> {
        self.lock()
            .calls
            .iter()
            .filter_map(|c| match c {
                ApiCall::SearchProducts(q) => Some(q.clone()),
                _ => None,
            })
            .collect()
    }

    pub fn records(&self) -> Vec<Record> {
        self.lock().records.clone()
    }

    pub fn clear_calls(&self) {
        self.lock().calls.clear();
    }

    fn lock(&self) -> MutexGuard<'_, State> {
        match self.state.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }

    /// Log the call, then pop a queued failure if there is one.
    fn enter(&self, call: ApiCall) -> Result<MutexGuard<'_, State>> {
        let mut state = self.lock();
        state.calls.push(call);
        match state.failures.pop_front() {
            Some(failure) => Err(failure.into()),
            None => Ok(state),
        }
    }
}

fn apply_draft(record: &mut Record, draft: &RecordDraft, bins: &[Bin]) {
    record.bin_location_id = Some(draft.bin_location_id);
    record.bin_location = bins
        .iter()
        .find(|b| b.id == draft.bin_location_id)
        .and_then(|b| b.name.clone());
    record.product_upc = Some(draft.product_upc.clone());
    record.product_description = Some(draft.product_description.clone());
    record.unit_qty = draft.qty_per_case;
    record.qty_cases = Some(draft.qty_cases);
}

fn not_found() -> ClientError {
    ClientError::Rejected("Record not found".to_string())
}

#[async_trait]
impl InventoryApi for FakeInventoryApi {
    async fn list_records(&self) -> Result<Vec<Record>> {
        let gate = self.lock().gate.clone();
        if let Some(gate) = gate {
            gate.notified().await;
        }
        let state = self.enter(ApiCall::ListRecords)?;
        Ok(state.records.clone())
    }

    async fn list_bins(&self) -> Result<Vec<Bin>> {
        let state = self.enter(ApiCall::ListBins)?;
        Ok(state.bins.clone())
    }

    async fn search_products(&self, query: &str) -> Result<Vec<Product>> {
        let state = self.enter(ApiCall::SearchProducts(query.to_string()))?;
        let needle = query.to_lowercase();
        Ok(state
            .products
            .iter()
            .filter(|p| {
                p.description().to_lowercase().contains(&needle) || p.upc().contains(&needle)
            })
            .cloned()
            .collect())
    }

    async fn create_record(&self, draft: &RecordDraft) -> Result<String> {
        let mut state = self.enter(ApiCall::Create(draft.clone()))?;
        let id = state.next_id.max(1);
        state.next_id = id + 1;
        let mut record = Record {
            id: RecordId::new(id),
            bin_location: None,
            bin_location_id: None,
            product_upc: None,
            product_description: None,
            unit_qty: None,
            qty_cases: None,
            last_update: None,
        };
        apply_draft(&mut record, draft, &state.bins);
        state.records.push(record);
        Ok("Record created successfully".to_string())
    }

    async fn update_record(&self, id: RecordId, draft: &RecordDraft) -> Result<String> {
        let mut state = self.enter(ApiCall::Update(id, draft.clone()))?;
        let bins = state.bins.clone();
        let record = state
            .records
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or_else(not_found)?;
        apply_draft(record, draft, &bins);
        Ok("Record updated successfully".to_string())
    }

    async fn adjust_record(&self, id: RecordId, adjustment: &Adjustment) -> Result<String> {
        let mut state = self.enter(ApiCall::Adjust(id, adjustment.clone()))?;
        let record = state
            .records
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or_else(not_found)?;
        let current = record.cases();
        let next = current + adjustment.adjustment;
        if next < 0 {
            return Err(ClientError::Rejected(format!(
                "Cannot reduce below zero. Current quantity: {}",
                current
            )));
        }
        record.qty_cases = Some(next);
        Ok(format!("Quantity adjusted by {} cases", adjustment.adjustment))
    }

    async fn delete_record(&self, id: RecordId) -> Result<String> {
        let mut state = self.enter(ApiCall::Delete(id))?;
        let before = state.records.len();
        state.records.retain(|r| r.id != id);
        if state.records.len() == before {
            return Err(not_found());
        }
        Ok("Record deleted successfully".to_string())
    }

    async fn history(&self, filter: &HistoryFilter) -> Result<Vec<HistoryEntry>> {
        let state = self.enter(ApiCall::History(filter.clone()))?;
        Ok(state
            .history
            .iter()
            .filter(|h| filter.record_id.is_none_or(|id| h.record_id == id))
            .filter(|h| filter.operation_type.is_none_or(|op| h.operation == op))
            .take(filter.limit as usize)
            .cloned()
            .collect())
    }

    async fn history_stats(&self) -> Result<HistoryStats> {
        let state = self.enter(ApiCall::HistoryStats)?;
        Ok(HistoryStats {
            total_operations: state.history.len() as i64,
            ..HistoryStats::default()
        })
    }

    async fn health(&self) -> Result<String> {
        self.enter(ApiCall::Health)?;
        Ok("ok".to_string())
    }

    async fn logout(&self) -> Result<()> {
        self.enter(ApiCall::Logout)?;
        Ok(())
    }
}
