use bintrack_client::{ClientError, InventoryApi};
use bintrack_engine::{AggregateSummary, SearchTerm, filter_records, summarize};
use bintrack_types::{Bin, Record, RecordId, ViewKind};
use serde::Serialize;
use std::sync::Arc;
use tokio::time::{Duration, Instant};
use tracing::{info, warn};

use crate::autocomplete::{
    BinLocationSearch, KeyOutcome, NavKey, ProductSearch, SuggestionSender, SuggestionUpdate,
};
use crate::busy::BusyIndicator;
use crate::config::Config;
use crate::form::{AdjustForm, DeleteConfirmation, FormMode, MSG_NO_RECORD, Modal, RecordForm};
use crate::notify::{Notifier, Redirect, Route};
use crate::store::RecordStore;
use crate::Error;

const MSG_CONFIGURE: &str = "Please configure database connection in Settings";
const MSG_AUTH: &str = "Authentication required";

/// Timings and thresholds a session runs with
#[derive(Debug, Clone, PartialEq)]
pub struct SessionSettings {
    pub default_view: ViewKind,
    pub notice_ttl: Duration,
    pub config_redirect_delay: Duration,
    pub bin_debounce: Duration,
    pub bin_min_chars: usize,
    pub product_debounce: Duration,
    pub product_min_chars: usize,
}

impl Default for SessionSettings {
    fn default() -> Self {
        Self::from(&Config::default())
    }
}

impl From<&Config> for SessionSettings {
    fn from(config: &Config) -> Self {
        Self {
            default_view: config.display.default_view,
            notice_ttl: Duration::from_millis(config.notifications.ttl_ms),
            config_redirect_delay: Duration::from_millis(
                config.notifications.config_redirect_delay_ms,
            ),
            bin_debounce: Duration::from_millis(config.autocomplete.bin_debounce_ms),
            bin_min_chars: config.autocomplete.bin_min_chars,
            product_debounce: Duration::from_millis(config.autocomplete.product_debounce_ms),
            product_min_chars: config.autocomplete.product_min_chars,
        }
    }
}

/// What a submit produced. The same message is also pushed as a notice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubmitOutcome {
    pub success: bool,
    pub message: String,
}

impl SubmitOutcome {
    fn ok(message: String) -> Self {
        Self {
            success: true,
            message,
        }
    }

    fn failed(message: String) -> Self {
        Self {
            success: false,
            message,
        }
    }
}

#[derive(Debug, Clone, Copy)]
enum Operation {
    Load,
    Save,
    Adjust,
    Delete,
}

impl Operation {
    fn error_prefix(self) -> &'static str {
        match self {
            Operation::Load => "Error connecting to server",
            Operation::Save => "Error saving record",
            Operation::Adjust => "Error adjusting quantity",
            Operation::Delete => "Error deleting record",
        }
    }

    fn success_default(self) -> &'static str {
        match self {
            Operation::Load => "Records loaded",
            Operation::Save => "Record saved successfully",
            Operation::Adjust => "Quantity adjusted successfully",
            Operation::Delete => "Record deleted successfully",
        }
    }
}

/// Everything the inventory screen knows, owned in one place.
///
/// Constructed at startup, [`reset`](Self::reset) on logout. Hosts read the
/// snapshot, search and view from here and feed suggestion updates back in.
pub struct InventorySession {
    api: Arc<dyn InventoryApi>,
    settings: SessionSettings,
    store: RecordStore,
    view: ViewKind,
    search_input: String,
    search: SearchTerm,
    busy: BusyIndicator,
    notices: Notifier,
    redirect: Option<Redirect>,
    bin_search: BinLocationSearch,
    product_search: ProductSearch,
    modal: Modal,
}

impl InventorySession {
    pub fn new(
        api: Arc<dyn InventoryApi>,
        settings: SessionSettings,
        suggestions: SuggestionSender,
    ) -> Self {
        let bin_search = BinLocationSearch::new(
            settings.bin_debounce,
            settings.bin_min_chars,
            suggestions.clone(),
        );
        let product_search = ProductSearch::new(
            Arc::clone(&api),
            settings.product_debounce,
            settings.product_min_chars,
            suggestions,
        );

        Self {
            api,
            view: settings.default_view,
            notices: Notifier::new(settings.notice_ttl),
            settings,
            store: RecordStore::new(),
            search_input: String::new(),
            search: SearchTerm::default(),
            busy: BusyIndicator::new(),
            redirect: None,
            bin_search,
            product_search,
            modal: Modal::None,
        }
    }

    // --- accessors ---

    pub fn api(&self) -> &Arc<dyn InventoryApi> {
        &self.api
    }

    pub fn records(&self) -> &[Record] {
        self.store.records()
    }

    pub fn bins(&self) -> Arc<Vec<Bin>> {
        self.store.bins()
    }

    pub fn find(&self, id: RecordId) -> Option<&Record> {
        self.store.find(id)
    }

    pub fn view(&self) -> ViewKind {
        self.view
    }

    pub fn search_input(&self) -> &str {
        &self.search_input
    }

    pub fn search_term(&self) -> &SearchTerm {
        &self.search
    }

    pub fn busy(&self) -> &BusyIndicator {
        &self.busy
    }

    pub fn notices(&self) -> &Notifier {
        &self.notices
    }

    pub fn notices_mut(&mut self) -> &mut Notifier {
        &mut self.notices
    }

    pub fn redirect(&self) -> Option<Redirect> {
        self.redirect
    }

    pub fn modal(&self) -> &Modal {
        &self.modal
    }

    pub fn modal_mut(&mut self) -> &mut Modal {
        &mut self.modal
    }

    pub fn bin_search(&self) -> &BinLocationSearch {
        &self.bin_search
    }

    pub fn product_search(&self) -> &ProductSearch {
        &self.product_search
    }

    // --- loading ---

    /// Initial load: bin catalog, then records.
    pub async fn start(&mut self) -> bool {
        self.load_bins().await;
        self.reload().await
    }

    /// Refresh the bin catalog. Failures are only logged.
    pub async fn load_bins(&mut self) {
        let _busy = self.busy.enter();
        let api = Arc::clone(&self.api);
        match self.store.load_bins(api.as_ref()).await {
            Ok(_) => self.bin_search.set_catalog(self.store.bins()),
            Err(err) if err.is_auth_required() => self.redirect_to_login(),
            Err(_) => {}
        }
    }

    /// Replace the record snapshot. Returns whether the load succeeded.
    pub async fn reload(&mut self) -> bool {
        let _busy = self.busy.enter();
        let api = Arc::clone(&self.api);
        let loaded = self.store.load_all(api.as_ref()).await.map(|records| records.len());
        match loaded {
            Ok(_) => true,
            Err(err) => {
                self.report_failure(Operation::Load, err);
                false
            }
        }
    }

    // --- search & view ---

    pub fn set_search(&mut self, input: &str) {
        self.search_input = input.to_string();
        self.search = SearchTerm::new(input);
    }

    /// Changing the view keeps the active search.
    pub fn switch_view(&mut self, view: ViewKind) {
        self.view = view;
    }

    pub fn toggle_view(&mut self) {
        self.switch_view(self.view.toggled());
    }

    pub fn visible_records(&self) -> Vec<&Record> {
        filter_records(self.store.records(), &self.search)
    }

    pub fn summary(&self) -> AggregateSummary {
        summarize(self.visible_records())
    }

    // --- mutations ---

    pub async fn submit_create(&mut self, form: &RecordForm) -> SubmitOutcome {
        let draft = match form.validate() {
            Ok(draft) => draft,
            Err(err) => return self.reject(err),
        };
        let _busy = self.busy.enter();
        let result = self.api.create_record(&draft).await;
        self.finish(Operation::Save, result).await
    }

    pub async fn submit_update(&mut self, id: RecordId, form: &RecordForm) -> SubmitOutcome {
        let draft = match form.validate() {
            Ok(draft) => draft,
            Err(err) => return self.reject(err),
        };
        let _busy = self.busy.enter();
        let result = self.api.update_record(id, &draft).await;
        self.finish(Operation::Save, result).await
    }

    pub async fn submit_adjust(
        &mut self,
        id: Option<RecordId>,
        form: &AdjustForm,
    ) -> SubmitOutcome {
        let Some(id) = id else {
            return self.reject(Error::validation(MSG_NO_RECORD));
        };
        let adjustment = match form.validate() {
            Ok(adjustment) => adjustment,
            Err(err) => return self.reject(err),
        };
        let _busy = self.busy.enter();
        let result = self.api.adjust_record(id, &adjustment).await;
        self.finish(Operation::Adjust, result).await
    }

    pub async fn submit_delete(&mut self, id: Option<RecordId>) -> SubmitOutcome {
        let Some(id) = id else {
            return self.reject(Error::validation(MSG_NO_RECORD));
        };
        let _busy = self.busy.enter();
        let result = self.api.delete_record(id).await;
        self.finish(Operation::Delete, result).await
    }

    async fn finish(
        &mut self,
        operation: Operation,
        result: bintrack_client::Result<String>,
    ) -> SubmitOutcome {
        match result {
            Ok(message) => {
                let message = if message.is_empty() {
                    operation.success_default().to_string()
                } else {
                    message
                };
                info!(?operation, %message, "mutation succeeded");
                self.notices.success(message.clone());
                self.reload().await;
                SubmitOutcome::ok(message)
            }
            Err(err) => {
                let message = self.report_failure(operation, err.into());
                SubmitOutcome::failed(message)
            }
        }
    }

    fn reject(&mut self, err: Error) -> SubmitOutcome {
        let message = err.to_string();
        self.notices.error(message.clone());
        SubmitOutcome::failed(message)
    }

    /// Route a failure to the right notice/redirect. Returns the user-facing message.
    fn report_failure(&mut self, operation: Operation, err: Error) -> String {
        match err {
            Error::Api(ClientError::AuthRequired) => {
                self.redirect_to_login();
                MSG_AUTH.to_string()
            }
            Error::Api(ClientError::NeedsConfig { message }) => {
                warn!(%message, "server needs configuration");
                self.notices.warning(MSG_CONFIGURE);
                self.redirect = Some(Redirect::after(
                    Route::Settings,
                    self.settings.config_redirect_delay,
                ));
                MSG_CONFIGURE.to_string()
            }
            Error::Api(ClientError::Rejected(message)) => {
                self.notices.error(message.clone());
                message
            }
            Error::Api(other) => {
                let message = format!("{}: {}", operation.error_prefix(), other);
                self.notices.error(message.clone());
                message
            }
            other => {
                let message = other.to_string();
                self.notices.error(message.clone());
                message
            }
        }
    }

    // --- dialogs ---

    pub fn open_create(&mut self) {
        self.reset_suggestions();
        self.modal = Modal::Record(RecordForm::create());
    }

    pub fn open_edit(&mut self, id: RecordId) -> bool {
        let form = match self.store.get(id).map(RecordForm::for_edit) {
            Ok(form) => form,
            Err(err) => {
                self.reject(err);
                return false;
            }
        };
        self.reset_suggestions();
        self.modal = Modal::Record(form);
        true
    }

    pub fn open_adjust(&mut self, id: RecordId) -> bool {
        let form = match self.store.get(id).map(AdjustForm::for_record) {
            Ok(form) => form,
            Err(err) => {
                self.reject(err);
                return false;
            }
        };
        self.modal = Modal::Adjust { id, form };
        true
    }

    pub fn open_delete(&mut self, id: RecordId) -> bool {
        let confirmation = match self.store.get(id).map(DeleteConfirmation::for_record) {
            Ok(confirmation) => confirmation,
            Err(err) => {
                self.reject(err);
                return false;
            }
        };
        self.modal = Modal::Delete(confirmation);
        true
    }

    pub fn close_modal(&mut self) {
        self.reset_suggestions();
        self.modal = Modal::None;
    }

    /// Submit whatever dialog is open. The dialog closes on success only.
    pub async fn submit_modal(&mut self) -> Option<SubmitOutcome> {
        let modal = self.modal.clone();
        let outcome = match &modal {
            Modal::None => return None,
            Modal::Record(form) => match form.mode {
                FormMode::Create => self.submit_create(form).await,
                FormMode::Edit(id) => self.submit_update(id, form).await,
            },
            Modal::Adjust { id, form } => self.submit_adjust(Some(*id), form).await,
            Modal::Delete(confirmation) => self.submit_delete(Some(confirmation.record_id)).await,
        };
        if outcome.success {
            self.close_modal();
        }
        Some(outcome)
    }

    // --- autocomplete glue ---

    pub fn bin_input(&mut self, text: &str) {
        if let Modal::Record(form) = &mut self.modal {
            form.edit_bin_text(text);
        }
        self.bin_search.input(text);
    }

    pub fn product_input(&mut self, text: &str) {
        if let Modal::Record(form) = &mut self.modal {
            form.edit_product_text(text);
        }
        self.product_search.input(text);
    }

    /// Returns `false` when the dropdown did not consume the key.
    pub fn bin_key(&mut self, key: NavKey) -> bool {
        match self.bin_search.handle_key(key) {
            KeyOutcome::Ignored => false,
            KeyOutcome::Selected(bin) => {
                if let Modal::Record(form) = &mut self.modal {
                    form.select_bin(&bin);
                }
                true
            }
            KeyOutcome::Moved(_) | KeyOutcome::Closed => true,
        }
    }

    pub fn product_key(&mut self, key: NavKey) -> bool {
        match self.product_search.handle_key(key) {
            KeyOutcome::Ignored => false,
            KeyOutcome::Selected(product) => {
                if let Modal::Record(form) = &mut self.modal {
                    form.select_product(&product);
                }
                true
            }
            KeyOutcome::Moved(_) | KeyOutcome::Closed => true,
        }
    }

    pub fn apply_suggestion(&mut self, update: SuggestionUpdate) {
        match update {
            SuggestionUpdate::Bins(bins) => self.bin_search.apply(bins),
            SuggestionUpdate::Products(products) => self.product_search.apply(products),
        }
    }

    /// Interaction outside both fields closes their dropdowns.
    pub fn dismiss_suggestions(&mut self) {
        self.bin_search.dismiss();
        self.product_search.dismiss();
    }

    fn reset_suggestions(&mut self) {
        self.bin_search.reset();
        self.product_search.reset();
    }

    // --- navigation & lifecycle ---

    fn redirect_to_login(&mut self) {
        info!("authentication required, redirecting to login");
        self.redirect = Some(Redirect::now(Route::Login));
    }

    /// Take the pending redirect once its delay has passed.
    pub fn take_due_redirect(&mut self, now: Instant) -> Option<Route> {
        match self.redirect {
            Some(redirect) if redirect.is_due(now) => {
                self.redirect = None;
                Some(redirect.route)
            }
            _ => None,
        }
    }

    /// Expire old notices.
    pub fn tick(&mut self, now: Instant) {
        self.notices.prune(now);
    }

    /// End the session server-side, then reset locally and go to login
    /// regardless of the outcome.
    pub async fn logout(&mut self) {
        if let Err(err) = self.api.logout().await {
            warn!(error = %err, "logout request failed, redirecting anyway");
        }
        self.reset();
        self.redirect_to_login();
    }

    /// Drop all session state.
    pub fn reset(&mut self) {
        self.store.reset();
        self.bin_search.set_catalog(self.store.bins());
        self.reset_suggestions();
        self.view = self.settings.default_view;
        self.search_input.clear();
        self.search = SearchTerm::default();
        self.notices.clear();
        self.redirect = None;
        self.modal = Modal::None;
    }
}
