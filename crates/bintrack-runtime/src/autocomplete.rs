//! Debounced, keyboard-navigable suggestion lists for the record form.
//!
//! Two controllers share one dropdown state machine:
//!
//! ```text
//! idle -> pending -> { empty | results } -> idle
//! ```
//!
//! The bin-location list filters the local catalog; the product list asks the
//! server. Either way results arrive asynchronously as [`SuggestionUpdate`]s on
//! a channel, and the host applies them with `apply`. Selecting an item never
//! touches the record store; the caller copies it into the form.

use bintrack_client::InventoryApi;
use bintrack_engine::{SearchTerm, filter_bins};
use bintrack_types::{Bin, Product};
use std::sync::Arc;
use tokio::sync::mpsc;
use tokio::time::Duration;
use tracing::{debug, warn};

use crate::debounce::Debouncer;

pub type SuggestionSender = mpsc::UnboundedSender<SuggestionUpdate>;
pub type SuggestionReceiver = mpsc::UnboundedReceiver<SuggestionUpdate>;

pub fn suggestion_channel() -> (SuggestionSender, SuggestionReceiver) {
    mpsc::unbounded_channel()
}

/// Result of a fired search, delivered to the host's event loop
#[derive(Debug, Clone, PartialEq)]
pub enum SuggestionUpdate {
    Bins(Vec<Bin>),
    Products(Vec<Product>),
}

/// Keys the dropdown reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavKey {
    Down,
    Up,
    Enter,
    Tab,
    Escape,
}

#[derive(Debug, Clone, PartialEq)]
pub enum KeyOutcome<T> {
    /// The dropdown was closed, or the key does nothing in this state.
    Ignored,
    Moved(usize),
    Selected(T),
    Closed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AutocompleteState {
    Idle,
    Pending,
    Empty,
    Results(usize),
}

/// Visible suggestion list with a highlight cursor.
#[derive(Debug, Clone, PartialEq)]
pub struct Dropdown<T> {
    open: bool,
    items: Vec<T>,
    highlighted: Option<usize>,
}

impl<T> Default for Dropdown<T> {
    fn default() -> Self {
        Self {
            open: false,
            items: Vec::new(),
            highlighted: None,
        }
    }
}

impl<T: Clone> Dropdown<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Show `items`. Opening always resets the cursor.
    pub fn open_with(&mut self, items: Vec<T>) {
        self.items = items;
        self.open = true;
        self.highlighted = None;
    }

    pub fn close(&mut self) {
        self.open = false;
        self.items.clear();
        self.highlighted = None;
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn highlighted(&self) -> Option<usize> {
        self.highlighted
    }

    pub fn handle_key(&mut self, key: NavKey) -> KeyOutcome<T> {
        if !self.open {
            return KeyOutcome::Ignored;
        }

        match key {
            NavKey::Down | NavKey::Up if self.items.is_empty() => KeyOutcome::Ignored,
            NavKey::Down => {
                let last = self.items.len() - 1;
                let next = self.highlighted.map_or(0, |i| (i + 1).min(last));
                self.highlighted = Some(next);
                KeyOutcome::Moved(next)
            }
            NavKey::Up => {
                let next = self.highlighted.map_or(0, |i| i.saturating_sub(1));
                self.highlighted = Some(next);
                KeyOutcome::Moved(next)
            }
            NavKey::Enter | NavKey::Tab => {
                match self.highlighted.and_then(|i| self.items.get(i)).cloned() {
                    Some(item) => {
                        self.close();
                        KeyOutcome::Selected(item)
                    }
                    None => KeyOutcome::Ignored,
                }
            }
            NavKey::Escape => {
                self.close();
                KeyOutcome::Closed
            }
        }
    }
}

fn state_of<T>(debouncer: &Debouncer, dropdown: &Dropdown<T>) -> AutocompleteState {
    if debouncer.is_pending() {
        AutocompleteState::Pending
    } else if !dropdown.open {
        AutocompleteState::Idle
    } else if dropdown.items.is_empty() {
        AutocompleteState::Empty
    } else {
        AutocompleteState::Results(dropdown.items.len())
    }
}

/// Bin-location field: local filter over the catalog.
#[derive(Debug)]
pub struct BinLocationSearch {
    catalog: Arc<Vec<Bin>>,
    min_chars: usize,
    debouncer: Debouncer,
    dropdown: Dropdown<Bin>,
    tx: SuggestionSender,
}

impl BinLocationSearch {
    pub fn new(delay: Duration, min_chars: usize, tx: SuggestionSender) -> Self {
        Self {
            catalog: Arc::new(Vec::new()),
            min_chars,
            debouncer: Debouncer::new(delay),
            dropdown: Dropdown::new(),
            tx,
        }
    }

    pub fn set_catalog(&mut self, catalog: Arc<Vec<Bin>>) {
        self.catalog = catalog;
    }

    /// React to the field's text changing (or gaining focus with `text` in it).
    pub fn input(&mut self, text: &str) {
        let term = SearchTerm::new(text);
        if term.len() < self.min_chars {
            self.debouncer.cancel();
            self.dropdown.close();
            return;
        }

        let catalog = Arc::clone(&self.catalog);
        let tx = self.tx.clone();
        self.debouncer.schedule(async move {
            let hits: Vec<Bin> = filter_bins(&catalog, &term).into_iter().cloned().collect();
            debug!(term = %term, hits = hits.len(), "bin suggestions");
            let _ = tx.send(SuggestionUpdate::Bins(hits));
        });
    }

    pub fn apply(&mut self, bins: Vec<Bin>) {
        self.dropdown.open_with(bins);
    }

    pub fn handle_key(&mut self, key: NavKey) -> KeyOutcome<Bin> {
        self.dropdown.handle_key(key)
    }

    /// Interaction outside the widget: close without side effects.
    pub fn dismiss(&mut self) {
        self.dropdown.close();
    }

    pub fn reset(&mut self) {
        self.debouncer.cancel();
        self.dropdown.close();
    }

    pub fn dropdown(&self) -> &Dropdown<Bin> {
        &self.dropdown
    }

    pub fn state(&self) -> AutocompleteState {
        state_of(&self.debouncer, &self.dropdown)
    }
}

/// Product field: remote search through the API.
pub struct ProductSearch {
    api: Arc<dyn InventoryApi>,
    min_chars: usize,
    debouncer: Debouncer,
    dropdown: Dropdown<Product>,
    tx: SuggestionSender,
}

impl ProductSearch {
    pub fn new(
        api: Arc<dyn InventoryApi>,
        delay: Duration,
        min_chars: usize,
        tx: SuggestionSender,
    ) -> Self {
        Self {
            api,
            min_chars,
            debouncer: Debouncer::new(delay),
            dropdown: Dropdown::new(),
            tx,
        }
    }

    /// Every keystroke cancels the pending search before scheduling a new one.
    pub fn input(&mut self, text: &str) {
        let query = text.trim().to_string();
        if query.chars().count() < self.min_chars {
            self.debouncer.cancel();
            self.dropdown.close();
            return;
        }

        let api = Arc::clone(&self.api);
        let tx = self.tx.clone();
        self.debouncer.schedule(async move {
            match api.search_products(&query).await {
                Ok(products) => {
                    debug!(query = %query, hits = products.len(), "product suggestions");
                    let _ = tx.send(SuggestionUpdate::Products(products));
                }
                Err(err) => warn!(query = %query, error = %err, "product search failed"),
            }
        });
    }

    pub fn apply(&mut self, products: Vec<Product>) {
        self.dropdown.open_with(products);
    }

    pub fn handle_key(&mut self, key: NavKey) -> KeyOutcome<Product> {
        self.dropdown.handle_key(key)
    }

    pub fn dismiss(&mut self) {
        self.dropdown.close();
    }

    pub fn reset(&mut self) {
        self.debouncer.cancel();
        self.dropdown.close();
    }

    pub fn dropdown(&self) -> &Dropdown<Product> {
        &self.dropdown
    }

    pub fn state(&self) -> AutocompleteState {
        state_of(&self.debouncer, &self.dropdown)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bintrack_testing::{FakeFailure, FakeInventoryApi, fixtures};

    fn three() -> Dropdown<&'static str> {
        let mut dropdown = Dropdown::new();
        dropdown.open_with(vec!["A-01", "A-02", "A-03"]);
        dropdown
    }

    #[test]
    fn test_down_down_enter_selects_second_item() {
        let mut dropdown = three();

        assert_eq!(dropdown.handle_key(NavKey::Down), KeyOutcome::Moved(0));
        assert_eq!(dropdown.handle_key(NavKey::Down), KeyOutcome::Moved(1));
        assert_eq!(dropdown.handle_key(NavKey::Enter), KeyOutcome::Selected("A-02"));
        assert!(!dropdown.is_open());
    }

    #[test]
    fn test_cursor_clamps_without_wrapping() {
        let mut dropdown = three();

        dropdown.handle_key(NavKey::Down);
        assert_eq!(dropdown.handle_key(NavKey::Up), KeyOutcome::Moved(0));
        for _ in 0..5 {
            dropdown.handle_key(NavKey::Down);
        }
        assert_eq!(dropdown.highlighted(), Some(2));
    }

    #[test]
    fn test_enter_without_highlight_is_ignored() {
        let mut dropdown = three();
        assert_eq!(dropdown.handle_key(NavKey::Tab), KeyOutcome::Ignored);
        assert!(dropdown.is_open());
    }

    #[test]
    fn test_escape_closes_and_resets_cursor() {
        let mut dropdown = three();
        dropdown.handle_key(NavKey::Down);

        assert_eq!(dropdown.handle_key(NavKey::Escape), KeyOutcome::Closed);
        assert_eq!(dropdown.highlighted(), None);
        assert_eq!(dropdown.handle_key(NavKey::Down), KeyOutcome::Ignored);
    }

    #[test]
    fn test_reopening_resets_cursor() {
        let mut dropdown = three();
        dropdown.handle_key(NavKey::Down);
        dropdown.open_with(vec!["B-01"]);
        assert_eq!(dropdown.highlighted(), None);
    }

    #[tokio::test(start_paused = true)]
    async fn test_rapid_typing_issues_one_product_request() {
        let api = Arc::new(FakeInventoryApi::new().with_products(fixtures::products()));
        let (tx, mut rx) = suggestion_channel();
        let mut search = ProductSearch::new(api.clone(), Duration::from_millis(300), 2, tx);

        for text in ["m", "mi", "mil", "milk"] {
            search.input(text);
            tokio::time::sleep(Duration::from_millis(50)).await;
        }
        assert_eq!(search.state(), AutocompleteState::Pending);

        let update = rx.recv().await.unwrap();
        assert_eq!(api.product_queries(), vec!["milk".to_string()]);

        match update {
            SuggestionUpdate::Products(products) => {
                search.apply(products);
                assert_eq!(search.state(), AutocompleteState::Results(2));
            }
            other => panic!("unexpected update: {other:?}"),
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_short_product_query_closes_and_cancels() {
        let api = Arc::new(FakeInventoryApi::new().with_products(fixtures::products()));
        let (tx, _rx) = suggestion_channel();
        let mut search = ProductSearch::new(api.clone(), Duration::from_millis(300), 2, tx);

        search.apply(fixtures::products());
        search.input("mi");
        search.input(" m ");
        tokio::time::sleep(Duration::from_millis(500)).await;

        assert!(api.product_queries().is_empty());
        assert_eq!(search.state(), AutocompleteState::Idle);
    }

    #[tokio::test(start_paused = true)]
    async fn test_failed_product_search_leaves_dropdown_unchanged() {
        let api = Arc::new(FakeInventoryApi::new().with_products(fixtures::products()));
        let (tx, mut rx) = suggestion_channel();
        let mut search = ProductSearch::new(api.clone(), Duration::from_millis(300), 2, tx);
        search.apply(vec![fixtures::product("0001", "Whole Milk", Some(10.0))]);

        api.fail_next(FakeFailure::Rejected("search failed".into()));
        search.input("juice");
        tokio::time::sleep(Duration::from_millis(400)).await;

        assert!(rx.try_recv().is_err());
        assert_eq!(search.dropdown().items().len(), 1);
        assert_eq!(api.product_queries(), vec!["juice".to_string()]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_bin_search_filters_catalog_locally() {
        let (tx, mut rx) = suggestion_channel();
        let mut search = BinLocationSearch::new(Duration::from_millis(200), 1, tx);
        search.set_catalog(Arc::new(fixtures::bins()));

        search.input("  a-0");
        let update = rx.recv().await.unwrap();

        match update {
            SuggestionUpdate::Bins(bins) => {
                assert_eq!(bins.len(), 2);
                search.apply(bins);
            }
            other => panic!("unexpected update: {other:?}"),
        }
        assert_eq!(search.handle_key(NavKey::Down), KeyOutcome::Moved(0));
        match search.handle_key(NavKey::Enter) {
            KeyOutcome::Selected(bin) => assert_eq!(bin.name(), "A-01"),
            other => panic!("unexpected outcome: {other:?}"),
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_bin_search_with_no_match_opens_empty() {
        let (tx, mut rx) = suggestion_channel();
        let mut search = BinLocationSearch::new(Duration::from_millis(200), 1, tx);
        search.set_catalog(Arc::new(fixtures::bins()));

        search.input("zz");
        if let Some(SuggestionUpdate::Bins(bins)) = rx.recv().await {
            search.apply(bins);
        }

        assert_eq!(search.state(), AutocompleteState::Empty);
    }
}
