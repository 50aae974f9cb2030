//! Session orchestration for the inventory client.
//!
//! [`InventorySession`] owns the record snapshot, the active search and view,
//! the two autocomplete fields, the open dialog, notices and pending
//! navigation. Front ends drive it and render from it; they never keep
//! inventory state of their own.

pub mod autocomplete;
pub mod busy;
pub mod config;
pub mod debounce;
pub mod error;
pub mod form;
pub mod notify;
pub mod session;
pub mod store;

pub use autocomplete::{
    AutocompleteState, BinLocationSearch, Dropdown, KeyOutcome, NavKey, ProductSearch,
    SuggestionReceiver, SuggestionSender, SuggestionUpdate, suggestion_channel,
};
pub use busy::{BusyGuard, BusyIndicator};
pub use config::{Config, resolve_data_dir};
pub use debounce::Debouncer;
pub use error::{Error, Result};
pub use form::{AdjustForm, DeleteConfirmation, FormMode, Modal, RecordForm};
pub use notify::{Notice, NoticeLevel, Notifier, Redirect, Route};
pub use session::{InventorySession, SessionSettings, SubmitOutcome};
pub use store::RecordStore;
