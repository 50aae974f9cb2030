//! Client for the inventory server's JSON API.
//!
//! Every endpoint answers with an [`Envelope`](bintrack_types::Envelope).
//! This crate turns envelopes into `Result`s so callers only deal with the
//! [`ClientError`] taxonomy:
//!
//! - `AuthRequired`: any 401, checked before the body is looked at
//! - `NeedsConfig`: the server has no database configured yet
//! - `Rejected`: a well-formed envelope with `success: false`
//! - `Status` / `Transport` / `Decode`: everything that never produced an envelope
//!
//! [`InventoryApi`] is the seam the runtime depends on; [`HttpInventoryApi`]
//! is the production implementation.

mod api;
mod error;
mod http;
pub mod routes;

pub use api::InventoryApi;
pub use error::{ClientError, Result};
pub use http::{ClientOptions, HttpInventoryApi};
