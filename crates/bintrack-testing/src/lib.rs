//! Testing infrastructure for bintrack tests.
//!
//! - `TestWorld`: isolated data directory + mock inventory server + CLI runner
//! - `fake`: in-memory `InventoryApi` that records every call
//! - `fixtures`: record/bin/product builders and sample sets
//! - `server`: helpers that mount envelope responses on a `MockServer`

pub mod fake;
pub mod fixtures;
pub mod server;
pub mod world;

pub use fake::{ApiCall, FakeFailure, FakeInventoryApi};
pub use world::{CliResult, TestWorld};
