// Engine module - pure functions over the in-memory record snapshot.
// Nothing here touches the network or the session; callers pass slices in.

pub mod filter;
pub mod summary;

pub use filter::{SearchTerm, filter_bins, filter_records};
pub use summary::{AggregateSummary, summarize};
