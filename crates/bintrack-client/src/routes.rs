//! Route table of the inventory server.

use bintrack_types::RecordId;

pub const RECORDS: &str = "/api/bin-locations";
pub const BINS: &str = "/api/bins";
pub const PRODUCT_SEARCH: &str = "/api/products/search";
pub const LOGOUT: &str = "/api/logout";
pub const HISTORY: &str = "/api/history";
pub const HISTORY_STATS: &str = "/api/history/stats";
pub const HEALTH: &str = "/health";

pub fn record(id: RecordId) -> String {
    format!("{}/{}", RECORDS, id)
}

pub fn record_adjust(id: RecordId) -> String {
    format!("{}/{}/adjust", RECORDS, id)
}
