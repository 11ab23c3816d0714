//! Ledger entry type and timestamp formatting.

use serde::{Deserialize, Serialize};

/// Local wall-clock pattern used in ledger entries, no timezone. Existing
/// ledgers use exactly this shape; keep it stable.
const TIMESTAMP_FORMAT: &str = "%d-%m-%Y, %H:%M:%S";

/// One completed conversion: the derived PDF filename and when it finished.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerEntry {
    pub filename: String,
    pub timestamp: String,
}

/// Current local time rendered in the ledger timestamp format
/// (`DD-MM-YYYY, HH:MM:SS`).
pub fn now_timestamp() -> String {
    chrono::Local::now().format(TIMESTAMP_FORMAT).to_string()
}
