//! Domain model for an entry of the mock activity ledger.
use serde::{Deserialize, Serialize};
use shared::LogStatus;

/// Ledger entries are seeded and never created or changed afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivityLog {
    pub id: String,
    pub child_id: String,
    pub action: String,
    pub location: String,
    /// Display label, not a parsed time
    pub timestamp: String,
    pub status: LogStatus,
    pub hash: String,
    pub block_number: u64,
    pub application: Option<String>,
    pub criteria_met: Option<Vec<String>>,
}
