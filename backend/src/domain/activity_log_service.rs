use anyhow::Result;
use std::sync::Arc;
use tracing::info;

use crate::domain::models::activity_log::ActivityLog;
use crate::storage::traits::ActivityLogStorage;

/// Read-only access to the mock activity ledger
#[derive(Clone)]
pub struct ActivityLogService {
    logs: Arc<dyn ActivityLogStorage>,
}

impl ActivityLogService {
    pub fn new(logs: Arc<dyn ActivityLogStorage>) -> Self {
        Self { logs }
    }

    pub fn list_logs(&self) -> Result<Vec<ActivityLog>> {
        let logs = self.logs.list_logs()?;
        info!("Found {} activity logs", logs.len());
        Ok(logs)
    }

    pub fn list_logs_for_child(&self, child_id: &str) -> Result<Vec<ActivityLog>> {
        let logs = self.logs.list_logs_for_child(child_id)?;
        info!("Found {} activity logs for child {}", logs.len(), child_id);
        Ok(logs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::memory::{ActivityLogRepository, MemoryConnection};
    use shared::LogStatus;

    #[test]
    fn test_failed_attempt_is_in_ledger() {
        let repository = ActivityLogRepository::new(MemoryConnection::new_seeded());
        let service = ActivityLogService::new(Arc::new(repository));

        let logs = service.list_logs_for_child("c1").unwrap();
        assert_eq!(logs.len(), 3);

        let failed: Vec<&ActivityLog> =
            logs.iter().filter(|l| l.status == LogStatus::Failed).collect();
        assert_eq!(failed.len(), 1);
        assert_eq!(failed[0].block_number, 10260);
        assert!(failed[0].application.is_none());
        assert!(failed[0].criteria_met.is_none());
    }
}
