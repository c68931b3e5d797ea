use anyhow::Result;

use crate::domain::models::activity_log::ActivityLog;
use crate::storage::memory::connection::MemoryConnection;
use crate::storage::traits::ActivityLogStorage;

#[derive(Debug, Clone)]
pub struct ActivityLogRepository {
    connection: MemoryConnection,
}

impl ActivityLogRepository {
    pub fn new(connection: MemoryConnection) -> Self {
        Self { connection }
    }
}

impl ActivityLogStorage for ActivityLogRepository {
    fn list_logs(&self) -> Result<Vec<ActivityLog>> {
        Ok(self.connection.read()?.logs.clone())
    }

    fn list_logs_for_child(&self, child_id: &str) -> Result<Vec<ActivityLog>> {
        let state = self.connection.read()?;
        Ok(state
            .logs
            .iter()
            .filter(|log| log.child_id == child_id)
            .cloned()
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_logs_filtered_by_child() {
        let repo = ActivityLogRepository::new(MemoryConnection::new_seeded());

        assert_eq!(repo.list_logs().unwrap().len(), 5);

        let ids: Vec<String> = repo
            .list_logs_for_child("c2")
            .unwrap()
            .into_iter()
            .map(|log| log.id)
            .collect();
        assert_eq!(ids, vec!["l3".to_string(), "l5".to_string()]);

        assert!(repo.list_logs_for_child("missing").unwrap().is_empty());
    }
}
