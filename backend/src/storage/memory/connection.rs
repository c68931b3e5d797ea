use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use chrono::Utc;
use tracing::info;

use crate::domain::models::activity_log::ActivityLog;
use crate::domain::models::child::Child;
use crate::domain::models::user::User;
use crate::storage::error::StoreError;
use crate::storage::seed::{seed_children, seed_logs};

/// Everything the store holds
#[derive(Debug, Default)]
pub struct StoreState {
    pub user: Option<User>,
    pub children: Vec<Child>,
    pub logs: Vec<ActivityLog>,
}

/// Shared handle to the process-memory store
#[derive(Debug, Clone, Default)]
pub struct MemoryConnection {
    state: Arc<RwLock<StoreState>>,
}

impl MemoryConnection {
    /// An empty store: no user, no children, no logs
    pub fn new() -> Self {
        Self::default()
    }

    /// A store pre-populated with the mock children and ledger
    pub fn new_seeded() -> Self {
        let children = seed_children(Utc::now());
        let logs = seed_logs();
        info!(
            "Seeding identity store with {} children and {} activity logs",
            children.len(),
            logs.len()
        );

        Self::with_state(StoreState {
            user: None,
            children,
            logs,
        })
    }

    pub fn with_state(state: StoreState) -> Self {
        Self {
            state: Arc::new(RwLock::new(state)),
        }
    }

    pub(crate) fn read(&self) -> Result<RwLockReadGuard<'_, StoreState>, StoreError> {
        self.state.read().map_err(|_| StoreError::LockPoisoned("read"))
    }

    pub(crate) fn write(&self) -> Result<RwLockWriteGuard<'_, StoreState>, StoreError> {
        self.state.write().map_err(|_| StoreError::LockPoisoned("write"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_is_empty() {
        let conn = MemoryConnection::new();
        let state = conn.read().unwrap();
        assert!(state.user.is_none());
        assert!(state.children.is_empty());
        assert!(state.logs.is_empty());
    }

    #[test]
    fn test_clones_share_state() {
        let conn = MemoryConnection::new_seeded();
        let other = conn.clone();

        other.write().unwrap().children.clear();

        assert!(conn.read().unwrap().children.is_empty());
        assert_eq!(conn.read().unwrap().logs.len(), 5);
    }
}
