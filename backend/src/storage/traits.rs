//! # Storage Traits
//!
//! Storage abstractions the domain services are written against. Lookups of
//! unknown ids are not errors: they come back as `None` or `false`.

use anyhow::Result;

use crate::domain::models::activity_log::ActivityLog;
use crate::domain::models::child::Child;
use crate::domain::models::user::User;

/// Storage of child identity records
pub trait ChildStorage: Send + Sync {
    /// All children in insertion order
    fn list_children(&self) -> Result<Vec<Child>>;

    fn get_child(&self, child_id: &str) -> Result<Option<Child>>;

    /// Append a child. Returns false, storing nothing, when the id is taken.
    fn insert_child(&self, child: Child) -> Result<bool>;

    /// Run `update` on the matching child under a single write lock and
    /// return the updated record. Returns `None` if no child matches.
    fn modify_child(
        &self,
        child_id: &str,
        update: &mut dyn FnMut(&mut Child),
    ) -> Result<Option<Child>>;

    /// Returns true if a child was removed
    fn delete_child(&self, child_id: &str) -> Result<bool>;
}

/// Read-only storage of the activity ledger
pub trait ActivityLogStorage: Send + Sync {
    fn list_logs(&self) -> Result<Vec<ActivityLog>>;

    fn list_logs_for_child(&self, child_id: &str) -> Result<Vec<ActivityLog>>;
}

/// Storage of the (single) authenticated user
pub trait SessionStorage: Send + Sync {
    fn current_user(&self) -> Result<Option<User>>;

    /// Replace the current user, or clear it with `None`
    fn set_current_user(&self, user: Option<User>) -> Result<()>;
}
