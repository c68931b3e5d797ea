use anyhow::Result;
use tracing::debug;

use crate::domain::models::child::Child;
use crate::storage::memory::connection::MemoryConnection;
use crate::storage::traits::ChildStorage;

#[derive(Debug, Clone)]
pub struct ChildRepository {
    connection: MemoryConnection,
}

impl ChildRepository {
    pub fn new(connection: MemoryConnection) -> Self {
        Self { connection }
    }
}

impl ChildStorage for ChildRepository {
    fn list_children(&self) -> Result<Vec<Child>> {
        Ok(self.connection.read()?.children.clone())
    }

    fn get_child(&self, child_id: &str) -> Result<Option<Child>> {
        let state = self.connection.read()?;
        Ok(state.children.iter().find(|c| c.id == child_id).cloned())
    }

    fn insert_child(&self, child: Child) -> Result<bool> {
        let mut state = self.connection.write()?;
        if state.children.iter().any(|c| c.id == child.id) {
            debug!("Child id {} already taken", child.id);
            return Ok(false);
        }
        state.children.push(child);
        Ok(true)
    }

    fn modify_child(
        &self,
        child_id: &str,
        update: &mut dyn FnMut(&mut Child),
    ) -> Result<Option<Child>> {
        let mut state = self.connection.write()?;
        match state.children.iter_mut().find(|c| c.id == child_id) {
            Some(child) => {
                update(child);
                Ok(Some(child.clone()))
            }
            None => Ok(None),
        }
    }

    fn delete_child(&self, child_id: &str) -> Result<bool> {
        let mut state = self.connection.write()?;
        let before = state.children.len();
        state.children.retain(|c| c.id != child_id);
        Ok(state.children.len() != before)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn setup_test() -> ChildRepository {
        ChildRepository::new(MemoryConnection::new_seeded())
    }

    #[test]
    fn test_list_and_get() {
        let repo = setup_test();

        let children = repo.list_children().expect("Failed to list children");
        assert_eq!(children.len(), 2);
        assert_eq!(children[0].id, "c1");

        let child = repo.get_child("c2").expect("Failed to get child");
        assert_eq!(child.map(|c| c.name), Some("Omar Ahmed".to_string()));
        assert!(repo.get_child("missing").unwrap().is_none());
    }

    #[test]
    fn test_insert_rejects_duplicate_id() {
        let repo = setup_test();
        let mut duplicate = repo.get_child("c1").unwrap().unwrap();
        duplicate.name = "Impostor".to_string();

        assert!(!repo.insert_child(duplicate).unwrap());
        assert_eq!(repo.list_children().unwrap().len(), 2);
        assert_eq!(repo.get_child("c1").unwrap().unwrap().name, "Sara Ahmed");
    }

    #[test]
    fn test_modify_missing_child_is_noop() {
        let repo = setup_test();
        let before = repo.list_children().unwrap();

        let mut called = false;
        let result = repo
            .modify_child("missing", &mut |_| called = true)
            .unwrap();

        assert!(result.is_none());
        assert!(!called);
        assert_eq!(repo.list_children().unwrap(), before);
    }

    #[test]
    fn test_delete() {
        let repo = setup_test();
        assert!(repo.delete_child("c1").unwrap());
        assert!(!repo.delete_child("c1").unwrap());
        assert_eq!(repo.list_children().unwrap().len(), 1);
    }
}
