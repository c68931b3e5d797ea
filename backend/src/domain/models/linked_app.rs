//! Domain model for an application linked to a child's credential.
use serde::{Deserialize, Serialize};
use shared::{AppCategory, LinkedAppStatus};
use uuid::Uuid;

use crate::domain::commands::linked_app::{AddLinkedAppCommand, LinkedAppPatch};

/// Last-access label given to a freshly linked app
pub const NEW_APP_LAST_ACCESS: &str = "now";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinkedApp {
    pub id: String,
    pub name: String,
    pub category: AppCategory,
    pub status: LinkedAppStatus,
    pub last_access: String,
    pub permissions: Vec<String>,
}

impl LinkedApp {
    pub fn generate_id() -> String {
        format!("app::{}", Uuid::new_v4().simple())
    }

    pub fn from_command(id: String, command: AddLinkedAppCommand) -> Self {
        Self {
            id,
            name: command.name,
            category: command.category,
            status: LinkedAppStatus::Active,
            last_access: NEW_APP_LAST_ACCESS.to_string(),
            permissions: command.permissions,
        }
    }

    /// Flips active <-> blocked
    pub fn toggle(&mut self) {
        self.status = match self.status {
            LinkedAppStatus::Active => LinkedAppStatus::Blocked,
            LinkedAppStatus::Blocked => LinkedAppStatus::Active,
        };
    }

    pub fn apply_patch(&mut self, patch: LinkedAppPatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(category) = patch.category {
            self.category = category;
        }
        if let Some(status) = patch.status {
            self.status = status;
        }
        if let Some(last_access) = patch.last_access {
            self.last_access = last_access;
        }
        if let Some(permissions) = patch.permissions {
            self.permissions = permissions;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn roblox() -> LinkedApp {
        LinkedApp::from_command(
            "app3".to_string(),
            AddLinkedAppCommand {
                name: "Roblox".to_string(),
                category: AppCategory::Game,
                permissions: vec!["read-only".to_string()],
            },
        )
    }

    #[test]
    fn test_new_app_is_active() {
        let app = roblox();
        assert_eq!(app.status, LinkedAppStatus::Active);
        assert_eq!(app.last_access, NEW_APP_LAST_ACCESS);
    }

    #[test]
    fn test_toggle_is_an_involution() {
        let mut app = roblox();
        app.toggle();
        assert_eq!(app.status, LinkedAppStatus::Blocked);
        app.toggle();
        assert_eq!(app.status, LinkedAppStatus::Active);
    }

    #[test]
    fn test_apply_patch_only_touches_given_fields() {
        let mut app = roblox();
        app.apply_patch(LinkedAppPatch {
            permissions: Some(vec!["time-limited".to_string()]),
            ..LinkedAppPatch::default()
        });

        assert_eq!(app.permissions, vec!["time-limited".to_string()]);
        assert_eq!(app.name, "Roblox");
        assert_eq!(app.category, AppCategory::Game);
        assert_eq!(app.status, LinkedAppStatus::Active);
    }

    #[test]
    fn test_generated_ids_differ() {
        assert_ne!(LinkedApp::generate_id(), LinkedApp::generate_id());
    }
}
