//! The fixed marketplace of applications a parent can link to a child.

use shared::AppCategory;

use crate::domain::commands::linked_app::AddLinkedAppCommand;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CatalogApp {
    pub id: &'static str,
    pub name: &'static str,
    pub category: AppCategory,
    pub permissions: &'static [&'static str],
}

impl CatalogApp {
    pub fn to_command(&self) -> AddLinkedAppCommand {
        AddLinkedAppCommand {
            name: self.name.to_string(),
            category: self.category,
            permissions: self.permissions.iter().map(|p| p.to_string()).collect(),
        }
    }
}

pub const APP_CATALOG: &[CatalogApp] = &[
    CatalogApp {
        id: "madrasati",
        name: "Madrasati Platform",
        category: AppCategory::Education,
        permissions: &["full"],
    },
    CatalogApp {
        id: "minecraft-education",
        name: "Minecraft Education",
        category: AppCategory::Game,
        permissions: &["time-limited"],
    },
    CatalogApp {
        id: "roblox",
        name: "Roblox",
        category: AppCategory::Game,
        permissions: &["read-only"],
    },
    CatalogApp {
        id: "khan-academy-kids",
        name: "Khan Academy Kids",
        category: AppCategory::Education,
        permissions: &["full"],
    },
];

pub fn find_catalog_app(entry_id: &str) -> Option<&'static CatalogApp> {
    APP_CATALOG.iter().find(|entry| entry.id == entry_id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_catalog_ids_are_unique() {
        let ids: HashSet<&str> = APP_CATALOG.iter().map(|entry| entry.id).collect();
        assert_eq!(ids.len(), APP_CATALOG.len());
    }

    #[test]
    fn test_find_catalog_app() {
        let roblox = find_catalog_app("roblox").expect("roblox is in the catalog");
        let command = roblox.to_command();
        assert_eq!(command.name, "Roblox");
        assert_eq!(command.permissions, vec!["read-only".to_string()]);

        assert!(find_catalog_app("fortnite").is_none());
    }
}
