use anyhow::Result;
use std::sync::Arc;
use tracing::{info, warn};

use crate::domain::app_catalog::{find_catalog_app, CatalogApp, APP_CATALOG};
use crate::domain::commands::linked_app::{AddLinkedAppCommand, LinkedAppPatch};
use crate::domain::models::linked_app::LinkedApp;
use crate::storage::traits::ChildStorage;

/// Service for the applications linked to a child's credential.
///
/// Apps are never removed, only blocked. Unknown child or app ids are silent
/// no-ops reported as `None`.
#[derive(Clone)]
pub struct LinkedAppService {
    children: Arc<dyn ChildStorage>,
}

impl LinkedAppService {
    pub fn new(children: Arc<dyn ChildStorage>) -> Self {
        Self { children }
    }

    pub fn catalog(&self) -> &'static [CatalogApp] {
        APP_CATALOG
    }

    /// Link a new active app to the child
    pub fn add_linked_app(
        &self,
        child_id: &str,
        command: AddLinkedAppCommand,
    ) -> Result<Option<LinkedApp>> {
        info!("Linking app {} to child {}", command.name, child_id);

        let mut command = Some(command);
        let mut added = None;
        self.children.modify_child(child_id, &mut |child| {
            if let Some(command) = command.take() {
                let mut app_id = LinkedApp::generate_id();
                while child.has_linked_app(&app_id) {
                    app_id = LinkedApp::generate_id();
                }
                let app = LinkedApp::from_command(app_id, command);
                child.linked_apps.push(app.clone());
                added = Some(app);
            }
        })?;

        match &added {
            Some(app) => info!("Linked app {} ({}) to child {}", app.name, app.id, child_id),
            None => warn!("Ignoring app link for unknown child {}", child_id),
        }
        Ok(added)
    }

    /// Link the catalog entry `entry_id`. Unknown entries are a no-op.
    pub fn add_from_catalog(&self, child_id: &str, entry_id: &str) -> Result<Option<LinkedApp>> {
        match find_catalog_app(entry_id) {
            Some(entry) => self.add_linked_app(child_id, entry.to_command()),
            None => {
                warn!("Unknown catalog entry {}", entry_id);
                Ok(None)
            }
        }
    }

    pub fn update_linked_app(
        &self,
        child_id: &str,
        app_id: &str,
        patch: LinkedAppPatch,
    ) -> Result<Option<LinkedApp>> {
        info!("Updating app {} of child {}", app_id, child_id);

        let mut patch = Some(patch);
        let mut updated = None;
        self.children.modify_child(child_id, &mut |child| {
            if let Some(app) = child.linked_app_mut(app_id) {
                if let Some(patch) = patch.take() {
                    app.apply_patch(patch);
                }
                updated = Some(app.clone());
            }
        })?;

        if updated.is_none() {
            warn!("Ignoring update of unknown app {} on child {}", app_id, child_id);
        }
        Ok(updated)
    }

    /// Flip the app between active and blocked
    pub fn toggle_linked_app(&self, child_id: &str, app_id: &str) -> Result<Option<LinkedApp>> {
        let mut toggled = None;
        self.children.modify_child(child_id, &mut |child| {
            if let Some(app) = child.linked_app_mut(app_id) {
                app.toggle();
                toggled = Some(app.clone());
            }
        })?;

        match &toggled {
            Some(app) => info!("App {} of child {} is now {:?}", app.id, child_id, app.status),
            None => warn!("Ignoring toggle of unknown app {} on child {}", app_id, child_id),
        }
        Ok(toggled)
    }
}
