use anyhow::Result;
use chrono::{DateTime, Utc};
use std::sync::Arc;
use tracing::{info, warn};

use crate::domain::commands::child::{AddChildCommand, ChildPatch};
use crate::domain::models::child::Child;
use crate::domain::models::credential::{countdown_label, URGENT_THRESHOLD_SECS};
use crate::storage::traits::ChildStorage;
use shared::CredentialStatus;

/// Read-time view of a child's credential lifetime
#[derive(Debug, Clone, PartialEq)]
pub struct CredentialStatusView {
    pub child_id: String,
    pub token: String,
    pub status: CredentialStatus,
    pub remaining_seconds: u64,
    pub display: String,
    pub is_urgent: bool,
}

/// Service for managing child identity records and their credentials.
///
/// Operations on unknown ids are silent no-ops reported as `None` or `false`.
#[derive(Clone)]
pub struct ChildService {
    children: Arc<dyn ChildStorage>,
}

impl ChildService {
    pub fn new(children: Arc<dyn ChildStorage>) -> Self {
        Self { children }
    }

    /// Add a child with a fresh id, active status and a newly issued
    /// credential
    pub fn add_child(&self, command: AddChildCommand) -> Result<Child> {
        info!("Adding child: name={}, dob={}", command.name, command.dob);

        loop {
            let child = Child::from_command(Child::generate_id(), command.clone());
            let child_id = child.id.clone();
            let token = child.credential.token.clone();

            if self.children.insert_child(child.clone())? {
                info!("Added child {} with credential {}", child_id, token);
                return Ok(child);
            }
            warn!("Generated child id {} collided, retrying", child_id);
        }
    }

    pub fn get_child(&self, child_id: &str) -> Result<Option<Child>> {
        let child = self.children.get_child(child_id)?;
        if child.is_none() {
            warn!("Child not found: {}", child_id);
        }
        Ok(child)
    }

    pub fn list_children(&self) -> Result<Vec<Child>> {
        let children = self.children.list_children()?;
        info!("Found {} children", children.len());
        Ok(children)
    }

    /// Merge `patch` into the child. A patch carrying an authentication
    /// policy always reissues the credential from the merged policy.
    pub fn update_child(&self, child_id: &str, patch: ChildPatch) -> Result<Option<Child>> {
        info!("Updating child: {}", child_id);

        let mut patch = Some(patch);
        let mut reissued = false;
        let updated = self.children.modify_child(child_id, &mut |child| {
            if let Some(patch) = patch.take() {
                reissued = child.apply_patch(patch);
            }
        })?;

        match &updated {
            Some(child) if reissued => info!(
                "Policy of child {} changed, reissued credential requiring {:?}",
                child.id, child.credential.required_auth
            ),
            Some(child) => info!("Updated child {}", child.id),
            None => warn!("Ignoring update of unknown child {}", child_id),
        }

        Ok(updated)
    }

    pub fn delete_child(&self, child_id: &str) -> Result<bool> {
        info!("Deleting child: {}", child_id);

        let deleted = self.children.delete_child(child_id)?;
        if !deleted {
            warn!("Ignoring delete of unknown child {}", child_id);
        }
        Ok(deleted)
    }

    /// Reissue the credential from the child's current policy, leaving every
    /// other field untouched
    pub fn regenerate_credential(&self, child_id: &str) -> Result<Option<Child>> {
        info!("Regenerating credential for child: {}", child_id);

        let updated = self
            .children
            .modify_child(child_id, &mut |child| child.reissue_credential())?;

        if updated.is_none() {
            warn!("Ignoring credential regeneration of unknown child {}", child_id);
        }
        Ok(updated)
    }

    /// Expiry state of the child's live credential as of `now`
    pub fn credential_status(
        &self,
        child_id: &str,
        now: DateTime<Utc>,
    ) -> Result<Option<CredentialStatusView>> {
        let child = match self.children.get_child(child_id)? {
            Some(child) => child,
            None => return Ok(None),
        };

        let remaining_seconds = child.credential.remaining_seconds_at(now);
        Ok(Some(CredentialStatusView {
            child_id: child.id,
            status: child.credential.status_at(now),
            token: child.credential.token,
            remaining_seconds,
            display: countdown_label(remaining_seconds),
            is_urgent: remaining_seconds < URGENT_THRESHOLD_SECS,
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::auth_policy::AuthPolicy;
    use crate::domain::models::credential::Credential;
    use crate::storage::memory::{ChildRepository, MemoryConnection};
    use chrono::{Duration, NaiveDate};
    use shared::{AuthFactor, ChildStatus, Gender};
    use std::collections::HashSet;

    fn setup_test() -> ChildService {
        let repo = ChildRepository::new(MemoryConnection::new_seeded());
        ChildService::new(Arc::new(repo))
    }

    fn add_command(auth_policy: Option<AuthPolicy>) -> AddChildCommand {
        AddChildCommand {
            name: "Layla Ahmed".to_string(),
            dob: NaiveDate::from_ymd_opt(2019, 1, 4).unwrap(),
            gender: Gender::Female,
            national_id: "1122334455".to_string(),
            photo_url: None,
            auth_policy,
            presentation: None,
        }
    }

    #[test]
    fn test_add_child_with_parent_approval_policy() {
        let service = setup_test();
        let policy = AuthPolicy {
            biometric: false,
            pin: false,
            parent_approval: true,
            location_check: false,
        };

        let child = service.add_child(add_command(Some(policy))).expect("Failed to add child");

        assert_eq!(child.credential.required_auth, vec![AuthFactor::ParentApproval]);
        assert_eq!(child.status, ChildStatus::Active);
        assert!(child.linked_apps.is_empty());

        let stored = service.get_child(&child.id).unwrap();
        assert_eq!(stored, Some(child));
        assert_eq!(service.list_children().unwrap().len(), 3);
    }

    #[test]
    fn test_add_child_ids_are_unique() {
        let service = setup_test();
        for _ in 0..50 {
            service.add_child(add_command(None)).unwrap();
        }

        let children = service.list_children().unwrap();
        let ids: HashSet<&str> = children.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(children.len(), 52);
        assert_eq!(ids.len(), children.len());
    }

    #[test]
    fn test_policy_change_reissues_credential() {
        let service = setup_test();
        let child = service.add_child(add_command(None)).unwrap();
        assert!(!child.credential.required_auth.contains(&AuthFactor::Biometric));

        let patch = ChildPatch::with_auth_policy(AuthPolicy {
            biometric: true,
            ..child.auth_policy
        });
        let updated = service.update_child(&child.id, patch).unwrap().unwrap();

        assert!(updated.credential.required_auth.contains(&AuthFactor::Biometric));
        assert_eq!(
            updated.credential.required_auth,
            updated.auth_policy.active_factors()
        );
        assert_ne!(updated.credential.token, child.credential.token);
    }

    #[test]
    fn test_replacing_policy_drops_old_factors() {
        let service = setup_test();
        // c2 starts with biometric + pin
        let patch = ChildPatch::with_auth_policy(AuthPolicy {
            biometric: false,
            pin: false,
            parent_approval: false,
            location_check: true,
        });

        let updated = service.update_child("c2", patch).unwrap().unwrap();
        assert_eq!(updated.credential.required_auth, vec![AuthFactor::LocationCheck]);
        assert!(updated.credential.token.starts_with("did:nowa:LOC:"));
    }

    #[test]
    fn test_update_without_policy_keeps_credential() {
        let service = setup_test();
        let before = service.get_child("c1").unwrap().unwrap();

        let patch = ChildPatch {
            last_verification: Some("just now".to_string()),
            ..ChildPatch::default()
        };
        let updated = service.update_child("c1", patch).unwrap().unwrap();

        assert_eq!(updated.last_verification, "just now");
        assert_eq!(updated.credential, before.credential);
    }

    #[test]
    fn test_update_after_delete_is_noop() {
        let service = setup_test();
        assert!(service.delete_child("c1").unwrap());
        let before = service.list_children().unwrap();

        let patch = ChildPatch {
            name: Some("Ghost".to_string()),
            auth_policy: Some(AuthPolicy::none()),
            ..ChildPatch::default()
        };
        let result = service.update_child("c1", patch).expect("no-op must not fail");

        assert!(result.is_none());
        assert_eq!(service.list_children().unwrap(), before);
    }

    #[test]
    fn test_delete_unknown_child_is_noop() {
        let service = setup_test();
        assert!(!service.delete_child("missing").unwrap());
        assert_eq!(service.list_children().unwrap().len(), 2);
    }

    #[test]
    fn test_regenerate_credential_only_touches_credential() {
        let service = setup_test();
        let before = service.get_child("c1").unwrap().unwrap();

        let after = service.regenerate_credential("c1").unwrap().unwrap();

        assert_ne!(after.credential.token, before.credential.token);
        assert_eq!(after.credential.required_auth, before.auth_policy.active_factors());
        let mut expected = before.clone();
        expected.credential = after.credential.clone();
        assert_eq!(after, expected);

        assert!(service.regenerate_credential("missing").unwrap().is_none());
    }

    #[test]
    fn test_credential_status() {
        let service = setup_test();
        let child = service.get_child("c1").unwrap().unwrap();
        let issued = child.credential.generated_at;

        let fresh = service.credential_status("c1", issued).unwrap().unwrap();
        assert_eq!(fresh.status, CredentialStatus::Valid);
        assert_eq!(fresh.remaining_seconds, 300);
        assert_eq!(fresh.display, "05:00");
        assert!(!fresh.is_urgent);

        let late = service
            .credential_status("c1", issued + Duration::seconds(250))
            .unwrap()
            .unwrap();
        assert_eq!(late.display, "00:50");
        assert!(late.is_urgent);

        let expired = service
            .credential_status("c1", issued + Credential::lifetime())
            .unwrap()
            .unwrap();
        assert_eq!(expired.status, CredentialStatus::Expired);
        assert_eq!(expired.remaining_seconds, 0);

        assert!(service.credential_status("missing", issued).unwrap().is_none());
    }
}
