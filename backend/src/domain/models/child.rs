//! Domain model for a child identity record.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use shared::{ChildStatus, Gender};
use uuid::Uuid;

use crate::domain::commands::child::{AddChildCommand, ChildPatch};
use crate::domain::credential_issuer::issue_credential;
use crate::domain::models::auth_policy::AuthPolicy;
use crate::domain::models::credential::Credential;
use crate::domain::models::linked_app::LinkedApp;
use crate::domain::models::presentation::PresentationConfig;

/// Avatar used when a child is added without a photo
pub const DEFAULT_PHOTO_URL: &str =
    "https://api.dicebear.com/7.x/avataaars/svg?seed=d&backgroundColor=e6e6e6";

/// Last-verification label of a freshly added child
pub const NEW_CHILD_LAST_VERIFICATION: &str = "new";

/// Domain model representing a child's identity record.
///
/// Exactly one credential is live at a time, and its `required_auth` always
/// mirrors `auth_policy` as of the last regeneration. Every write to the
/// policy goes through [`Child::apply_patch`], which reissues the credential.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Child {
    pub id: String,
    pub name: String,
    pub dob: NaiveDate,
    pub gender: Gender,
    pub national_id: String,
    pub photo_url: String,
    pub status: ChildStatus,
    pub last_verification: String,
    pub credential: Credential,
    pub auth_policy: AuthPolicy,
    pub presentation: PresentationConfig,
    pub linked_apps: Vec<LinkedApp>,
}

impl Child {
    /// Generate a unique ID for a child
    pub fn generate_id() -> String {
        format!("child::{}", Uuid::new_v4().simple())
    }

    /// Build a new active child with a freshly issued credential
    pub fn from_command(id: String, command: AddChildCommand) -> Self {
        let auth_policy = command.auth_policy.unwrap_or_default();
        let presentation = command.presentation.unwrap_or_default();

        Self {
            id,
            name: command.name,
            dob: command.dob,
            gender: command.gender,
            national_id: command.national_id,
            photo_url: command
                .photo_url
                .filter(|url| !url.is_empty())
                .unwrap_or_else(|| DEFAULT_PHOTO_URL.to_string()),
            status: ChildStatus::Active,
            last_verification: NEW_CHILD_LAST_VERIFICATION.to_string(),
            credential: issue_credential(&auth_policy),
            auth_policy,
            presentation,
            linked_apps: Vec::new(),
        }
    }

    /// Merge `patch` into the record. Returns true when the credential was
    /// reissued, which happens whenever the patch carries a policy, even an
    /// identical one.
    pub fn apply_patch(&mut self, patch: ChildPatch) -> bool {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(dob) = patch.dob {
            self.dob = dob;
        }
        if let Some(gender) = patch.gender {
            self.gender = gender;
        }
        if let Some(national_id) = patch.national_id {
            self.national_id = national_id;
        }
        if let Some(photo_url) = patch.photo_url {
            self.photo_url = photo_url;
        }
        if let Some(status) = patch.status {
            self.status = status;
        }
        if let Some(last_verification) = patch.last_verification {
            self.last_verification = last_verification;
        }
        if let Some(presentation) = patch.presentation {
            self.presentation = presentation;
        }

        match patch.auth_policy {
            Some(auth_policy) => {
                self.auth_policy = auth_policy;
                self.reissue_credential();
                true
            }
            None => false,
        }
    }

    /// Replace the live credential with one issued from the current policy
    pub fn reissue_credential(&mut self) {
        self.credential = issue_credential(&self.auth_policy);
    }

    pub fn linked_app_mut(&mut self, app_id: &str) -> Option<&mut LinkedApp> {
        self.linked_apps.iter_mut().find(|app| app.id == app_id)
    }

    pub fn has_linked_app(&self, app_id: &str) -> bool {
        self.linked_apps.iter().any(|app| app.id == app_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::{AuthFactor, ThemeColor};

    fn add_command(auth_policy: Option<AuthPolicy>) -> AddChildCommand {
        AddChildCommand {
            name: "Sara Ahmed".to_string(),
            dob: NaiveDate::from_ymd_opt(2015, 5, 12).unwrap(),
            gender: Gender::Female,
            national_id: "1092837465".to_string(),
            photo_url: None,
            auth_policy,
            presentation: None,
        }
    }

    #[test]
    fn test_from_command_applies_defaults() {
        let child = Child::from_command("c9".to_string(), add_command(None));

        assert_eq!(child.status, ChildStatus::Active);
        assert_eq!(child.last_verification, NEW_CHILD_LAST_VERIFICATION);
        assert_eq!(child.photo_url, DEFAULT_PHOTO_URL);
        assert_eq!(child.auth_policy, AuthPolicy::default());
        assert_eq!(child.presentation, PresentationConfig::default());
        assert_eq!(child.presentation.color, ThemeColor::Indigo);
        assert_eq!(child.credential.required_auth, vec![AuthFactor::ParentApproval]);
        assert!(child.linked_apps.is_empty());
    }

    #[test]
    fn test_empty_photo_url_falls_back_to_default_avatar() {
        let mut command = add_command(None);
        command.photo_url = Some(String::new());
        let child = Child::from_command("c9".to_string(), command);
        assert_eq!(child.photo_url, DEFAULT_PHOTO_URL);

        let mut command = add_command(None);
        command.photo_url = Some("https://example.com/sara.png".to_string());
        let child = Child::from_command("c9".to_string(), command);
        assert_eq!(child.photo_url, "https://example.com/sara.png");
    }

    #[test]
    fn test_patch_without_policy_keeps_credential() {
        let mut child = Child::from_command("c9".to_string(), add_command(None));
        let before = child.credential.clone();

        let reissued = child.apply_patch(ChildPatch {
            name: Some("Sara A.".to_string()),
            status: Some(ChildStatus::Suspended),
            ..ChildPatch::default()
        });

        assert!(!reissued);
        assert_eq!(child.name, "Sara A.");
        assert_eq!(child.status, ChildStatus::Suspended);
        assert_eq!(child.credential, before);
    }

    #[test]
    fn test_patch_with_policy_reissues_from_merged_policy() {
        let mut child = Child::from_command("c9".to_string(), add_command(None));
        let old_token = child.credential.token.clone();

        let new_policy = AuthPolicy {
            biometric: true,
            ..child.auth_policy
        };
        let reissued = child.apply_patch(ChildPatch::with_auth_policy(new_policy));

        assert!(reissued);
        assert_eq!(child.auth_policy, new_policy);
        assert_eq!(
            child.credential.required_auth,
            vec![AuthFactor::Biometric, AuthFactor::ParentApproval]
        );
        assert_ne!(child.credential.token, old_token);
    }

    #[test]
    fn test_reissue_keeps_other_fields() {
        let mut child = Child::from_command("c9".to_string(), add_command(None));
        let mut expected = child.clone();

        child.reissue_credential();
        expected.credential = child.credential.clone();

        assert_eq!(child, expected);
    }
}
