//! Domain-level command and patch types.
//!
//! These are used by the services and are not exposed over the API; the REST
//! layer maps the DTOs from the `shared` crate onto them. Patches enumerate
//! every updatable field explicitly, `None` meaning "leave unchanged".

pub mod child {
    use chrono::NaiveDate;
    use shared::{ChildStatus, Gender};

    use crate::domain::models::auth_policy::AuthPolicy;
    use crate::domain::models::presentation::PresentationConfig;

    /// Input for adding a child. Id, status and credential are assigned by
    /// the service.
    #[derive(Debug, Clone)]
    pub struct AddChildCommand {
        pub name: String,
        pub dob: NaiveDate,
        pub gender: Gender,
        pub national_id: String,
        pub photo_url: Option<String>,
        pub auth_policy: Option<AuthPolicy>,
        pub presentation: Option<PresentationConfig>,
    }

    /// Partial update of a child record. The id, the credential and the
    /// linked apps are not patchable here.
    #[derive(Debug, Clone, Default)]
    pub struct ChildPatch {
        pub name: Option<String>,
        pub dob: Option<NaiveDate>,
        pub gender: Option<Gender>,
        pub national_id: Option<String>,
        pub photo_url: Option<String>,
        pub status: Option<ChildStatus>,
        pub last_verification: Option<String>,
        pub auth_policy: Option<AuthPolicy>,
        pub presentation: Option<PresentationConfig>,
    }

    impl ChildPatch {
        pub fn with_auth_policy(auth_policy: AuthPolicy) -> Self {
            Self {
                auth_policy: Some(auth_policy),
                ..Self::default()
            }
        }
    }
}

pub mod linked_app {
    use shared::{AppCategory, LinkedAppStatus};

    /// Input for linking an app. Id, status and last access are assigned by
    /// the service.
    #[derive(Debug, Clone)]
    pub struct AddLinkedAppCommand {
        pub name: String,
        pub category: AppCategory,
        pub permissions: Vec<String>,
    }

    #[derive(Debug, Clone, Default)]
    pub struct LinkedAppPatch {
        pub name: Option<String>,
        pub category: Option<AppCategory>,
        pub status: Option<LinkedAppStatus>,
        pub last_access: Option<String>,
        pub permissions: Option<Vec<String>>,
    }
}
