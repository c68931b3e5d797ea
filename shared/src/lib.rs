use serde::{Deserialize, Serialize};
use std::fmt;

/// A single authentication factor a credential can require.
///
/// Variants are declared in canonical order; every list of factors produced
/// by the backend follows this order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum AuthFactor {
    Biometric,
    Pin,
    ParentApproval,
    LocationCheck,
}

impl AuthFactor {
    /// All factors in canonical order
    pub const ALL: [AuthFactor; 4] = [
        AuthFactor::Biometric,
        AuthFactor::Pin,
        AuthFactor::ParentApproval,
        AuthFactor::LocationCheck,
    ];

    /// Wire name of the factor, e.g. `parentApproval`
    pub fn as_str(&self) -> &'static str {
        match self {
            AuthFactor::Biometric => "biometric",
            AuthFactor::Pin => "pin",
            AuthFactor::ParentApproval => "parentApproval",
            AuthFactor::LocationCheck => "locationCheck",
        }
    }
}

impl fmt::Display for AuthFactor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Authentication policy (multi-factor requirements) of a child
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthPolicy {
    pub biometric: bool,
    pub pin: bool,
    pub parent_approval: bool,
    pub location_check: bool,
}

/// Live credential (QR data) of a child
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Credential {
    pub token: String,
    /// Epoch milliseconds
    pub generated_at: i64,
    /// Epoch milliseconds, always `generated_at + 300000`
    pub expires_at: i64,
    /// Factors that were active when the credential was issued
    pub required_auth: Vec<AuthFactor>,
}

/// Display state of a credential, derived at read time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CredentialStatus {
    Valid,
    Expired,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CredentialStatusResponse {
    pub child_id: String,
    pub token: String,
    pub status: CredentialStatus,
    pub remaining_seconds: u64,
    /// Remaining time formatted as `MM:SS`
    pub display: String,
    /// True when less than a minute remains
    pub is_urgent: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeColor {
    Blue,
    Emerald,
    Purple,
    Amber,
    Rose,
    Indigo,
    Slate,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemePattern {
    Abstract,
    Minimal,
    Dots,
    Waves,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DashboardLayout {
    Grid,
    List,
}

/// Cosmetic display settings for a child's identity card
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PresentationConfig {
    pub color: ThemeColor,
    pub pattern: ThemePattern,
    pub layout: DashboardLayout,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChildStatus {
    Active,
    Pending,
    Suspended,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AppCategory {
    Education,
    Game,
    Health,
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LinkedAppStatus {
    Active,
    Blocked,
}

/// An external application granted access to a child's credential
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinkedApp {
    pub id: String,
    pub name: String,
    pub category: AppCategory,
    pub status: LinkedAppStatus,
    pub last_access: String,
    pub permissions: Vec<String>,
}

/// Child identity record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Child {
    pub id: String,
    pub name: String,
    /// Date of birth (YYYY-MM-DD)
    pub dob: String,
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

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChildListResponse {
    pub children: Vec<Child>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChildResponse {
    pub child: Child,
    pub success_message: String,
}

/// Request to add a child. Omitted policy and presentation fall back to
/// the backend defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateChildRequest {
    pub name: String,
    /// Date of birth (YYYY-MM-DD)
    pub dob: String,
    pub gender: Gender,
    pub national_id: String,
    pub photo_url: Option<String>,
    pub auth_policy: Option<AuthPolicy>,
    pub presentation: Option<PresentationConfig>,
}

/// Partial update of a child. Only the fields present are changed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UpdateChildRequest {
    pub name: Option<String>,
    pub dob: Option<String>,
    pub gender: Option<Gender>,
    pub national_id: Option<String>,
    pub photo_url: Option<String>,
    pub status: Option<ChildStatus>,
    pub last_verification: Option<String>,
    pub auth_policy: Option<AuthPolicy>,
    pub presentation: Option<PresentationConfig>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AddLinkedAppRequest {
    pub name: String,
    pub category: AppCategory,
    pub permissions: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UpdateLinkedAppRequest {
    pub name: Option<String>,
    pub category: Option<AppCategory>,
    pub status: Option<LinkedAppStatus>,
    pub last_access: Option<String>,
    pub permissions: Option<Vec<String>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinkedAppResponse {
    pub child_id: String,
    pub app: LinkedApp,
    pub success_message: String,
}

/// Entry of the fixed application marketplace
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogEntry {
    pub id: String,
    pub name: String,
    pub category: AppCategory,
    pub permissions: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogResponse {
    pub entries: Vec<CatalogEntry>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogStatus {
    Success,
    Failed,
    Warning,
}

/// Entry of the (mock) ledger of credential usage
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivityLog {
    pub id: String,
    pub child_id: String,
    pub action: String,
    pub location: String,
    pub timestamp: String,
    pub status: LogStatus,
    pub hash: String,
    pub block_number: u64,
    pub application: Option<String>,
    pub criteria_met: Option<Vec<String>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivityLogListResponse {
    pub logs: Vec<ActivityLog>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub children: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionResponse {
    pub is_authenticated: bool,
    pub user: Option<User>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VerifyRequest {
    pub token: String,
}

/// Outcome of a simulated zero-knowledge verification
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VerificationReport {
    pub verified: bool,
    pub steps: Vec<String>,
    pub issuer: String,
    pub claims: Vec<String>,
    pub disclosed_attributes: Vec<String>,
    /// Child whose live credential carries the scanned token
    pub child_id: Option<String>,
    pub credential_status: Option<CredentialStatus>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auth_factor_wire_names() {
        let json = serde_json::to_string(&AuthFactor::ALL).unwrap();
        assert_eq!(json, r#"["biometric","pin","parentApproval","locationCheck"]"#);

        let parsed: AuthFactor = serde_json::from_str(r#""locationCheck""#).unwrap();
        assert_eq!(parsed, AuthFactor::LocationCheck);
        assert_eq!(parsed.to_string(), "locationCheck");
    }

    #[test]
    fn test_auth_policy_keys_match_factor_names() {
        let policy = AuthPolicy {
            biometric: true,
            pin: true,
            parent_approval: true,
            location_check: true,
        };
        let value = serde_json::to_value(&policy).unwrap();
        let keys = value.as_object().unwrap();

        assert_eq!(keys.len(), AuthFactor::ALL.len());
        for factor in AuthFactor::ALL {
            assert_eq!(keys.get(factor.as_str()), Some(&serde_json::Value::Bool(true)));
        }

        let parsed: AuthPolicy = serde_json::from_str(
            r#"{"biometric":false,"pin":false,"parentApproval":true,"locationCheck":false}"#,
        )
        .unwrap();
        assert!(parsed.parent_approval);
        assert!(!parsed.location_check);
    }

    #[test]
    fn test_update_child_request_accepts_partial_json() {
        let request: UpdateChildRequest = serde_json::from_str(r#"{"name": "Omar"}"#).unwrap();
        assert_eq!(request.name.as_deref(), Some("Omar"));
        assert!(request.auth_policy.is_none());
        assert!(request.status.is_none());
    }

    #[test]
    fn test_unknown_enum_tag_is_rejected() {
        let result: Result<LinkedAppStatus, _> = serde_json::from_str(r#""paused""#);
        assert!(result.is_err());
    }
}
