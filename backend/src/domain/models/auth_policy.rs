//! Domain model for a child's authentication policy.
use serde::{Deserialize, Serialize};
use shared::AuthFactor;

/// Four independent authentication factors. Any subset may be enabled,
/// including none at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthPolicy {
    pub biometric: bool,
    pub pin: bool,
    pub parent_approval: bool,
    pub location_check: bool,
}

impl AuthPolicy {
    /// Policy with every factor disabled
    pub fn none() -> Self {
        Self {
            biometric: false,
            pin: false,
            parent_approval: false,
            location_check: false,
        }
    }

    pub fn is_enabled(&self, factor: AuthFactor) -> bool {
        match factor {
            AuthFactor::Biometric => self.biometric,
            AuthFactor::Pin => self.pin,
            AuthFactor::ParentApproval => self.parent_approval,
            AuthFactor::LocationCheck => self.location_check,
        }
    }

    /// Enabled factors in canonical order
    pub fn active_factors(&self) -> Vec<AuthFactor> {
        AuthFactor::ALL
            .into_iter()
            .filter(|factor| self.is_enabled(*factor))
            .collect()
    }
}

impl Default for AuthPolicy {
    /// Parent approval only
    fn default() -> Self {
        Self {
            parent_approval: true,
            ..Self::none()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_policy_is_parent_approval_only() {
        let policy = AuthPolicy::default();
        assert_eq!(policy.active_factors(), vec![AuthFactor::ParentApproval]);
    }

    #[test]
    fn test_active_factors_follow_canonical_order() {
        let policy = AuthPolicy {
            biometric: true,
            pin: false,
            parent_approval: true,
            location_check: true,
        };
        assert_eq!(
            policy.active_factors(),
            vec![AuthFactor::Biometric, AuthFactor::ParentApproval, AuthFactor::LocationCheck]
        );
    }

    #[test]
    fn test_empty_policy_is_legal() {
        assert!(AuthPolicy::none().active_factors().is_empty());
    }
}
