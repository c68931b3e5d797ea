//! Domain model for a child's live credential (the data behind the QR code).
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use shared::{AuthFactor, CredentialStatus};

/// Lifetime of every credential, in milliseconds. Not configurable.
pub const CREDENTIAL_LIFETIME_MS: i64 = 300_000;

/// Below this many remaining seconds the countdown is shown as urgent
pub const URGENT_THRESHOLD_SECS: u64 = 60;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Credential {
    pub token: String,
    pub generated_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
    /// Snapshot of the policy's active factors at issue time
    pub required_auth: Vec<AuthFactor>,
}

impl Credential {
    pub fn lifetime() -> Duration {
        Duration::milliseconds(CREDENTIAL_LIFETIME_MS)
    }

    /// Expiry is only ever displayed, never enforced.
    pub fn status_at(&self, now: DateTime<Utc>) -> CredentialStatus {
        if now >= self.expires_at {
            CredentialStatus::Expired
        } else {
            CredentialStatus::Valid
        }
    }

    /// Whole seconds left before expiry, floored and clamped at zero
    pub fn remaining_seconds_at(&self, now: DateTime<Utc>) -> u64 {
        remaining_seconds(self.expires_at, now)
    }
}

pub fn remaining_seconds(expires_at: DateTime<Utc>, now: DateTime<Utc>) -> u64 {
    let millis = (expires_at - now).num_milliseconds();
    if millis <= 0 {
        0
    } else {
        (millis / 1000) as u64
    }
}

/// Formats remaining seconds as `MM:SS`
pub fn countdown_label(remaining_seconds: u64) -> String {
    format!("{:02}:{:02}", remaining_seconds / 60, remaining_seconds % 60)
}
