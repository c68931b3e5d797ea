//! # Credential Issuer
//!
//! Builds the mock QR credential for an authentication policy. The token
//! encodes the required factors so a verifier can read them off the QR code,
//! e.g. `did:nowa:BIO-PAR:k3j9x0q1z`.

use chrono::{DateTime, Utc};
use rand::Rng;

use crate::domain::models::auth_policy::AuthPolicy;
use crate::domain::models::credential::Credential;

/// Prefix of every token
pub const TOKEN_SCHEME: &str = "did:nowa:";

const SUFFIX_LEN: usize = 9;
const SUFFIX_ALPHABET: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Issue a fresh credential for `policy`, stamped with the current time
pub fn issue_credential(policy: &AuthPolicy) -> Credential {
    issue_credential_at(policy, Utc::now())
}

/// Issue a fresh credential for `policy` as of `now`.
///
/// Deterministic apart from the random token suffix.
pub fn issue_credential_at(policy: &AuthPolicy, now: DateTime<Utc>) -> Credential {
    let required_auth = policy.active_factors();

    let codes = required_auth
        .iter()
        .map(|factor| factor_code(factor.as_str()))
        .collect::<Vec<_>>()
        .join("-");

    let token = if codes.is_empty() {
        format!("{}{}", TOKEN_SCHEME, random_suffix())
    } else {
        format!("{}{}:{}", TOKEN_SCHEME, codes, random_suffix())
    };

    Credential {
        token,
        generated_at: now,
        expires_at: now + Credential::lifetime(),
        required_auth,
    }
}

/// Three-letter uppercase code of a factor name (`parentApproval` -> `PAR`)
fn factor_code(name: &str) -> String {
    name.chars().take(3).collect::<String>().to_uppercase()
}

fn random_suffix() -> String {
    let mut rng = rand::thread_rng();
    (0..SUFFIX_LEN)
        .map(|_| SUFFIX_ALPHABET[rng.gen_range(0..SUFFIX_ALPHABET.len())] as char)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::credential::CREDENTIAL_LIFETIME_MS;
    use shared::AuthFactor;

    /// Every one of the sixteen possible policies
    fn all_policies() -> Vec<AuthPolicy> {
        (0u8..16)
            .map(|bits| AuthPolicy {
                biometric: bits & 1 != 0,
                pin: bits & 2 != 0,
                parent_approval: bits & 4 != 0,
                location_check: bits & 8 != 0,
            })
            .collect()
    }

    #[test]
    fn test_required_auth_matches_policy_for_every_policy() {
        for policy in all_policies() {
            let credential = issue_credential(&policy);
            let expected: Vec<AuthFactor> = AuthFactor::ALL
                .into_iter()
                .filter(|factor| policy.is_enabled(*factor))
                .collect();
            assert_eq!(credential.required_auth, expected, "policy {:?}", policy);
        }
    }

    #[test]
    fn test_lifetime_is_five_minutes_for_every_policy() {
        for policy in all_policies() {
            let credential = issue_credential(&policy);
            let lifetime = credential.expires_at - credential.generated_at;
            assert_eq!(lifetime.num_milliseconds(), CREDENTIAL_LIFETIME_MS);
        }
    }

    #[test]
    fn test_token_encodes_factor_codes() {
        let policy = AuthPolicy {
            biometric: true,
            pin: true,
            parent_approval: true,
            location_check: true,
        };
        let credential = issue_credential(&policy);
        assert!(credential.token.starts_with("did:nowa:BIO-PIN-PAR-LOC:"));

        let credential = issue_credential(&AuthPolicy::default());
        assert!(credential.token.starts_with("did:nowa:PAR:"));
    }

    #[test]
    fn test_token_without_factors_has_no_code_segment() {
        let credential = issue_credential(&AuthPolicy::none());
        let suffix = credential.token.strip_prefix(TOKEN_SCHEME).unwrap();

        assert_eq!(suffix.len(), SUFFIX_LEN);
        assert!(!suffix.contains(':'));
        assert!(suffix.bytes().all(|b| SUFFIX_ALPHABET.contains(&b)));
    }

    #[test]
    fn test_issue_at_uses_given_time() {
        let now = Utc::now();
        let credential = issue_credential_at(&AuthPolicy::default(), now);
        assert_eq!(credential.generated_at, now);
        assert_eq!(credential.expires_at, now + Credential::lifetime());
    }

    #[test]
    fn test_factor_code() {
        assert_eq!(factor_code("biometric"), "BIO");
        assert_eq!(factor_code("pin"), "PIN");
        assert_eq!(factor_code("parentApproval"), "PAR");
        assert_eq!(factor_code("locationCheck"), "LOC");
    }
}
