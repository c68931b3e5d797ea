use shared::VerificationReport;

use crate::domain::verification_service::VerificationOutcome;

pub struct VerificationMapper;

impl VerificationMapper {
    pub fn to_dto(outcome: VerificationOutcome) -> VerificationReport {
        VerificationReport {
            verified: outcome.verified,
            steps: outcome.steps,
            issuer: outcome.issuer,
            claims: outcome.claims,
            disclosed_attributes: outcome.disclosed_attributes,
            child_id: outcome.child_id,
            credential_status: outcome.credential_status,
        }
    }
}
