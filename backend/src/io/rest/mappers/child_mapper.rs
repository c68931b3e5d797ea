use anyhow::{Context, Result};
use chrono::NaiveDate;
use shared::{
    AuthPolicy as SharedAuthPolicy, Child as SharedChild, ChildListResponse, ChildResponse,
    CreateChildRequest, Credential as SharedCredential, CredentialStatusResponse,
    PresentationConfig as SharedPresentationConfig, UpdateChildRequest,
};

use crate::domain::child_service::CredentialStatusView;
use crate::domain::commands::child::{AddChildCommand, ChildPatch};
use crate::domain::models::auth_policy::AuthPolicy;
use crate::domain::models::child::Child as DomainChild;
use crate::domain::models::credential::Credential as DomainCredential;
use crate::domain::models::presentation::PresentationConfig;
use crate::io::rest::mappers::linked_app_mapper::LinkedAppMapper;

const DOB_FORMAT: &str = "%Y-%m-%d";

/// Mapper to convert between shared Child DTOs and domain Child models.
pub struct ChildMapper;

impl ChildMapper {
    pub fn to_dto(domain: DomainChild) -> SharedChild {
        SharedChild {
            id: domain.id,
            name: domain.name,
            dob: domain.dob.format(DOB_FORMAT).to_string(),
            gender: domain.gender,
            national_id: domain.national_id,
            photo_url: domain.photo_url,
            status: domain.status,
            last_verification: domain.last_verification,
            credential: Self::credential_to_dto(domain.credential),
            auth_policy: Self::policy_to_dto(domain.auth_policy),
            presentation: Self::presentation_to_dto(domain.presentation),
            linked_apps: domain
                .linked_apps
                .into_iter()
                .map(LinkedAppMapper::to_dto)
                .collect(),
        }
    }

    pub fn to_child_list_dto(domain_children: Vec<DomainChild>) -> ChildListResponse {
        ChildListResponse {
            children: domain_children.into_iter().map(Self::to_dto).collect(),
        }
    }

    pub fn to_child_response_dto(domain: DomainChild, message: &str) -> ChildResponse {
        ChildResponse {
            child: Self::to_dto(domain),
            success_message: message.to_string(),
        }
    }

    pub fn to_add_command(request: CreateChildRequest) -> Result<AddChildCommand> {
        Ok(AddChildCommand {
            name: request.name,
            dob: Self::parse_dob(&request.dob)?,
            gender: request.gender,
            national_id: request.national_id,
            photo_url: request.photo_url,
            auth_policy: request.auth_policy.map(Self::policy_to_domain),
            presentation: request.presentation.map(Self::presentation_to_domain),
        })
    }

    pub fn to_patch(request: UpdateChildRequest) -> Result<ChildPatch> {
        Ok(ChildPatch {
            name: request.name,
            dob: request.dob.as_deref().map(Self::parse_dob).transpose()?,
            gender: request.gender,
            national_id: request.national_id,
            photo_url: request.photo_url,
            status: request.status,
            last_verification: request.last_verification,
            auth_policy: request.auth_policy.map(Self::policy_to_domain),
            presentation: request.presentation.map(Self::presentation_to_domain),
        })
    }

    pub fn to_credential_status_dto(view: CredentialStatusView) -> CredentialStatusResponse {
        CredentialStatusResponse {
            child_id: view.child_id,
            token: view.token,
            status: view.status,
            remaining_seconds: view.remaining_seconds,
            display: view.display,
            is_urgent: view.is_urgent,
        }
    }

    fn parse_dob(dob: &str) -> Result<NaiveDate> {
        NaiveDate::parse_from_str(dob, DOB_FORMAT)
            .with_context(|| format!("Date of birth must be YYYY-MM-DD, got {:?}", dob))
    }

    fn credential_to_dto(domain: DomainCredential) -> SharedCredential {
        SharedCredential {
            token: domain.token,
            generated_at: domain.generated_at.timestamp_millis(),
            expires_at: domain.expires_at.timestamp_millis(),
            required_auth: domain.required_auth,
        }
    }

    fn policy_to_dto(domain: AuthPolicy) -> SharedAuthPolicy {
        SharedAuthPolicy {
            biometric: domain.biometric,
            pin: domain.pin,
            parent_approval: domain.parent_approval,
            location_check: domain.location_check,
        }
    }

    fn policy_to_domain(dto: SharedAuthPolicy) -> AuthPolicy {
        AuthPolicy {
            biometric: dto.biometric,
            pin: dto.pin,
            parent_approval: dto.parent_approval,
            location_check: dto.location_check,
        }
    }

    fn presentation_to_dto(domain: PresentationConfig) -> SharedPresentationConfig {
        SharedPresentationConfig {
            color: domain.color,
            pattern: domain.pattern,
            layout: domain.layout,
        }
    }

    fn presentation_to_domain(dto: SharedPresentationConfig) -> PresentationConfig {
        PresentationConfig {
            color: dto.color,
            pattern: dto.pattern,
            layout: dto.layout,
        }
    }
}
