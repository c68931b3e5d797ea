use shared::{
    AddLinkedAppRequest, CatalogEntry, CatalogResponse, LinkedApp as SharedLinkedApp,
    LinkedAppResponse, UpdateLinkedAppRequest,
};

use crate::domain::app_catalog::CatalogApp;
use crate::domain::commands::linked_app::{AddLinkedAppCommand, LinkedAppPatch};
use crate::domain::models::linked_app::LinkedApp as DomainLinkedApp;

pub struct LinkedAppMapper;

impl LinkedAppMapper {
    pub fn to_dto(domain: DomainLinkedApp) -> SharedLinkedApp {
        SharedLinkedApp {
            id: domain.id,
            name: domain.name,
            category: domain.category,
            status: domain.status,
            last_access: domain.last_access,
            permissions: domain.permissions,
        }
    }

    pub fn to_response_dto(
        child_id: &str,
        domain: DomainLinkedApp,
        message: &str,
    ) -> LinkedAppResponse {
        LinkedAppResponse {
            child_id: child_id.to_string(),
            app: Self::to_dto(domain),
            success_message: message.to_string(),
        }
    }

    pub fn to_add_command(request: AddLinkedAppRequest) -> AddLinkedAppCommand {
        AddLinkedAppCommand {
            name: request.name,
            category: request.category,
            permissions: request.permissions,
        }
    }

    pub fn to_patch(request: UpdateLinkedAppRequest) -> LinkedAppPatch {
        LinkedAppPatch {
            name: request.name,
            category: request.category,
            status: request.status,
            last_access: request.last_access,
            permissions: request.permissions,
        }
    }

    pub fn to_catalog_dto(entries: &[CatalogApp]) -> CatalogResponse {
        CatalogResponse {
            entries: entries
                .iter()
                .map(|entry| CatalogEntry {
                    id: entry.id.to_string(),
                    name: entry.name.to_string(),
                    category: entry.category,
                    permissions: entry.permissions.iter().map(|p| p.to_string()).collect(),
                })
                .collect(),
        }
    }
}
