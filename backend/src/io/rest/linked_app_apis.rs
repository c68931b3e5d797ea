//! # REST API for Linked Applications

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::{IntoResponse, Json},
};
use tracing::{error, info};

use crate::io::rest::bad_request_body;
use crate::io::rest::mappers::linked_app_mapper::LinkedAppMapper;
use crate::AppState;
use shared::{AddLinkedAppRequest, UpdateLinkedAppRequest};

pub async fn get_catalog(State(state): State<AppState>) -> impl IntoResponse {
    info!("GET /api/apps/catalog");
    let catalog = LinkedAppMapper::to_catalog_dto(state.linked_app_service.catalog());
    (StatusCode::OK, Json(catalog)).into_response()
}

pub async fn add_linked_app(
    State(state): State<AppState>,
    Path(child_id): Path<String>,
    payload: Result<Json<AddLinkedAppRequest>, JsonRejection>,
) -> impl IntoResponse {
    let Json(request) = match payload {
        Ok(payload) => payload,
        Err(rejection) => return bad_request_body(rejection),
    };
    info!("POST /api/children/{}/apps - request: {:?}", child_id, request);

    let command = LinkedAppMapper::to_add_command(request);
    match state.linked_app_service.add_linked_app(&child_id, command) {
        Ok(Some(app)) => (
            StatusCode::CREATED,
            Json(LinkedAppMapper::to_response_dto(&child_id, app, "App linked successfully")),
        )
            .into_response(),
        Ok(None) => (StatusCode::NOT_FOUND, "Child not found").into_response(),
        Err(e) => {
            error!("Failed to link app: {}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, "Error linking app").into_response()
        }
    }
}

pub async fn add_catalog_app(
    State(state): State<AppState>,
    Path((child_id, entry_id)): Path<(String, String)>,
) -> impl IntoResponse {
    info!("POST /api/children/{}/apps/catalog/{}", child_id, entry_id);

    match state.linked_app_service.add_from_catalog(&child_id, &entry_id) {
        Ok(Some(app)) => (
            StatusCode::CREATED,
            Json(LinkedAppMapper::to_response_dto(&child_id, app, "App linked successfully")),
        )
            .into_response(),
        Ok(None) => (StatusCode::NOT_FOUND, "Child or catalog entry not found").into_response(),
        Err(e) => {
            error!("Failed to link catalog app: {}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, "Error linking app").into_response()
        }
    }
}

pub async fn update_linked_app(
    State(state): State<AppState>,
    Path((child_id, app_id)): Path<(String, String)>,
    payload: Result<Json<UpdateLinkedAppRequest>, JsonRejection>,
) -> impl IntoResponse {
    let Json(request) = match payload {
        Ok(payload) => payload,
        Err(rejection) => return bad_request_body(rejection),
    };
    info!("PUT /api/children/{}/apps/{} - request: {:?}", child_id, app_id, request);

    let patch = LinkedAppMapper::to_patch(request);
    match state.linked_app_service.update_linked_app(&child_id, &app_id, patch) {
        Ok(Some(app)) => (
            StatusCode::OK,
            Json(LinkedAppMapper::to_response_dto(&child_id, app, "App updated successfully")),
        )
            .into_response(),
        Ok(None) => (StatusCode::NOT_FOUND, "Linked app not found").into_response(),
        Err(e) => {
            error!("Failed to update linked app: {}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, "Error updating app").into_response()
        }
    }
}

pub async fn toggle_linked_app(
    State(state): State<AppState>,
    Path((child_id, app_id)): Path<(String, String)>,
) -> impl IntoResponse {
    info!("POST /api/children/{}/apps/{}/toggle", child_id, app_id);

    match state.linked_app_service.toggle_linked_app(&child_id, &app_id) {
        Ok(Some(app)) => (
            StatusCode::OK,
            Json(LinkedAppMapper::to_response_dto(&child_id, app, "App status toggled")),
        )
            .into_response(),
        Ok(None) => (StatusCode::NOT_FOUND, "Linked app not found").into_response(),
        Err(e) => {
            error!("Failed to toggle linked app: {}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, "Error toggling app").into_response()
        }
    }
}
