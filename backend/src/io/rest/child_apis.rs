//! # REST API for Child Management
//!
//! Endpoints for adding, retrieving, updating and deleting children, and for
//! their credentials.

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::{IntoResponse, Json},
};
use chrono::Utc;
use tracing::{error, info};

use crate::io::rest::bad_request_body;
use crate::io::rest::mappers::child_mapper::ChildMapper;
use crate::AppState;
use shared::{CreateChildRequest, UpdateChildRequest};

/// Add a child
pub async fn create_child(
    State(state): State<AppState>,
    payload: Result<Json<CreateChildRequest>, JsonRejection>,
) -> impl IntoResponse {
    let Json(request) = match payload {
        Ok(payload) => payload,
        Err(rejection) => return bad_request_body(rejection),
    };
    info!("POST /api/children - request: {:?}", request);

    let command = match ChildMapper::to_add_command(request) {
        Ok(command) => command,
        Err(e) => {
            error!("Invalid child request: {:#}", e);
            return (StatusCode::BAD_REQUEST, format!("{:#}", e)).into_response();
        }
    };

    match state.child_service.add_child(command) {
        Ok(child) => (
            StatusCode::CREATED,
            Json(ChildMapper::to_child_response_dto(child, "Child added successfully")),
        )
            .into_response(),
        Err(e) => {
            error!("Failed to add child: {}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, "Error adding child").into_response()
        }
    }
}

/// Get a child by ID
pub async fn get_child(
    State(state): State<AppState>,
    Path(child_id): Path<String>,
) -> impl IntoResponse {
    info!("GET /api/children/{}", child_id);

    match state.child_service.get_child(&child_id) {
        Ok(Some(child)) => (StatusCode::OK, Json(ChildMapper::to_dto(child))).into_response(),
        Ok(None) => (StatusCode::NOT_FOUND, "Child not found").into_response(),
        Err(e) => {
            error!("Failed to get child: {}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, "Error retrieving child").into_response()
        }
    }
}

/// List all children
pub async fn list_children(State(state): State<AppState>) -> impl IntoResponse {
    info!("GET /api/children");

    match state.child_service.list_children() {
        Ok(children) => {
            (StatusCode::OK, Json(ChildMapper::to_child_list_dto(children))).into_response()
        }
        Err(e) => {
            error!("Failed to list children: {}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, "Error listing children").into_response()
        }
    }
}

/// Update a child. A request carrying `auth_policy` reissues the credential.
pub async fn update_child(
    State(state): State<AppState>,
    Path(child_id): Path<String>,
    payload: Result<Json<UpdateChildRequest>, JsonRejection>,
) -> impl IntoResponse {
    let Json(request) = match payload {
        Ok(payload) => payload,
        Err(rejection) => return bad_request_body(rejection),
    };
    info!("PUT /api/children/{} - request: {:?}", child_id, request);

    let patch = match ChildMapper::to_patch(request) {
        Ok(patch) => patch,
        Err(e) => {
            error!("Invalid child update: {:#}", e);
            return (StatusCode::BAD_REQUEST, format!("{:#}", e)).into_response();
        }
    };

    match state.child_service.update_child(&child_id, patch) {
        Ok(Some(child)) => (
            StatusCode::OK,
            Json(ChildMapper::to_child_response_dto(child, "Child updated successfully")),
        )
            .into_response(),
        Ok(None) => (StatusCode::NOT_FOUND, "Child not found").into_response(),
        Err(e) => {
            error!("Failed to update child: {}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, "Error updating child").into_response()
        }
    }
}

/// Delete a child
pub async fn delete_child(
    State(state): State<AppState>,
    Path(child_id): Path<String>,
) -> impl IntoResponse {
    info!("DELETE /api/children/{}", child_id);

    match state.child_service.delete_child(&child_id) {
        Ok(true) => (StatusCode::NO_CONTENT, "").into_response(),
        Ok(false) => (StatusCode::NOT_FOUND, "Child not found").into_response(),
        Err(e) => {
            error!("Failed to delete child: {}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, "Error deleting child").into_response()
        }
    }
}

/// Issue a new credential from the child's current policy
pub async fn regenerate_credential(
    State(state): State<AppState>,
    Path(child_id): Path<String>,
) -> impl IntoResponse {
    info!("POST /api/children/{}/credential/regenerate", child_id);

    match state.child_service.regenerate_credential(&child_id) {
        Ok(Some(child)) => (
            StatusCode::OK,
            Json(ChildMapper::to_child_response_dto(child, "Credential regenerated")),
        )
            .into_response(),
        Ok(None) => (StatusCode::NOT_FOUND, "Child not found").into_response(),
        Err(e) => {
            error!("Failed to regenerate credential: {}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, "Error regenerating credential").into_response()
        }
    }
}

/// Remaining lifetime of the child's credential
pub async fn get_credential_status(
    State(state): State<AppState>,
    Path(child_id): Path<String>,
) -> impl IntoResponse {
    info!("GET /api/children/{}/credential/status", child_id);

    match state.child_service.credential_status(&child_id, Utc::now()) {
        Ok(Some(view)) => {
            (StatusCode::OK, Json(ChildMapper::to_credential_status_dto(view))).into_response()
        }
        Ok(None) => (StatusCode::NOT_FOUND, "Child not found").into_response(),
        Err(e) => {
            error!("Failed to read credential status: {}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, "Error reading credential status").into_response()
        }
    }
}
