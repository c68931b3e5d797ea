//! # REST API for the Parent Session
//!
//! Mock login/logout. Any email logs in as the fixed parent profile.

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::{IntoResponse, Json},
};
use tracing::{error, info};

use crate::io::rest::bad_request_body;
use crate::io::rest::mappers::user_mapper::UserMapper;
use crate::AppState;
use shared::LoginRequest;

pub async fn login(
    State(state): State<AppState>,
    payload: Result<Json<LoginRequest>, JsonRejection>,
) -> impl IntoResponse {
    let Json(request) = match payload {
        Ok(payload) => payload,
        Err(rejection) => return bad_request_body(rejection),
    };
    info!("POST /api/auth/login - email: {}", request.email);

    match state.session_service.login(&request.email) {
        Ok(user) => (StatusCode::OK, Json(UserMapper::to_session_dto(Some(user)))).into_response(),
        Err(e) => {
            error!("Failed to log in: {}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, "Error logging in").into_response()
        }
    }
}

pub async fn logout(State(state): State<AppState>) -> impl IntoResponse {
    info!("POST /api/auth/logout");

    match state.session_service.logout() {
        Ok(()) => (StatusCode::NO_CONTENT, "").into_response(),
        Err(e) => {
            error!("Failed to log out: {}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, "Error logging out").into_response()
        }
    }
}

pub async fn get_session(State(state): State<AppState>) -> impl IntoResponse {
    info!("GET /api/auth/session");

    match state.session_service.current_user() {
        Ok(user) => (StatusCode::OK, Json(UserMapper::to_session_dto(user))).into_response(),
        Err(e) => {
            error!("Failed to read session: {}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, "Error reading session").into_response()
        }
    }
}
