//! # REST API for the Verifier Portal

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::{IntoResponse, Json},
};
use tracing::{error, info};

use crate::io::rest::bad_request_body;
use crate::io::rest::mappers::verification_mapper::VerificationMapper;
use crate::AppState;
use shared::VerifyRequest;

/// Run the simulated ZKP verification over a scanned token
pub async fn verify_token(
    State(state): State<AppState>,
    payload: Result<Json<VerifyRequest>, JsonRejection>,
) -> impl IntoResponse {
    let Json(request) = match payload {
        Ok(payload) => payload,
        Err(rejection) => return bad_request_body(rejection),
    };
    info!("POST /api/verify - token: {}", request.token);

    match state.verification_service.verify(&request.token).await {
        Ok(outcome) => (StatusCode::OK, Json(VerificationMapper::to_dto(outcome))).into_response(),
        Err(e) => {
            error!("Failed to verify token: {}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, "Error verifying token").into_response()
        }
    }
}
