//! # REST API for the Activity Ledger (read-only)

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Json},
};
use tracing::{error, info};

use crate::io::rest::mappers::activity_log_mapper::ActivityLogMapper;
use crate::AppState;

pub async fn list_logs(State(state): State<AppState>) -> impl IntoResponse {
    info!("GET /api/logs");

    match state.activity_log_service.list_logs() {
        Ok(logs) => (StatusCode::OK, Json(ActivityLogMapper::to_list_dto(logs))).into_response(),
        Err(e) => {
            error!("Failed to list activity logs: {}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, "Error listing activity logs").into_response()
        }
    }
}

pub async fn list_child_logs(
    State(state): State<AppState>,
    Path(child_id): Path<String>,
) -> impl IntoResponse {
    info!("GET /api/children/{}/logs", child_id);

    match state.activity_log_service.list_logs_for_child(&child_id) {
        Ok(logs) => (StatusCode::OK, Json(ActivityLogMapper::to_list_dto(logs))).into_response(),
        Err(e) => {
            error!("Failed to list activity logs for child {}: {}", child_id, e);
            (StatusCode::INTERNAL_SERVER_ERROR, "Error listing activity logs").into_response()
        }
    }
}
