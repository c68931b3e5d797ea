//! # REST API Interface Layer
//!
//! JSON endpoints under `/api`. Handlers log each request, map DTOs through
//! the mappers and translate results into status codes: malformed input is
//! 400, an unknown id is 404 (the store itself treated it as a no-op) and
//! anything else is 500.

pub mod activity_log_apis;
pub mod auth_apis;
pub mod child_apis;
pub mod linked_app_apis;
pub mod mappers;
pub mod verification_apis;

pub use activity_log_apis::*;
pub use auth_apis::*;
pub use child_apis::*;
pub use linked_app_apis::*;
pub use verification_apis::*;

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use tracing::error;

/// Body that failed to deserialize (unknown enum tag, missing field, bad
/// JSON). Always reported as 400.
pub(crate) fn bad_request_body(rejection: JsonRejection) -> Response {
    let message = rejection.body_text();
    error!("Invalid request body: {}", message);
    (StatusCode::BAD_REQUEST, message).into_response()
}
