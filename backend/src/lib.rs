//! # Nowa Identity Backend
//!
//! Mock digital-identity vault for parents managing their children's
//! credentials.
//!
//! ## Architecture
//!
//! ```text
//! IO Layer (REST API, handlers, mappers)
//!     ↓
//! Domain Layer (services, models, credential issuer)
//!     ↓
//! Storage Layer (in-memory repositories behind traits)
//! ```
//!
//! All state lives in process memory and is owned by the [`AppState`] built
//! at startup; nothing is global.

pub mod config;
pub mod domain;
pub mod io;
pub mod storage;

use anyhow::{Context, Result};
use axum::{
    http::{HeaderValue, Method},
    routing::{get, post, put},
    Router,
};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tracing::info;

use crate::config::AppConfig;
use crate::domain::{
    ActivityLogService, ChildService, LinkedAppService, SessionService, VerificationService,
};
use crate::storage::{ActivityLogRepository, ChildRepository, MemoryConnection, SessionRepository};

/// Main application state that holds all services
#[derive(Clone)]
pub struct AppState {
    pub session_service: SessionService,
    pub child_service: ChildService,
    pub linked_app_service: LinkedAppService,
    pub activity_log_service: ActivityLogService,
    pub verification_service: VerificationService,
}

/// Initialize the backend with all required services
pub fn initialize_backend(config: &AppConfig) -> AppState {
    info!("Setting up identity store");
    let conn = if config.seed_mock_data {
        MemoryConnection::new_seeded()
    } else {
        MemoryConnection::new()
    };
    initialize_with_connection(conn, config)
}

/// Build the services over an existing connection
pub fn initialize_with_connection(conn: MemoryConnection, config: &AppConfig) -> AppState {
    info!("Setting up domain services");
    let children = Arc::new(ChildRepository::new(conn.clone()));

    AppState {
        session_service: SessionService::new(Arc::new(SessionRepository::new(conn.clone()))),
        child_service: ChildService::new(children.clone()),
        linked_app_service: LinkedAppService::new(children.clone()),
        activity_log_service: ActivityLogService::new(Arc::new(ActivityLogRepository::new(conn))),
        verification_service: VerificationService::new(children, config.verification_delay()),
    }
}

/// Create the Axum router with all routes configured
pub fn create_router(app_state: AppState, config: &AppConfig) -> Result<Router> {
    // CORS setup to allow the dashboard to make requests
    let origin = config
        .allowed_origin
        .parse::<HeaderValue>()
        .with_context(|| format!("Invalid allowed origin {:?}", config.allowed_origin))?;
    let cors = CorsLayer::new()
        .allow_origin(origin)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers(Any);

    let api_routes = Router::new()
        .route("/auth/login", post(io::login))
        .route("/auth/logout", post(io::logout))
        .route("/auth/session", get(io::get_session))
        .route("/children", get(io::list_children).post(io::create_child))
        .route(
            "/children/:child_id",
            get(io::get_child).put(io::update_child).delete(io::delete_child),
        )
        .route(
            "/children/:child_id/credential/regenerate",
            post(io::regenerate_credential),
        )
        .route(
            "/children/:child_id/credential/status",
            get(io::get_credential_status),
        )
        .route("/children/:child_id/logs", get(io::list_child_logs))
        .route("/children/:child_id/apps", post(io::add_linked_app))
        .route(
            "/children/:child_id/apps/catalog/:entry_id",
            post(io::add_catalog_app),
        )
        .route("/children/:child_id/apps/:app_id", put(io::update_linked_app))
        .route(
            "/children/:child_id/apps/:app_id/toggle",
            post(io::toggle_linked_app),
        )
        .route("/apps/catalog", get(io::get_catalog))
        .route("/logs", get(io::list_logs))
        .route("/verify", post(io::verify_token));

    Ok(Router::new()
        .nest("/api", api_routes)
        .layer(cors)
        .with_state(app_state))
}
