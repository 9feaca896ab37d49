//! # Backend Module
//!
//! Contains all non-UI logic for the case tracker application.
//!
//! This module serves as the orchestration layer that brings together:
//! - **Domain**: Business logic and rules for case and session management
//! - **Storage**: Data persistence mechanisms (key-value snapshot files)
//! - **IO**: Interface layer that exposes functionality over HTTP
//!
//! The backend is designed to be UI-agnostic, meaning it could support
//! different frontend frameworks or even CLI interfaces without modification.
//!
//! ## Architecture
//!
//! The backend follows a layered architecture:
//! ```text
//! Client (web or mobile app)
//!     ↓
//! IO Layer (REST API, handlers)
//!     ↓
//! Domain Layer (Business logic, services)
//!     ↓
//! Storage Layer (Key-value snapshots, persistence)
//! ```
//!
//! ## Key Responsibilities
//!
//! - Initialize and configure the application state
//! - Set up the REST API router with proper CORS configuration
//! - Coordinate between domain logic and data persistence
//! - Provide a clean separation of concerns for maintainability

pub mod domain;
pub mod io;
pub mod storage;

use anyhow::Result;
use axum::{
    http::{HeaderValue, Method},
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tracing::info;

use crate::backend::domain::{CaseService, ExportService, SessionService};
use crate::backend::storage::{CaseRepository, FileStore, KeyValueStore, VolunteerRepository};

pub use domain::*;
pub use io::*;
pub use storage::*;

/// Main application state that holds all services
#[derive(Clone)]
pub struct AppState {
    pub session_service: SessionService,
    pub case_service: CaseService,
    pub export_service: ExportService,
}

/// Initialize the backend with all required services
pub async fn initialize_backend() -> Result<AppState> {
    info!("Setting up file store");
    let store: Arc<dyn KeyValueStore> = Arc::new(FileStore::new_default()?);

    info!("Loading repositories");
    let volunteer_repository = VolunteerRepository::new(store.clone()).await?;
    let case_repository = CaseRepository::new(store).await?;

    info!("Setting up application state");
    let app_state = AppState {
        session_service: SessionService::new(volunteer_repository),
        case_service: CaseService::new(case_repository),
        export_service: ExportService::new(),
    };

    Ok(app_state)
}

/// Create the Axum router with all routes configured
pub fn create_router(app_state: AppState) -> Router {
    // CORS setup to allow the web client to make requests
    let cors = CorsLayer::new()
        .allow_origin("http://localhost:8080".parse::<HeaderValue>().unwrap())
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers(Any);

    // Set up our application routes
    let api_routes = Router::new()
        .route(
            "/cases",
            get(io::rest::case_apis::list_cases).post(io::rest::case_apis::create_case),
        )
        .route(
            "/cases/:case_id",
            get(io::rest::case_apis::get_case)
                .put(io::rest::case_apis::update_case)
                .delete(io::rest::case_apis::delete_case),
        )
        .route(
            "/volunteers",
            post(io::rest::session_apis::register_volunteer),
        )
        .nest("/session", io::rest::session_apis::router())
        .nest("/export", io::rest::export_apis::router());

    // Define our main application router
    Router::new()
        .nest("/api", api_routes)
        .layer(cors)
        .with_state(app_state)
}
