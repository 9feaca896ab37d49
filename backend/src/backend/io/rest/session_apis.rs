//! # REST API for Volunteer Sessions
//!
//! Endpoints for logging in and out, reading the current session, and
//! registering new volunteers. Failed credential checks are ordinary
//! responses with `success: false`, not HTTP errors, so clients can show
//! the message directly.

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json},
    routing::{get, post},
    Router,
};
use serde_json::Value;
use tracing::{error, info};

use crate::backend::domain::commands::session::{LoginCommand, RegisterVolunteerCommand};
use crate::backend::io::rest::mappers::volunteer_mapper::VolunteerMapper;
use crate::backend::AppState;
use shared::{CurrentSessionResponse, LoginRequest, LoginResponse, RegisterVolunteerRequest};

/// Create the session API router
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(current_session))
        .route("/login", post(login))
        .route("/logout", post(logout))
}

/// Log a volunteer in
#[axum::debug_handler]
pub async fn login(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, (StatusCode, Json<Value>)> {
    info!("POST /api/session/login - username: {}", request.username);

    // Basic input validation
    if request.username.trim().is_empty() || request.password.is_empty() {
        let error_response = serde_json::json!({
            "error": "Username and password are required",
            "code": "INVALID_INPUT"
        });
        return Err((StatusCode::BAD_REQUEST, Json(error_response)));
    }

    let command = LoginCommand {
        username: request.username,
        password: request.password,
    };

    match state.session_service.login(command).await {
        Ok(result) => {
            info!("Login result: success={}", result.success);
            Ok(Json(VolunteerMapper::to_login_response_dto(result)))
        }
        Err(e) => {
            error!("Failed to process login: {}", e);
            let error_response = serde_json::json!({
                "error": "Internal server error during login",
                "code": "LOGIN_ERROR"
            });
            Err((StatusCode::INTERNAL_SERVER_ERROR, Json(error_response)))
        }
    }
}

/// Log the current volunteer out
pub async fn logout(State(state): State<AppState>) -> impl IntoResponse {
    info!("POST /api/session/logout");

    match state.session_service.logout().await {
        Ok(()) => (StatusCode::NO_CONTENT, "").into_response(),
        Err(e) => {
            error!("Failed to log out: {}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, "Error logging out").into_response()
        }
    }
}

/// Get the currently logged-in volunteer, if any
pub async fn current_session(State(state): State<AppState>) -> impl IntoResponse {
    info!("GET /api/session");

    match state.session_service.current_volunteer().await {
        Ok(volunteer) => {
            let response: CurrentSessionResponse =
                VolunteerMapper::to_current_session_dto(volunteer);
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => {
            error!("Failed to read session: {}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, "Error reading session").into_response()
        }
    }
}

/// Register a new volunteer
pub async fn register_volunteer(
    State(state): State<AppState>,
    Json(request): Json<RegisterVolunteerRequest>,
) -> impl IntoResponse {
    info!("POST /api/volunteers - username: {}", request.username);

    let command = RegisterVolunteerCommand {
        username: request.username,
        password: request.password,
        full_name: request.full_name,
    };

    match state.session_service.register(command).await {
        Ok(result) => {
            info!("Registration result: success={}", result.success);
            let response = VolunteerMapper::to_register_response_dto(result);
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => {
            error!("Failed to register volunteer: {}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, "Error registering volunteer").into_response()
        }
    }
}
