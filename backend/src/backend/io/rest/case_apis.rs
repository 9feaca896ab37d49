//! # REST API for Case Management
//!
//! Endpoints for creating, retrieving, updating, deleting, and listing
//! welfare cases. Creating and listing act on behalf of the logged-in
//! volunteer, so those endpoints reject requests when nobody is logged in.

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Json},
};
use serde::Deserialize;
use tracing::{error, info};

use crate::backend::domain::models::case::CaseValidationError;
use crate::backend::domain::models::volunteer::Volunteer;
use crate::backend::io::rest::mappers::case_mapper::CaseMapper;
use crate::backend::AppState;
use shared::{CreateCaseRequest, UpdateCaseRequest};

use crate::backend::domain::commands::cases::CaseListQuery;

// Query parameters for the case listing API
#[derive(Debug, Deserialize)]
pub struct CaseListParams {
    pub search: Option<String>,
}

/// Create a new case owned by the logged-in volunteer
pub async fn create_case(
    State(state): State<AppState>,
    Json(request): Json<CreateCaseRequest>,
) -> impl IntoResponse {
    info!("POST /api/cases - request: {:?}", request);

    let volunteer = match require_session(&state).await {
        Ok(volunteer) => volunteer,
        Err(response) => return response,
    };

    let command = CaseMapper::to_create_command(request);
    match state.case_service.create_case(&volunteer.id, command).await {
        Ok(result) => {
            let response = CaseMapper::to_case_response_dto(result.case, &result.success_message);
            (StatusCode::CREATED, Json(response)).into_response()
        }
        Err(e) => {
            error!("Failed to create case: {}", e);
            if e.downcast_ref::<CaseValidationError>().is_some() {
                (StatusCode::BAD_REQUEST, e.to_string()).into_response()
            } else {
                (StatusCode::INTERNAL_SERVER_ERROR, "Error creating case").into_response()
            }
        }
    }
}

/// Get a case by ID
pub async fn get_case(
    State(state): State<AppState>,
    axum::extract::Path(case_id): axum::extract::Path<String>,
) -> impl IntoResponse {
    info!("GET /api/cases/{}", case_id);

    match state.case_service.get_case(&case_id).await {
        Ok(Some(case)) => (StatusCode::OK, Json(CaseMapper::to_dto(case))).into_response(),
        Ok(None) => (StatusCode::NOT_FOUND, "Case not found").into_response(),
        Err(e) => {
            error!("Failed to get case: {}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, "Error retrieving case").into_response()
        }
    }
}

/// List the logged-in volunteer's cases, optionally filtered
pub async fn list_cases(
    State(state): State<AppState>,
    Query(params): Query<CaseListParams>,
) -> impl IntoResponse {
    info!("GET /api/cases - query: {:?}", params);

    let volunteer = match require_session(&state).await {
        Ok(volunteer) => volunteer,
        Err(response) => return response,
    };

    let query = CaseListQuery {
        search: params.search,
    };

    match state.case_service.list_cases(&volunteer.id, query).await {
        Ok(cases) => (StatusCode::OK, Json(CaseMapper::to_case_list_dto(cases))).into_response(),
        Err(e) => {
            error!("Failed to list cases: {}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, "Error listing cases").into_response()
        }
    }
}

/// Update a case owned by the logged-in volunteer
///
/// A case recorded by a different volunteer reads as not found.
pub async fn update_case(
    State(state): State<AppState>,
    axum::extract::Path(case_id): axum::extract::Path<String>,
    Json(request): Json<UpdateCaseRequest>,
) -> impl IntoResponse {
    info!("PUT /api/cases/{} - request: {:?}", case_id, request);

    let volunteer = match require_session(&state).await {
        Ok(volunteer) => volunteer,
        Err(response) => return response,
    };

    match state.case_service.get_case(&case_id).await {
        Ok(Some(case)) if case.volunteer_id == volunteer.id => {}
        Ok(_) => return (StatusCode::NOT_FOUND, "Case not found").into_response(),
        Err(e) => {
            error!("Failed to look up case for update: {}", e);
            return (StatusCode::INTERNAL_SERVER_ERROR, "Error updating case").into_response();
        }
    }

    let command = CaseMapper::to_update_command(request);
    match state.case_service.update_case(&case_id, command).await {
        Ok(Some(result)) => {
            let response = CaseMapper::to_case_response_dto(result.case, &result.success_message);
            (StatusCode::OK, Json(response)).into_response()
        }
        Ok(None) => (StatusCode::NOT_FOUND, "Case not found").into_response(),
        Err(e) => {
            error!("Failed to update case: {}", e);
            if e.downcast_ref::<CaseValidationError>().is_some() {
                (StatusCode::BAD_REQUEST, e.to_string()).into_response()
            } else {
                (StatusCode::INTERNAL_SERVER_ERROR, "Error updating case").into_response()
            }
        }
    }
}

/// Delete a case owned by the logged-in volunteer
///
/// Deleting an id that no longer exists still answers 204, so repeated
/// deletes are safe. A case recorded by a different volunteer reads as
/// not found and is left alone.
pub async fn delete_case(
    State(state): State<AppState>,
    axum::extract::Path(case_id): axum::extract::Path<String>,
) -> impl IntoResponse {
    info!("DELETE /api/cases/{}", case_id);

    let volunteer = match require_session(&state).await {
        Ok(volunteer) => volunteer,
        Err(response) => return response,
    };

    match state.case_service.get_case(&case_id).await {
        Ok(Some(case)) if case.volunteer_id != volunteer.id => {
            return (StatusCode::NOT_FOUND, "Case not found").into_response();
        }
        Ok(_) => {}
        Err(e) => {
            error!("Failed to look up case for delete: {}", e);
            return (StatusCode::INTERNAL_SERVER_ERROR, "Error deleting case").into_response();
        }
    }

    match state.case_service.delete_case(&case_id).await {
        Ok(_) => (StatusCode::NO_CONTENT, "").into_response(),
        Err(e) => {
            error!("Failed to delete case: {}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, "Error deleting case").into_response()
        }
    }
}

/// Resolve the logged-in volunteer, or produce the HTTP response that
/// explains why the request cannot proceed.
async fn require_session(state: &AppState) -> Result<Volunteer, axum::response::Response> {
    match state.session_service.current_volunteer().await {
        Ok(Some(volunteer)) => Ok(volunteer),
        Ok(None) => Err((StatusCode::UNAUTHORIZED, "No volunteer is logged in").into_response()),
        Err(e) => {
            error!("Failed to resolve session: {}", e);
            Err(
                (StatusCode::INTERNAL_SERVER_ERROR, "Error resolving session")
                    .into_response(),
            )
        }
    }
}
