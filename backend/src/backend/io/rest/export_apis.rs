//! # REST API for Data Export
//!
//! Endpoints for exporting a volunteer's cases as CSV files.

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json},
    routing::post,
    Router,
};
use tracing::{error, info};

use crate::backend::domain::commands::export::{ExportCsvCommand, ExportToPathCommand};
use crate::backend::AppState;
use shared::{ExportDataRequest, ExportDataResponse, ExportToPathRequest, ExportToPathResponse};

/// Create a router for export related APIs
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/csv", post(export_cases_csv))
        .route("/to-path", post(export_to_path))
}

/// Export cases as CSV data
pub async fn export_cases_csv(
    State(state): State<AppState>,
    Json(request): Json<ExportDataRequest>,
) -> impl IntoResponse {
    info!("POST /api/export/csv - request: {:?}", request);

    let command = ExportCsvCommand {
        volunteer_id: request.volunteer_id,
    };

    match state
        .export_service
        .export_cases_csv(command, &state.session_service, &state.case_service)
        .await
    {
        Ok(result) => {
            info!("✅ Export CSV operation completed successfully");
            let response = ExportDataResponse {
                csv_content: result.csv_content,
                filename: result.filename,
                case_count: result.case_count,
                volunteer_name: result.volunteer_name,
            };
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => {
            error!("❌ Failed to export cases: {}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, "Failed to export cases").into_response()
        }
    }
}

/// Export cases directly to a specified path (or the default location)
pub async fn export_to_path(
    State(state): State<AppState>,
    Json(request): Json<ExportToPathRequest>,
) -> impl IntoResponse {
    info!("POST /api/export/to-path - custom_path: {:?}", request.custom_path);

    let command = ExportToPathCommand {
        volunteer_id: request.volunteer_id,
        custom_path: request.custom_path,
    };

    match state
        .export_service
        .export_to_path(command, &state.session_service, &state.case_service)
        .await
    {
        Ok(result) => {
            info!("✅ Export to path operation completed successfully");
            let response = ExportToPathResponse {
                success: result.success,
                message: result.message,
                file_path: result.file_path,
                case_count: result.case_count,
                volunteer_name: result.volunteer_name,
            };
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => {
            error!("❌ Failed to export to path: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ExportToPathResponse {
                    success: false,
                    message: format!("Failed to export to path: {}", e),
                    file_path: String::new(),
                    case_count: 0,
                    volunteer_name: String::new(),
                }),
            )
                .into_response()
        }
    }
}
