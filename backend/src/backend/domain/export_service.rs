//! # Export Service
//!
//! Business logic for exporting a volunteer's cases as CSV, including
//! volunteer resolution, CSV rendering, and file operations. The API layer
//! should only handle presentation concerns.

use anyhow::Result;
use chrono::Utc;
use csv::{QuoteStyle, WriterBuilder};
use std::fs;
use std::path::PathBuf;
use tracing::{error, info};

use crate::backend::domain::case_service::CaseService;
use crate::backend::domain::commands::cases::CaseListQuery;
use crate::backend::domain::commands::export::{
    ExportCsvCommand, ExportCsvResult, ExportToPathCommand, ExportToPathResult,
};
use crate::backend::domain::models::case::Case;
use crate::backend::domain::session_service::SessionService;

/// Column order matches the on-screen case form, with a row number first
/// and the registration date last.
const CSV_HEADERS: [&str; 15] = [
    "case_number",
    "head_name",
    "head_national_id",
    "head_phone",
    "head_age",
    "marital_status",
    "spouse_name",
    "spouse_national_id",
    "family_members_count",
    "health_status",
    "children_education",
    "monthly_income",
    "family_needs",
    "researcher_notes",
    "registration_date",
];

/// Export service that handles all export-related business logic
#[derive(Clone)]
pub struct ExportService {
    // No internal state needed for now
}

impl ExportService {
    /// Create a new ExportService instance
    pub fn new() -> Self {
        Self {}
    }

    /// Export a volunteer's cases as CSV data
    ///
    /// When the command names no volunteer, the active session decides
    /// whose cases are exported.
    pub async fn export_cases_csv(
        &self,
        command: ExportCsvCommand,
        session_service: &SessionService,
        case_service: &CaseService,
    ) -> Result<ExportCsvResult> {
        info!(
            "📄 EXPORT: Exporting cases as CSV for volunteer_id: {:?}",
            command.volunteer_id
        );

        // Step 1: Determine which volunteer to export for
        let volunteer = match command.volunteer_id {
            Some(ref id) => match session_service.get_volunteer(id).await? {
                Some(volunteer) => volunteer,
                None => {
                    error!("❌ EXPORT: Volunteer not found: {}", id);
                    return Err(anyhow::anyhow!("Volunteer not found: {}", id));
                }
            },
            None => match session_service.current_volunteer().await? {
                Some(volunteer) => {
                    info!("✅ EXPORT: Using logged-in volunteer: {}", volunteer.id);
                    volunteer
                }
                None => {
                    error!("❌ EXPORT: No volunteer logged in and no volunteer_id provided");
                    return Err(anyhow::anyhow!(
                        "No volunteer is logged in and no volunteer_id provided"
                    ));
                }
            },
        };

        // Step 2: Collect the volunteer's cases in insertion order
        let cases = case_service
            .list_cases(&volunteer.id, CaseListQuery::default())
            .await?;
        info!("✅ EXPORT: Retrieved {} cases for export", cases.len());

        // Step 3: Render the CSV content
        let csv_content = self.render_csv(&cases)?;

        // Step 4: Generate filename with current date
        let filename = format!(
            "cases_{}_{}.csv",
            volunteer.username,
            Utc::now().format("%Y-%m-%d")
        );

        let result = ExportCsvResult {
            csv_content,
            filename,
            case_count: cases.len(),
            volunteer_name: volunteer.full_name,
        };

        info!(
            "✅ EXPORT: Generated CSV content ({} bytes) for {} cases with filename: {}",
            result.csv_content.len(),
            result.case_count,
            result.filename
        );

        Ok(result)
    }

    /// Export a volunteer's cases directly to a file
    ///
    /// Writes into the given directory, or the Documents folder (falling
    /// back to the home directory) when none is given. File-system problems
    /// come back as an unsuccessful result rather than an error so the
    /// caller can show the message as-is.
    pub async fn export_to_path(
        &self,
        command: ExportToPathCommand,
        session_service: &SessionService,
        case_service: &CaseService,
    ) -> Result<ExportToPathResult> {
        info!(
            "📁 EXPORT: Exporting to file - custom_path: {:?}",
            command.custom_path
        );

        let csv_command = ExportCsvCommand {
            volunteer_id: command.volunteer_id.clone(),
        };
        let export = self
            .export_cases_csv(csv_command, session_service, case_service)
            .await?;

        let export_dir = match command.custom_path {
            Some(ref custom_path) if !custom_path.trim().is_empty() => {
                PathBuf::from(self.sanitize_path(custom_path))
            }
            _ => match dirs::document_dir() {
                Some(docs_dir) => docs_dir,
                None => match dirs::home_dir() {
                    Some(home_dir) => home_dir,
                    None => {
                        error!("❌ EXPORT: Could not determine default export directory");
                        return Ok(ExportToPathResult {
                            success: false,
                            message: "Failed to determine export directory".to_string(),
                            file_path: String::new(),
                            case_count: 0,
                            volunteer_name: String::new(),
                        });
                    }
                },
            },
        };

        if let Err(e) = fs::create_dir_all(&export_dir) {
            error!(
                "❌ EXPORT: Failed to create export directory {:?}: {}",
                export_dir, e
            );
            return Ok(ExportToPathResult {
                success: false,
                message: format!("Failed to create export directory: {}", e),
                file_path: export_dir.to_string_lossy().to_string(),
                case_count: 0,
                volunteer_name: String::new(),
            });
        }

        let file_path = export_dir.join(&export.filename);

        match fs::write(&file_path, &export.csv_content) {
            Ok(_) => {
                let file_path_str = file_path.to_string_lossy().to_string();
                info!(
                    "✅ EXPORT: Successfully exported {} cases for {} to: {}",
                    export.case_count, export.volunteer_name, file_path_str
                );

                Ok(ExportToPathResult {
                    success: true,
                    message: format!("File exported successfully to: {}", file_path_str),
                    file_path: file_path_str,
                    case_count: export.case_count,
                    volunteer_name: export.volunteer_name,
                })
            }
            Err(e) => {
                error!(
                    "❌ EXPORT: Failed to write export file to {:?}: {}",
                    file_path, e
                );
                Ok(ExportToPathResult {
                    success: false,
                    message: format!("Failed to write export file: {}", e),
                    file_path: file_path.to_string_lossy().to_string(),
                    case_count: 0,
                    volunteer_name: String::new(),
                })
            }
        }
    }

    /// Render cases as CSV with every field quoted
    fn render_csv(&self, cases: &[Case]) -> Result<String> {
        let mut writer = WriterBuilder::new()
            .quote_style(QuoteStyle::Always)
            .from_writer(Vec::new());

        writer.write_record(CSV_HEADERS)?;

        for (index, case) in cases.iter().enumerate() {
            writer.write_record(&[
                (index + 1).to_string(),
                case.head_name.clone(),
                case.head_national_id.clone(),
                case.head_phone.clone().unwrap_or_default(),
                case.head_age.map(|age| age.to_string()).unwrap_or_default(),
                case.marital_status.to_string(),
                case.spouse_name.clone().unwrap_or_default(),
                case.spouse_national_id.clone().unwrap_or_default(),
                case.family_members_count.to_string(),
                case.health_status.clone(),
                case.children_education.clone(),
                case.monthly_income
                    .map(|income| income.to_string())
                    .unwrap_or_default(),
                case.family_needs.clone(),
                case.researcher_notes.clone(),
                case.created_at.format("%d/%m/%Y").to_string(),
            ])?;
        }

        writer.flush()?;
        let bytes = writer
            .into_inner()
            .map_err(|e| anyhow::anyhow!("Failed to finish CSV export: {}", e))?;

        Ok(String::from_utf8(bytes)?)
    }

    /// Basic path sanitization to handle common user input issues
    fn sanitize_path(&self, path: &str) -> String {
        let mut cleaned = path.trim().to_string();

        // Strip matching surrounding quotes (single or double)
        if cleaned.len() >= 2
            && ((cleaned.starts_with('"') && cleaned.ends_with('"'))
                || (cleaned.starts_with('\'') && cleaned.ends_with('\'')))
        {
            cleaned = cleaned[1..cleaned.len() - 1].trim().to_string();
        }

        // Shell-escaped spaces show up when paths are pasted from a terminal
        cleaned = cleaned.replace("\\ ", " ");

        // Remove any trailing slashes/backslashes
        while cleaned.ends_with('/') || cleaned.ends_with('\\') {
            cleaned.pop();
        }

        // Tilde expansion for the home directory
        if cleaned.starts_with('~') {
            if let Some(home) = dirs::home_dir() {
                if cleaned == "~" {
                    cleaned = home.to_string_lossy().to_string();
                } else if cleaned.starts_with("~/") || cleaned.starts_with("~\\") {
                    cleaned = home.join(&cleaned[2..]).to_string_lossy().to_string();
                }
            }
        }

        cleaned
    }
}

impl Default for ExportService {
    fn default() -> Self {
        Self::new()
    }
}
