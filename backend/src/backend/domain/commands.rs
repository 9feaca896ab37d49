// backend/src/backend/domain/commands.rs

//! Domain-level command and query types
//! These structs are used by services inside the domain layer and are **not**
//! exposed over the public API. The REST layer is responsible for mapping the
//! public DTOs defined in the `shared` crate to these internal types.

pub mod cases {
    use crate::backend::domain::models::case::{Case, MaritalStatus};

    /// Input for creating a new case.
    #[derive(Debug, Clone)]
    pub struct CreateCaseCommand {
        pub head_name: String,
        pub head_national_id: String,
        pub head_phone: Option<String>,
        pub head_age: Option<u32>,
        pub marital_status: MaritalStatus,
        pub spouse_name: Option<String>,
        pub spouse_national_id: Option<String>,
        pub family_members_count: u32,
        pub health_status: String,
        pub children_education: String,
        pub family_needs: String,
        pub researcher_notes: String,
        pub monthly_income: Option<u64>,
    }

    /// Input for updating an existing case.
    ///
    /// None keeps the stored value. For the nullable fields, Some(None)
    /// clears the stored value and Some(Some(v)) replaces it.
    #[derive(Debug, Clone, Default)]
    pub struct UpdateCaseCommand {
        pub head_name: Option<String>,
        pub head_national_id: Option<String>,
        pub head_phone: Option<Option<String>>,
        pub head_age: Option<Option<u32>>,
        pub marital_status: Option<MaritalStatus>,
        pub spouse_name: Option<String>,
        pub spouse_national_id: Option<String>,
        pub family_members_count: Option<u32>,
        pub health_status: Option<String>,
        pub children_education: Option<String>,
        pub family_needs: Option<String>,
        pub researcher_notes: Option<String>,
        pub monthly_income: Option<Option<u64>>,
    }

    /// Query parameters for listing a volunteer's cases.
    #[derive(Debug, Clone, Default)]
    pub struct CaseListQuery {
        /// Substring filter over head name and head national ID
        pub search: Option<String>,
    }

    /// Result of creating or updating a case.
    #[derive(Debug, Clone)]
    pub struct CaseResult {
        pub case: Case,
        pub success_message: String,
    }
}

pub mod session {
    use crate::backend::domain::models::volunteer::Volunteer;

    /// Input for a login attempt.
    #[derive(Debug, Clone)]
    pub struct LoginCommand {
        pub username: String,
        pub password: String,
    }

    /// Input for registering a new volunteer.
    #[derive(Debug, Clone)]
    pub struct RegisterVolunteerCommand {
        pub username: String,
        pub password: String,
        pub full_name: String,
    }

    /// Result of a login attempt.
    #[derive(Debug, Clone)]
    pub struct LoginResult {
        pub success: bool,
        pub message: String,
        pub volunteer: Option<Volunteer>,
    }

    /// Result of a registration attempt.
    #[derive(Debug, Clone)]
    pub struct RegisterVolunteerResult {
        pub success: bool,
        pub message: String,
    }
}

pub mod export {
    /// Input for generating a CSV export.
    #[derive(Debug, Clone, Default)]
    pub struct ExportCsvCommand {
        /// If None, the active volunteer is used
        pub volunteer_id: Option<String>,
    }

    /// Input for exporting directly to a file on disk.
    #[derive(Debug, Clone, Default)]
    pub struct ExportToPathCommand {
        /// If None, the active volunteer is used
        pub volunteer_id: Option<String>,
        /// Target directory; if None, the Documents folder is used
        pub custom_path: Option<String>,
    }

    /// Result of generating a CSV export.
    #[derive(Debug, Clone)]
    pub struct ExportCsvResult {
        pub csv_content: String,
        pub filename: String,
        pub case_count: usize,
        pub volunteer_name: String,
    }

    /// Result of exporting to a file.
    #[derive(Debug, Clone)]
    pub struct ExportToPathResult {
        pub success: bool,
        pub message: String,
        pub file_path: String,
        pub case_count: usize,
        pub volunteer_name: String,
    }
}
