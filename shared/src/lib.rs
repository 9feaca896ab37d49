use serde::{Deserialize, Deserializer, Serialize};

/// Case ID in format: "case::<uuid-v4>"
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Case {
    pub id: String,
    /// ID of the volunteer who recorded this case
    pub volunteer_id: String,
    /// Name of the head of household
    pub head_name: String,
    /// National ID of the head of household (14 digits)
    pub head_national_id: String,
    /// Phone number of the head of household (11 digits)
    pub head_phone: Option<String>,
    /// Age of the head of household (positive)
    pub head_age: Option<u32>,
    pub marital_status: MaritalStatus,
    /// Present if and only if marital_status is "married"
    pub spouse_name: Option<String>,
    /// National ID of the spouse (14 digits), paired with spouse_name
    pub spouse_national_id: Option<String>,
    /// Number of family members (positive)
    pub family_members_count: u32,
    pub health_status: String,
    pub children_education: String,
    pub family_needs: String,
    pub researcher_notes: String,
    /// Monthly household income, whole currency units
    pub monthly_income: Option<u64>,
    /// RFC 3339 timestamp
    pub created_at: String,
    /// RFC 3339 timestamp
    pub updated_at: String,
}

/// Marital status of the head of household (closed set)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MaritalStatus {
    Married,
    Divorced,
    Widowed,
}

/// Request for creating a new case
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateCaseRequest {
    pub head_name: String,
    /// National ID of the head of household (14 digits)
    pub head_national_id: String,
    /// Phone number (11 digits), optional
    pub head_phone: Option<String>,
    pub head_age: Option<u32>,
    pub marital_status: MaritalStatus,
    /// Required when marital_status is "married", rejected otherwise
    pub spouse_name: Option<String>,
    pub spouse_national_id: Option<String>,
    pub family_members_count: u32,
    pub health_status: String,
    pub children_education: String,
    pub family_needs: String,
    pub researcher_notes: String,
    pub monthly_income: Option<u64>,
}

/// Request for updating an existing case
///
/// Omitted fields keep their current values. The nullable fields
/// (head_phone, head_age, monthly_income) distinguish an explicit JSON
/// null (clear the value) from an omitted field (keep the value).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UpdateCaseRequest {
    pub head_name: Option<String>,
    pub head_national_id: Option<String>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "deserialize_nullable"
    )]
    pub head_phone: Option<Option<String>>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "deserialize_nullable"
    )]
    pub head_age: Option<Option<u32>>,
    pub marital_status: Option<MaritalStatus>,
    pub spouse_name: Option<String>,
    pub spouse_national_id: Option<String>,
    pub family_members_count: Option<u32>,
    pub health_status: Option<String>,
    pub children_education: Option<String>,
    pub family_needs: Option<String>,
    pub researcher_notes: Option<String>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "deserialize_nullable"
    )]
    pub monthly_income: Option<Option<u64>>,
}

/// Deserializes a field that was present in the payload, mapping JSON null
/// to Some(None) so the backend can tell "clear" apart from "keep".
fn deserialize_nullable<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

/// Response after creating or updating a case
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CaseResponse {
    pub case: Case,
    pub success_message: String,
}

/// Request for listing the active volunteer's cases
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CaseListRequest {
    /// Substring filter over head name and head national ID
    pub search: Option<String>,
}

/// Response containing a list of cases
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CaseListResponse {
    pub cases: Vec<Case>,
}

/// Volunteer identity exposed to clients (credentials never leave the backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VolunteerInfo {
    pub id: String,
    pub username: String,
    pub full_name: String,
}

/// Request for logging a volunteer in
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Response from a login attempt
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoginResponse {
    pub success: bool,
    pub message: String,
    pub volunteer: Option<VolunteerInfo>,
}

/// Request for registering a new volunteer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegisterVolunteerRequest {
    pub username: String,
    pub password: String,
    pub full_name: String,
}

/// Response from a registration attempt
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegisterVolunteerResponse {
    pub success: bool,
    pub message: String,
}

/// Response containing the currently authenticated volunteer, if any
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrentSessionResponse {
    pub volunteer: Option<VolunteerInfo>,
}

/// Request for exporting cases as CSV data
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExportDataRequest {
    /// If None, uses the active volunteer
    pub volunteer_id: Option<String>,
}

/// Response containing generated CSV content
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportDataResponse {
    pub csv_content: String,
    pub filename: String,
    pub case_count: usize,
    pub volunteer_name: String,
}

/// Request for exporting cases directly to a file on disk
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExportToPathRequest {
    /// If None, uses the active volunteer
    pub volunteer_id: Option<String>,
    /// Target directory; if None, uses the Documents folder
    pub custom_path: Option<String>,
}

/// Response after exporting to a file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportToPathResponse {
    pub success: bool,
    pub message: String,
    pub file_path: String,
    pub case_count: usize,
    pub volunteer_name: String,
}
