use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// A recorded household welfare case
///
/// The serialized form uses camelCase field names with absent optionals
/// omitted entirely, matching the shape the persisted snapshots have
/// always carried.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Case {
    /// Case ID in format: "case::<uuid-v4>"
    pub id: String,
    /// ID of the volunteer who recorded this case; never reassigned
    pub volunteer_id: String,
    pub head_name: String,
    /// 14-digit national ID of the head of household
    pub head_national_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub head_phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub head_age: Option<u32>,
    pub marital_status: MaritalStatus,
    /// Present if and only if marital_status is Married
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub spouse_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub spouse_national_id: Option<String>,
    pub family_members_count: u32,
    #[serde(default)]
    pub health_status: String,
    #[serde(default)]
    pub children_education: String,
    #[serde(default)]
    pub family_needs: String,
    #[serde(default)]
    pub researcher_notes: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub monthly_income: Option<u64>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Case {
    pub fn generate_id() -> String {
        format!("case::{}", Uuid::new_v4())
    }
}

/// Marital status of the head of household (closed set)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MaritalStatus {
    Married,
    Divorced,
    Widowed,
}

impl MaritalStatus {
    /// Stable lowercase name, used in CSV cells and stored snapshots
    pub fn as_str(&self) -> &'static str {
        match self {
            MaritalStatus::Married => "married",
            MaritalStatus::Divorced => "divorced",
            MaritalStatus::Widowed => "widowed",
        }
    }
}

impl fmt::Display for MaritalStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum CaseValidationError {
    #[error("Head of household name cannot be empty")]
    EmptyHeadName,
    #[error("National ID must be exactly 14 digits")]
    InvalidHeadNationalId,
    #[error("Phone number must be exactly 11 digits")]
    InvalidHeadPhone,
    #[error("Age must be a positive number")]
    NonPositiveHeadAge,
    #[error("Spouse name is required when marital status is married")]
    MissingSpouseName,
    #[error("Spouse national ID must be exactly 14 digits")]
    InvalidSpouseNationalId,
    #[error("Family members count must be a positive number")]
    NonPositiveFamilyMembersCount,
}
