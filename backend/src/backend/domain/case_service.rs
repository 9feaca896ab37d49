//! # Case Service
//!
//! Business rules for household welfare cases: input validation, spouse
//! coherence, id generation, and timestamp stamping. The repository
//! underneath persists whatever it is given, so every required-field and
//! format constraint is enforced here before anything is written.

use anyhow::Result;
use chrono::Utc;
use tracing::{info, warn};

use crate::backend::domain::commands::cases::{
    CaseListQuery, CaseResult, CreateCaseCommand, UpdateCaseCommand,
};
use crate::backend::domain::models::case::{Case, CaseValidationError, MaritalStatus};
use crate::backend::storage::case_repository::CaseRepository;

/// Service for managing household welfare cases
#[derive(Clone)]
pub struct CaseService {
    case_repository: CaseRepository,
}

impl CaseService {
    /// Create a new CaseService
    pub fn new(case_repository: CaseRepository) -> Self {
        Self { case_repository }
    }

    /// Create a new case owned by the given volunteer
    pub async fn create_case(
        &self,
        volunteer_id: &str,
        command: CreateCaseCommand,
    ) -> Result<CaseResult> {
        info!(
            "Creating case for volunteer {}: head={}",
            volunteer_id, command.head_name
        );

        let now = Utc::now();
        let mut case = Case {
            id: Case::generate_id(),
            volunteer_id: volunteer_id.to_string(),
            head_name: command.head_name.trim().to_string(),
            head_national_id: command.head_national_id.trim().to_string(),
            head_phone: normalize_optional(command.head_phone),
            head_age: command.head_age,
            marital_status: command.marital_status,
            spouse_name: normalize_optional(command.spouse_name),
            spouse_national_id: normalize_optional(command.spouse_national_id),
            family_members_count: command.family_members_count,
            health_status: command.health_status,
            children_education: command.children_education,
            family_needs: command.family_needs,
            researcher_notes: command.researcher_notes,
            monthly_income: command.monthly_income,
            created_at: now,
            updated_at: now,
        };

        // Spouse fields only exist for married heads of household
        if case.marital_status != MaritalStatus::Married {
            case.spouse_name = None;
            case.spouse_national_id = None;
        }

        self.validate_case(&case)?;
        self.case_repository.create_case(&case).await?;

        info!("Created case {} for volunteer {}", case.id, case.volunteer_id);

        Ok(CaseResult {
            case,
            success_message: "Case created successfully".to_string(),
        })
    }

    /// Update an existing case
    ///
    /// Merges the given fields over the stored record and refreshes
    /// `updated_at`. Returns None when no case has that id; nothing is
    /// written in that situation.
    pub async fn update_case(
        &self,
        case_id: &str,
        command: UpdateCaseCommand,
    ) -> Result<Option<CaseResult>> {
        info!("Updating case: {}", case_id);

        let mut case = match self.case_repository.get_case(case_id).await? {
            Some(case) => case,
            None => {
                warn!("Case not found: {}", case_id);
                return Ok(None);
            }
        };

        if let Some(head_name) = command.head_name {
            case.head_name = head_name.trim().to_string();
        }
        if let Some(head_national_id) = command.head_national_id {
            case.head_national_id = head_national_id.trim().to_string();
        }
        if let Some(head_phone) = command.head_phone {
            case.head_phone = normalize_optional(head_phone);
        }
        if let Some(head_age) = command.head_age {
            case.head_age = head_age;
        }
        if let Some(marital_status) = command.marital_status {
            case.marital_status = marital_status;
        }
        if let Some(spouse_name) = command.spouse_name {
            case.spouse_name = normalize_optional(Some(spouse_name));
        }
        if let Some(spouse_national_id) = command.spouse_national_id {
            case.spouse_national_id = normalize_optional(Some(spouse_national_id));
        }
        if let Some(family_members_count) = command.family_members_count {
            case.family_members_count = family_members_count;
        }
        if let Some(health_status) = command.health_status {
            case.health_status = health_status;
        }
        if let Some(children_education) = command.children_education {
            case.children_education = children_education;
        }
        if let Some(family_needs) = command.family_needs {
            case.family_needs = family_needs;
        }
        if let Some(researcher_notes) = command.researcher_notes {
            case.researcher_notes = researcher_notes;
        }
        if let Some(monthly_income) = command.monthly_income {
            case.monthly_income = monthly_income;
        }

        // Spouse fields only exist for married heads of household
        if case.marital_status != MaritalStatus::Married {
            case.spouse_name = None;
            case.spouse_national_id = None;
        }

        case.updated_at = Utc::now();

        self.validate_case(&case)?;

        if !self.case_repository.update_case(&case).await? {
            warn!("Case disappeared during update: {}", case_id);
            return Ok(None);
        }

        info!("Updated case: {}", case_id);

        Ok(Some(CaseResult {
            case,
            success_message: "Case updated successfully".to_string(),
        }))
    }

    /// Delete a case
    ///
    /// Deleting an id that no longer exists is still a success; the flag
    /// reports whether a record was actually removed.
    pub async fn delete_case(&self, case_id: &str) -> Result<bool> {
        info!("Deleting case: {}", case_id);

        let removed = self.case_repository.delete_case(case_id).await?;
        if removed {
            info!("Deleted case: {}", case_id);
        } else {
            warn!("Delete found no case: {}", case_id);
        }

        Ok(removed)
    }

    /// Get a case by ID
    pub async fn get_case(&self, case_id: &str) -> Result<Option<Case>> {
        self.case_repository.get_case(case_id).await
    }

    /// List a volunteer's cases in insertion order, optionally filtered
    ///
    /// The search filter matches substrings of the head name (ignoring
    /// letter case) and of the head national ID.
    pub async fn list_cases(
        &self,
        volunteer_id: &str,
        query: CaseListQuery,
    ) -> Result<Vec<Case>> {
        let cases = self.case_repository.list_by_volunteer(volunteer_id).await?;

        let cases = match query.search {
            Some(ref needle) if !needle.trim().is_empty() => {
                let needle = needle.trim().to_lowercase();
                cases
                    .into_iter()
                    .filter(|c| {
                        c.head_name.to_lowercase().contains(&needle)
                            || c.head_national_id.contains(needle.as_str())
                    })
                    .collect()
            }
            _ => cases,
        };

        info!("Found {} cases for volunteer {}", cases.len(), volunteer_id);
        Ok(cases)
    }

    /// Number of cases a volunteer has recorded
    pub async fn count_cases(&self, volunteer_id: &str) -> Result<usize> {
        self.case_repository.count_by_volunteer(volunteer_id).await
    }

    fn validate_case(&self, case: &Case) -> Result<(), CaseValidationError> {
        if case.head_name.trim().is_empty() {
            return Err(CaseValidationError::EmptyHeadName);
        }
        if !is_digits(&case.head_national_id, 14) {
            return Err(CaseValidationError::InvalidHeadNationalId);
        }
        if let Some(ref phone) = case.head_phone {
            if !is_digits(phone, 11) {
                return Err(CaseValidationError::InvalidHeadPhone);
            }
        }
        if let Some(age) = case.head_age {
            if age == 0 {
                return Err(CaseValidationError::NonPositiveHeadAge);
            }
        }
        if case.marital_status == MaritalStatus::Married {
            match case.spouse_name {
                Some(ref name) if !name.trim().is_empty() => {}
                _ => return Err(CaseValidationError::MissingSpouseName),
            }
            match case.spouse_national_id {
                Some(ref id) if is_digits(id, 14) => {}
                _ => return Err(CaseValidationError::InvalidSpouseNationalId),
            }
        }
        if case.family_members_count == 0 {
            return Err(CaseValidationError::NonPositiveFamilyMembersCount);
        }

        Ok(())
    }
}

fn is_digits(value: &str, expected_len: usize) -> bool {
    value.len() == expected_len && value.chars().all(|c| c.is_ascii_digit())
}

/// Treat empty or whitespace-only strings as absent
fn normalize_optional(value: Option<String>) -> Option<String> {
    match value {
        Some(v) => {
            let trimmed = v.trim();
            if trimmed.is_empty() {
                None
            } else {
                Some(trimmed.to_string())
            }
        }
        None => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::storage::file_store::FileStore;
    use std::sync::Arc;
    use tempfile::TempDir;

    async fn setup_test() -> (CaseService, TempDir) {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let store = Arc::new(FileStore::new(temp_dir.path()).expect("Failed to create store"));
        let repository = CaseRepository::new(store)
            .await
            .expect("Failed to create repository");
        (CaseService::new(repository), temp_dir)
    }

    fn married_command() -> CreateCaseCommand {
        CreateCaseCommand {
            head_name: "Mohamed Hassan".to_string(),
            head_national_id: "29001011234567".to_string(),
            head_phone: Some("01012345678".to_string()),
            head_age: Some(45),
            marital_status: MaritalStatus::Married,
            spouse_name: Some("Mona Said".to_string()),
            spouse_national_id: Some("29201011234567".to_string()),
            family_members_count: 5,
            health_status: "Chronic illness".to_string(),
            children_education: "Two in primary school".to_string(),
            family_needs: "Food support".to_string(),
            researcher_notes: "Visited on site".to_string(),
            monthly_income: Some(2500),
        }
    }

    fn widowed_command() -> CreateCaseCommand {
        CreateCaseCommand {
            head_name: "Salma Fathy".to_string(),
            head_national_id: "28501011234567".to_string(),
            head_phone: None,
            head_age: None,
            marital_status: MaritalStatus::Widowed,
            spouse_name: None,
            spouse_national_id: None,
            family_members_count: 2,
            health_status: String::new(),
            children_education: String::new(),
            family_needs: String::new(),
            researcher_notes: String::new(),
            monthly_income: None,
        }
    }

    #[tokio::test]
    async fn test_create_case_stamps_id_and_timestamps() {
        let (service, _temp_dir) = setup_test().await;

        let result = service
            .create_case("volunteer::1", married_command())
            .await
            .expect("Failed to create case");

        let case = &result.case;
        assert!(case.id.starts_with("case::"));
        assert_eq!(case.volunteer_id, "volunteer::1");
        assert_eq!(case.created_at, case.updated_at);
        assert_eq!(result.success_message, "Case created successfully");

        // Create followed by lookup returns the input plus generated fields
        let found = service
            .get_case(&case.id)
            .await
            .expect("Failed to get case")
            .expect("Case missing");
        assert_eq!(found.head_name, "Mohamed Hassan");
        assert_eq!(found.head_national_id, "29001011234567");
        assert_eq!(found.head_phone, Some("01012345678".to_string()));
        assert_eq!(found.head_age, Some(45));
        assert_eq!(found.marital_status, MaritalStatus::Married);
        assert_eq!(found.spouse_name, Some("Mona Said".to_string()));
        assert_eq!(found.spouse_national_id, Some("29201011234567".to_string()));
        assert_eq!(found.family_members_count, 5);
        assert_eq!(found.health_status, "Chronic illness");
        assert_eq!(found.monthly_income, Some(2500));
        assert_eq!(&found, case);
    }

    #[tokio::test]
    async fn test_create_case_validation() {
        let (service, _temp_dir) = setup_test().await;

        // Empty head name
        let mut command = married_command();
        command.head_name = "   ".to_string();
        assert!(service.create_case("volunteer::1", command).await.is_err());

        // National ID must be 14 digits
        let mut command = married_command();
        command.head_national_id = "123".to_string();
        assert!(service.create_case("volunteer::1", command).await.is_err());

        let mut command = married_command();
        command.head_national_id = "2900101123456X".to_string();
        assert!(service.create_case("volunteer::1", command).await.is_err());

        // Phone must be 11 digits when present
        let mut command = married_command();
        command.head_phone = Some("0101234".to_string());
        assert!(service.create_case("volunteer::1", command).await.is_err());

        // Age must be positive when present
        let mut command = married_command();
        command.head_age = Some(0);
        assert!(service.create_case("volunteer::1", command).await.is_err());

        // Married without spouse name
        let mut command = married_command();
        command.spouse_name = None;
        assert!(service.create_case("volunteer::1", command).await.is_err());

        // Married with malformed spouse national ID
        let mut command = married_command();
        command.spouse_national_id = Some("12".to_string());
        assert!(service.create_case("volunteer::1", command).await.is_err());

        // Family members count must be positive
        let mut command = married_command();
        command.family_members_count = 0;
        assert!(service.create_case("volunteer::1", command).await.is_err());
    }

    #[tokio::test]
    async fn test_validation_failures_are_typed() {
        let (service, _temp_dir) = setup_test().await;

        let mut command = married_command();
        command.head_national_id = "123".to_string();
        let error = service
            .create_case("volunteer::1", command)
            .await
            .expect_err("Expected a validation failure");

        assert_eq!(
            error.downcast_ref::<CaseValidationError>(),
            Some(&CaseValidationError::InvalidHeadNationalId)
        );
    }

    #[tokio::test]
    async fn test_spouse_fields_dropped_unless_married() {
        let (service, _temp_dir) = setup_test().await;

        // Divorced input carrying spouse fields is normalized, not rejected
        let mut command = married_command();
        command.marital_status = MaritalStatus::Divorced;
        let result = service
            .create_case("volunteer::1", command)
            .await
            .expect("Failed to create case");

        assert!(result.case.spouse_name.is_none());
        assert!(result.case.spouse_national_id.is_none());
    }

    #[tokio::test]
    async fn test_empty_optional_strings_are_stored_as_absent() {
        let (service, _temp_dir) = setup_test().await;

        let mut command = widowed_command();
        command.head_phone = Some("   ".to_string());
        let result = service
            .create_case("volunteer::1", command)
            .await
            .expect("Failed to create case");

        assert!(result.case.head_phone.is_none());
    }

    #[tokio::test]
    async fn test_update_single_field_keeps_the_rest() {
        let (service, _temp_dir) = setup_test().await;

        let created = service
            .create_case("volunteer::1", married_command())
            .await
            .expect("Failed to create case")
            .case;

        // Small delay so the refreshed timestamp is strictly greater
        tokio::time::sleep(tokio::time::Duration::from_millis(1)).await;

        let command = UpdateCaseCommand {
            family_needs: Some("Medication".to_string()),
            ..Default::default()
        };
        let updated = service
            .update_case(&created.id, command)
            .await
            .expect("Update failed")
            .expect("Case not found")
            .case;

        assert_eq!(updated.family_needs, "Medication");
        assert_eq!(updated.head_name, created.head_name);
        assert_eq!(updated.head_phone, created.head_phone);
        assert_eq!(updated.spouse_name, created.spouse_name);
        assert_eq!(updated.created_at, created.created_at);
        assert!(updated.updated_at > created.updated_at);
    }

    #[tokio::test]
    async fn test_update_clears_nullable_fields() {
        let (service, _temp_dir) = setup_test().await;

        let created = service
            .create_case("volunteer::1", married_command())
            .await
            .unwrap()
            .case;

        let command = UpdateCaseCommand {
            head_phone: Some(None),
            monthly_income: Some(None),
            ..Default::default()
        };
        let updated = service
            .update_case(&created.id, command)
            .await
            .expect("Update failed")
            .expect("Case not found")
            .case;

        assert!(updated.head_phone.is_none());
        assert!(updated.monthly_income.is_none());
        // An omitted nullable field stays put
        assert_eq!(updated.head_age, Some(45));
    }

    #[tokio::test]
    async fn test_update_nonexistent_case() {
        let (service, _temp_dir) = setup_test().await;

        let command = UpdateCaseCommand {
            head_name: Some("New Name".to_string()),
            ..Default::default()
        };
        let result = service
            .update_case("case::missing", command)
            .await
            .expect("Update errored");

        assert!(result.is_none());
    }

    #[tokio::test]
    async fn test_update_to_married_requires_spouse() {
        let (service, _temp_dir) = setup_test().await;

        let created = service
            .create_case("volunteer::1", widowed_command())
            .await
            .unwrap()
            .case;

        // Becoming married without spouse details is rejected
        let command = UpdateCaseCommand {
            marital_status: Some(MaritalStatus::Married),
            ..Default::default()
        };
        assert!(service.update_case(&created.id, command).await.is_err());

        // Supplying the spouse pair makes it valid
        let command = UpdateCaseCommand {
            marital_status: Some(MaritalStatus::Married),
            spouse_name: Some("Omar Adel".to_string()),
            spouse_national_id: Some("27801011234567".to_string()),
            ..Default::default()
        };
        let updated = service
            .update_case(&created.id, command)
            .await
            .expect("Update failed")
            .expect("Case not found")
            .case;
        assert_eq!(updated.spouse_name, Some("Omar Adel".to_string()));
    }

    #[tokio::test]
    async fn test_update_away_from_married_drops_spouse() {
        let (service, _temp_dir) = setup_test().await;

        let created = service
            .create_case("volunteer::1", married_command())
            .await
            .unwrap()
            .case;

        let command = UpdateCaseCommand {
            marital_status: Some(MaritalStatus::Divorced),
            ..Default::default()
        };
        let updated = service
            .update_case(&created.id, command)
            .await
            .expect("Update failed")
            .expect("Case not found")
            .case;

        assert_eq!(updated.marital_status, MaritalStatus::Divorced);
        assert!(updated.spouse_name.is_none());
        assert!(updated.spouse_national_id.is_none());
    }

    #[tokio::test]
    async fn test_failed_update_validation_leaves_record_unchanged() {
        let (service, _temp_dir) = setup_test().await;

        let created = service
            .create_case("volunteer::1", married_command())
            .await
            .unwrap()
            .case;

        let command = UpdateCaseCommand {
            head_phone: Some(Some("not-a-phone".to_string())),
            ..Default::default()
        };
        assert!(service.update_case(&created.id, command).await.is_err());

        let stored = service.get_case(&created.id).await.unwrap().expect("Case missing");
        assert_eq!(stored, created);
    }

    #[tokio::test]
    async fn test_delete_case_is_idempotent() {
        let (service, _temp_dir) = setup_test().await;

        let created = service
            .create_case("volunteer::1", married_command())
            .await
            .unwrap()
            .case;

        assert!(service.delete_case(&created.id).await.expect("Delete failed"));
        assert!(service.get_case(&created.id).await.unwrap().is_none());

        // Second delete succeeds without removing anything
        assert!(!service.delete_case(&created.id).await.expect("Delete failed"));
    }

    #[tokio::test]
    async fn test_list_cases_scopes_by_owner_in_insertion_order() {
        let (service, _temp_dir) = setup_test().await;

        let first = service.create_case("volunteer::a", married_command()).await.unwrap().case;
        service.create_case("volunteer::b", widowed_command()).await.unwrap();
        let second = service.create_case("volunteer::a", widowed_command()).await.unwrap().case;

        let cases = service
            .list_cases("volunteer::a", CaseListQuery::default())
            .await
            .expect("Failed to list cases");

        let ids: Vec<&str> = cases.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec![first.id.as_str(), second.id.as_str()]);

        assert_eq!(service.count_cases("volunteer::b").await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_search_filters_by_name_and_national_id() {
        let (service, _temp_dir) = setup_test().await;

        service.create_case("volunteer::1", married_command()).await.unwrap();
        service.create_case("volunteer::1", widowed_command()).await.unwrap();

        let by_name = service
            .list_cases(
                "volunteer::1",
                CaseListQuery { search: Some("salma".to_string()) },
            )
            .await
            .unwrap();
        assert_eq!(by_name.len(), 1);
        assert_eq!(by_name[0].head_name, "Salma Fathy");

        let by_id = service
            .list_cases(
                "volunteer::1",
                CaseListQuery { search: Some("29001".to_string()) },
            )
            .await
            .unwrap();
        assert_eq!(by_id.len(), 1);
        assert_eq!(by_id[0].head_name, "Mohamed Hassan");

        let no_match = service
            .list_cases(
                "volunteer::1",
                CaseListQuery { search: Some("nobody".to_string()) },
            )
            .await
            .unwrap();
        assert!(no_match.is_empty());
    }
}
