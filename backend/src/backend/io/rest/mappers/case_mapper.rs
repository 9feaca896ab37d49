//! backend/src/backend/io/rest/mappers/case_mapper.rs

use crate::backend::domain::commands::cases::{CreateCaseCommand, UpdateCaseCommand};
use crate::backend::domain::models::case::{
    Case as DomainCase, MaritalStatus as DomainMaritalStatus,
};
use shared::{
    Case as SharedCase, CaseListResponse, CaseResponse, CreateCaseRequest,
    MaritalStatus as SharedMaritalStatus, UpdateCaseRequest,
};

/// Mapper to convert between shared Case DTOs and domain Case models.
pub struct CaseMapper;

impl CaseMapper {
    /// Converts a domain Case model to a shared Case DTO.
    pub fn to_dto(domain: DomainCase) -> SharedCase {
        SharedCase {
            id: domain.id,
            volunteer_id: domain.volunteer_id,
            head_name: domain.head_name,
            head_national_id: domain.head_national_id,
            head_phone: domain.head_phone,
            head_age: domain.head_age,
            marital_status: Self::status_to_dto(domain.marital_status),
            spouse_name: domain.spouse_name,
            spouse_national_id: domain.spouse_national_id,
            family_members_count: domain.family_members_count,
            health_status: domain.health_status,
            children_education: domain.children_education,
            family_needs: domain.family_needs,
            researcher_notes: domain.researcher_notes,
            monthly_income: domain.monthly_income,
            created_at: domain.created_at.to_rfc3339(),
            updated_at: domain.updated_at.to_rfc3339(),
        }
    }

    /// Converts a create request into the domain command.
    pub fn to_create_command(dto: CreateCaseRequest) -> CreateCaseCommand {
        CreateCaseCommand {
            head_name: dto.head_name,
            head_national_id: dto.head_national_id,
            head_phone: dto.head_phone,
            head_age: dto.head_age,
            marital_status: Self::status_to_domain(dto.marital_status),
            spouse_name: dto.spouse_name,
            spouse_national_id: dto.spouse_national_id,
            family_members_count: dto.family_members_count,
            health_status: dto.health_status,
            children_education: dto.children_education,
            family_needs: dto.family_needs,
            researcher_notes: dto.researcher_notes,
            monthly_income: dto.monthly_income,
        }
    }

    /// Converts an update request into the domain command.
    pub fn to_update_command(dto: UpdateCaseRequest) -> UpdateCaseCommand {
        UpdateCaseCommand {
            head_name: dto.head_name,
            head_national_id: dto.head_national_id,
            head_phone: dto.head_phone,
            head_age: dto.head_age,
            marital_status: dto.marital_status.map(Self::status_to_domain),
            spouse_name: dto.spouse_name,
            spouse_national_id: dto.spouse_national_id,
            family_members_count: dto.family_members_count,
            health_status: dto.health_status,
            children_education: dto.children_education,
            family_needs: dto.family_needs,
            researcher_notes: dto.researcher_notes,
            monthly_income: dto.monthly_income,
        }
    }

    pub fn to_case_response_dto(domain: DomainCase, message: &str) -> CaseResponse {
        CaseResponse {
            case: Self::to_dto(domain),
            success_message: message.to_string(),
        }
    }

    pub fn to_case_list_dto(domain_cases: Vec<DomainCase>) -> CaseListResponse {
        CaseListResponse {
            cases: domain_cases.into_iter().map(Self::to_dto).collect(),
        }
    }

    fn status_to_domain(status: SharedMaritalStatus) -> DomainMaritalStatus {
        match status {
            SharedMaritalStatus::Married => DomainMaritalStatus::Married,
            SharedMaritalStatus::Divorced => DomainMaritalStatus::Divorced,
            SharedMaritalStatus::Widowed => DomainMaritalStatus::Widowed,
        }
    }

    fn status_to_dto(status: DomainMaritalStatus) -> SharedMaritalStatus {
        match status {
            DomainMaritalStatus::Married => SharedMaritalStatus::Married,
            DomainMaritalStatus::Divorced => SharedMaritalStatus::Divorced,
            DomainMaritalStatus::Widowed => SharedMaritalStatus::Widowed,
        }
    }
}
