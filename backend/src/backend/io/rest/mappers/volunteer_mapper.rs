//! backend/src/backend/io/rest/mappers/volunteer_mapper.rs

use crate::backend::domain::commands::session::{LoginResult, RegisterVolunteerResult};
use crate::backend::domain::models::volunteer::Volunteer;
use shared::{CurrentSessionResponse, LoginResponse, RegisterVolunteerResponse, VolunteerInfo};

/// Mapper to convert volunteer domain models into client-facing DTOs.
///
/// Password hashes and salts never cross this boundary.
pub struct VolunteerMapper;

impl VolunteerMapper {
    /// Converts a domain Volunteer into the identity DTO.
    pub fn to_dto(domain: Volunteer) -> VolunteerInfo {
        VolunteerInfo {
            id: domain.id,
            username: domain.username,
            full_name: domain.full_name,
        }
    }

    pub fn to_login_response_dto(result: LoginResult) -> LoginResponse {
        LoginResponse {
            success: result.success,
            message: result.message,
            volunteer: result.volunteer.map(Self::to_dto),
        }
    }

    pub fn to_register_response_dto(result: RegisterVolunteerResult) -> RegisterVolunteerResponse {
        RegisterVolunteerResponse {
            success: result.success,
            message: result.message,
        }
    }

    pub fn to_current_session_dto(volunteer: Option<Volunteer>) -> CurrentSessionResponse {
        CurrentSessionResponse {
            volunteer: volunteer.map(Self::to_dto),
        }
    }
}
