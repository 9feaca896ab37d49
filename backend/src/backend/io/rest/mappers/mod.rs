//! Mappers translating between shared DTOs and domain models.

pub mod case_mapper;
pub mod volunteer_mapper;
