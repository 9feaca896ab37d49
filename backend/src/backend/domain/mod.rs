//! # Domain Module
//!
//! Contains all business logic for the case tracker application.
//!
//! This module encapsulates the core business rules, entities, and services
//! that define how welfare cases are recorded, validated, and managed. It
//! operates independently of any specific UI framework or storage mechanism.
//!
//! ## Module Organization
//!
//! - **case_service**: Case CRUD operations, validation, and search
//! - **session_service**: Volunteer authentication and the persisted session
//! - **export_service**: CSV rendering and export file handling
//! - **commands**: Input/output types for the service layer
//! - **models**: Domain entities and their validation errors
//!
//! ## Key Responsibilities
//!
//! - **Case Management**: Creating, updating, deleting, and listing welfare cases
//! - **Business Rule Enforcement**: National ID and phone formats, spouse coherence
//! - **Authentication**: Checking volunteer credentials against the stored roster
//! - **Session Tracking**: Remembering who is logged in across restarts
//! - **Data Export**: Rendering a volunteer's cases as CSV
//!
//! ## Business Rules
//!
//! - Every case names a non-empty head of household with a 14-digit national ID
//! - Phone numbers are 11 digits when present
//! - Spouse details exist exactly when the head of household is married
//! - Cases belong to the volunteer who recorded them
//! - Timestamps track both creation and the most recent update

pub mod case_service;
pub mod commands;
pub mod export_service;
pub mod models;
pub mod session_service;

pub use case_service::*;
pub use commands::*;
pub use export_service::*;
pub use session_service::*;
