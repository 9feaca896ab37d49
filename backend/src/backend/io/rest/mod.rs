//! # REST API Interface Layer
//!
//! Provides HTTP REST endpoints for the case tracker application.
//! This layer handles:
//! - HTTP request/response serialization and deserialization
//! - Input validation and sanitization
//! - Error translation from domain to HTTP status codes
//! - Request logging and monitoring
//!
//! ## Key Responsibilities
//!
//! - **API Endpoints**: RESTful HTTP interfaces for all operations
//! - **Error Handling**: Converting domain errors to proper HTTP responses
//! - **Serialization**: JSON request/response handling
//! - **Session Checks**: Resolving the logged-in volunteer before owner-scoped work
//! - **Logging**: Request/response logging for debugging and monitoring
//!
//! ## Design Principles
//!
//! - **REST Compliance**: Following RESTful design patterns
//! - **Error Transparency**: Clear error messages for debugging
//! - **Domain Separation**: Pure translation layer without business logic

pub mod case_apis;
pub mod export_apis;
pub mod mappers;
pub mod session_apis;
