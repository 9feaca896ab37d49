//! # IO Module
//!
//! Provides the interface layer between clients and the domain logic.
//!
//! This module serves as the adapter layer that translates HTTP requests into
//! domain operations and formats domain responses for client consumption. It
//! handles the communication protocol (REST API), serialization and
//! deserialization, and maintains the boundary between the presentation layer
//! and business logic.
//!
//! ## Key Responsibilities
//!
//! - **API Endpoints**: Exposing REST API endpoints for client consumption
//! - **Request/Response Handling**: Processing HTTP requests and formatting responses
//! - **Data Serialization**: Converting between JSON and domain objects
//! - **Error Translation**: Converting domain errors to appropriate HTTP status codes
//! - **CORS Management**: Handling cross-origin requests for web clients
//!
//! ## Current Implementation
//!
//! - **Web Framework**: Axum for high-performance async HTTP handling
//! - **Serialization**: Serde for JSON serialization/deserialization
//! - **State Management**: Axum extractors for dependency injection
//! - **Error Handling**: Structured error responses with appropriate HTTP codes
//!
//! ## Supported Operations
//!
//! - **POST /api/session/login**: Authenticate a volunteer and start a session
//! - **POST /api/session/logout**: End the active session
//! - **GET /api/session**: Read the currently logged-in volunteer
//! - **POST /api/volunteers**: Register a new volunteer account
//! - **GET /api/cases**: List the logged-in volunteer's cases, with search
//! - **POST /api/cases**: Record a new case
//! - **GET/PUT/DELETE /api/cases/:case_id**: Operate on a single case
//! - **POST /api/export/csv**: Render a volunteer's cases as CSV
//! - **POST /api/export/to-path**: Write the CSV to a directory on disk

pub mod rest;

pub use rest::*;
