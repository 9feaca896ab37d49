//! # Storage Module
//!
//! Handles all data persistence for the case tracker.
//!
//! This module abstracts away the specific storage implementation and
//! provides a consistent interface for persisting and retrieving data.
//! Everything durable goes through the [`traits::KeyValueStore`] boundary,
//! so the backing medium can be swapped (local files, a database, a cloud
//! bucket) without touching the domain layer.
//!
//! ## Key Responsibilities
//!
//! - **Data Persistence**: Writing collection snapshots to durable storage
//! - **Data Retrieval**: Loading stored snapshots back into memory
//! - **Storage Abstraction**: One API regardless of storage backend
//! - **Write Safety**: Atomic snapshot replacement, persist-then-commit
//!
//! ## Current Implementation
//!
//! - **Primary Storage**: JSON snapshot files, one per logical key
//! - **Repositories**: In-memory canonical collections mirrored to disk
//!
//! Three logical keys exist: the volunteer roster, the active session, and
//! the case collection. Each is serialized as a full-collection snapshot;
//! there are no incremental writes.

pub mod traits;
pub mod file_store;
pub mod case_repository;
pub mod volunteer_repository;

pub use traits::*;
pub use file_store::*;
pub use case_repository::*;
pub use volunteer_repository::*;
