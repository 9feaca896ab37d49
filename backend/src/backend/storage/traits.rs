//! # Storage Traits
//!
//! This module defines the durable key-value storage boundary that the
//! repositories sit on, allowing different storage backends to be used
//! interchangeably.

use anyhow::Result;
use async_trait::async_trait;

/// Trait defining the interface for durable key-value storage
///
/// Every logical key holds a full-collection snapshot serialized as a
/// string; there are no incremental or delta writes. Implementations must
/// persist values across process restarts.
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Read the value stored under `key`; None if the key was never set
    async fn get(&self, key: &str) -> Result<Option<String>>;

    /// Write `value` under `key`, replacing any previous value
    async fn set(&self, key: &str, value: &str) -> Result<()>;

    /// Remove `key` and its value; removing an absent key is not an error
    async fn delete(&self, key: &str) -> Result<()>;
}
