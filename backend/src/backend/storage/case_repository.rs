//! # Case Repository
//!
//! Sole owner of the case collection. The canonical copy lives in memory
//! behind a mutex and is mirrored to the `cases` snapshot after every
//! mutation. Writes follow a persist-then-commit order: the durable write
//! happens first, and the in-memory collection only changes once that
//! write has succeeded, so after a failed write the last persisted state
//! remains the source of truth.

use anyhow::{Context, Result};
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::info;

use crate::backend::domain::models::case::Case;
use crate::backend::storage::traits::KeyValueStore;

const CASES_KEY: &str = "cases";

#[derive(Clone)]
pub struct CaseRepository {
    store: Arc<dyn KeyValueStore>,
    cases: Arc<Mutex<Vec<Case>>>,
}

impl CaseRepository {
    /// Create a repository over the given store, loading the persisted
    /// collection once. A missing snapshot starts an empty collection.
    pub async fn new(store: Arc<dyn KeyValueStore>) -> Result<Self> {
        let cases: Vec<Case> = match store.get(CASES_KEY).await? {
            Some(raw) => serde_json::from_str(&raw)
                .context("Failed to parse stored case collection")?,
            None => Vec::new(),
        };

        info!("Loaded {} cases from storage", cases.len());

        Ok(Self {
            store,
            cases: Arc::new(Mutex::new(cases)),
        })
    }

    /// Append a new case and persist the grown collection
    pub async fn create_case(&self, case: &Case) -> Result<()> {
        let mut cases = self.cases.lock().await;

        let mut next = cases.clone();
        next.push(case.clone());

        self.persist(&next).await?;
        *cases = next;

        Ok(())
    }

    /// Replace the stored record whose id matches `updated.id`
    ///
    /// Returns false without writing anything when no record has that id.
    pub async fn update_case(&self, updated: &Case) -> Result<bool> {
        let mut cases = self.cases.lock().await;

        let position = match cases.iter().position(|c| c.id == updated.id) {
            Some(position) => position,
            None => return Ok(false),
        };

        let mut next = cases.clone();
        next[position] = updated.clone();

        self.persist(&next).await?;
        *cases = next;

        Ok(true)
    }

    /// Remove the record with the given id if present
    ///
    /// The snapshot is rewritten either way; the returned flag reports
    /// whether a record was actually removed.
    pub async fn delete_case(&self, case_id: &str) -> Result<bool> {
        let mut cases = self.cases.lock().await;

        let mut next = cases.clone();
        let len_before = next.len();
        next.retain(|c| c.id != case_id);
        let removed = next.len() != len_before;

        self.persist(&next).await?;
        *cases = next;

        Ok(removed)
    }

    /// All cases owned by the given volunteer, in insertion order
    pub async fn list_by_volunteer(&self, volunteer_id: &str) -> Result<Vec<Case>> {
        let cases = self.cases.lock().await;

        Ok(cases
            .iter()
            .filter(|c| c.volunteer_id == volunteer_id)
            .cloned()
            .collect())
    }

    /// Look up a single case by id; absent is not an error
    pub async fn get_case(&self, case_id: &str) -> Result<Option<Case>> {
        let cases = self.cases.lock().await;
        Ok(cases.iter().find(|c| c.id == case_id).cloned())
    }

    /// Number of cases owned by the given volunteer
    pub async fn count_by_volunteer(&self, volunteer_id: &str) -> Result<usize> {
        let cases = self.cases.lock().await;
        Ok(cases.iter().filter(|c| c.volunteer_id == volunteer_id).count())
    }

    async fn persist(&self, cases: &[Case]) -> Result<()> {
        let snapshot = serde_json::to_string(cases)
            .context("Failed to serialize case collection")?;
        self.store.set(CASES_KEY, &snapshot).await
    }
}
