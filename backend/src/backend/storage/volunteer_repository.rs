//! # Volunteer Repository
//!
//! Owns the volunteer roster and the persisted active session. Both live
//! under their own storage keys as full snapshots: the roster as an array
//! of volunteers, the session as the id of the volunteer who is logged in.
//! On first run, when no roster snapshot exists yet, a fixed seed roster
//! is written and used.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{info, warn};

use crate::backend::domain::models::volunteer::Volunteer;
use crate::backend::storage::traits::KeyValueStore;

const VOLUNTEERS_KEY: &str = "volunteers";
const SESSION_KEY: &str = "currentVolunteer";

/// (username, password, full name) triples written on first run
const SEED_VOLUNTEERS: [(&str, &str, &str); 2] = [
    ("ahmed", "123456", "Ahmed Mohamed"),
    ("fatima", "123456", "Fatima Ali"),
];

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct StoredSession {
    volunteer_id: String,
}

#[derive(Clone)]
pub struct VolunteerRepository {
    store: Arc<dyn KeyValueStore>,
    roster: Arc<Mutex<Vec<Volunteer>>>,
    session: Arc<Mutex<Option<String>>>,
}

impl VolunteerRepository {
    /// Create a repository over the given store, loading the roster and the
    /// persisted session once. Seeds the roster when none exists yet.
    pub async fn new(store: Arc<dyn KeyValueStore>) -> Result<Self> {
        let roster: Vec<Volunteer> = match store.get(VOLUNTEERS_KEY).await? {
            Some(raw) => serde_json::from_str(&raw)
                .context("Failed to parse stored volunteer roster")?,
            None => Self::seed_roster(store.as_ref()).await?,
        };

        let session = match store.get(SESSION_KEY).await? {
            Some(raw) => {
                let stored: StoredSession = serde_json::from_str(&raw)
                    .context("Failed to parse stored session")?;
                Some(stored.volunteer_id)
            }
            None => None,
        };

        info!(
            "Loaded {} volunteers from storage (session: {})",
            roster.len(),
            if session.is_some() { "present" } else { "none" }
        );

        Ok(Self {
            store,
            roster: Arc::new(Mutex::new(roster)),
            session: Arc::new(Mutex::new(session)),
        })
    }

    async fn seed_roster(store: &dyn KeyValueStore) -> Result<Vec<Volunteer>> {
        let roster: Vec<Volunteer> = SEED_VOLUNTEERS
            .iter()
            .map(|(username, password, full_name)| Volunteer::new(username, password, full_name))
            .collect();

        let snapshot = serde_json::to_string(&roster)
            .context("Failed to serialize seed roster")?;
        store.set(VOLUNTEERS_KEY, &snapshot).await?;

        info!("No roster found, seeded {} default volunteers", roster.len());
        Ok(roster)
    }

    /// Find a volunteer by exact, case-sensitive username
    pub async fn find_by_username(&self, username: &str) -> Result<Option<Volunteer>> {
        let roster = self.roster.lock().await;
        Ok(roster.iter().find(|v| v.username == username).cloned())
    }

    /// Find a volunteer by id
    pub async fn find_by_id(&self, volunteer_id: &str) -> Result<Option<Volunteer>> {
        let roster = self.roster.lock().await;
        Ok(roster.iter().find(|v| v.id == volunteer_id).cloned())
    }

    /// Append a volunteer to the roster and persist it
    ///
    /// Returns false without writing anything when the username is already
    /// taken (case-sensitive exact match).
    pub async fn add_volunteer(&self, volunteer: &Volunteer) -> Result<bool> {
        let mut roster = self.roster.lock().await;

        if roster.iter().any(|v| v.username == volunteer.username) {
            return Ok(false);
        }

        let mut next = roster.clone();
        next.push(volunteer.clone());

        let snapshot = serde_json::to_string(&next)
            .context("Failed to serialize volunteer roster")?;
        self.store.set(VOLUNTEERS_KEY, &snapshot).await?;
        *roster = next;

        Ok(true)
    }

    /// Number of volunteers in the roster
    pub async fn count_volunteers(&self) -> Result<usize> {
        let roster = self.roster.lock().await;
        Ok(roster.len())
    }

    /// Set and persist the active session
    pub async fn set_session(&self, volunteer_id: &str) -> Result<()> {
        let mut session = self.session.lock().await;

        let stored = StoredSession {
            volunteer_id: volunteer_id.to_string(),
        };
        let snapshot = serde_json::to_string(&stored)
            .context("Failed to serialize session")?;
        self.store.set(SESSION_KEY, &snapshot).await?;
        *session = Some(volunteer_id.to_string());

        Ok(())
    }

    /// Clear and persist removal of the active session; idempotent
    pub async fn clear_session(&self) -> Result<()> {
        let mut session = self.session.lock().await;

        self.store.delete(SESSION_KEY).await?;
        *session = None;

        Ok(())
    }

    /// Resolve the active session against the roster
    ///
    /// A session id that no longer matches any volunteer degrades to no
    /// session, with a warning, rather than an error.
    pub async fn current_volunteer(&self) -> Result<Option<Volunteer>> {
        let session_id = {
            let session = self.session.lock().await;
            session.clone()
        };

        let volunteer_id = match session_id {
            Some(id) => id,
            None => return Ok(None),
        };

        let roster = self.roster.lock().await;
        match roster.iter().find(|v| v.id == volunteer_id) {
            Some(volunteer) => Ok(Some(volunteer.clone())),
            None => {
                warn!("Session references unknown volunteer: {}", volunteer_id);
                Ok(None)
            }
        }
    }
}
