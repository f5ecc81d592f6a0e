use std::time::Duration;
use chrono::{DateTime, Utc};
use thiserror::Error;
use uuid::Uuid;
use crate::models::{Criterion, ScoringPreferences, SessionResponse};

/// Errors that can occur with preference sessions
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SessionError {
    #[error("Session not found or expired: {0}")]
    NotFound(Uuid),
}

/// Preferences held for one client between requests
#[derive(Debug, Clone, PartialEq)]
pub struct PreferenceSession {
    pub id: Uuid,
    pub preferences: ScoringPreferences,
    pub updated_at: DateTime<Utc>,
}

impl From<PreferenceSession> for SessionResponse {
    fn from(session: PreferenceSession) -> Self {
        SessionResponse {
            session_id: session.id,
            preferences: session.preferences,
            updated_at: session.updated_at,
        }
    }
}

/// In-memory preference sessions
///
/// Bounded and expiring; nothing here is persisted. Losing a session only means the
/// client starts again from default weights.
#[derive(Clone)]
pub struct PreferenceSessions {
    cache: moka::future::Cache<Uuid, PreferenceSession>,
}

impl PreferenceSessions {
    pub fn new(capacity: u64, ttl_secs: u64) -> Self {
        let cache = moka::future::CacheBuilder::new(capacity)
            .time_to_idle(Duration::from_secs(ttl_secs))
            .build();
        Self { cache }
    }

    /// Start a session with all-default weights
    pub async fn create(&self) -> PreferenceSession {
        let session = PreferenceSession {
            id: Uuid::new_v4(),
            preferences: ScoringPreferences::default(),
            updated_at: Utc::now(),
        };
        self.cache.insert(session.id, session.clone()).await;
        tracing::debug!("Created preference session {}", session.id);
        session
    }

    pub async fn get(&self, id: Uuid) -> Result<PreferenceSession, SessionError> {
        self.cache.get(&id).await.ok_or(SessionError::NotFound(id))
    }

    /// Bulk overwrite, as after a quiz or text parse is applied
    pub async fn replace(
        &self,
        id: Uuid,
        preferences: ScoringPreferences,
    ) -> Result<PreferenceSession, SessionError> {
        let mut session = self.get(id).await?;
        session.preferences = preferences.clamped();
        session.updated_at = Utc::now();
        self.cache.insert(id, session.clone()).await;
        Ok(session)
    }

    /// Slider edit of a single criterion, clamped to [0, 100]
    pub async fn update_weight(
        &self,
        id: Uuid,
        criterion: Criterion,
        value: i64,
    ) -> Result<PreferenceSession, SessionError> {
        let mut session = self.get(id).await?;
        session.preferences.set(criterion, value);
        session.updated_at = Utc::now();
        self.cache.insert(id, session.clone()).await;
        tracing::trace!("Session {} set {} to {}", id, criterion, session.preferences.get(criterion));
        Ok(session)
    }
}
