use async_trait::async_trait;
use chrono::{DateTime, TimeDelta, Utc};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::auth::application::ports::outgoing::{SessionStore, SessionStoreError, SessionToken};
use crate::auth::application::services::token_hasher::hash_token;

#[derive(Debug, Clone)]
struct SessionEntry {
    user_id: i32,
    expires_at: DateTime<Utc>,
}

/// Sessions held in process memory, keyed by token hash. Expired entries are
/// dropped when they are next looked up, and swept on every `create` so
/// abandoned sessions do not pile up.
#[derive(Debug, Clone)]
pub struct MemorySessionStore {
    sessions: Arc<RwLock<HashMap<String, SessionEntry>>>,
    ttl_secs: i64,
}

impl MemorySessionStore {
    pub fn new(ttl_secs: i64) -> Self {
        Self {
            sessions: Arc::new(RwLock::new(HashMap::new())),
            ttl_secs,
        }
    }

    fn expiry_from(&self, now: DateTime<Utc>) -> Result<DateTime<Utc>, SessionStoreError> {
        TimeDelta::try_seconds(self.ttl_secs)
            .and_then(|ttl| now.checked_add_signed(ttl))
            .ok_or_else(|| {
                SessionStoreError::Backend(format!("session ttl out of range: {}", self.ttl_secs))
            })
    }
}

#[async_trait]
impl SessionStore for MemorySessionStore {
    async fn create(&self, user_id: i32) -> Result<SessionToken, SessionStoreError> {
        let now = Utc::now();
        let entry = SessionEntry {
            user_id,
            expires_at: self.expiry_from(now)?,
        };
        let token = SessionToken::new_random();

        let mut sessions = self.sessions.write().await;
        sessions.retain(|_, existing| existing.expires_at > now);
        sessions.insert(hash_token(token.as_str()), entry);

        Ok(token)
    }

    async fn resolve(&self, token: &SessionToken) -> Result<Option<i32>, SessionStoreError> {
        let key = hash_token(token.as_str());

        let entry = self.sessions.read().await.get(&key).cloned();
        match entry {
            Some(entry) if entry.expires_at > Utc::now() => Ok(Some(entry.user_id)),
            Some(_) => {
                self.sessions.write().await.remove(&key);
                Ok(None)
            }
            None => Ok(None),
        }
    }

    async fn destroy(&self, token: &SessionToken) -> Result<(), SessionStoreError> {
        self.sessions
            .write()
            .await
            .remove(&hash_token(token.as_str()));
        Ok(())
    }
}
