use async_trait::async_trait;
use std::fmt;
use uuid::Uuid;

/// Opaque session id handed to the client in the session cookie.
#[derive(Clone, PartialEq, Eq)]
pub struct SessionToken(String);

impl SessionToken {
    pub fn new_random() -> Self {
        Self(Uuid::new_v4().simple().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for SessionToken {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

// Never print the raw id.
impl fmt::Debug for SessionToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SessionToken(..)")
    }
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum SessionStoreError {
    #[error("Session backend error: {0}")]
    Backend(String),
}

/// Server-side session state. Implementations key sessions by a hash of the
/// token, never by the token itself, and expire them after a fixed TTL.
#[async_trait]
pub trait SessionStore: Send + Sync {
    async fn create(&self, user_id: i32) -> Result<SessionToken, SessionStoreError>;

    /// `Ok(None)` for unknown or expired tokens.
    async fn resolve(&self, token: &SessionToken) -> Result<Option<i32>, SessionStoreError>;

    /// Succeeds when the session is already gone.
    async fn destroy(&self, token: &SessionToken) -> Result<(), SessionStoreError>;

    async fn ping(&self) -> Result<(), SessionStoreError> {
        Ok(())
    }
}
