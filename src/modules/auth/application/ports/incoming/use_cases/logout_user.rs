use async_trait::async_trait;

use crate::auth::application::ports::outgoing::SessionToken;

#[derive(Debug, Clone, thiserror::Error)]
pub enum LogoutUserError {
    #[error("Session error: {0}")]
    SessionError(String),
}

#[async_trait]
pub trait LogoutUserUseCase: Send + Sync {
    /// Idempotent: no token, or an already-destroyed one, is still a success.
    async fn execute(&self, token: Option<SessionToken>) -> Result<(), LogoutUserError>;
}
