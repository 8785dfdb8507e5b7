use async_trait::async_trait;

use super::AuthSession;
use crate::schema::validation::LoginInput;

#[derive(Debug, Clone, thiserror::Error)]
pub enum LoginUserError {
    /// Unknown username or wrong password; callers cannot tell which.
    #[error("Invalid username or password")]
    InvalidCredentials,

    #[error("Password verification error: {0}")]
    HashingError(String),

    #[error("Storage error: {0}")]
    StorageError(String),

    #[error("Session error: {0}")]
    SessionError(String),
}

#[async_trait]
pub trait LoginUserUseCase: Send + Sync {
    async fn execute(&self, input: LoginInput) -> Result<AuthSession, LoginUserError>;
}
