use async_trait::async_trait;

use super::AuthSession;
use crate::schema::validation::RegistrationInput;

#[derive(Debug, Clone, thiserror::Error)]
pub enum RegisterUserError {
    #[error("Username already taken")]
    UsernameTaken,

    #[error("Email already registered")]
    EmailTaken,

    #[error("Password hashing error: {0}")]
    HashingError(String),

    #[error("Storage error: {0}")]
    StorageError(String),

    #[error("Session error: {0}")]
    SessionError(String),
}

#[async_trait]
pub trait RegisterUserUseCase: Send + Sync {
    async fn execute(&self, input: RegistrationInput) -> Result<AuthSession, RegisterUserError>;
}
