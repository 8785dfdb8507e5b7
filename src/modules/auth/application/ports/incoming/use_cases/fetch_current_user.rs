use async_trait::async_trait;

use crate::schema::domain::PublicUser;

#[derive(Debug, Clone, thiserror::Error)]
pub enum FetchCurrentUserError {
    #[error("User not found")]
    UserNotFound,

    #[error("Storage error: {0}")]
    StorageError(String),
}

#[async_trait]
pub trait FetchCurrentUserUseCase: Send + Sync {
    async fn execute(&self, user_id: i32) -> Result<PublicUser, FetchCurrentUserError>;
}
