use async_trait::async_trait;

use crate::schema::domain::Donation;

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetUserDonationsError {
    #[error("Storage error: {0}")]
    StorageError(String),
}

#[async_trait]
pub trait GetUserDonationsUseCase: Send + Sync {
    async fn execute(&self, owner: i32) -> Result<Vec<Donation>, GetUserDonationsError>;
}
