use async_trait::async_trait;

use crate::schema::domain::{Contact, NewContact};

#[derive(Debug, Clone, thiserror::Error)]
pub enum SubmitContactError {
    #[error("Storage error: {0}")]
    StorageError(String),
}

#[async_trait]
pub trait SubmitContactUseCase: Send + Sync {
    /// Stores a message sent through the contact form.
    async fn execute(&self, contact: NewContact) -> Result<Contact, SubmitContactError>;
}
