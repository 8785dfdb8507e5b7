use async_trait::async_trait;

use crate::schema::domain::{NewNewsletter, Newsletter};

#[derive(Debug, Clone, thiserror::Error)]
pub enum SubscribeNewsletterError {
    /// Includes an address that is already subscribed.
    #[error("Storage error: {0}")]
    StorageError(String),
}

#[async_trait]
pub trait SubscribeNewsletterUseCase: Send + Sync {
    async fn execute(&self, signup: NewNewsletter)
        -> Result<Newsletter, SubscribeNewsletterError>;
}
