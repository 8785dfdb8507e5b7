use async_trait::async_trait;
use std::sync::Arc;
use tracing::{info, warn};

use crate::newsletter::application::ports::incoming::use_cases::{
    SubscribeNewsletterError, SubscribeNewsletterUseCase,
};
use crate::schema::domain::{NewNewsletter, Newsletter};
use crate::storage::application::ports::outgoing::{Storage, StorageError};

#[derive(Clone)]
pub struct SubscribeNewsletterService {
    storage: Arc<dyn Storage>,
}

impl SubscribeNewsletterService {
    pub fn new(storage: Arc<dyn Storage>) -> Self {
        Self { storage }
    }
}

#[async_trait]
impl SubscribeNewsletterUseCase for SubscribeNewsletterService {
    async fn execute(
        &self,
        signup: NewNewsletter,
    ) -> Result<Newsletter, SubscribeNewsletterError> {
        match self.storage.create_newsletter(signup).await {
            Ok(newsletter) => {
                info!(newsletter_id = newsletter.id, "Newsletter signup stored");
                Ok(newsletter)
            }
            Err(e @ StorageError::ConstraintViolation(_)) => {
                warn!(error = %e, "Newsletter address already subscribed");
                Err(SubscribeNewsletterError::StorageError(e.to_string()))
            }
            Err(e) => Err(SubscribeNewsletterError::StorageError(e.to_string())),
        }
    }
}
