use async_trait::async_trait;
use std::sync::Arc;
use tracing::info;

use crate::contact::application::ports::incoming::use_cases::{
    SubmitContactError, SubmitContactUseCase,
};
use crate::schema::domain::{Contact, NewContact};
use crate::storage::application::ports::outgoing::Storage;

#[derive(Clone)]
pub struct SubmitContactService {
    storage: Arc<dyn Storage>,
}

impl SubmitContactService {
    pub fn new(storage: Arc<dyn Storage>) -> Self {
        Self { storage }
    }
}

#[async_trait]
impl SubmitContactUseCase for SubmitContactService {
    async fn execute(&self, contact: NewContact) -> Result<Contact, SubmitContactError> {
        let contact = self
            .storage
            .create_contact(contact)
            .await
            .map_err(|e| SubmitContactError::StorageError(e.to_string()))?;

        info!(contact_id = contact.id, "Contact message stored");
        Ok(contact)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    use crate::storage::application::ports::outgoing::StorageError;
    use crate::tests::support::mocks::MockStore;

    fn new_contact() -> NewContact {
        NewContact {
            name: "Sara".to_string(),
            email: "sara@example.com".to_string(),
            phone: None,
            subject: None,
            message: "Hello".to_string(),
        }
    }

    #[tokio::test]
    async fn submit_contact_stores_message() {
        let mut store = MockStore::new();
        store
            .expect_create_contact()
            .withf(|c: &NewContact| c.name == "Sara" && c.message == "Hello")
            .times(1)
            .returning(|c| {
                Ok(Contact {
                    id: 1,
                    name: c.name,
                    email: c.email,
                    phone: c.phone,
                    subject: c.subject,
                    message: c.message,
                    created_at: Utc::now(),
                })
            });

        let service = SubmitContactService::new(Arc::new(store));

        let contact = service.execute(new_contact()).await.unwrap();

        assert_eq!(contact.id, 1);
        assert_eq!(contact.email, "sara@example.com");
    }

    #[tokio::test]
    async fn submit_contact_storage_error_is_mapped() {
        let mut store = MockStore::new();
        store
            .expect_create_contact()
            .returning(|_| Err(StorageError::DatabaseError("disk full".to_string())));

        let service = SubmitContactService::new(Arc::new(store));

        let result = service.execute(new_contact()).await;

        assert!(matches!(result, Err(SubmitContactError::StorageError(_))));
    }
}
