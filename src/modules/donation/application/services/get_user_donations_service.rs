use async_trait::async_trait;
use std::sync::Arc;

use crate::donation::application::ports::incoming::use_cases::{
    GetUserDonationsError, GetUserDonationsUseCase,
};
use crate::schema::domain::Donation;
use crate::storage::application::ports::outgoing::Storage;

#[derive(Clone)]
pub struct GetUserDonationsService {
    storage: Arc<dyn Storage>,
}

impl GetUserDonationsService {
    pub fn new(storage: Arc<dyn Storage>) -> Self {
        Self { storage }
    }
}

#[async_trait]
impl GetUserDonationsUseCase for GetUserDonationsService {
    async fn execute(&self, owner: i32) -> Result<Vec<Donation>, GetUserDonationsError> {
        self.storage
            .get_donations_by_user_id(owner)
            .await
            .map_err(|e| GetUserDonationsError::StorageError(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::application::ports::outgoing::StorageError;
    use crate::tests::support::fixtures::sample_donation;
    use crate::tests::support::mocks::MockStore;

    #[tokio::test]
    async fn get_user_donations_returns_owner_rows() {
        let mut store = MockStore::new();
        store
            .expect_get_donations_by_user_id()
            .withf(|owner: &i32| *owner == 7)
            .times(1)
            .returning(|owner| {
                Ok(vec![
                    sample_donation(1, owner, 10),
                    sample_donation(4, owner, 20),
                ])
            });

        let donations = GetUserDonationsService::new(Arc::new(store))
            .execute(7)
            .await
            .unwrap();

        assert_eq!(donations.len(), 2);
        assert!(donations.iter().all(|d| d.user_id == 7));
    }

    #[tokio::test]
    async fn get_user_donations_storage_error() {
        let mut store = MockStore::new();
        store
            .expect_get_donations_by_user_id()
            .returning(|_| Err(StorageError::DatabaseError("down".to_string())));

        let result = GetUserDonationsService::new(Arc::new(store)).execute(7).await;

        assert!(matches!(result, Err(GetUserDonationsError::StorageError(_))));
    }
}
