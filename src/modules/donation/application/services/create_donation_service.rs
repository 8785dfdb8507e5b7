use async_trait::async_trait;
use std::sync::Arc;
use tracing::info;

use crate::donation::application::ports::incoming::use_cases::{
    CreateDonationError, CreateDonationUseCase,
};
use crate::schema::domain::Donation;
use crate::schema::validation::DonationInput;
use crate::storage::application::ports::outgoing::Storage;

#[derive(Clone)]
pub struct CreateDonationService {
    storage: Arc<dyn Storage>,
}

impl CreateDonationService {
    pub fn new(storage: Arc<dyn Storage>) -> Self {
        Self { storage }
    }
}

#[async_trait]
impl CreateDonationUseCase for CreateDonationService {
    async fn execute(
        &self,
        owner: i32,
        input: DonationInput,
    ) -> Result<Donation, CreateDonationError> {
        let donation = self
            .storage
            .create_donation(input.into_new_donation(owner))
            .await
            .map_err(|e| CreateDonationError::StorageError(e.to_string()))?;

        info!(
            donation_id = donation.id,
            user_id = owner,
            amount = %donation.amount,
            "Donation recorded"
        );
        Ok(donation)
    }
}
