use async_trait::async_trait;

use crate::schema::domain::Donation;
use crate::schema::validation::DonationInput;

//
// ──────────────────────────────────────────────────────────
// Use Case Error
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum CreateDonationError {
    #[error("Storage error: {0}")]
    StorageError(String),
}

//
// ──────────────────────────────────────────────────────────
// Incoming Port (Use Case)
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait CreateDonationUseCase: Send + Sync {
    /// Records a donation owned by `owner`, whatever the payload claimed.
    async fn execute(&self, owner: i32, input: DonationInput)
        -> Result<Donation, CreateDonationError>;
}
