use async_trait::async_trait;

use crate::schema::domain::{
    Contact, Donation, DonationStatus, NewContact, NewDonation, NewNewsletter, NewUser, Newsletter,
    User,
};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StorageError {
    /// Uniqueness or foreign-key rejection.
    #[error("Constraint violation: {0}")]
    ConstraintViolation(String),

    #[error("Database error: {0}")]
    DatabaseError(String),
}

/// Persistence contract shared by every backend.
///
/// Ids are positive and increase per record type. Reads never treat absence
/// as an error; they return `None` or an empty list.
#[async_trait]
pub trait Storage: Send + Sync {
    async fn get_user(&self, id: i32) -> Result<Option<User>, StorageError>;

    async fn get_user_by_username(&self, username: &str) -> Result<Option<User>, StorageError>;

    async fn get_user_by_email(&self, email: &str) -> Result<Option<User>, StorageError>;

    async fn create_user(&self, user: NewUser) -> Result<User, StorageError>;

    async fn get_donation(&self, id: i32) -> Result<Option<Donation>, StorageError>;

    /// Donations owned by `user_id`, oldest first.
    async fn get_donations_by_user_id(&self, user_id: i32) -> Result<Vec<Donation>, StorageError>;

    async fn create_donation(&self, donation: NewDonation) -> Result<Donation, StorageError>;

    /// `Ok(None)` when no donation has this id.
    async fn update_donation_status(
        &self,
        id: i32,
        status: DonationStatus,
    ) -> Result<Option<Donation>, StorageError>;

    async fn create_contact(&self, contact: NewContact) -> Result<Contact, StorageError>;

    async fn create_newsletter(
        &self,
        newsletter: NewNewsletter,
    ) -> Result<Newsletter, StorageError>;

    async fn ping(&self) -> Result<(), StorageError> {
        Ok(())
    }
}
