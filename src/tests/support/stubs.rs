use async_trait::async_trait;

use crate::auth::application::ports::outgoing::{SessionStore, SessionStoreError, SessionToken};
use crate::schema::domain::{
    Contact, Donation, DonationStatus, NewContact, NewDonation, NewNewsletter, NewUser, Newsletter,
    User,
};
use crate::storage::application::ports::outgoing::{Storage, StorageError};

// ============================================================
// Storage
// ============================================================

/// Storage whose every call fails as if the database were gone.
#[derive(Clone, Copy)]
pub struct FailingStorage;

fn unavailable() -> StorageError {
    StorageError::DatabaseError("database unavailable".to_string())
}

#[async_trait]
impl Storage for FailingStorage {
    async fn get_user(&self, _id: i32) -> Result<Option<User>, StorageError> {
        Err(unavailable())
    }

    async fn get_user_by_username(&self, _username: &str) -> Result<Option<User>, StorageError> {
        Err(unavailable())
    }

    async fn get_user_by_email(&self, _email: &str) -> Result<Option<User>, StorageError> {
        Err(unavailable())
    }

    async fn create_user(&self, _user: NewUser) -> Result<User, StorageError> {
        Err(unavailable())
    }

    async fn get_donation(&self, _id: i32) -> Result<Option<Donation>, StorageError> {
        Err(unavailable())
    }

    async fn get_donations_by_user_id(&self, _user_id: i32) -> Result<Vec<Donation>, StorageError> {
        Err(unavailable())
    }

    async fn create_donation(&self, _donation: NewDonation) -> Result<Donation, StorageError> {
        Err(unavailable())
    }

    async fn update_donation_status(
        &self,
        _id: i32,
        _status: DonationStatus,
    ) -> Result<Option<Donation>, StorageError> {
        Err(unavailable())
    }

    async fn create_contact(&self, _contact: NewContact) -> Result<Contact, StorageError> {
        Err(unavailable())
    }

    async fn create_newsletter(
        &self,
        _newsletter: NewNewsletter,
    ) -> Result<Newsletter, StorageError> {
        Err(unavailable())
    }

    async fn ping(&self) -> Result<(), StorageError> {
        Err(unavailable())
    }
}

// ============================================================
// Sessions
// ============================================================

#[derive(Clone, Copy)]
pub struct FailingSessionStore;

fn session_backend_down() -> SessionStoreError {
    SessionStoreError::Backend("session backend unavailable".to_string())
}

#[async_trait]
impl SessionStore for FailingSessionStore {
    async fn create(&self, _user_id: i32) -> Result<SessionToken, SessionStoreError> {
        Err(session_backend_down())
    }

    async fn resolve(&self, _token: &SessionToken) -> Result<Option<i32>, SessionStoreError> {
        Err(session_backend_down())
    }

    async fn destroy(&self, _token: &SessionToken) -> Result<(), SessionStoreError> {
        Err(session_backend_down())
    }

    async fn ping(&self) -> Result<(), SessionStoreError> {
        Err(session_backend_down())
    }
}
