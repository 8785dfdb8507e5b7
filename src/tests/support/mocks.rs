use async_trait::async_trait;
use mockall::mock;

use crate::auth::application::ports::outgoing::{
    HashError, PasswordHasher, SessionStore, SessionStoreError, SessionToken,
};
use crate::schema::domain::{
    Contact, Donation, DonationStatus, NewContact, NewDonation, NewNewsletter, NewUser, Newsletter,
    User,
};
use crate::storage::application::ports::outgoing::{Storage, StorageError};

mock! {
    pub Store {}
    #[async_trait]
    impl Storage for Store {
        async fn get_user(&self, id: i32) -> Result<Option<User>, StorageError>;
        async fn get_user_by_username(&self, username: &str) -> Result<Option<User>, StorageError>;
        async fn get_user_by_email(&self, email: &str) -> Result<Option<User>, StorageError>;
        async fn create_user(&self, user: NewUser) -> Result<User, StorageError>;
        async fn get_donation(&self, id: i32) -> Result<Option<Donation>, StorageError>;
        async fn get_donations_by_user_id(&self, user_id: i32) -> Result<Vec<Donation>, StorageError>;
        async fn create_donation(&self, donation: NewDonation) -> Result<Donation, StorageError>;
        async fn update_donation_status(
            &self,
            id: i32,
            status: DonationStatus,
        ) -> Result<Option<Donation>, StorageError>;
        async fn create_contact(&self, contact: NewContact) -> Result<Contact, StorageError>;
        async fn create_newsletter(&self, newsletter: NewNewsletter) -> Result<Newsletter, StorageError>;
        async fn ping(&self) -> Result<(), StorageError>;
    }
}

mock! {
    pub Sessions {}
    #[async_trait]
    impl SessionStore for Sessions {
        async fn create(&self, user_id: i32) -> Result<SessionToken, SessionStoreError>;
        async fn resolve(&self, token: &SessionToken) -> Result<Option<i32>, SessionStoreError>;
        async fn destroy(&self, token: &SessionToken) -> Result<(), SessionStoreError>;
        async fn ping(&self) -> Result<(), SessionStoreError>;
    }
}

mock! {
    pub Hasher {}
    #[async_trait]
    impl PasswordHasher for Hasher {
        async fn hash_password(&self, password: &str) -> Result<String, HashError>;
        async fn verify_password(&self, password: &str, hash: &str) -> Result<bool, HashError>;
    }
}
