use async_trait::async_trait;
use chrono::Utc;
use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::schema::domain::{
    Contact, Donation, DonationStatus, NewContact, NewDonation, NewNewsletter, NewUser, Newsletter,
    User,
};
use crate::storage::application::ports::outgoing::{Storage, StorageError};

#[derive(Debug, Default)]
struct Tables {
    users: BTreeMap<i32, User>,
    donations: BTreeMap<i32, Donation>,
    contacts: BTreeMap<i32, Contact>,
    newsletters: BTreeMap<i32, Newsletter>,
    user_seq: i32,
    donation_seq: i32,
    contact_seq: i32,
    newsletter_seq: i32,
}

fn next_id(seq: &mut i32) -> i32 {
    *seq += 1;
    *seq
}

/// Process-local storage. Everything is lost on restart.
///
/// All tables and id counters sit behind one lock, so id assignment and the
/// uniqueness/foreign-key checks happen atomically with the insert. Like a
/// database sequence, a rejected insert still consumes its id.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    tables: Arc<RwLock<Tables>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl Storage for MemoryStorage {
    async fn get_user(&self, id: i32) -> Result<Option<User>, StorageError> {
        Ok(self.tables.read().await.users.get(&id).cloned())
    }

    async fn get_user_by_username(&self, username: &str) -> Result<Option<User>, StorageError> {
        let tables = self.tables.read().await;
        Ok(tables
            .users
            .values()
            .find(|u| u.username == username)
            .cloned())
    }

    async fn get_user_by_email(&self, email: &str) -> Result<Option<User>, StorageError> {
        let tables = self.tables.read().await;
        Ok(tables.users.values().find(|u| u.email == email).cloned())
    }

    async fn create_user(&self, user: NewUser) -> Result<User, StorageError> {
        let mut tables = self.tables.write().await;
        let id = next_id(&mut tables.user_seq);

        if tables.users.values().any(|u| u.username == user.username) {
            return Err(StorageError::ConstraintViolation(
                "users.username must be unique".to_string(),
            ));
        }
        if tables.users.values().any(|u| u.email == user.email) {
            return Err(StorageError::ConstraintViolation(
                "users.email must be unique".to_string(),
            ));
        }

        let created = User {
            id,
            username: user.username,
            password: user.password,
            full_name: user.full_name,
            email: user.email,
            phone: user.phone,
            created_at: Utc::now(),
        };
        tables.users.insert(id, created.clone());
        Ok(created)
    }

    async fn get_donation(&self, id: i32) -> Result<Option<Donation>, StorageError> {
        Ok(self.tables.read().await.donations.get(&id).cloned())
    }

    async fn get_donations_by_user_id(&self, user_id: i32) -> Result<Vec<Donation>, StorageError> {
        let tables = self.tables.read().await;
        Ok(tables
            .donations
            .values()
            .filter(|d| d.user_id == user_id)
            .cloned()
            .collect())
    }

    async fn create_donation(&self, donation: NewDonation) -> Result<Donation, StorageError> {
        let mut tables = self.tables.write().await;
        let id = next_id(&mut tables.donation_seq);

        if !tables.users.contains_key(&donation.user_id) {
            return Err(StorageError::ConstraintViolation(format!(
                "donations.user_id {} does not reference a user",
                donation.user_id
            )));
        }

        let created = Donation {
            id,
            user_id: donation.user_id,
            amount: donation.amount,
            date: Utc::now(),
            message: donation.message,
            status: donation.status.unwrap_or_default(),
        };
        tables.donations.insert(id, created.clone());
        Ok(created)
    }

    async fn update_donation_status(
        &self,
        id: i32,
        status: DonationStatus,
    ) -> Result<Option<Donation>, StorageError> {
        let mut tables = self.tables.write().await;
        Ok(tables.donations.get_mut(&id).map(|donation| {
            donation.status = status;
            donation.clone()
        }))
    }

    async fn create_contact(&self, contact: NewContact) -> Result<Contact, StorageError> {
        let mut tables = self.tables.write().await;
        let id = next_id(&mut tables.contact_seq);

        let created = Contact {
            id,
            name: contact.name,
            email: contact.email,
            phone: contact.phone,
            subject: contact.subject,
            message: contact.message,
            created_at: Utc::now(),
        };
        tables.contacts.insert(id, created.clone());
        Ok(created)
    }

    async fn create_newsletter(
        &self,
        newsletter: NewNewsletter,
    ) -> Result<Newsletter, StorageError> {
        let mut tables = self.tables.write().await;
        let id = next_id(&mut tables.newsletter_seq);

        if tables
            .newsletters
            .values()
            .any(|n| n.email == newsletter.email)
        {
            return Err(StorageError::ConstraintViolation(
                "newsletters.email must be unique".to_string(),
            ));
        }

        let created = Newsletter {
            id,
            email: newsletter.email,
            active: true,
            created_at: Utc::now(),
        };
        tables.newsletters.insert(id, created.clone());
        Ok(created)
    }
}
