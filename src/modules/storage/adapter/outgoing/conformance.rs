//! Behavior every `Storage` backend must share. The same checks run against
//! the in-memory store always and against PostgreSQL when
//! `TEST_DATABASE_URL` points at a disposable database.

use migration::{Migrator, MigratorTrait};
use rust_decimal::Decimal;
use sea_orm::Database;
use std::future::Future;
use std::sync::Arc;

use super::{MemoryStorage, StoragePostgres};
use crate::schema::domain::{DonationStatus, NewContact, NewDonation, NewNewsletter, NewUser};
use crate::storage::application::ports::outgoing::{Storage, StorageError};

fn new_user(username: &str, email: &str) -> NewUser {
    NewUser {
        username: username.to_string(),
        password: "$argon2id$stub".to_string(),
        full_name: "Test User".to_string(),
        email: email.to_string(),
        phone: None,
    }
}

fn new_donation(user_id: i32, amount: i64) -> NewDonation {
    NewDonation {
        user_id,
        amount: Decimal::new(amount, 0),
        message: None,
        status: None,
    }
}

// ============================================================
// Checks
// ============================================================

async fn ids_start_at_one_and_increase(storage: &dyn Storage) {
    let user = storage.create_user(new_user("amir", "a@x.com")).await.unwrap();
    assert_eq!(user.id, 1);

    let first = storage.create_donation(new_donation(user.id, 10)).await.unwrap();
    let second = storage.create_donation(new_donation(user.id, 20)).await.unwrap();
    assert_eq!(first.id, 1);
    assert!(second.id > first.id);
}

async fn donation_defaults_applied(storage: &dyn Storage) {
    let user = storage.create_user(new_user("amir", "a@x.com")).await.unwrap();

    let plain = storage.create_donation(new_donation(user.id, 5000)).await.unwrap();
    assert_eq!(plain.status, DonationStatus::Pending);
    assert_eq!(plain.message, None);
    assert_eq!(plain.amount, Decimal::new(5000, 0));
    assert_eq!(plain.user_id, user.id);

    let explicit = storage
        .create_donation(NewDonation {
            user_id: user.id,
            amount: Decimal::new(1250, 2),
            message: Some("For the library".to_string()),
            status: Some(DonationStatus::Completed),
        })
        .await
        .unwrap();
    assert_eq!(explicit.status, DonationStatus::Completed);
    assert_eq!(explicit.message.as_deref(), Some("For the library"));
    assert_eq!(explicit.amount, Decimal::new(1250, 2));

    let fetched = storage.get_donation(explicit.id).await.unwrap();
    assert_eq!(fetched.map(|d| d.status), Some(DonationStatus::Completed));
}

async fn donations_scoped_to_owner_in_order(storage: &dyn Storage) {
    let amir = storage.create_user(new_user("amir", "a@x.com")).await.unwrap();
    let sara = storage.create_user(new_user("sara", "s@x.com")).await.unwrap();

    let a1 = storage.create_donation(new_donation(amir.id, 1)).await.unwrap();
    storage.create_donation(new_donation(sara.id, 2)).await.unwrap();
    let a2 = storage.create_donation(new_donation(amir.id, 3)).await.unwrap();

    let ids: Vec<i32> = storage
        .get_donations_by_user_id(amir.id)
        .await
        .unwrap()
        .iter()
        .map(|d| d.id)
        .collect();
    assert_eq!(ids, vec![a1.id, a2.id]);

    let nobody = storage.get_donations_by_user_id(999).await.unwrap();
    assert!(nobody.is_empty());
}

async fn donation_requires_existing_user(storage: &dyn Storage) {
    let rejected = storage.create_donation(new_donation(42, 10)).await;
    assert!(matches!(
        rejected,
        Err(StorageError::ConstraintViolation(_))
    ));

    let user = storage.create_user(new_user("amir", "a@x.com")).await.unwrap();
    let accepted = storage.create_donation(new_donation(user.id, 10)).await.unwrap();
    // The rejected insert used id 1.
    assert_eq!(accepted.id, 2);
}

async fn users_unique_by_username_and_email(storage: &dyn Storage) {
    let amir = storage.create_user(new_user("amir", "a@x.com")).await.unwrap();

    let same_name = storage.create_user(new_user("amir", "other@x.com")).await;
    assert!(matches!(
        same_name,
        Err(StorageError::ConstraintViolation(_))
    ));

    let same_email = storage.create_user(new_user("other", "a@x.com")).await;
    assert!(matches!(
        same_email,
        Err(StorageError::ConstraintViolation(_))
    ));

    let by_name = storage.get_user_by_username("amir").await.unwrap();
    let by_email = storage.get_user_by_email("a@x.com").await.unwrap();
    assert_eq!(by_name.map(|u| u.id), Some(amir.id));
    assert_eq!(by_email.map(|u| u.id), Some(amir.id));
    assert_eq!(
        storage.get_user(amir.id).await.unwrap().map(|u| u.username),
        Some("amir".to_string())
    );
}

async fn missing_records_are_none(storage: &dyn Storage) {
    assert!(storage.get_user(1).await.unwrap().is_none());
    assert!(storage.get_user_by_username("ghost").await.unwrap().is_none());
    assert!(storage.get_user_by_email("ghost@x.com").await.unwrap().is_none());
    assert!(storage.get_donation(1).await.unwrap().is_none());
}

async fn update_status_on_unknown_id_is_none(storage: &dyn Storage) {
    let result = storage
        .update_donation_status(404, DonationStatus::Completed)
        .await
        .unwrap();
    assert!(result.is_none());
    assert!(storage.get_donation(404).await.unwrap().is_none());

    let user = storage.create_user(new_user("amir", "a@x.com")).await.unwrap();
    let donation = storage.create_donation(new_donation(user.id, 10)).await.unwrap();

    let updated = storage
        .update_donation_status(donation.id, DonationStatus::Failed)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(updated.id, donation.id);
    assert_eq!(updated.status, DonationStatus::Failed);
    assert_eq!(updated.amount, donation.amount);

    let stored = storage.get_donation(donation.id).await.unwrap().unwrap();
    assert_eq!(stored.status, DonationStatus::Failed);
}

async fn newsletter_email_unique(storage: &dyn Storage) {
    let first = storage
        .create_newsletter(NewNewsletter {
            email: "a@x.com".to_string(),
        })
        .await
        .unwrap();
    assert_eq!(first.id, 1);
    assert!(first.active);

    let second = storage
        .create_newsletter(NewNewsletter {
            email: "a@x.com".to_string(),
        })
        .await;
    assert!(matches!(second, Err(StorageError::ConstraintViolation(_))));
}

async fn contact_keeps_optional_fields(storage: &dyn Storage) {
    let contact = storage
        .create_contact(NewContact {
            name: "Sara".to_string(),
            email: "sara@example.com".to_string(),
            phone: None,
            subject: Some("Volunteering".to_string()),
            message: "Can I help?".to_string(),
        })
        .await
        .unwrap();

    assert_eq!(contact.id, 1);
    assert_eq!(contact.phone, None);
    assert_eq!(contact.subject.as_deref(), Some("Volunteering"));
    assert_eq!(contact.message, "Can I help?");
}

/// Runs every check, each against a freshly made store.
async fn run_all<F, Fut>(fresh: F)
where
    F: Fn() -> Fut,
    Fut: Future<Output = Box<dyn Storage>>,
{
    ids_start_at_one_and_increase(&*fresh().await).await;
    donation_defaults_applied(&*fresh().await).await;
    donations_scoped_to_owner_in_order(&*fresh().await).await;
    donation_requires_existing_user(&*fresh().await).await;
    users_unique_by_username_and_email(&*fresh().await).await;
    missing_records_are_none(&*fresh().await).await;
    update_status_on_unknown_id_is_none(&*fresh().await).await;
    newsletter_email_unique(&*fresh().await).await;
    contact_keeps_optional_fields(&*fresh().await).await;
}

// ============================================================
// Backends
// ============================================================

#[tokio::test]
async fn memory_storage_conforms() {
    run_all(|| async { Box::new(MemoryStorage::new()) as Box<dyn Storage> }).await;
}

#[tokio::test]
async fn postgres_storage_conforms() {
    let Ok(url) = std::env::var("TEST_DATABASE_URL") else {
        eprintln!("TEST_DATABASE_URL not set, skipping postgres conformance");
        return;
    };

    let db = Arc::new(Database::connect(url).await.unwrap());

    run_all(|| {
        let db = Arc::clone(&db);
        async move {
            Migrator::fresh(&*db).await.unwrap();
            Box::new(StoragePostgres::new(db)) as Box<dyn Storage>
        }
    })
    .await;
}
