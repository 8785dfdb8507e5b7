use async_trait::async_trait;
use sea_orm::sea_query::Expr;
use sea_orm::ActiveValue::NotSet;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder,
    Set, SqlErr,
};
use std::sync::Arc;

use crate::schema::domain::{
    Contact, Donation, DonationStatus, NewContact, NewDonation, NewNewsletter, NewUser, Newsletter,
    User,
};
use crate::storage::application::ports::outgoing::{Storage, StorageError};

use super::sea_orm_entity::{contacts, donations, newsletters, users};

/// PostgreSQL-backed storage. Every operation is a single statement.
#[derive(Debug, Clone)]
pub struct StoragePostgres {
    db: Arc<DatabaseConnection>,
}

impl StoragePostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

fn map_db_err(err: DbErr) -> StorageError {
    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(msg))
        | Some(SqlErr::ForeignKeyConstraintViolation(msg)) => {
            StorageError::ConstraintViolation(msg)
        }
        _ => {
            let msg = err.to_string();
            let lowered = msg.to_lowercase();
            if lowered.contains("23505")
                || lowered.contains("23503")
                || lowered.contains("duplicate key")
                || lowered.contains("unique constraint")
                || lowered.contains("foreign key")
            {
                StorageError::ConstraintViolation(msg)
            } else {
                StorageError::DatabaseError(msg)
            }
        }
    }
}

fn donation_from_model(model: donations::Model) -> Result<Donation, StorageError> {
    model
        .into_domain()
        .map_err(|e| StorageError::DatabaseError(e.to_string()))
}

#[async_trait]
impl Storage for StoragePostgres {
    async fn get_user(&self, id: i32) -> Result<Option<User>, StorageError> {
        let found = users::Entity::find_by_id(id)
            .one(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(found.map(users::Model::into_domain))
    }

    async fn get_user_by_username(&self, username: &str) -> Result<Option<User>, StorageError> {
        let found = users::Entity::find()
            .filter(users::Column::Username.eq(username))
            .one(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(found.map(users::Model::into_domain))
    }

    async fn get_user_by_email(&self, email: &str) -> Result<Option<User>, StorageError> {
        let found = users::Entity::find()
            .filter(users::Column::Email.eq(email))
            .one(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(found.map(users::Model::into_domain))
    }

    async fn create_user(&self, user: NewUser) -> Result<User, StorageError> {
        let active = users::ActiveModel {
            id: NotSet,
            username: Set(user.username),
            password: Set(user.password),
            full_name: Set(user.full_name),
            email: Set(user.email),
            phone: Set(user.phone),
            created_at: NotSet,
        };

        let inserted = active.insert(&*self.db).await.map_err(map_db_err)?;
        Ok(inserted.into_domain())
    }

    async fn get_donation(&self, id: i32) -> Result<Option<Donation>, StorageError> {
        donations::Entity::find_by_id(id)
            .one(&*self.db)
            .await
            .map_err(map_db_err)?
            .map(donation_from_model)
            .transpose()
    }

    async fn get_donations_by_user_id(&self, user_id: i32) -> Result<Vec<Donation>, StorageError> {
        donations::Entity::find()
            .filter(donations::Column::UserId.eq(user_id))
            .order_by_asc(donations::Column::Id)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?
            .into_iter()
            .map(donation_from_model)
            .collect()
    }

    async fn create_donation(&self, donation: NewDonation) -> Result<Donation, StorageError> {
        let status = donation.status.unwrap_or_default();
        let active = donations::ActiveModel {
            id: NotSet,
            user_id: Set(donation.user_id),
            amount: Set(donation.amount),
            date: NotSet,
            message: Set(donation.message),
            status: Set(status.as_str().to_string()),
        };

        let inserted = active.insert(&*self.db).await.map_err(map_db_err)?;
        donation_from_model(inserted)
    }

    async fn update_donation_status(
        &self,
        id: i32,
        status: DonationStatus,
    ) -> Result<Option<Donation>, StorageError> {
        let updated = donations::Entity::update_many()
            .col_expr(donations::Column::Status, Expr::value(status.as_str()))
            .filter(donations::Column::Id.eq(id))
            .exec_with_returning(&*self.db)
            .await
            .map_err(map_db_err)?;

        updated.into_iter().next().map(donation_from_model).transpose()
    }

    async fn create_contact(&self, contact: NewContact) -> Result<Contact, StorageError> {
        let active = contacts::ActiveModel {
            id: NotSet,
            name: Set(contact.name),
            email: Set(contact.email),
            phone: Set(contact.phone),
            subject: Set(contact.subject),
            message: Set(contact.message),
            created_at: NotSet,
        };

        let inserted = active.insert(&*self.db).await.map_err(map_db_err)?;
        Ok(inserted.into_domain())
    }

    async fn create_newsletter(
        &self,
        newsletter: NewNewsletter,
    ) -> Result<Newsletter, StorageError> {
        let active = newsletters::ActiveModel {
            id: NotSet,
            email: Set(newsletter.email),
            active: Set(true),
            created_at: NotSet,
        };

        let inserted = active.insert(&*self.db).await.map_err(map_db_err)?;
        Ok(inserted.into_domain())
    }

    async fn ping(&self) -> Result<(), StorageError> {
        self.db.ping().await.map_err(map_db_err)
    }
}
