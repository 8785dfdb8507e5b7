use async_trait::async_trait;
use std::sync::Arc;
use tracing::info;

use crate::auth::application::ports::{
    incoming::use_cases::{AuthSession, RegisterUserError, RegisterUserUseCase},
    outgoing::{PasswordHasher, SessionStore},
};
use crate::schema::domain::{NewUser, PublicUser};
use crate::schema::validation::RegistrationInput;
use crate::storage::application::ports::outgoing::{Storage, StorageError};

#[derive(Clone)]
pub struct RegisterUserService {
    storage: Arc<dyn Storage>,
    sessions: Arc<dyn SessionStore>,
    hasher: Arc<dyn PasswordHasher>,
}

impl RegisterUserService {
    pub fn new(
        storage: Arc<dyn Storage>,
        sessions: Arc<dyn SessionStore>,
        hasher: Arc<dyn PasswordHasher>,
    ) -> Self {
        Self {
            storage,
            sessions,
            hasher,
        }
    }
}

fn storage_error(err: StorageError) -> RegisterUserError {
    RegisterUserError::StorageError(err.to_string())
}

#[async_trait]
impl RegisterUserUseCase for RegisterUserService {
    async fn execute(&self, input: RegistrationInput) -> Result<AuthSession, RegisterUserError> {
        if self
            .storage
            .get_user_by_username(&input.username)
            .await
            .map_err(storage_error)?
            .is_some()
        {
            return Err(RegisterUserError::UsernameTaken);
        }

        if self
            .storage
            .get_user_by_email(&input.email)
            .await
            .map_err(storage_error)?
            .is_some()
        {
            return Err(RegisterUserError::EmailTaken);
        }

        let password_hash = self
            .hasher
            .hash_password(&input.password)
            .await
            .map_err(|e| RegisterUserError::HashingError(e.to_string()))?;

        let user = self
            .storage
            .create_user(NewUser {
                username: input.username,
                password: password_hash,
                full_name: input.full_name,
                email: input.email,
                phone: input.phone,
            })
            .await
            .map_err(|e| match e {
                // Lost a race with a concurrent registration.
                StorageError::ConstraintViolation(msg) if msg.contains("email") => {
                    RegisterUserError::EmailTaken
                }
                StorageError::ConstraintViolation(_) => RegisterUserError::UsernameTaken,
                other => storage_error(other),
            })?;

        let token = self
            .sessions
            .create(user.id)
            .await
            .map_err(|e| RegisterUserError::SessionError(e.to_string()))?;

        info!(user_id = user.id, username = %user.username, "User registered");

        Ok(AuthSession {
            user: PublicUser::from(user),
            token,
        })
    }
}
