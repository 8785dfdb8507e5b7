use async_trait::async_trait;
use std::sync::Arc;
use tracing::{info, warn};

use crate::auth::application::ports::{
    incoming::use_cases::{AuthSession, LoginUserError, LoginUserUseCase},
    outgoing::{PasswordHasher, SessionStore},
};
use crate::schema::domain::PublicUser;
use crate::schema::validation::LoginInput;
use crate::storage::application::ports::outgoing::Storage;

#[derive(Clone)]
pub struct LoginUserService {
    storage: Arc<dyn Storage>,
    sessions: Arc<dyn SessionStore>,
    hasher: Arc<dyn PasswordHasher>,
}

impl LoginUserService {
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

#[async_trait]
impl LoginUserUseCase for LoginUserService {
    async fn execute(&self, input: LoginInput) -> Result<AuthSession, LoginUserError> {
        let user = self
            .storage
            .get_user_by_username(&input.username)
            .await
            .map_err(|e| LoginUserError::StorageError(e.to_string()))?
            .ok_or_else(|| {
                warn!(username = %input.username, "Login for unknown username");
                LoginUserError::InvalidCredentials
            })?;

        let matches = self
            .hasher
            .verify_password(&input.password, &user.password)
            .await
            .map_err(|e| LoginUserError::HashingError(e.to_string()))?;

        if !matches {
            warn!(user_id = user.id, "Login with wrong password");
            return Err(LoginUserError::InvalidCredentials);
        }

        let token = self
            .sessions
            .create(user.id)
            .await
            .map_err(|e| LoginUserError::SessionError(e.to_string()))?;

        info!(user_id = user.id, "User logged in");

        Ok(AuthSession {
            user: PublicUser::from(user),
            token,
        })
    }
}
