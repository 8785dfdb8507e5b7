use async_trait::async_trait;
use std::sync::Arc;

use crate::auth::application::ports::incoming::use_cases::{
    FetchCurrentUserError, FetchCurrentUserUseCase,
};
use crate::schema::domain::PublicUser;
use crate::storage::application::ports::outgoing::Storage;

#[derive(Clone)]
pub struct FetchCurrentUserService {
    storage: Arc<dyn Storage>,
}

impl FetchCurrentUserService {
    pub fn new(storage: Arc<dyn Storage>) -> Self {
        Self { storage }
    }
}

#[async_trait]
impl FetchCurrentUserUseCase for FetchCurrentUserService {
    async fn execute(&self, user_id: i32) -> Result<PublicUser, FetchCurrentUserError> {
        self.storage
            .get_user(user_id)
            .await
            .map_err(|e| FetchCurrentUserError::StorageError(e.to_string()))?
            .map(PublicUser::from)
            .ok_or(FetchCurrentUserError::UserNotFound)
    }
}
