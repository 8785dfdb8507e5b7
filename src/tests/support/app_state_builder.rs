use actix_web::web;
use std::sync::Arc;

use crate::auth::adapter::incoming::web::cookies::SessionCookieSettings;
use crate::auth::adapter::outgoing::security::argon2_hasher::Argon2Hasher;
use crate::auth::adapter::outgoing::MemorySessionStore;
use crate::auth::application::ports::outgoing::{PasswordHasher, SessionStore};
use crate::storage::adapter::outgoing::MemoryStorage;
use crate::storage::application::ports::outgoing::Storage;
use crate::AppState;

/// In-memory `AppState` for handler tests. Any backend can be swapped for a
/// stub before `build`.
pub struct TestAppStateBuilder {
    storage: Arc<dyn Storage>,
    sessions: Arc<dyn SessionStore>,
    hasher: Arc<dyn PasswordHasher>,
    session_cookie: SessionCookieSettings,
}

impl Default for TestAppStateBuilder {
    fn default() -> Self {
        Self {
            storage: Arc::new(MemoryStorage::new()),
            sessions: Arc::new(MemorySessionStore::new(3600)),
            hasher: Arc::new(Argon2Hasher::fast()),
            session_cookie: SessionCookieSettings {
                secure: false,
                max_age_secs: 3600,
            },
        }
    }
}

impl TestAppStateBuilder {
    pub fn with_storage(mut self, storage: impl Storage + 'static) -> Self {
        self.storage = Arc::new(storage);
        self
    }

    pub fn with_sessions(mut self, sessions: impl SessionStore + 'static) -> Self {
        self.sessions = Arc::new(sessions);
        self
    }

    pub fn with_hasher(mut self, hasher: impl PasswordHasher + 'static) -> Self {
        self.hasher = Arc::new(hasher);
        self
    }

    /// Handle on the storage the built state will use, for seeding and
    /// asserting on records directly.
    pub fn storage(&self) -> Arc<dyn Storage> {
        Arc::clone(&self.storage)
    }

    pub fn build(self) -> web::Data<AppState> {
        web::Data::new(AppState::new(
            self.storage,
            self.sessions,
            self.hasher,
            self.session_cookie,
        ))
    }
}
