pub mod password_hasher;
pub mod session_store;

pub use password_hasher::{HashError, PasswordHasher};
pub use session_store::{SessionStore, SessionStoreError, SessionToken};
