pub mod auth;
pub mod contact;
pub mod donation;
pub mod newsletter;
pub mod schema;
pub mod storage;
