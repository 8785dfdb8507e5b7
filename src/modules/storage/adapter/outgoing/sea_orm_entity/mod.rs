pub mod contacts;
pub mod donations;
pub mod newsletters;
pub mod users;
