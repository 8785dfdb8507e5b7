mod create_donation;
mod get_donations;

pub use create_donation::*;
pub use get_donations::*;
