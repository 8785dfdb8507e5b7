mod create_donation;
mod get_user_donations;

pub use create_donation::{CreateDonationError, CreateDonationUseCase};
pub use get_user_donations::{GetUserDonationsError, GetUserDonationsUseCase};
