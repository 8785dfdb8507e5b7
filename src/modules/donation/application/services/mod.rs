mod create_donation_service;
mod get_user_donations_service;

pub use create_donation_service::CreateDonationService;
pub use get_user_donations_service::GetUserDonationsService;
