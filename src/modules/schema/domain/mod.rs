pub mod entities;

pub use entities::{
    Contact, Donation, DonationStatus, NewContact, NewDonation, NewNewsletter, NewUser,
    Newsletter, PublicUser, UnknownDonationStatus, User,
};
