use chrono::Utc;
use rust_decimal::Decimal;

use crate::schema::domain::{Donation, DonationStatus, User};

pub fn sample_user(id: i32, username: &str, email: &str) -> User {
    User {
        id,
        username: username.to_string(),
        password: "$argon2id$v=19$m=4096,t=3,p=1$stub$stub".to_string(),
        full_name: "Amir Khan".to_string(),
        email: email.to_string(),
        phone: None,
        created_at: Utc::now(),
    }
}

pub fn sample_donation(id: i32, user_id: i32, amount: i64) -> Donation {
    Donation {
        id,
        user_id,
        amount: Decimal::new(amount, 0),
        date: Utc::now(),
        message: None,
        status: DonationStatus::Pending,
    }
}
