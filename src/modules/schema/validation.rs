//! Field-by-field validation of request payloads.
//!
//! Every validator takes the raw JSON body, reports *all* failing fields at
//! once, and on success returns exactly the shape the storage layer accepts.
//! Unknown fields are ignored; server-assigned fields (`id`, `userId`, `date`,
//! `createdAt`, `active`) are never read.

use std::str::FromStr;
use std::sync::OnceLock;

use email_address::EmailAddress;
use regex::Regex;
use rust_decimal::Decimal;
use serde::Serialize;
use serde_json::{Map, Value};
use utoipa::ToSchema;

use super::domain::{DonationStatus, NewContact, NewDonation, NewNewsletter};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct FieldError {
    #[schema(example = "message")]
    pub field: String,
    #[schema(example = "Required")]
    pub message: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, thiserror::Error)]
#[error("{} invalid field(s)", .0.len())]
pub struct ValidationErrors(Vec<FieldError>);

impl ValidationErrors {
    fn push(&mut self, field: &str, message: &str) {
        self.0.push(FieldError {
            field: field.to_string(),
            message: message.to_string(),
        });
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn errors(&self) -> &[FieldError] {
        &self.0
    }

    /// Whether any error was reported against `field`.
    pub fn mentions(&self, field: &str) -> bool {
        self.0.iter().any(|e| e.field == field)
    }
}

/// Validated donation body. The owner is attached later from the session.
#[derive(Debug, Clone, PartialEq)]
pub struct DonationInput {
    pub amount: Decimal,
    pub message: Option<String>,
    pub status: Option<DonationStatus>,
}

impl DonationInput {
    pub fn into_new_donation(self, user_id: i32) -> NewDonation {
        NewDonation {
            user_id,
            amount: self.amount,
            message: self.message,
            status: self.status,
        }
    }
}

/// Validated registration body. `password` is still plaintext here.
#[derive(Debug, Clone)]
pub struct RegistrationInput {
    pub username: String,
    pub password: String,
    pub full_name: String,
    pub email: String,
    pub phone: Option<String>,
}

#[derive(Debug, Clone)]
pub struct LoginInput {
    pub username: String,
    pub password: String,
}

const MIN_PASSWORD_LEN: usize = 6;
const MIN_FULL_NAME_LEN: usize = 2;
const MAX_AMOUNT_SCALE: u32 = 2;

/// 999999999999.99. Amounts up to this many digits survive the f64 wire
/// representation unchanged.
fn max_amount() -> Decimal {
    Decimal::new(99_999_999_999_999, MAX_AMOUNT_SCALE)
}

fn username_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^[A-Za-z0-9_.\-]{3,50}$")
            .unwrap_or_else(|e| panic!("bad username regex: {e}"))
    })
}

fn as_object(payload: &Value) -> Result<&Map<String, Value>, ValidationErrors> {
    payload.as_object().ok_or_else(|| {
        let mut errors = ValidationErrors::default();
        errors.push("body", "Expected a JSON object");
        errors
    })
}

fn required_string(
    map: &Map<String, Value>,
    field: &str,
    errors: &mut ValidationErrors,
) -> Option<String> {
    match map.get(field) {
        None | Some(Value::Null) => {
            errors.push(field, "Required");
            None
        }
        Some(Value::String(s)) if s.trim().is_empty() => {
            errors.push(field, "Must not be empty");
            None
        }
        Some(Value::String(s)) => Some(s.trim().to_string()),
        Some(_) => {
            errors.push(field, "Expected a string");
            None
        }
    }
}

/// Missing, null and blank all mean "not provided".
fn optional_string(
    map: &Map<String, Value>,
    field: &str,
    errors: &mut ValidationErrors,
) -> Option<String> {
    match map.get(field) {
        None | Some(Value::Null) => None,
        Some(Value::String(s)) if s.trim().is_empty() => None,
        Some(Value::String(s)) => Some(s.trim().to_string()),
        Some(_) => {
            errors.push(field, "Expected a string");
            None
        }
    }
}

fn required_email(
    map: &Map<String, Value>,
    field: &str,
    errors: &mut ValidationErrors,
) -> Option<String> {
    let email = required_string(map, field, errors)?;
    if EmailAddress::is_valid(&email) {
        Some(email.to_lowercase())
    } else {
        errors.push(field, "Invalid email address");
        None
    }
}

fn parse_decimal(raw: &str) -> Option<Decimal> {
    Decimal::from_str(raw)
        .or_else(|_| Decimal::from_scientific(raw))
        .ok()
}

fn required_amount(
    map: &Map<String, Value>,
    field: &str,
    errors: &mut ValidationErrors,
) -> Option<Decimal> {
    let parsed = match map.get(field) {
        None | Some(Value::Null) => {
            errors.push(field, "Required");
            return None;
        }
        Some(Value::Number(n)) => parse_decimal(&n.to_string()),
        Some(Value::String(s)) => parse_decimal(s.trim()),
        Some(_) => None,
    };

    match parsed.map(|amount| amount.normalize()) {
        Some(amount) if amount <= Decimal::ZERO => {
            errors.push(field, "Must be greater than 0");
            None
        }
        Some(amount) if amount > max_amount() => {
            errors.push(field, &format!("Must be at most {}", max_amount()));
            None
        }
        Some(amount) if amount.scale() > MAX_AMOUNT_SCALE => {
            errors.push(field, "At most 2 decimal places");
            None
        }
        Some(amount) => Some(amount),
        None => {
            errors.push(field, "Expected a number");
            None
        }
    }
}

fn optional_status(
    map: &Map<String, Value>,
    field: &str,
    errors: &mut ValidationErrors,
) -> Option<DonationStatus> {
    match map.get(field) {
        None | Some(Value::Null) => None,
        Some(Value::String(s)) => match s.trim().parse::<DonationStatus>() {
            Ok(status) => Some(status),
            Err(_) => {
                errors.push(field, "Must be one of: pending, completed, failed");
                None
            }
        },
        Some(_) => {
            errors.push(field, "Expected a string");
            None
        }
    }
}

/// `{ amount, message?, status? }`
pub fn validate_donation(payload: &Value) -> Result<DonationInput, ValidationErrors> {
    let map = as_object(payload)?;
    let mut errors = ValidationErrors::default();

    let amount = required_amount(map, "amount", &mut errors);
    let message = optional_string(map, "message", &mut errors);
    let status = optional_status(map, "status", &mut errors);

    match amount {
        Some(amount) if errors.is_empty() => Ok(DonationInput {
            amount,
            message,
            status,
        }),
        _ => Err(errors),
    }
}

/// `{ name, email, phone?, subject?, message }`
pub fn validate_contact(payload: &Value) -> Result<NewContact, ValidationErrors> {
    let map = as_object(payload)?;
    let mut errors = ValidationErrors::default();

    let name = required_string(map, "name", &mut errors);
    let email = required_email(map, "email", &mut errors);
    let phone = optional_string(map, "phone", &mut errors);
    let subject = optional_string(map, "subject", &mut errors);
    let message = required_string(map, "message", &mut errors);

    match (name, email, message) {
        (Some(name), Some(email), Some(message)) if errors.is_empty() => Ok(NewContact {
            name,
            email,
            phone,
            subject,
            message,
        }),
        _ => Err(errors),
    }
}

/// `{ email }`
pub fn validate_newsletter(payload: &Value) -> Result<NewNewsletter, ValidationErrors> {
    let map = as_object(payload)?;
    let mut errors = ValidationErrors::default();

    match required_email(map, "email", &mut errors) {
        Some(email) if errors.is_empty() => Ok(NewNewsletter { email }),
        _ => Err(errors),
    }
}

/// `{ username, password, fullName, email, phone? }`
pub fn validate_registration(payload: &Value) -> Result<RegistrationInput, ValidationErrors> {
    let map = as_object(payload)?;
    let mut errors = ValidationErrors::default();

    let username = required_string(map, "username", &mut errors).and_then(|u| {
        if username_pattern().is_match(&u) {
            Some(u)
        } else {
            errors.push(
                "username",
                "Must be 3-50 characters of letters, digits, '_', '.' or '-'",
            );
            None
        }
    });

    // Passwords are taken verbatim, surrounding whitespace included.
    let password = match map.get("password") {
        Some(Value::String(p)) if p.chars().count() >= MIN_PASSWORD_LEN => Some(p.clone()),
        Some(Value::String(_)) => {
            errors.push("password", "Must be at least 6 characters long");
            None
        }
        None | Some(Value::Null) => {
            errors.push("password", "Required");
            None
        }
        Some(_) => {
            errors.push("password", "Expected a string");
            None
        }
    };

    let full_name = required_string(map, "fullName", &mut errors).and_then(|n| {
        if n.chars().count() >= MIN_FULL_NAME_LEN {
            Some(n)
        } else {
            errors.push("fullName", "Must be at least 2 characters long");
            None
        }
    });

    let email = required_email(map, "email", &mut errors);
    let phone = optional_string(map, "phone", &mut errors);

    match (username, password, full_name, email) {
        (Some(username), Some(password), Some(full_name), Some(email)) if errors.is_empty() => {
            Ok(RegistrationInput {
                username,
                password,
                full_name,
                email,
                phone,
            })
        }
        _ => Err(errors),
    }
}

/// `{ username, password }`
pub fn validate_login(payload: &Value) -> Result<LoginInput, ValidationErrors> {
    let map = as_object(payload)?;
    let mut errors = ValidationErrors::default();

    let username = required_string(map, "username", &mut errors);
    let password = match map.get("password") {
        Some(Value::String(p)) if !p.is_empty() => Some(p.clone()),
        Some(Value::String(_)) | None | Some(Value::Null) => {
            errors.push("password", "Required");
            None
        }
        Some(_) => {
            errors.push("password", "Expected a string");
            None
        }
    };

    match (username, password) {
        (Some(username), Some(password)) if errors.is_empty() => {
            Ok(LoginInput { username, password })
        }
        _ => Err(errors),
    }
}
