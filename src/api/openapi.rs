use crate::api::schemas::{ErrorDetail, ErrorResponse, MessageResponse, SuccessResponse};
use crate::schema::domain::{Donation, DonationStatus, PublicUser};
use crate::schema::validation::FieldError;
use utoipa::openapi::security::{ApiKey, ApiKeyValue, SecurityScheme};
use utoipa::OpenApi;

use crate::auth::adapter::incoming::web::cookies::SESSION_COOKIE;
use crate::auth::adapter::incoming::web::routes::{LoginRequestDto, RegisterUserRequest};
use crate::contact::adapter::incoming::web::routes::ContactRequest;
use crate::donation::adapter::incoming::web::routes::CreateDonationRequest;
use crate::newsletter::adapter::incoming::web::routes::NewsletterRequest;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Donation Platform API",
        version = "1.0.0",
        description = "Accounts, donations, contact messages and newsletter signups"
    ),
    paths(
        // Auth endpoints
        crate::auth::adapter::incoming::web::routes::register_user_handler,
        crate::auth::adapter::incoming::web::routes::login_user_handler,
        crate::auth::adapter::incoming::web::routes::logout_user_handler,
        crate::auth::adapter::incoming::web::routes::current_user_handler,

        // Donation endpoints
        crate::donation::adapter::incoming::web::routes::create_donation_handler,
        crate::donation::adapter::incoming::web::routes::get_donations_handler,

        // Public forms
        crate::contact::adapter::incoming::web::routes::submit_contact_handler,
        crate::newsletter::adapter::incoming::web::routes::subscribe_newsletter_handler,
    ),
    components(
        schemas(
            // Response wrappers
            SuccessResponse<PublicUser>,
            ErrorResponse,
            ErrorDetail,
            FieldError,
            MessageResponse,

            // Records
            PublicUser,
            Donation,
            DonationStatus,

            // Request DTOs
            RegisterUserRequest,
            LoginRequestDto,
            CreateDonationRequest,
            ContactRequest,
            NewsletterRequest
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "auth", description = "Registration and session endpoints"),
        (name = "donations", description = "Donations of the logged-in user"),
        (name = "contact", description = "Contact form"),
        (name = "newsletter", description = "Newsletter signups"),
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "session_cookie",
                SecurityScheme::ApiKey(ApiKey::Cookie(ApiKeyValue::with_description(
                    SESSION_COOKIE,
                    "Session id set by /api/register and /api/login",
                ))),
            )
        }
    }
}
