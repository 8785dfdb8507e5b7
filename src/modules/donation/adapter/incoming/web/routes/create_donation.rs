use actix_web::{post, web, HttpResponse, Responder};
use serde::Deserialize;
use serde_json::Value;
use tracing::{error, warn};
use utoipa::ToSchema;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::donation::application::ports::incoming::use_cases::CreateDonationError;
use crate::schema::domain::{Donation, DonationStatus};
use crate::schema::validation::validate_donation;
use crate::shared::api::ApiResponse;
use crate::AppState;

//
// ──────────────────────────────────────────────────────────
// Request DTO
// ──────────────────────────────────────────────────────────
//

/// Donation body. Any `userId` sent by the client is ignored.
#[derive(Deserialize, ToSchema)]
pub struct CreateDonationRequest {
    /// Number or numeric string, greater than 0
    #[schema(value_type = f64, example = 5000)]
    pub amount: Value,

    #[schema(example = "For the school library")]
    pub message: Option<String>,

    /// Defaults to `pending`
    pub status: Option<DonationStatus>,
}

//
// ──────────────────────────────────────────────────────────
// Route
// ──────────────────────────────────────────────────────────
//

/// Record a donation
///
/// The donation is owned by the logged-in user.
#[utoipa::path(
    post,
    path = "/api/donations",
    tag = "donations",
    request_body = CreateDonationRequest,
    responses(
        (status = 201, description = "Donation recorded", body = inline(SuccessResponse<Donation>)),
        (
            status = 400,
            description = "Invalid donation data",
            body = ErrorResponse,
            example = json!({
                "success": false,
                "error": {
                    "code": "VALIDATION_ERROR",
                    "message": "Invalid donation data",
                    "details": [{ "field": "amount", "message": "Must be greater than 0" }]
                }
            })
        ),
        (status = 401, description = "No valid session", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    ),
    security(("session_cookie" = []))
)]
#[post("/api/donations")]
pub async fn create_donation_handler(
    user: AuthenticatedUser,
    data: web::Data<AppState>,
    payload: web::Json<Value>,
) -> impl Responder {
    let input = match validate_donation(&payload) {
        Ok(input) => input,
        Err(errors) => {
            warn!(user_id = user.user_id, "Rejected donation payload");
            return ApiResponse::validation_failed("Invalid donation data", &errors);
        }
    };

    match data
        .create_donation_use_case
        .execute(user.user_id, input)
        .await
    {
        Ok(donation) => ApiResponse::created(donation),
        Err(err) => map_create_donation_error(user.user_id, err),
    }
}

//
// ──────────────────────────────────────────────────────────
// Error Mapping
// ──────────────────────────────────────────────────────────
//

fn map_create_donation_error(user_id: i32, err: CreateDonationError) -> HttpResponse {
    match err {
        CreateDonationError::StorageError(msg) => {
            error!(user_id, error = %msg, "Failed to create donation");
            ApiResponse::internal_error()
        }
    }
}
