use actix_web::{get, web, Responder};
use tracing::error;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::schema::domain::Donation;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// List my donations
///
/// Donations of the logged-in user, oldest first. Empty array when none.
#[utoipa::path(
    get,
    path = "/api/donations",
    tag = "donations",
    responses(
        (status = 200, description = "Donations of the current user", body = inline(SuccessResponse<Vec<Donation>>)),
        (status = 401, description = "No valid session", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    ),
    security(("session_cookie" = []))
)]
#[get("/api/donations")]
pub async fn get_donations_handler(
    user: AuthenticatedUser,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.get_user_donations_use_case.execute(user.user_id).await {
        Ok(donations) => ApiResponse::success(donations),
        Err(err) => {
            error!(user_id = user.user_id, error = %err, "Failed to list donations");
            ApiResponse::internal_error()
        }
    }
}
