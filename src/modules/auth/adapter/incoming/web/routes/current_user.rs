use actix_web::{get, web, Responder};
use tracing::error;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::auth::application::ports::incoming::use_cases::FetchCurrentUserError;
use crate::schema::domain::PublicUser;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Current user
///
/// Returns the account behind the session cookie.
#[utoipa::path(
    get,
    path = "/api/user",
    tag = "auth",
    responses(
        (status = 200, description = "Logged-in user", body = inline(SuccessResponse<PublicUser>)),
        (status = 401, description = "No valid session", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    ),
    security(("session_cookie" = []))
)]
#[get("/api/user")]
pub async fn current_user_handler(
    user: AuthenticatedUser,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.fetch_current_user_use_case.execute(user.user_id).await {
        Ok(profile) => ApiResponse::success(profile),
        // Session outlived its account.
        Err(FetchCurrentUserError::UserNotFound) => {
            ApiResponse::unauthorized("NOT_AUTHENTICATED", "Authentication required")
        }
        Err(err) => {
            error!(user_id = user.user_id, error = %err, "Failed to fetch current user");
            ApiResponse::internal_error()
        }
    }
}
