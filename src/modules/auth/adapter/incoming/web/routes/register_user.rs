use actix_web::{post, web, HttpResponse, Responder};
use serde::Deserialize;
use serde_json::Value;
use tracing::{error, warn};
use utoipa::ToSchema;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::application::ports::incoming::use_cases::RegisterUserError;
use crate::schema::domain::PublicUser;
use crate::schema::validation::validate_registration;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Registration request from client
#[derive(Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RegisterUserRequest {
    /// 3-50 characters: letters, digits, `_`, `.` or `-`
    #[schema(example = "amir")]
    pub username: String,

    /// At least 6 characters
    #[schema(example = "secret1")]
    pub password: String,

    #[schema(example = "Amir Khan")]
    pub full_name: String,

    #[schema(example = "a@x.com")]
    pub email: String,

    pub phone: Option<String>,
}

/// Register a new account
///
/// Creates the user and opens a session; the `sid` cookie is set on the response.
#[utoipa::path(
    post,
    path = "/api/register",
    tag = "auth",
    request_body = RegisterUserRequest,
    responses(
        (status = 201, description = "User registered and logged in", body = inline(SuccessResponse<PublicUser>)),
        (
            status = 400,
            description = "Invalid data, or username/email already taken",
            body = ErrorResponse,
            example = json!({
                "success": false,
                "error": {
                    "code": "USERNAME_TAKEN",
                    "message": "Username already exists"
                }
            })
        ),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[post("/api/register")]
pub async fn register_user_handler(
    data: web::Data<AppState>,
    payload: web::Json<Value>,
) -> impl Responder {
    let input = match validate_registration(&payload) {
        Ok(input) => input,
        Err(errors) => {
            warn!(fields = errors.errors().len(), "Rejected registration payload");
            return ApiResponse::validation_failed("Invalid registration data", &errors);
        }
    };

    match data.register_user_use_case.execute(input).await {
        Ok(session) => {
            let cookie = data.session_cookie.session_cookie(&session.token);
            ApiResponse::created_with_cookie(session.user, cookie)
        }
        Err(err) => map_register_error(err),
    }
}

fn map_register_error(err: RegisterUserError) -> HttpResponse {
    match err {
        RegisterUserError::UsernameTaken => {
            ApiResponse::bad_request("USERNAME_TAKEN", "Username already exists")
        }
        RegisterUserError::EmailTaken => {
            ApiResponse::bad_request("EMAIL_TAKEN", "Email already registered")
        }
        other => {
            error!(error = %other, "Registration failed");
            ApiResponse::internal_error()
        }
    }
}
