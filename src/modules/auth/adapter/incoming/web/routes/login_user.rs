use actix_web::{post, web, HttpResponse, Responder};
use serde::Deserialize;
use serde_json::Value;
use tracing::{error, warn};
use utoipa::ToSchema;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::application::ports::incoming::use_cases::LoginUserError;
use crate::schema::domain::PublicUser;
use crate::schema::validation::validate_login;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Login request from client
#[derive(Deserialize, ToSchema)]
pub struct LoginRequestDto {
    #[schema(example = "amir")]
    pub username: String,

    #[schema(example = "secret1")]
    pub password: String,
}

/// User login
///
/// Verifies the password and opens a session; the `sid` cookie is set on the response.
#[utoipa::path(
    post,
    path = "/api/login",
    tag = "auth",
    request_body = LoginRequestDto,
    responses(
        (status = 200, description = "Login successful", body = inline(SuccessResponse<PublicUser>)),
        (status = 400, description = "Missing username or password", body = ErrorResponse),
        (
            status = 401,
            description = "Invalid credentials",
            body = ErrorResponse,
            example = json!({
                "success": false,
                "error": {
                    "code": "INVALID_CREDENTIALS",
                    "message": "Invalid username or password"
                }
            })
        ),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[post("/api/login")]
pub async fn login_user_handler(
    data: web::Data<AppState>,
    payload: web::Json<Value>,
) -> impl Responder {
    let input = match validate_login(&payload) {
        Ok(input) => input,
        Err(errors) => return ApiResponse::validation_failed("Invalid login data", &errors),
    };

    match data.login_user_use_case.execute(input).await {
        Ok(session) => {
            let cookie = data.session_cookie.session_cookie(&session.token);
            ApiResponse::success_with_cookie(session.user, cookie)
        }
        Err(err) => map_login_error(err),
    }
}

fn map_login_error(err: LoginUserError) -> HttpResponse {
    match err {
        LoginUserError::InvalidCredentials => {
            warn!("Rejected login");
            ApiResponse::unauthorized("INVALID_CREDENTIALS", "Invalid username or password")
        }
        other => {
            error!(error = %other, "Login failed");
            ApiResponse::internal_error()
        }
    }
}
