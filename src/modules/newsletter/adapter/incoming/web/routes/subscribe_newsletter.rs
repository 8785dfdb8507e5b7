use actix_web::{post, web, Responder};
use serde::Deserialize;
use serde_json::Value;
use tracing::{error, warn};
use utoipa::ToSchema;

use crate::api::schemas::{ErrorResponse, MessageResponse, SuccessResponse};
use crate::schema::validation::validate_newsletter;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Deserialize, ToSchema)]
pub struct NewsletterRequest {
    #[schema(example = "reader@example.com")]
    pub email: String,
}

/// Subscribe to the newsletter
///
/// An address that is already subscribed is reported as a server error.
#[utoipa::path(
    post,
    path = "/api/newsletter",
    tag = "newsletter",
    request_body = NewsletterRequest,
    responses(
        (
            status = 201,
            description = "Subscribed",
            body = inline(SuccessResponse<MessageResponse>),
            example = json!({ "success": true, "data": { "message": "Successfully subscribed to newsletter" } })
        ),
        (status = 400, description = "Invalid newsletter data", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[post("/api/newsletter")]
pub async fn subscribe_newsletter_handler(
    data: web::Data<AppState>,
    payload: web::Json<Value>,
) -> impl Responder {
    let signup = match validate_newsletter(&payload) {
        Ok(signup) => signup,
        Err(errors) => {
            warn!("Rejected newsletter payload");
            return ApiResponse::validation_failed("Invalid newsletter data", &errors);
        }
    };

    match data.subscribe_newsletter_use_case.execute(signup).await {
        Ok(_) => {
            ApiResponse::created(MessageResponse::new("Successfully subscribed to newsletter"))
        }
        Err(err) => {
            error!(error = %err, "Failed to subscribe to newsletter");
            ApiResponse::internal_error()
        }
    }
}
