use actix_web::{post, web, Responder};
use serde::Deserialize;
use serde_json::Value;
use tracing::{error, warn};
use utoipa::ToSchema;

use crate::api::schemas::{ErrorResponse, MessageResponse, SuccessResponse};
use crate::schema::validation::validate_contact;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Contact form body
#[derive(Deserialize, ToSchema)]
pub struct ContactRequest {
    #[schema(example = "Sara Ahmed")]
    pub name: String,
    #[schema(example = "sara@example.com")]
    pub email: String,
    pub phone: Option<String>,
    #[schema(example = "Volunteering")]
    pub subject: Option<String>,
    #[schema(example = "How can I help at the next event?")]
    pub message: String,
}

/// Send a contact message
///
/// Public endpoint, no session needed.
#[utoipa::path(
    post,
    path = "/api/contact",
    tag = "contact",
    request_body = ContactRequest,
    responses(
        (
            status = 201,
            description = "Message stored",
            body = inline(SuccessResponse<MessageResponse>),
            example = json!({ "success": true, "data": { "message": "Contact message received" } })
        ),
        (status = 400, description = "Invalid contact data", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[post("/api/contact")]
pub async fn submit_contact_handler(
    data: web::Data<AppState>,
    payload: web::Json<Value>,
) -> impl Responder {
    let contact = match validate_contact(&payload) {
        Ok(contact) => contact,
        Err(errors) => {
            warn!("Rejected contact payload");
            return ApiResponse::validation_failed("Invalid contact data", &errors);
        }
    };

    match data.submit_contact_use_case.execute(contact).await {
        Ok(_) => ApiResponse::created(MessageResponse::new("Contact message received")),
        Err(err) => {
            error!(error = %err, "Failed to store contact message");
            ApiResponse::internal_error()
        }
    }
}
