use actix_web::{
    dev::Payload, web, Error as ActixError, FromRequest, HttpRequest, HttpResponse,
};
use futures::future::LocalBoxFuture;
use tracing::error;

use crate::auth::adapter::incoming::web::cookies::session_token;
use crate::auth::application::ports::outgoing::SessionToken;
use crate::{shared::api::ApiResponse, AppState};

/// The user behind a valid `sid` session cookie.
///
/// Extraction fails with 401 `NOT_AUTHENTICATED` before the handler body
/// runs when the cookie is missing or the session is unknown or expired.
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    pub user_id: i32,
    pub token: SessionToken,
}

fn create_api_error(response: HttpResponse) -> ActixError {
    actix_web::error::InternalError::from_response("", response).into()
}

fn not_authenticated() -> ActixError {
    create_api_error(ApiResponse::unauthorized(
        "NOT_AUTHENTICATED",
        "Authentication required",
    ))
}

impl FromRequest for AuthenticatedUser {
    type Error = ActixError;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let state = req.app_data::<web::Data<AppState>>().cloned();
        let token = session_token(req);

        Box::pin(async move {
            let state = state.ok_or_else(|| create_api_error(ApiResponse::internal_error()))?;
            let token = token.ok_or_else(not_authenticated)?;

            match state.sessions.resolve(&token).await {
                Ok(Some(user_id)) => Ok(AuthenticatedUser { user_id, token }),
                Ok(None) => Err(not_authenticated()),
                Err(e) => {
                    error!(error = %e, "Session lookup failed");
                    Err(create_api_error(ApiResponse::internal_error()))
                }
            }
        })
    }
}
