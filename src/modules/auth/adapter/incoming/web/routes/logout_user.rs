use actix_web::{post, web, HttpRequest, Responder};
use tracing::error;

use crate::api::schemas::{ErrorResponse, MessageResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::cookies::session_token;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Logout
///
/// Destroys the current session, if any, and clears the `sid` cookie.
/// Succeeds without a session.
#[utoipa::path(
    post,
    path = "/api/logout",
    tag = "auth",
    responses(
        (status = 200, description = "Logged out", body = inline(SuccessResponse<MessageResponse>)),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[post("/api/logout")]
pub async fn logout_user_handler(req: HttpRequest, data: web::Data<AppState>) -> impl Responder {
    match data.logout_user_use_case.execute(session_token(&req)).await {
        Ok(()) => ApiResponse::success_with_cookie(
            MessageResponse::new("Logged out"),
            data.session_cookie.removal_cookie(),
        ),
        Err(err) => {
            error!(error = %err, "Logout failed");
            ApiResponse::internal_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{cookie::Cookie, http::StatusCode, test, App};

    use crate::auth::application::ports::outgoing::SessionToken;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::auth_helper::session_cookie_for;

    #[actix_web::test]
    async fn logout_destroys_session_and_clears_cookie() {
        let state = TestAppStateBuilder::default().build();
        let cookie = session_cookie_for(&state, 1).await;
        let token = SessionToken::from(cookie.value());
        let sessions = state.sessions.clone();
        let app =
            test::init_service(App::new().app_data(state).service(logout_user_handler)).await;

        let req = test::TestRequest::post()
            .uri("/api/logout")
            .cookie(cookie)
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);
        let cleared = resp
            .response()
            .cookies()
            .find(|c| c.name() == "sid")
            .expect("removal cookie");
        assert_eq!(cleared.value(), "");
        assert_eq!(sessions.resolve(&token).await.unwrap(), None);
    }

    #[actix_web::test]
    async fn logout_without_session_still_succeeds() {
        let state = TestAppStateBuilder::default().build();
        let app =
            test::init_service(App::new().app_data(state).service(logout_user_handler)).await;

        let req = test::TestRequest::post().uri("/api/logout").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);

        let stale = test::TestRequest::post()
            .uri("/api/logout")
            .cookie(Cookie::new("sid", "already-gone"))
            .to_request();
        assert_eq!(test::call_service(&app, stale).await.status(), StatusCode::OK);
    }
}
