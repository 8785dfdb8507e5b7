use actix_web::cookie::Cookie;
use actix_web::web;

use crate::schema::domain::PublicUser;
use crate::schema::validation::RegistrationInput;
use crate::AppState;

/// Opens a session for `user_id` straight through the session store and
/// returns the cookie a browser would send back.
pub async fn session_cookie_for(state: &web::Data<AppState>, user_id: i32) -> Cookie<'static> {
    let token = state
        .sessions
        .create(user_id)
        .await
        .expect("session store should accept a new session");
    state.session_cookie.session_cookie(&token)
}

/// Registers `username` with `{username}@x.com` and returns the stored user.
pub async fn register_user(
    state: &web::Data<AppState>,
    username: &str,
    password: &str,
) -> PublicUser {
    state
        .register_user_use_case
        .execute(RegistrationInput {
            username: username.to_string(),
            password: password.to_string(),
            full_name: "Amir Khan".to_string(),
            email: format!("{username}@x.com"),
            phone: None,
        })
        .await
        .expect("registration should succeed")
        .user
}
