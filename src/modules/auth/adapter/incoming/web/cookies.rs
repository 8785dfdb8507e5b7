use actix_web::cookie::{time::Duration, Cookie, SameSite};
use actix_web::HttpRequest;

use crate::auth::application::ports::outgoing::SessionToken;

pub const SESSION_COOKIE: &str = "sid";

#[derive(Debug, Clone, Copy)]
pub struct SessionCookieSettings {
    pub secure: bool,
    pub max_age_secs: i64,
}

impl SessionCookieSettings {
    pub fn session_cookie(&self, token: &SessionToken) -> Cookie<'static> {
        Cookie::build(SESSION_COOKIE, token.as_str().to_string())
            .path("/")
            .http_only(true)
            .same_site(SameSite::Lax)
            .secure(self.secure)
            .max_age(Duration::seconds(self.max_age_secs))
            .finish()
    }

    /// Expired, empty `sid` cookie that makes the browser forget the session.
    pub fn removal_cookie(&self) -> Cookie<'static> {
        let mut cookie = Cookie::build(SESSION_COOKIE, "")
            .path("/")
            .http_only(true)
            .same_site(SameSite::Lax)
            .secure(self.secure)
            .finish();
        cookie.make_removal();
        cookie
    }
}

pub fn session_token(req: &HttpRequest) -> Option<SessionToken> {
    req.cookie(SESSION_COOKIE)
        .filter(|c| !c.value().is_empty())
        .map(|c| SessionToken::from(c.value()))
}
