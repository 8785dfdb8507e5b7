mod fetch_current_user;
mod login_user;
mod logout_user;
mod register_user;

pub use fetch_current_user::{FetchCurrentUserError, FetchCurrentUserUseCase};
pub use login_user::{LoginUserError, LoginUserUseCase};
pub use logout_user::{LogoutUserError, LogoutUserUseCase};
pub use register_user::{RegisterUserError, RegisterUserUseCase};

use crate::auth::application::ports::outgoing::SessionToken;
use crate::schema::domain::PublicUser;

/// A user together with the session just opened for them.
#[derive(Debug, Clone)]
pub struct AuthSession {
    pub user: PublicUser,
    pub token: SessionToken,
}
