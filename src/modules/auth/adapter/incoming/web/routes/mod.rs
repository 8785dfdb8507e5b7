mod current_user;
mod login_user;
mod logout_user;
mod register_user;

pub use current_user::*;
pub use login_user::*;
pub use logout_user::*;
pub use register_user::*;
