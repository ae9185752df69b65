pub mod delete_user;
pub mod error;
pub mod get_user;
pub mod list_users;
pub mod login;
pub mod register;
pub mod update_user;
pub mod views;

pub use delete_user::delete_user;
pub use error::{ApiError, ErrorResponse};
pub use get_user::get_user;
pub use list_users::list_users;
pub use login::login;
pub use register::register;
pub use update_user::update_user;
pub use views::{LoginResponse, MessageResponse, UserView};
