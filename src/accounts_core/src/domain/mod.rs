pub mod credentials;
pub mod email;
pub mod hashed_password;
pub mod password;
pub mod token;
pub mod user;
pub mod user_id;
pub mod user_update;
pub mod validation;
