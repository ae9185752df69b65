pub mod domain;
pub mod ports;

// Re-export commonly used types for convenience
pub use domain::{
    credentials::CredentialPair,
    email::{Email, EmailError},
    hashed_password::HashedPassword,
    password::{Password, PasswordError},
    token::Token,
    user::{User, UserChanges},
    user_id::UserId,
    user_update::UserUpdate,
    validation::{FieldError, ValidationError},
};

pub use ports::{
    repositories::{UserStore, UserStoreError},
    services::{CredentialError, CredentialManager, TokenError, TokenIssuer, TokenVerifier},
};
