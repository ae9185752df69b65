pub mod argon2_credential_manager;

pub use argon2_credential_manager::{Argon2CredentialManager, HashingParams};
