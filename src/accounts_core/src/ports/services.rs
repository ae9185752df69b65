use async_trait::async_trait;
use thiserror::Error;

use crate::domain::{
    email::Email, hashed_password::HashedPassword, password::Password, token::Token,
};

// CredentialManager port trait and errors
#[derive(Debug, Error)]
pub enum CredentialError {
    #[error("Stored password hash is malformed: {0}")]
    MalformedHash(String),
    #[error("Unexpected error {0}")]
    UnexpectedError(String),
}

/// One-way password hashing and verification.
///
/// This is the only component that ever looks at a plaintext password.
#[async_trait]
pub trait CredentialManager: Send + Sync {
    /// Hashes `password` with a fresh random salt embedded in the output, so
    /// hashing the same password twice yields two different values.
    async fn hash(&self, password: Password) -> Result<HashedPassword, CredentialError>;

    /// Checks `candidate` against `hash` using the salt embedded in `hash`.
    ///
    /// A well-formed mismatch is `Ok(false)`. Only a hash that cannot be parsed
    /// is an error (`MalformedHash`).
    async fn verify(
        &self,
        hash: &HashedPassword,
        candidate: Password,
    ) -> Result<bool, CredentialError>;
}

// TokenIssuer / TokenVerifier port traits and errors
#[derive(Debug, Error)]
pub enum TokenError {
    #[error("Token signing secret is not configured")]
    MissingSecret,
    #[error("Failed to sign token: {0}")]
    SigningError(String),
    #[error("Invalid token")]
    InvalidToken,
    #[error("Unexpected error {0}")]
    UnexpectedError(String),
}

/// Issues self-contained bearer tokens claiming an email identity.
pub trait TokenIssuer: Send + Sync {
    fn issue(&self, email: &Email) -> Result<Token, TokenError>;
}

/// Validates tokens produced by a [`TokenIssuer`] and extracts their claims.
///
/// Validation is stateless: signature and expiry only, there is no server-side
/// revocation list.
pub trait TokenVerifier: Clone + Send + Sync + 'static {
    /// The claims carried by a valid token, made available to protected
    /// handlers.
    type Claims: Clone + Send + Sync + 'static;

    fn verify(&self, token: &str) -> Result<Self::Claims, TokenError>;
}
