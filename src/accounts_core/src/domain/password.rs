use secrecy::{ExposeSecret, Secret};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PasswordError {
    #[error("\"password\" is not allowed to be empty")]
    Empty,
}

/// A plaintext password as submitted by a client.
///
/// The value is wrapped in a [`Secret`] so it is redacted from `Debug` output
/// and tracing fields. It is only ever exposed to a credential manager.
#[derive(Debug, Clone)]
pub struct Password(Secret<String>);

impl Password {
    pub fn parse(candidate: Secret<String>) -> Result<Self, PasswordError> {
        if candidate.expose_secret().is_empty() {
            return Err(PasswordError::Empty);
        }
        Ok(Self(candidate))
    }
}

impl TryFrom<Secret<String>> for Password {
    type Error = PasswordError;

    fn try_from(value: Secret<String>) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl AsRef<Secret<String>> for Password {
    fn as_ref(&self) -> &Secret<String> {
        &self.0
    }
}
