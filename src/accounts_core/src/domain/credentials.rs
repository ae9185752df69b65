//! Validation gate for inbound `{email, password}` bodies.
//!
//! Registration and login share the same schema: both fields required, both
//! non-empty strings, the email syntactically valid, and nothing else present.

use secrecy::Secret;
use serde_json::Value;

use crate::domain::{
    email::Email,
    password::Password,
    validation::{FieldError, ValidationError, reject_unknown_keys, required_string},
};

const ALLOWED_FIELDS: [&str; 2] = ["email", "password"];

/// A request-scoped (email, plaintext password) pair that passed validation.
#[derive(Debug, Clone)]
pub struct CredentialPair {
    pub email: Email,
    pub password: Password,
}

impl CredentialPair {
    pub fn new(email: Email, password: Password) -> Self {
        Self { email, password }
    }

    pub fn into_parts(self) -> (Email, Password) {
        (self.email, self.password)
    }
}

impl TryFrom<&Value> for CredentialPair {
    type Error = ValidationError;

    fn try_from(body: &Value) -> Result<Self, Self::Error> {
        let Some(body) = body.as_object() else {
            return Err(ValidationError::not_an_object());
        };

        let mut errors = Vec::new();

        let email = match required_string(body, "email", &mut errors).map(Email::parse) {
            Some(Ok(email)) => Some(email),
            Some(Err(e)) => {
                errors.push(FieldError::new("email", e.to_string()));
                None
            }
            None => None,
        };

        let password = match required_string(body, "password", &mut errors)
            .map(|raw| Password::parse(Secret::new(raw.to_owned())))
        {
            Some(Ok(password)) => Some(password),
            Some(Err(e)) => {
                errors.push(FieldError::new("password", e.to_string()));
                None
            }
            None => None,
        };

        reject_unknown_keys(body, &ALLOWED_FIELDS, &mut errors);

        match (email, password) {
            (Some(email), Some(password)) if errors.is_empty() => Ok(Self::new(email, password)),
            _ => Err(ValidationError::new(errors)),
        }
    }
}
