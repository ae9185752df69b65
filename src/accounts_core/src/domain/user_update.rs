//! Validation gate for update bodies.
//!
//! Only `email` and `password` may change. The id is immutable and the stored
//! hash is only ever written by hashing a submitted password, so both are
//! rejected like any other unknown key.

use secrecy::Secret;
use serde_json::Value;

use crate::domain::{
    email::Email,
    password::Password,
    validation::{FieldError, ValidationError, non_empty_string, reject_unknown_keys},
};

const MUTABLE_FIELDS: [&str; 2] = ["email", "password"];

/// A validated partial update of a user record.
#[derive(Debug, Clone)]
pub struct UserUpdate {
    pub email: Option<Email>,
    pub password: Option<Password>,
}

impl TryFrom<&Value> for UserUpdate {
    type Error = ValidationError;

    fn try_from(body: &Value) -> Result<Self, Self::Error> {
        let Some(body) = body.as_object() else {
            return Err(ValidationError::not_an_object());
        };

        if body.is_empty() {
            return Err(ValidationError::single(FieldError::new(
                "value",
                "\"value\" must have at least 1 key",
            )));
        }

        let mut errors = Vec::new();

        let email = match body
            .get("email")
            .and_then(|value| non_empty_string(value, "email", &mut errors))
            .map(Email::parse)
        {
            Some(Ok(email)) => Some(email),
            Some(Err(e)) => {
                errors.push(FieldError::new("email", e.to_string()));
                None
            }
            None => None,
        };

        let password = match body
            .get("password")
            .and_then(|value| non_empty_string(value, "password", &mut errors))
            .map(|raw| Password::parse(Secret::new(raw.to_owned())))
        {
            Some(Ok(password)) => Some(password),
            Some(Err(e)) => {
                errors.push(FieldError::new("password", e.to_string()));
                None
            }
            None => None,
        };

        reject_unknown_keys(body, &MUTABLE_FIELDS, &mut errors);

        if !errors.is_empty() {
            return Err(ValidationError::new(errors));
        }

        Ok(Self { email, password })
    }
}
