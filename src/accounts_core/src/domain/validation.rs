//! Field-level validation errors shared by the request gates.

use serde::Serialize;
use serde_json::{Map, Value};
use thiserror::Error;

/// A single rejected field and the reason it was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl FieldError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }

    pub fn required(field: &str) -> Self {
        Self::new(field, format!("\"{field}\" is required"))
    }

    pub fn not_a_string(field: &str) -> Self {
        Self::new(field, format!("\"{field}\" must be a string"))
    }

    pub fn empty(field: &str) -> Self {
        Self::new(field, format!("\"{field}\" is not allowed to be empty"))
    }

    pub fn not_allowed(field: &str) -> Self {
        Self::new(field, format!("\"{field}\" is not allowed"))
    }
}

/// Every violation found in a request body.
///
/// The gate collects all violations instead of stopping at the first one, so a
/// client can fix its request in a single round-trip.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{}", self.summary())]
pub struct ValidationError {
    pub details: Vec<FieldError>,
}

impl ValidationError {
    pub fn new(details: Vec<FieldError>) -> Self {
        Self { details }
    }

    pub fn single(detail: FieldError) -> Self {
        Self {
            details: vec![detail],
        }
    }

    pub fn not_an_object() -> Self {
        Self::single(FieldError::new("value", "\"value\" must be of type object"))
    }

    fn summary(&self) -> String {
        self.details
            .iter()
            .map(|detail| detail.message.as_str())
            .collect::<Vec<_>>()
            .join("; ")
    }
}

/// Reads a string field from a JSON object, recording a violation if it is
/// absent, not a string, or empty.
pub(crate) fn required_string<'a>(
    body: &'a Map<String, Value>,
    field: &str,
    errors: &mut Vec<FieldError>,
) -> Option<&'a str> {
    match body.get(field) {
        None | Some(Value::Null) => {
            errors.push(FieldError::required(field));
            None
        }
        Some(value) => non_empty_string(value, field, errors),
    }
}

pub(crate) fn non_empty_string<'a>(
    value: &'a Value,
    field: &str,
    errors: &mut Vec<FieldError>,
) -> Option<&'a str> {
    match value {
        Value::String(s) if s.is_empty() => {
            errors.push(FieldError::empty(field));
            None
        }
        Value::String(s) => Some(s.as_str()),
        _ => {
            errors.push(FieldError::not_a_string(field));
            None
        }
    }
}

/// Records a violation for every key outside `allowed`.
pub(crate) fn reject_unknown_keys(
    body: &Map<String, Value>,
    allowed: &[&str],
    errors: &mut Vec<FieldError>,
) {
    errors.extend(
        body.keys()
            .filter(|key| !allowed.contains(&key.as_str()))
            .map(|key| FieldError::not_allowed(key)),
    );
}
