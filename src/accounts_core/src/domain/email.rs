use std::{fmt, sync::LazyLock};

use regex::Regex;
use serde::{Serialize, Serializer};
use thiserror::Error;

const MAX_EMAIL_LENGTH: usize = 254;
const MAX_LOCAL_PART_LENGTH: usize = 64;

static EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$")
        .expect("hardcoded email regex is valid")
});

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EmailError {
    #[error("\"email\" is not allowed to be empty")]
    Empty,
    #[error("\"email\" must be a valid email")]
    Invalid,
}

/// A syntactically valid email address, kept exactly as submitted.
///
/// No case folding or trimming is applied: two addresses are the same identity
/// only if they are byte-for-byte equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Email(String);

impl Email {
    pub fn parse(candidate: impl Into<String>) -> Result<Self, EmailError> {
        let candidate = candidate.into();

        if candidate.is_empty() {
            return Err(EmailError::Empty);
        }

        if candidate.len() > MAX_EMAIL_LENGTH
            || !EMAIL_REGEX.is_match(&candidate)
            || !has_well_formed_parts(&candidate)
        {
            return Err(EmailError::Invalid);
        }

        Ok(Self(candidate))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

/// Dot-separated parts may not be empty, and domain labels may not start or
/// end with a hyphen.
fn has_well_formed_parts(candidate: &str) -> bool {
    let Some((local, domain)) = candidate.split_once('@') else {
        return false;
    };

    local.len() <= MAX_LOCAL_PART_LENGTH
        && local.split('.').all(|part| !part.is_empty())
        && domain
            .split('.')
            .all(|label| !label.is_empty() && !label.starts_with('-') && !label.ends_with('-'))
}

impl TryFrom<String> for Email {
    type Error = EmailError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl TryFrom<&str> for Email {
    type Error = EmailError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl AsRef<str> for Email {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Email {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Serialize for Email {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}
