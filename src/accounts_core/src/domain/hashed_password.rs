use secrecy::{ExposeSecret, Secret};

/// Output of a one-way password hash, in whatever self-describing format the
/// credential manager produces (PHC strings for Argon2).
///
/// Only a credential manager constructs values for new users; stores rebuild
/// them from persisted rows with [`HashedPassword::from_stored`].
#[derive(Debug, Clone)]
pub struct HashedPassword(Secret<String>);

impl HashedPassword {
    pub fn from_stored(hash: impl Into<String>) -> Self {
        Self(Secret::new(hash.into()))
    }

    pub fn expose(&self) -> &str {
        self.0.expose_secret()
    }
}

impl PartialEq for HashedPassword {
    fn eq(&self, other: &Self) -> bool {
        self.expose() == other.expose()
    }
}

impl Eq for HashedPassword {}
