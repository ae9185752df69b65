use accounts_core::{CredentialError, CredentialManager, HashedPassword, Password};
use argon2::{
    Algorithm, Argon2, Params, PasswordHash, PasswordVerifier, Version,
    password_hash::{self, PasswordHasher, SaltString, rand_core},
};
use secrecy::ExposeSecret;
use serde::Deserialize;

/// Argon2id cost parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct HashingParams {
    pub memory_kib: u32,
    pub iterations: u32,
    pub parallelism: u32,
}

impl Default for HashingParams {
    fn default() -> Self {
        Self {
            memory_kib: 15000,
            iterations: 2,
            parallelism: 1,
        }
    }
}

impl HashingParams {
    fn hasher(&self) -> Result<Argon2<'static>, CredentialError> {
        let params = Params::new(self.memory_kib, self.iterations, self.parallelism, None)
            .map_err(|e| CredentialError::UnexpectedError(e.to_string()))?;
        Ok(Argon2::new(Algorithm::Argon2id, Version::V0x13, params))
    }
}

/// Argon2id password hashing producing PHC strings.
///
/// Hashing is CPU-bound, so both operations run on the blocking pool inside the
/// caller's span.
#[derive(Debug, Clone, Copy, Default)]
pub struct Argon2CredentialManager {
    params: HashingParams,
}

impl Argon2CredentialManager {
    pub fn new(params: HashingParams) -> Self {
        Self { params }
    }
}

#[async_trait::async_trait]
impl CredentialManager for Argon2CredentialManager {
    #[tracing::instrument(name = "Computing password hash", skip_all)]
    async fn hash(&self, password: Password) -> Result<HashedPassword, CredentialError> {
        let current_span: tracing::Span = tracing::Span::current();
        let params = self.params;

        tokio::task::spawn_blocking(move || {
            current_span.in_scope(move || {
                let salt = SaltString::generate(&mut rand_core::OsRng);
                params
                    .hasher()?
                    .hash_password(password.as_ref().expose_secret().as_bytes(), &salt)
                    .map(|h| HashedPassword::from_stored(h.to_string()))
                    .map_err(|e| CredentialError::UnexpectedError(e.to_string()))
            })
        })
        .await
        .map_err(|e| CredentialError::UnexpectedError(e.to_string()))?
    }

    #[tracing::instrument(name = "Verify password hash", skip_all)]
    async fn verify(
        &self,
        hash: &HashedPassword,
        candidate: Password,
    ) -> Result<bool, CredentialError> {
        let current_span: tracing::Span = tracing::Span::current();
        let expected = hash.clone();
        let params = self.params;

        tokio::task::spawn_blocking(move || {
            current_span.in_scope(move || {
                let expected_hash = PasswordHash::new(expected.expose())
                    .map_err(|e| CredentialError::MalformedHash(e.to_string()))?;

                // The algorithm and cost stored in the PHC string take precedence
                // over `params`, so hashes made with older settings still verify.
                match params
                    .hasher()?
                    .verify_password(candidate.as_ref().expose_secret().as_bytes(), &expected_hash)
                {
                    Ok(()) => Ok(true),
                    Err(password_hash::Error::Password) => Ok(false),
                    Err(e) => Err(CredentialError::MalformedHash(e.to_string())),
                }
            })
        })
        .await
        .map_err(|e| CredentialError::UnexpectedError(e.to_string()))?
    }
}
