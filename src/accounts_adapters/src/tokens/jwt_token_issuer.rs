use accounts_core::{Email, Token, TokenError, TokenIssuer, TokenVerifier};
use chrono::Utc;
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use secrecy::{ExposeSecret, Secret};
use serde::{Deserialize, Serialize};

#[derive(Clone)]
pub struct JwtAuthConfig {
    pub jwt_secret: Secret<String>,
    pub token_ttl_in_seconds: i64,
}

impl JwtAuthConfig {
    pub fn as_bytes(&self) -> &[u8] {
        self.jwt_secret.expose_secret().as_bytes()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// The authenticated email address.
    pub sub: String,
    /// Issued at, seconds since the epoch.
    pub iat: usize,
    /// Expiry, seconds since the epoch.
    pub exp: usize,
}

/// Issues and verifies HS256 JWTs signed with a process-wide secret.
#[derive(Clone)]
pub struct JwtTokenIssuer {
    config: JwtAuthConfig,
}

impl JwtTokenIssuer {
    pub fn new(config: JwtAuthConfig) -> Self {
        Self { config }
    }

    fn secret(&self) -> Result<&[u8], TokenError> {
        let secret = self.config.as_bytes();
        if secret.is_empty() {
            return Err(TokenError::MissingSecret);
        }
        Ok(secret)
    }
}

impl TokenIssuer for JwtTokenIssuer {
    fn issue(&self, email: &Email) -> Result<Token, TokenError> {
        let secret = self.secret()?;
        let delta = chrono::Duration::try_seconds(self.config.token_ttl_in_seconds).ok_or(
            TokenError::UnexpectedError("Failed to create auth token duration".to_string()),
        )?;

        let now = Utc::now();
        let exp = now
            .checked_add_signed(delta)
            .ok_or(TokenError::UnexpectedError(
                "Duration out of range".to_string(),
            ))?
            .timestamp();

        let claims = Claims {
            sub: email.to_string(),
            iat: to_usize(now.timestamp())?,
            exp: to_usize(exp)?,
        };

        encode(&Header::default(), &claims, &EncodingKey::from_secret(secret))
            .map(Token::from)
            .map_err(|e| TokenError::SigningError(e.to_string()))
    }
}

impl TokenVerifier for JwtTokenIssuer {
    type Claims = Claims;

    fn verify(&self, token: &str) -> Result<Self::Claims, TokenError> {
        let secret = self.secret()?;

        decode::<Claims>(
            token,
            &DecodingKey::from_secret(secret),
            &Validation::default(),
        )
        .map(|data| data.claims)
        .map_err(|e| {
            tracing::debug!(error = %e, "Rejected bearer token");
            TokenError::InvalidToken
        })
    }
}

fn to_usize(timestamp: i64) -> Result<usize, TokenError> {
    timestamp
        .try_into()
        .map_err(|_| TokenError::UnexpectedError("Failed to cast i64 to usize".to_string()))
}
