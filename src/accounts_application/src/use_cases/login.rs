use accounts_core::{
    CredentialError, CredentialManager, CredentialPair, Token, TokenError, TokenIssuer, UserStore,
    UserStoreError,
};

/// Error types specific to login use case
#[derive(Debug, thiserror::Error)]
pub enum LoginError {
    /// Unknown email or wrong password.
    #[error("Invalid credentials")]
    InvalidCredentials,
    #[error("User store error: {0}")]
    UserStoreError(#[from] UserStoreError),
    #[error("Credential error: {0}")]
    CredentialError(#[from] CredentialError),
    #[error("Token error: {0}")]
    TokenError(#[from] TokenError),
}

/// Login use case - verifies credentials and issues a bearer token
pub struct LoginUseCase<'a, U, C, T>
where
    U: UserStore,
    C: CredentialManager,
    T: TokenIssuer,
{
    user_store: &'a U,
    credential_manager: &'a C,
    token_issuer: &'a T,
}

impl<'a, U, C, T> LoginUseCase<'a, U, C, T>
where
    U: UserStore,
    C: CredentialManager,
    T: TokenIssuer,
{
    pub fn new(user_store: &'a U, credential_manager: &'a C, token_issuer: &'a T) -> Self {
        Self {
            user_store,
            credential_manager,
            token_issuer,
        }
    }

    /// Execute the login use case
    ///
    /// # Returns
    /// A token claiming the user's email, or LoginError
    #[tracing::instrument(
        name = "LoginUseCase::execute",
        skip(self, credentials),
        fields(email = %credentials.email)
    )]
    pub async fn execute(&self, credentials: CredentialPair) -> Result<Token, LoginError> {
        let (email, password) = credentials.into_parts();

        let Some(user) = self.user_store.find_by_email(&email).await? else {
            tracing::debug!("Login attempt for unknown email");
            return Err(LoginError::InvalidCredentials);
        };

        let verified = self
            .credential_manager
            .verify(user.password_hash(), password)
            .await?;

        if !verified {
            tracing::debug!(user_id = %user.id(), "Login attempt with wrong password");
            return Err(LoginError::InvalidCredentials);
        }

        let token = self.token_issuer.issue(user.email())?;
        Ok(token)
    }
}
