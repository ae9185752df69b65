use accounts_core::{
    CredentialError, CredentialManager, CredentialPair, UserId, UserStore, UserStoreError,
};

/// Error types for register use case
#[derive(Debug, thiserror::Error)]
pub enum RegisterError {
    #[error("User already exists")]
    UserAlreadyExists,
    #[error("User store error: {0}")]
    UserStoreError(UserStoreError),
    #[error("Credential error: {0}")]
    CredentialError(#[from] CredentialError),
}

impl From<UserStoreError> for RegisterError {
    fn from(error: UserStoreError) -> Self {
        match error {
            UserStoreError::UserAlreadyExists => RegisterError::UserAlreadyExists,
            other => RegisterError::UserStoreError(other),
        }
    }
}

/// Register use case - creates a new identity record
pub struct RegisterUseCase<'a, U, C>
where
    U: UserStore,
    C: CredentialManager,
{
    user_store: &'a U,
    credential_manager: &'a C,
}

impl<'a, U, C> RegisterUseCase<'a, U, C>
where
    U: UserStore,
    C: CredentialManager,
{
    pub fn new(user_store: &'a U, credential_manager: &'a C) -> Self {
        Self {
            user_store,
            credential_manager,
        }
    }

    /// Execute the register use case
    ///
    /// The existence check and the insert are two separate store calls, so two
    /// concurrent registrations of the same email can both pass the check. A
    /// store with a unique index turns the loser's insert into
    /// `UserAlreadyExists`; the in-memory store does the same under its lock.
    ///
    /// # Returns
    /// The id of the new record, or RegisterError
    #[tracing::instrument(
        name = "RegisterUseCase::execute",
        skip(self, credentials),
        fields(email = %credentials.email)
    )]
    pub async fn execute(&self, credentials: CredentialPair) -> Result<UserId, RegisterError> {
        let (email, password) = credentials.into_parts();

        if self.user_store.find_by_email(&email).await?.is_some() {
            return Err(RegisterError::UserAlreadyExists);
        }

        let password_hash = self.credential_manager.hash(password).await?;
        let id = self.user_store.insert(&email, password_hash).await?;

        tracing::info!(user_id = %id, "User registered");
        Ok(id)
    }
}
