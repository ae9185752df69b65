use accounts_core::{
    CredentialError, CredentialManager, User, UserChanges, UserId, UserStore, UserStoreError,
    UserUpdate,
};

/// Error types for update user use case
#[derive(Debug, thiserror::Error)]
pub enum UpdateUserError {
    #[error("User not found")]
    UserNotFound,
    #[error("User already exists")]
    UserAlreadyExists,
    #[error("User store error: {0}")]
    UserStoreError(UserStoreError),
    #[error("Credential error: {0}")]
    CredentialError(#[from] CredentialError),
}

impl From<UserStoreError> for UpdateUserError {
    fn from(error: UserStoreError) -> Self {
        match error {
            UserStoreError::UserAlreadyExists => UpdateUserError::UserAlreadyExists,
            other => UpdateUserError::UserStoreError(other),
        }
    }
}

/// Update user use case - overwrites the mutable fields of a record
pub struct UpdateUserUseCase<'a, U, C>
where
    U: UserStore,
    C: CredentialManager,
{
    user_store: &'a U,
    credential_manager: &'a C,
}

impl<'a, U, C> UpdateUserUseCase<'a, U, C>
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

    /// Execute the update user use case
    ///
    /// A new password is hashed before it reaches the store. The lookup and the
    /// write are separate calls; a record deleted in between is reported as
    /// not found.
    ///
    /// # Returns
    /// The record as stored after the update, or UpdateUserError
    #[tracing::instrument(name = "UpdateUserUseCase::execute", skip(self, update))]
    pub async fn execute(&self, id: UserId, update: UserUpdate) -> Result<User, UpdateUserError> {
        if self.user_store.find_by_id(id).await?.is_none() {
            return Err(UpdateUserError::UserNotFound);
        }

        let password_hash = match update.password {
            Some(password) => Some(self.credential_manager.hash(password).await?),
            None => None,
        };

        let changes = UserChanges {
            email: update.email,
            password_hash,
        };

        self.user_store
            .update(id, changes)
            .await?
            .ok_or(UpdateUserError::UserNotFound)
    }
}
