use accounts_core::{UserId, UserStore, UserStoreError};

/// Error types for delete user use case
#[derive(Debug, thiserror::Error)]
pub enum DeleteUserError {
    #[error("User not found")]
    UserNotFound,
    #[error("User store error: {0}")]
    UserStoreError(#[from] UserStoreError),
}

/// Delete user use case - removes a record immediately and irreversibly
pub struct DeleteUserUseCase<'a, U>
where
    U: UserStore,
{
    user_store: &'a U,
}

impl<'a, U> DeleteUserUseCase<'a, U>
where
    U: UserStore,
{
    pub fn new(user_store: &'a U) -> Self {
        Self { user_store }
    }

    #[tracing::instrument(name = "DeleteUserUseCase::execute", skip(self))]
    pub async fn execute(&self, id: UserId) -> Result<(), DeleteUserError> {
        if !self.user_store.delete(id).await? {
            return Err(DeleteUserError::UserNotFound);
        }

        tracing::info!(user_id = %id, "User deleted");
        Ok(())
    }
}
