use accounts_core::{User, UserId, UserStore, UserStoreError};

/// Error types for get user use case
#[derive(Debug, thiserror::Error)]
pub enum GetUserError {
    #[error("User not found")]
    UserNotFound,
    #[error("User store error: {0}")]
    UserStoreError(#[from] UserStoreError),
}

/// Get user use case - looks up a single record by id
pub struct GetUserUseCase<'a, U>
where
    U: UserStore,
{
    user_store: &'a U,
}

impl<'a, U> GetUserUseCase<'a, U>
where
    U: UserStore,
{
    pub fn new(user_store: &'a U) -> Self {
        Self { user_store }
    }

    #[tracing::instrument(name = "GetUserUseCase::execute", skip(self))]
    pub async fn execute(&self, id: UserId) -> Result<User, GetUserError> {
        self.user_store
            .find_by_id(id)
            .await?
            .ok_or(GetUserError::UserNotFound)
    }
}
