use accounts_core::{User, UserStore, UserStoreError};

/// List users use case - returns every stored record
pub struct ListUsersUseCase<'a, U>
where
    U: UserStore,
{
    user_store: &'a U,
}

impl<'a, U> ListUsersUseCase<'a, U>
where
    U: UserStore,
{
    pub fn new(user_store: &'a U) -> Self {
        Self { user_store }
    }

    #[tracing::instrument(name = "ListUsersUseCase::execute", skip(self))]
    pub async fn execute(&self) -> Result<Vec<User>, UserStoreError> {
        self.user_store.list_all().await
    }
}
