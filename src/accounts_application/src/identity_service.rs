use accounts_core::{
    CredentialManager, CredentialPair, Token, TokenIssuer, User, UserId, UserStore,
    UserStoreError, UserUpdate,
};

use crate::use_cases::{
    delete_user::{DeleteUserError, DeleteUserUseCase},
    get_user::{GetUserError, GetUserUseCase},
    list_users::ListUsersUseCase,
    login::{LoginError, LoginUseCase},
    register::{RegisterError, RegisterUseCase},
    update_user::{UpdateUserError, UpdateUserUseCase},
};

/// Entry point for the identity record lifecycle.
///
/// All collaborators are injected at construction. Cloning is cheap as long as
/// the collaborators share their state internally (stores hold an `Arc`, a pool,
/// or similar).
#[derive(Clone)]
pub struct IdentityService<U, C, T> {
    user_store: U,
    credential_manager: C,
    token_issuer: T,
}

impl<U, C, T> IdentityService<U, C, T>
where
    U: UserStore,
    C: CredentialManager,
    T: TokenIssuer,
{
    pub fn new(user_store: U, credential_manager: C, token_issuer: T) -> Self {
        Self {
            user_store,
            credential_manager,
            token_issuer,
        }
    }

    pub fn user_store(&self) -> &U {
        &self.user_store
    }

    pub async fn register(&self, credentials: CredentialPair) -> Result<UserId, RegisterError> {
        RegisterUseCase::new(&self.user_store, &self.credential_manager)
            .execute(credentials)
            .await
    }

    pub async fn authenticate(&self, credentials: CredentialPair) -> Result<Token, LoginError> {
        LoginUseCase::new(
            &self.user_store,
            &self.credential_manager,
            &self.token_issuer,
        )
        .execute(credentials)
        .await
    }

    pub async fn list_users(&self) -> Result<Vec<User>, UserStoreError> {
        ListUsersUseCase::new(&self.user_store).execute().await
    }

    pub async fn get_user(&self, id: UserId) -> Result<User, GetUserError> {
        GetUserUseCase::new(&self.user_store).execute(id).await
    }

    pub async fn update_user(
        &self,
        id: UserId,
        update: UserUpdate,
    ) -> Result<User, UpdateUserError> {
        UpdateUserUseCase::new(&self.user_store, &self.credential_manager)
            .execute(id, update)
            .await
    }

    pub async fn delete_user(&self, id: UserId) -> Result<(), DeleteUserError> {
        DeleteUserUseCase::new(&self.user_store).execute(id).await
    }
}
