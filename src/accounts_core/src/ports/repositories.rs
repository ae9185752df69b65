use async_trait::async_trait;
use thiserror::Error;

use crate::domain::{
    email::Email,
    hashed_password::HashedPassword,
    user::{User, UserChanges},
    user_id::UserId,
};

// UserStore port trait and errors
#[derive(Debug, Error)]
pub enum UserStoreError {
    #[error("User already exists")]
    UserAlreadyExists,
    #[error("Unexpected error {0}")]
    UnexpectedError(String),
}

impl PartialEq for UserStoreError {
    fn eq(&self, other: &Self) -> bool {
        matches!(
            (self, other),
            (Self::UserAlreadyExists, Self::UserAlreadyExists)
                | (Self::UnexpectedError(_), Self::UnexpectedError(_))
        )
    }
}

/// Persistence of identity records.
///
/// Every operation touches a single row and none of them are transactional.
/// A missing record is reported as `None`/`false`, never as an error.
#[async_trait]
pub trait UserStore: Send + Sync {
    async fn find_by_email(&self, email: &Email) -> Result<Option<User>, UserStoreError>;

    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, UserStoreError>;

    /// Inserts a new record and returns its freshly assigned id.
    ///
    /// Callers check for an existing email first. Stores backed by a unique
    /// index also reject duplicates here with `UserAlreadyExists`.
    async fn insert(
        &self,
        email: &Email,
        password_hash: HashedPassword,
    ) -> Result<UserId, UserStoreError>;

    /// All records, ordered by id.
    async fn list_all(&self) -> Result<Vec<User>, UserStoreError>;

    async fn update(
        &self,
        id: UserId,
        changes: UserChanges,
    ) -> Result<Option<User>, UserStoreError>;

    /// Returns whether a row was removed.
    async fn delete(&self, id: UserId) -> Result<bool, UserStoreError>;
}
