use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use accounts_core::{
    Email, HashedPassword, User, UserChanges, UserId, UserStore, UserStoreError,
};

#[derive(Default)]
struct Table {
    users: BTreeMap<UserId, User>,
    last_id: i64,
}

impl Table {
    fn email_taken(&self, email: &Email, except: Option<UserId>) -> bool {
        self.users
            .values()
            .any(|user| user.email() == email && Some(user.id()) != except)
    }
}

/// In-memory user store.
///
/// Ids start at 1 and are never reused. Duplicate emails are rejected on
/// insert and update, like a unique index would.
#[derive(Default, Clone)]
pub struct HashMapUserStore {
    table: Arc<RwLock<Table>>,
}

impl HashMapUserStore {
    pub fn new() -> Self {
        Self {
            table: Arc::new(RwLock::new(Table::default())),
        }
    }
}

#[async_trait::async_trait]
impl UserStore for HashMapUserStore {
    async fn find_by_email(&self, email: &Email) -> Result<Option<User>, UserStoreError> {
        let table = self.table.read().await;
        Ok(table
            .users
            .values()
            .find(|user| user.email() == email)
            .cloned())
    }

    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, UserStoreError> {
        let table = self.table.read().await;
        Ok(table.users.get(&id).cloned())
    }

    async fn insert(
        &self,
        email: &Email,
        password_hash: HashedPassword,
    ) -> Result<UserId, UserStoreError> {
        let mut table = self.table.write().await;
        if table.email_taken(email, None) {
            return Err(UserStoreError::UserAlreadyExists);
        }

        table.last_id += 1;
        let id = UserId::new(table.last_id);
        table
            .users
            .insert(id, User::new(id, email.clone(), password_hash));
        Ok(id)
    }

    async fn list_all(&self) -> Result<Vec<User>, UserStoreError> {
        let table = self.table.read().await;
        Ok(table.users.values().cloned().collect())
    }

    async fn update(
        &self,
        id: UserId,
        changes: UserChanges,
    ) -> Result<Option<User>, UserStoreError> {
        let mut table = self.table.write().await;
        if let Some(email) = &changes.email {
            if table.email_taken(email, Some(id)) {
                return Err(UserStoreError::UserAlreadyExists);
            }
        }

        Ok(table.users.get_mut(&id).map(|user| {
            user.apply(changes);
            user.clone()
        }))
    }

    async fn delete(&self, id: UserId) -> Result<bool, UserStoreError> {
        let mut table = self.table.write().await;
        Ok(table.users.remove(&id).is_some())
    }
}
