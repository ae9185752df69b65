//! Hand-rolled collaborators shared by the use case tests.

use std::collections::BTreeMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};

use accounts_core::{
    CredentialError, CredentialManager, Email, HashedPassword, Password, Token, TokenError,
    TokenIssuer, User, UserChanges, UserId, UserStore, UserStoreError,
};
use secrecy::ExposeSecret;
use tokio::sync::RwLock;

#[derive(Default)]
struct Rows {
    users: BTreeMap<UserId, User>,
    last_id: i64,
}

#[derive(Clone, Default)]
pub struct MockUserStore {
    rows: Arc<RwLock<Rows>>,
    unavailable: Arc<AtomicBool>,
    stale_reads: Arc<AtomicBool>,
}

impl MockUserStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable.store(unavailable, Ordering::SeqCst);
    }

    /// Makes `find_by_email` miss every record, as when a concurrent insert
    /// lands between the existence check and the write.
    pub fn set_stale_reads(&self, stale: bool) {
        self.stale_reads.store(stale, Ordering::SeqCst);
    }

    pub async fn seed(&self, email: &str, hash: &str) -> UserId {
        let email = Email::parse(email).unwrap();
        self.insert(&email, HashedPassword::from_stored(hash))
            .await
            .unwrap()
    }

    pub async fn get(&self, id: UserId) -> Option<User> {
        self.rows.read().await.users.get(&id).cloned()
    }

    pub async fn len(&self) -> usize {
        self.rows.read().await.users.len()
    }

    fn check_available(&self) -> Result<(), UserStoreError> {
        if self.unavailable.load(Ordering::SeqCst) {
            return Err(UserStoreError::UnexpectedError(
                "connection refused".to_string(),
            ));
        }
        Ok(())
    }
}

#[async_trait::async_trait]
impl UserStore for MockUserStore {
    async fn find_by_email(&self, email: &Email) -> Result<Option<User>, UserStoreError> {
        self.check_available()?;
        if self.stale_reads.load(Ordering::SeqCst) {
            return Ok(None);
        }
        let rows = self.rows.read().await;
        Ok(rows.users.values().find(|u| u.email() == email).cloned())
    }

    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, UserStoreError> {
        self.check_available()?;
        Ok(self.rows.read().await.users.get(&id).cloned())
    }

    async fn insert(
        &self,
        email: &Email,
        password_hash: HashedPassword,
    ) -> Result<UserId, UserStoreError> {
        self.check_available()?;
        let mut rows = self.rows.write().await;
        if rows.users.values().any(|u| u.email() == email) {
            return Err(UserStoreError::UserAlreadyExists);
        }
        rows.last_id += 1;
        let id = UserId::new(rows.last_id);
        rows.users
            .insert(id, User::new(id, email.clone(), password_hash));
        Ok(id)
    }

    async fn list_all(&self) -> Result<Vec<User>, UserStoreError> {
        self.check_available()?;
        Ok(self.rows.read().await.users.values().cloned().collect())
    }

    async fn update(
        &self,
        id: UserId,
        changes: UserChanges,
    ) -> Result<Option<User>, UserStoreError> {
        self.check_available()?;
        let mut rows = self.rows.write().await;
        if let Some(email) = &changes.email {
            if rows.users.values().any(|u| u.id() != id && u.email() == email) {
                return Err(UserStoreError::UserAlreadyExists);
            }
        }
        Ok(rows.users.get_mut(&id).map(|user| {
            user.apply(changes);
            user.clone()
        }))
    }

    async fn delete(&self, id: UserId) -> Result<bool, UserStoreError> {
        self.check_available()?;
        Ok(self.rows.write().await.users.remove(&id).is_some())
    }
}

/// Salted but trivially reversible "hash": `mock$<salt>$<plaintext>`.
#[derive(Clone, Default)]
pub struct MockCredentialManager {
    salt: Arc<AtomicU64>,
}

#[async_trait::async_trait]
impl CredentialManager for MockCredentialManager {
    async fn hash(&self, password: Password) -> Result<HashedPassword, CredentialError> {
        let salt = self.salt.fetch_add(1, Ordering::SeqCst);
        Ok(HashedPassword::from_stored(format!(
            "mock${salt}${}",
            password.as_ref().expose_secret()
        )))
    }

    async fn verify(
        &self,
        hash: &HashedPassword,
        candidate: Password,
    ) -> Result<bool, CredentialError> {
        let mut parts = hash.expose().splitn(3, '$');
        match (parts.next(), parts.next(), parts.next()) {
            (Some("mock"), Some(_), Some(expected)) => {
                Ok(expected == candidate.as_ref().expose_secret())
            }
            _ => Err(CredentialError::MalformedHash(
                "not a mock hash".to_string(),
            )),
        }
    }
}

#[derive(Clone, Default)]
pub struct MockTokenIssuer {
    pub missing_secret: bool,
}

impl TokenIssuer for MockTokenIssuer {
    fn issue(&self, email: &Email) -> Result<Token, TokenError> {
        if self.missing_secret {
            return Err(TokenError::MissingSecret);
        }
        Ok(Token::new(format!("token-for:{email}")))
    }
}

pub fn email(raw: &str) -> Email {
    Email::parse(raw).unwrap()
}

pub fn password(raw: &str) -> Password {
    Password::parse(secrecy::Secret::new(raw.to_string())).unwrap()
}

pub fn credentials(email_raw: &str, password_raw: &str) -> accounts_core::CredentialPair {
    accounts_core::CredentialPair::new(email(email_raw), password(password_raw))
}
