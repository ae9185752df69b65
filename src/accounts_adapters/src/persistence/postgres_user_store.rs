use accounts_core::{
    Email, HashedPassword, User, UserChanges, UserId, UserStore, UserStoreError,
};
use sqlx::{FromRow, PgPool};

#[derive(Clone)]
pub struct PostgresUserStore {
    pool: PgPool,
}

impl PostgresUserStore {
    pub fn new(pool: PgPool) -> Self {
        PostgresUserStore { pool }
    }
}

#[derive(FromRow)]
struct UserRow {
    id: i64,
    email: String,
    password_hash: String,
}

impl TryFrom<UserRow> for User {
    type Error = UserStoreError;

    fn try_from(row: UserRow) -> Result<Self, Self::Error> {
        let email = Email::parse(row.email)
            .map_err(|e| UserStoreError::UnexpectedError(format!("stored email: {e}")))?;
        Ok(User::new(
            UserId::new(row.id),
            email,
            HashedPassword::from_stored(row.password_hash),
        ))
    }
}

fn map_write_error(e: sqlx::Error) -> UserStoreError {
    if let Some(db_err) = e.as_database_error() {
        if db_err.is_unique_violation() {
            return UserStoreError::UserAlreadyExists;
        }
    }
    UserStoreError::UnexpectedError(e.to_string())
}

fn map_read_error(e: sqlx::Error) -> UserStoreError {
    UserStoreError::UnexpectedError(e.to_string())
}

#[async_trait::async_trait]
impl UserStore for PostgresUserStore {
    #[tracing::instrument(name = "Retrieving user by email from PostgreSQL", skip_all)]
    async fn find_by_email(&self, email: &Email) -> Result<Option<User>, UserStoreError> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
                SELECT id, email, password_hash
                FROM users
                WHERE email = $1
            "#,
        )
        .bind(email.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_read_error)?;

        row.map(User::try_from).transpose()
    }

    #[tracing::instrument(name = "Retrieving user by id from PostgreSQL", skip_all)]
    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, UserStoreError> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
                SELECT id, email, password_hash
                FROM users
                WHERE id = $1
            "#,
        )
        .bind(id.value())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_read_error)?;

        row.map(User::try_from).transpose()
    }

    #[tracing::instrument(name = "Adding user to PostgreSQL", skip_all)]
    async fn insert(
        &self,
        email: &Email,
        password_hash: HashedPassword,
    ) -> Result<UserId, UserStoreError> {
        let id: i64 = sqlx::query_scalar(
            r#"
                INSERT INTO users (email, password_hash)
                VALUES ($1, $2)
                RETURNING id
            "#,
        )
        .bind(email.as_str())
        .bind(password_hash.expose())
        .fetch_one(&self.pool)
        .await
        .map_err(map_write_error)?;

        Ok(UserId::new(id))
    }

    #[tracing::instrument(name = "Listing users from PostgreSQL", skip_all)]
    async fn list_all(&self) -> Result<Vec<User>, UserStoreError> {
        let rows = sqlx::query_as::<_, UserRow>(
            r#"
                SELECT id, email, password_hash
                FROM users
                ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_read_error)?;

        rows.into_iter().map(User::try_from).collect()
    }

    #[tracing::instrument(name = "Updating user in PostgreSQL", skip_all)]
    async fn update(
        &self,
        id: UserId,
        changes: UserChanges,
    ) -> Result<Option<User>, UserStoreError> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
                UPDATE users
                SET email = COALESCE($1, email),
                    password_hash = COALESCE($2, password_hash)
                WHERE id = $3
                RETURNING id, email, password_hash
            "#,
        )
        .bind(changes.email.as_ref().map(Email::as_str))
        .bind(changes.password_hash.as_ref().map(HashedPassword::expose))
        .bind(id.value())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_write_error)?;

        row.map(User::try_from).transpose()
    }

    #[tracing::instrument(name = "Delete user from PostgreSQL", skip_all)]
    async fn delete(&self, id: UserId) -> Result<bool, UserStoreError> {
        let result = sqlx::query(
            r#"
                DELETE FROM users
                WHERE id = $1
            "#,
        )
        .bind(id.value())
        .execute(&self.pool)
        .await
        .map_err(|e| UserStoreError::UnexpectedError(e.to_string()))?;

        Ok(result.rows_affected() > 0)
    }
}
