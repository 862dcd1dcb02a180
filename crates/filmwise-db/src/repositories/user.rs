//! PostgreSQL implementation of UserRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use filmwise_core::entities::{NewUser, User};
use filmwise_core::error::DomainError;
use filmwise_core::traits::{RepoResult, UserRepository};

use crate::deadline::QueryDeadline;
use crate::models::UserModel;

use super::error::map_unique_violation;

/// PostgreSQL implementation of UserRepository
#[derive(Clone)]
pub struct PgUserRepository {
    pool: PgPool,
    deadline: QueryDeadline,
}

impl PgUserRepository {
    /// Create a new PgUserRepository
    pub fn new(pool: PgPool) -> Self {
        Self {
            pool,
            deadline: QueryDeadline::default(),
        }
    }

    pub fn with_deadline(mut self, deadline: QueryDeadline) -> Self {
        self.deadline = deadline;
        self
    }
}

#[async_trait]
impl UserRepository for PgUserRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<User>> {
        let result = self
            .deadline
            .run(
                sqlx::query_as::<_, UserModel>(
                    r"
                    SELECT id, full_name, email, user_type, created_at, updated_at
                    FROM users
                    WHERE id = $1
                    ",
                )
                .bind(id)
                .fetch_optional(&self.pool),
            )
            .await?;

        Ok(result.map(User::from))
    }

    #[instrument(skip(self))]
    async fn find_by_email(&self, email: &str) -> RepoResult<Option<User>> {
        let result = self
            .deadline
            .run(
                sqlx::query_as::<_, UserModel>(
                    r"
                    SELECT id, full_name, email, user_type, created_at, updated_at
                    FROM users
                    WHERE email = LOWER($1)
                    ",
                )
                .bind(email)
                .fetch_optional(&self.pool),
            )
            .await?;

        Ok(result.map(User::from))
    }

    #[instrument(skip(self))]
    async fn email_exists(&self, email: &str) -> RepoResult<bool> {
        self.deadline
            .run(
                sqlx::query_scalar::<_, bool>(
                    "SELECT EXISTS(SELECT 1 FROM users WHERE email = LOWER($1))",
                )
                .bind(email)
                .fetch_one(&self.pool),
            )
            .await
    }

    #[instrument(skip(self, user, password_hash), fields(email = %user.email))]
    async fn create(&self, user: &NewUser, password_hash: &str) -> RepoResult<User> {
        let model = self
            .deadline
            .run_with(
                sqlx::query_as::<_, UserModel>(
                    r"
                    INSERT INTO users (full_name, email, password_hash, user_type)
                    VALUES ($1, LOWER($2), $3, $4)
                    RETURNING id, full_name, email, user_type, created_at, updated_at
                    ",
                )
                .bind(&user.full_name)
                .bind(&user.email)
                .bind(password_hash)
                .bind(user.user_type.as_str())
                .fetch_one(&self.pool),
                |e| map_unique_violation(e, || DomainError::EmailAlreadyExists),
            )
            .await?;

        Ok(model.into())
    }

    #[instrument(skip(self))]
    async fn get_password_hash(&self, id: i64) -> RepoResult<Option<String>> {
        self.deadline
            .run(
                sqlx::query_scalar::<_, String>("SELECT password_hash FROM users WHERE id = $1")
                    .bind(id)
                    .fetch_optional(&self.pool),
            )
            .await
    }
}
