//! PostgreSQL implementation of FavoriteRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use filmwise_core::error::DomainError;
use filmwise_core::traits::{FavoriteRepository, RepoResult};

use crate::deadline::QueryDeadline;

use super::error::map_foreign_key_violation;

/// PostgreSQL implementation of FavoriteRepository
#[derive(Clone)]
pub struct PgFavoriteRepository {
    pool: PgPool,
    deadline: QueryDeadline,
}

impl PgFavoriteRepository {
    /// Create a new PgFavoriteRepository
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
impl FavoriteRepository for PgFavoriteRepository {
    #[instrument(skip(self))]
    async fn exists(&self, user_id: i64, movie_id: i64) -> RepoResult<bool> {
        self.deadline
            .run(
                sqlx::query_scalar::<_, bool>(
                    r"
                    SELECT EXISTS(SELECT 1 FROM favorites WHERE user_id = $1 AND movie_id = $2)
                    ",
                )
                .bind(user_id)
                .bind(movie_id)
                .fetch_one(&self.pool),
            )
            .await
    }

    #[instrument(skip(self))]
    async fn add(&self, user_id: i64, movie_id: i64) -> RepoResult<bool> {
        let result = self
            .deadline
            .run_with(
                sqlx::query(
                    r"
                    INSERT INTO favorites (user_id, movie_id)
                    VALUES ($1, $2)
                    ON CONFLICT (user_id, movie_id) DO NOTHING
                    ",
                )
                .bind(user_id)
                .bind(movie_id)
                .execute(&self.pool),
                |e| map_foreign_key_violation(e, || DomainError::MovieNotFound(movie_id)),
            )
            .await?;

        Ok(result.rows_affected() > 0)
    }

    #[instrument(skip(self))]
    async fn remove(&self, user_id: i64, movie_id: i64) -> RepoResult<bool> {
        let result = self
            .deadline
            .run(
                sqlx::query("DELETE FROM favorites WHERE user_id = $1 AND movie_id = $2")
                    .bind(user_id)
                    .bind(movie_id)
                    .execute(&self.pool),
            )
            .await?;

        Ok(result.rows_affected() > 0)
    }

    #[instrument(skip(self))]
    async fn toggle(&self, user_id: i64, movie_id: i64) -> RepoResult<bool> {
        // Delete if present, otherwise insert; both halves run in one statement
        self.deadline
            .run_with(
                sqlx::query_scalar::<_, bool>(
                    r"
                    WITH removed AS (
                        DELETE FROM favorites
                        WHERE user_id = $1 AND movie_id = $2
                        RETURNING id
                    ),
                    added AS (
                        INSERT INTO favorites (user_id, movie_id)
                        SELECT $1, $2
                        WHERE NOT EXISTS (SELECT 1 FROM removed)
                        ON CONFLICT (user_id, movie_id) DO NOTHING
                        RETURNING id
                    )
                    SELECT EXISTS(SELECT 1 FROM added)
                    ",
                )
                .bind(user_id)
                .bind(movie_id)
                .fetch_one(&self.pool),
                |e| map_foreign_key_violation(e, || DomainError::MovieNotFound(movie_id)),
            )
            .await
    }
}
