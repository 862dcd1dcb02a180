//! PostgreSQL implementation of GenreRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use filmwise_core::entities::Genre;
use filmwise_core::error::DomainError;
use filmwise_core::traits::{GenreRepository, RepoResult};

use crate::deadline::QueryDeadline;
use crate::models::GenreModel;

use super::error::{genre_not_found, map_unique_violation};

/// PostgreSQL implementation of GenreRepository
#[derive(Clone)]
pub struct PgGenreRepository {
    pool: PgPool,
    deadline: QueryDeadline,
}

impl PgGenreRepository {
    /// Create a new PgGenreRepository
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
impl GenreRepository for PgGenreRepository {
    #[instrument(skip(self))]
    async fn list(&self) -> RepoResult<Vec<Genre>> {
        let results = self
            .deadline
            .run(
                sqlx::query_as::<_, GenreModel>(
                    r"
                    SELECT id, genre_name, created_at, updated_at
                    FROM genres
                    ORDER BY genre_name ASC
                    ",
                )
                .fetch_all(&self.pool),
            )
            .await?;

        Ok(results.into_iter().map(Genre::from).collect())
    }

    #[instrument(skip(self))]
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<Genre>> {
        let result = self
            .deadline
            .run(
                sqlx::query_as::<_, GenreModel>(
                    "SELECT id, genre_name, created_at, updated_at FROM genres WHERE id = $1",
                )
                .bind(id)
                .fetch_optional(&self.pool),
            )
            .await?;

        Ok(result.map(Genre::from))
    }

    #[instrument(skip(self))]
    async fn find_by_name(&self, name: &str) -> RepoResult<Option<Genre>> {
        let result = self
            .deadline
            .run(
                sqlx::query_as::<_, GenreModel>(
                    "SELECT id, genre_name, created_at, updated_at FROM genres WHERE genre_name = $1",
                )
                .bind(name)
                .fetch_optional(&self.pool),
            )
            .await?;

        Ok(result.map(Genre::from))
    }

    #[instrument(skip(self))]
    async fn find_by_names(&self, names: &[String]) -> RepoResult<Vec<Genre>> {
        if names.is_empty() {
            return Ok(Vec::new());
        }

        let results = self
            .deadline
            .run(
                sqlx::query_as::<_, GenreModel>(
                    r"
                    SELECT id, genre_name, created_at, updated_at
                    FROM genres
                    WHERE genre_name = ANY($1)
                    ",
                )
                .bind(names)
                .fetch_all(&self.pool),
            )
            .await?;

        Ok(results.into_iter().map(Genre::from).collect())
    }

    #[instrument(skip(self))]
    async fn create(&self, name: &str) -> RepoResult<Genre> {
        let model = self
            .deadline
            .run_with(
                sqlx::query_as::<_, GenreModel>(
                    r"
                    INSERT INTO genres (genre_name)
                    VALUES ($1)
                    RETURNING id, genre_name, created_at, updated_at
                    ",
                )
                .bind(name)
                .fetch_one(&self.pool),
                |e| map_unique_violation(e, || DomainError::GenreNameExists),
            )
            .await?;

        Ok(model.into())
    }

    #[instrument(skip(self))]
    async fn rename(&self, id: i64, name: &str) -> RepoResult<Genre> {
        let model = self
            .deadline
            .run_with(
                sqlx::query_as::<_, GenreModel>(
                    r"
                    UPDATE genres
                    SET genre_name = $2, updated_at = NOW()
                    WHERE id = $1
                    RETURNING id, genre_name, created_at, updated_at
                    ",
                )
                .bind(id)
                .bind(name)
                .fetch_optional(&self.pool),
                |e| map_unique_violation(e, || DomainError::GenreNameExists),
            )
            .await?
            .ok_or_else(|| genre_not_found(id))?;

        Ok(model.into())
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: i64) -> RepoResult<()> {
        let result = self
            .deadline
            .run(
                sqlx::query("DELETE FROM genres WHERE id = $1")
                    .bind(id)
                    .execute(&self.pool),
            )
            .await?;

        if result.rows_affected() == 0 {
            return Err(genre_not_found(id));
        }

        Ok(())
    }
}
