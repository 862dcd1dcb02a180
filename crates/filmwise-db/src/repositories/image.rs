//! PostgreSQL implementation of ImageRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use filmwise_core::entities::{Image, NewImage};
use filmwise_core::error::DomainError;
use filmwise_core::traits::{ImageRepository, RepoResult};

use crate::deadline::QueryDeadline;
use crate::models::ImageModel;

use super::error::{image_not_found, map_unique_violation};

/// PostgreSQL implementation of ImageRepository
#[derive(Clone)]
pub struct PgImageRepository {
    pool: PgPool,
    deadline: QueryDeadline,
}

impl PgImageRepository {
    /// Create a new PgImageRepository
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
impl ImageRepository for PgImageRepository {
    #[instrument(skip(self, image), fields(image_name = %image.image_name))]
    async fn create(&self, image: &NewImage) -> RepoResult<Image> {
        let model = self
            .deadline
            .run_with(
                sqlx::query_as::<_, ImageModel>(
                    r"
                    INSERT INTO images (user_id, image_path, image_name)
                    VALUES ($1, $2, $3)
                    RETURNING id, user_id, image_path, image_name, is_used, created_at
                    ",
                )
                .bind(image.user_id)
                .bind(&image.image_path)
                .bind(&image.image_name)
                .fetch_one(&self.pool),
                |e| {
                    map_unique_violation(e, || {
                        DomainError::ValidationError(format!(
                            "image name already registered: {}",
                            image.image_name
                        ))
                    })
                },
            )
            .await?;

        Ok(model.into())
    }

    #[instrument(skip(self))]
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<Image>> {
        let result = self
            .deadline
            .run(
                sqlx::query_as::<_, ImageModel>(
                    r"
                    SELECT id, user_id, image_path, image_name, is_used, created_at
                    FROM images
                    WHERE id = $1
                    ",
                )
                .bind(id)
                .fetch_optional(&self.pool),
            )
            .await?;

        Ok(result.map(Image::from))
    }

    #[instrument(skip(self))]
    async fn find_by_name(&self, name: &str) -> RepoResult<Option<Image>> {
        let result = self
            .deadline
            .run(
                sqlx::query_as::<_, ImageModel>(
                    r"
                    SELECT id, user_id, image_path, image_name, is_used, created_at
                    FROM images
                    WHERE image_name = $1
                    ",
                )
                .bind(name)
                .fetch_optional(&self.pool),
            )
            .await?;

        Ok(result.map(Image::from))
    }

    #[instrument(skip(self))]
    async fn mark_used(&self, name: &str, used: bool) -> RepoResult<()> {
        self.deadline
            .run(
                sqlx::query("UPDATE images SET is_used = $2 WHERE image_name = $1")
                    .bind(name)
                    .bind(used)
                    .execute(&self.pool),
            )
            .await?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn is_referenced(&self, name: &str) -> RepoResult<bool> {
        self.deadline
            .run(
                sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM movies WHERE image = $1)")
                    .bind(name)
                    .fetch_one(&self.pool),
            )
            .await
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: i64) -> RepoResult<()> {
        let result = self
            .deadline
            .run(
                sqlx::query("DELETE FROM images WHERE id = $1")
                    .bind(id)
                    .execute(&self.pool),
            )
            .await?;

        if result.rows_affected() == 0 {
            return Err(image_not_found(id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete_by_name(&self, name: &str) -> RepoResult<()> {
        self.deadline
            .run(
                sqlx::query("DELETE FROM images WHERE image_name = $1")
                    .bind(name)
                    .execute(&self.pool),
            )
            .await?;

        Ok(())
    }
}
