//! PostgreSQL implementation of RatingRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use filmwise_core::entities::Rating;
use filmwise_core::error::DomainError;
use filmwise_core::traits::{RatingRepository, RepoResult};

use crate::deadline::QueryDeadline;
use crate::models::RatingModel;

use super::error::map_foreign_key_violation;

/// PostgreSQL implementation of RatingRepository
///
/// One rating per (movie, user) is guaranteed by the `ratings_movie_user_key`
/// constraint; writes go through a single `INSERT .. ON CONFLICT DO UPDATE`.
#[derive(Clone)]
pub struct PgRatingRepository {
    pool: PgPool,
    deadline: QueryDeadline,
}

impl PgRatingRepository {
    /// Create a new PgRatingRepository
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
impl RatingRepository for PgRatingRepository {
    #[instrument(skip(self))]
    async fn upsert(&self, movie_id: i64, user_id: i64, score: f64) -> RepoResult<(Rating, bool)> {
        let model = self
            .deadline
            .run_with(
                sqlx::query_as::<_, RatingModel>(
                    r"
                    INSERT INTO ratings (movie_id, user_id, rating)
                    VALUES ($1, $2, $3)
                    ON CONFLICT (movie_id, user_id)
                    DO UPDATE SET rating = EXCLUDED.rating, updated_at = NOW()
                    RETURNING id, movie_id, user_id, rating, created_at, updated_at,
                              (xmax = 0) AS inserted
                    ",
                )
                .bind(movie_id)
                .bind(user_id)
                .bind(score)
                .fetch_one(&self.pool),
                |e| map_foreign_key_violation(e, || DomainError::MovieNotFound(movie_id)),
            )
            .await?;

        let inserted = model.inserted;
        Ok((model.into(), inserted))
    }

    #[instrument(skip(self))]
    async fn find(&self, movie_id: i64, user_id: i64) -> RepoResult<Option<Rating>> {
        let result = self
            .deadline
            .run(
                sqlx::query_as::<_, RatingModel>(
                    r"
                    SELECT id, movie_id, user_id, rating, created_at, updated_at
                    FROM ratings
                    WHERE movie_id = $1 AND user_id = $2
                    ",
                )
                .bind(movie_id)
                .bind(user_id)
                .fetch_optional(&self.pool),
            )
            .await?;

        Ok(result.map(Rating::from))
    }
}
