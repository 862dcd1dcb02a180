//! PostgreSQL implementation of CommentRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use filmwise_core::entities::{Comment, CommentWithAuthor};
use filmwise_core::error::DomainError;
use filmwise_core::traits::{CommentRepository, RepoResult};

use crate::deadline::QueryDeadline;
use crate::models::{CommentModel, CommentWithAuthorModel};

use super::error::{comment_not_found, map_foreign_key_violation};

/// Comments of one movie with author names, newest first
pub(crate) const COMMENT_THREAD_SQL: &str = r"
    SELECT c.id, c.user_id, u.full_name AS user_name, c.comment, c.created_at, c.updated_at
    FROM comments c
    LEFT JOIN users u ON u.id = c.user_id
    WHERE c.movie_id = $1
    ORDER BY c.created_at DESC, c.id DESC
    ";

/// PostgreSQL implementation of CommentRepository
#[derive(Clone)]
pub struct PgCommentRepository {
    pool: PgPool,
    deadline: QueryDeadline,
}

impl PgCommentRepository {
    /// Create a new PgCommentRepository
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
impl CommentRepository for PgCommentRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<Comment>> {
        let result = self
            .deadline
            .run(
                sqlx::query_as::<_, CommentModel>(
                    r"
                    SELECT id, movie_id, user_id, comment, created_at, updated_at
                    FROM comments
                    WHERE id = $1
                    ",
                )
                .bind(id)
                .fetch_optional(&self.pool),
            )
            .await?;

        Ok(result.map(Comment::from))
    }

    #[instrument(skip(self))]
    async fn list_by_movie(&self, movie_id: i64) -> RepoResult<Vec<CommentWithAuthor>> {
        let results = self
            .deadline
            .run(
                sqlx::query_as::<_, CommentWithAuthorModel>(COMMENT_THREAD_SQL)
                    .bind(movie_id)
                    .fetch_all(&self.pool),
            )
            .await?;

        Ok(results.into_iter().map(CommentWithAuthor::from).collect())
    }

    #[instrument(skip(self, comment))]
    async fn create(&self, movie_id: i64, user_id: i64, comment: &str) -> RepoResult<Comment> {
        let model = self
            .deadline
            .run_with(
                sqlx::query_as::<_, CommentModel>(
                    r"
                    INSERT INTO comments (movie_id, user_id, comment)
                    VALUES ($1, $2, $3)
                    RETURNING id, movie_id, user_id, comment, created_at, updated_at
                    ",
                )
                .bind(movie_id)
                .bind(user_id)
                .bind(comment)
                .fetch_one(&self.pool),
                |e| map_foreign_key_violation(e, || DomainError::MovieNotFound(movie_id)),
            )
            .await?;

        Ok(model.into())
    }

    #[instrument(skip(self, comment))]
    async fn update(&self, id: i64, comment: &str) -> RepoResult<Comment> {
        let model = self
            .deadline
            .run(
                sqlx::query_as::<_, CommentModel>(
                    r"
                    UPDATE comments
                    SET comment = $2, updated_at = NOW()
                    WHERE id = $1
                    RETURNING id, movie_id, user_id, comment, created_at, updated_at
                    ",
                )
                .bind(id)
                .bind(comment)
                .fetch_optional(&self.pool),
            )
            .await?
            .ok_or_else(|| comment_not_found(id))?;

        Ok(model.into())
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: i64) -> RepoResult<()> {
        let result = self
            .deadline
            .run(
                sqlx::query("DELETE FROM comments WHERE id = $1")
                    .bind(id)
                    .execute(&self.pool),
            )
            .await?;

        if result.rows_affected() == 0 {
            return Err(comment_not_found(id));
        }

        Ok(())
    }
}
