//! Comment service
//!
//! Anyone signed in may comment; only the author may edit, and the author or
//! an admin may delete.

use filmwise_core::entities::Comment;
use filmwise_core::DomainError;
use tracing::{info, instrument, warn};

use crate::dto::{CommentRequest, CommentResponse};

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Comment service
pub struct CommentService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> CommentService<'a> {
    /// Create a new CommentService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    #[instrument(skip(self, request))]
    pub async fn add_comment(
        &self,
        movie_id: i64,
        user_id: i64,
        request: CommentRequest,
    ) -> ServiceResult<CommentResponse> {
        let comment = self
            .ctx
            .comment_repo()
            .create(movie_id, user_id, request.comment.trim())
            .await?;

        info!(comment_id = comment.id, movie_id, "Comment added");
        Ok(comment.into())
    }

    #[instrument(skip(self, request))]
    pub async fn update_comment(
        &self,
        comment_id: i64,
        user_id: i64,
        request: CommentRequest,
    ) -> ServiceResult<CommentResponse> {
        let comment = self.find(comment_id).await?;
        if !comment.is_authored_by(user_id) {
            warn!(comment_id, user_id, "Rejected edit of another user's comment");
            return Err(DomainError::NotCommentAuthor.into());
        }

        let updated = self
            .ctx
            .comment_repo()
            .update(comment_id, request.comment.trim())
            .await?;

        info!(comment_id, "Comment updated");
        Ok(updated.into())
    }

    #[instrument(skip(self))]
    pub async fn delete_comment(
        &self,
        comment_id: i64,
        user_id: i64,
        is_admin: bool,
    ) -> ServiceResult<()> {
        let comment = self.find(comment_id).await?;
        if !is_admin && !comment.is_authored_by(user_id) {
            warn!(comment_id, user_id, "Rejected delete of another user's comment");
            return Err(DomainError::NotCommentAuthor.into());
        }

        self.ctx.comment_repo().delete(comment_id).await?;

        info!(comment_id, "Comment deleted");
        Ok(())
    }

    async fn find(&self, comment_id: i64) -> ServiceResult<Comment> {
        Ok(self
            .ctx
            .comment_repo()
            .find_by_id(comment_id)
            .await?
            .ok_or(DomainError::CommentNotFound(comment_id))?)
    }
}
