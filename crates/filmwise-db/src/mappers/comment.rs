//! Comment model -> entity mappers

use filmwise_core::entities::{Comment, CommentWithAuthor};

use crate::models::{CommentModel, CommentWithAuthorModel};

impl From<CommentModel> for Comment {
    fn from(model: CommentModel) -> Self {
        Comment {
            id: model.id,
            movie_id: model.movie_id,
            user_id: model.user_id,
            comment: model.comment,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}

impl From<CommentWithAuthorModel> for CommentWithAuthor {
    fn from(model: CommentWithAuthorModel) -> Self {
        CommentWithAuthor {
            id: model.id,
            user_id: model.user_id,
            user_name: model.user_name.unwrap_or_default(),
            comment: model.comment,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}
