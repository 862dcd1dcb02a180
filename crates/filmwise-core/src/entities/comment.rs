//! Comment entity

use chrono::{DateTime, Utc};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comment {
    pub id: i64,
    pub movie_id: i64,
    pub user_id: i64,
    pub comment: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Comment {
    pub const MIN_LENGTH: usize = 10;
    pub const MAX_LENGTH: usize = 500;

    /// Check if the comment was written by the given user
    #[inline]
    pub fn is_authored_by(&self, user_id: i64) -> bool {
        self.user_id == user_id
    }
}

/// Comment joined with its author's display name, as shown on a movie page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommentWithAuthor {
    pub id: i64,
    pub user_id: i64,
    /// Empty when the author account no longer exists
    pub user_name: String,
    pub comment: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
