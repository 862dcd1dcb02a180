//! Genre entity

use chrono::{DateTime, Utc};

/// Name of the genre linked to movies created without any genre
pub const UNKNOWN_GENRE: &str = "Unknown";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Genre {
    pub id: i64,
    pub genre_name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Genre {
    /// Check if this is the fallback genre
    #[inline]
    pub fn is_unknown(&self) -> bool {
        self.genre_name == UNKNOWN_GENRE
    }
}
