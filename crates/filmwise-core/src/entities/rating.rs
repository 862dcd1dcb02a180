//! Rating entity - one score per (movie, user)

use chrono::{DateTime, Utc};

use crate::error::DomainError;

#[derive(Debug, Clone, PartialEq)]
pub struct Rating {
    pub id: i64,
    pub movie_id: i64,
    pub user_id: i64,
    pub rating: f64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Rating {
    pub const MIN: f64 = 1.0;
    pub const MAX: f64 = 10.0;

    /// Validate a score before it reaches the store
    pub fn validate_score(score: f64) -> Result<f64, DomainError> {
        if score.is_finite() && (Self::MIN..=Self::MAX).contains(&score) {
            Ok(score)
        } else {
            Err(DomainError::InvalidRating(score))
        }
    }
}
