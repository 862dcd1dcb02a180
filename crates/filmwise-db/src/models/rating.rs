//! Rating database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

#[derive(Debug, Clone, FromRow)]
pub struct RatingModel {
    pub id: i64,
    pub movie_id: i64,
    pub user_id: i64,
    pub rating: f64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    /// Set by the upsert: true when the row did not exist before
    #[sqlx(default)]
    pub inserted: bool,
}
