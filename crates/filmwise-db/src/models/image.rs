//! Image database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

#[derive(Debug, Clone, FromRow)]
pub struct ImageModel {
    pub id: i64,
    pub user_id: i64,
    pub image_path: String,
    pub image_name: String,
    pub is_used: bool,
    pub created_at: DateTime<Utc>,
}
