//! Movie database models

use chrono::{DateTime, NaiveDate, Utc};
use sqlx::FromRow;

/// Database model for movies table
#[derive(Debug, Clone, FromRow)]
pub struct MovieModel {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub year: i32,
    pub release_date: NaiveDate,
    pub runtime: i32,
    pub image: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Movie row with per-movie aggregates, as produced by the listing SELECT
#[derive(Debug, Clone, FromRow)]
pub struct MovieRowModel {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub year: i32,
    pub release_date: NaiveDate,
    pub runtime: i32,
    pub image: Option<String>,
    pub rating: f64,
    pub total_comments: i64,
    pub total_favorites: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// One movie → genre edge joined with the genre name
#[derive(Debug, Clone, FromRow)]
pub struct MovieGenreRow {
    pub movie_id: i64,
    pub genre_id: i64,
    pub genre_name: String,
}
