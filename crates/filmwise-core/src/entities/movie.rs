//! Movie entity and the read models produced by the listing and detail paths

use std::collections::BTreeMap;

use chrono::{DateTime, NaiveDate, Utc};

use super::comment::CommentWithAuthor;

/// Genre id → genre name, as attached to every movie returned by a listing
pub type GenreMap = BTreeMap<i64, String>;

/// Movie row as stored
#[derive(Debug, Clone, PartialEq)]
pub struct Movie {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub year: i32,
    pub release_date: NaiveDate,
    /// Runtime in minutes
    pub runtime: i32,
    /// Stored image name, resolved to a URL on the way out
    pub image: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Movie {
    /// Check whether the movie references a cover image
    pub fn has_image(&self) -> bool {
        self.image.as_deref().is_some_and(|name| !name.is_empty())
    }

    /// Check whether switching to `image` would orphan the current cover
    pub fn replaces_image(&self, image: Option<&str>) -> bool {
        match (self.image.as_deref(), image) {
            (Some(current), Some(next)) => !current.is_empty() && current != next,
            _ => false,
        }
    }
}

/// Write model for movie inserts and updates
#[derive(Debug, Clone, PartialEq)]
pub struct NewMovie {
    pub title: String,
    pub description: String,
    pub year: i32,
    pub release_date: NaiveDate,
    pub runtime: i32,
    pub image: Option<String>,
    /// Resolved genre ids; the join rows are replaced wholesale on update
    pub genre_ids: Vec<i64>,
}

/// One row of a movie listing, with its aggregates folded in
#[derive(Debug, Clone, PartialEq)]
pub struct MovieSummary {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub year: i32,
    pub release_date: NaiveDate,
    pub runtime: i32,
    /// Fully resolved cover URL (placeholder when the movie has none)
    pub image_url: String,
    /// Average rating rounded to one decimal, `1.0` when unrated
    pub rating: f64,
    pub genres: GenreMap,
    pub total_comments: i64,
    pub total_favorites: i64,
    /// Viewer-relative; always false for anonymous requests
    pub is_favorite: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl MovieSummary {
    /// Rating shown for a movie nobody has rated yet
    pub const UNRATED: f64 = 1.0;
}

/// Detail view of a single movie
#[derive(Debug, Clone, PartialEq)]
pub struct MovieDetail {
    pub movie: MovieSummary,
    /// Newest first
    pub comments: Vec<CommentWithAuthor>,
}

impl MovieDetail {
    /// Build a detail view; the comment total always matches the thread length
    pub fn new(mut movie: MovieSummary, comments: Vec<CommentWithAuthor>) -> Self {
        movie.total_comments = comments.len() as i64;
        Self { movie, comments }
    }
}

/// Page of listing results plus pagination metadata
#[derive(Debug, Clone, PartialEq)]
pub struct PaginatedMovies {
    /// Rows matching the filter, independent of the page window
    pub total_count: i64,
    pub per_page: i64,
    pub current_page: i64,
    pub movies: Vec<MovieSummary>,
}

impl PaginatedMovies {
    /// Number of pages needed to show `total_count` rows
    pub fn total_pages(&self) -> i64 {
        if self.per_page <= 0 {
            return 0;
        }
        (self.total_count + self.per_page - 1) / self.per_page
    }
}
