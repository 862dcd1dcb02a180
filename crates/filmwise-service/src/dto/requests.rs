//! Request DTOs for API endpoints
//!
//! Body DTOs implement `Deserialize` and `Validate` for input validation.

use std::borrow::Cow;

use chrono::NaiveDate;
use filmwise_core::{DomainError, MovieFilter, PageRequest};
use serde::Deserialize;
use validator::{Validate, ValidationError};

// ============================================================================
// Auth Requests
// ============================================================================

/// User signup request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct SignupRequest {
    #[validate(
        length(min = 5, max = 55, message = "Full name must be 5-55 characters"),
        custom(function = "validate_full_name")
    )]
    pub full_name: String,

    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    #[validate(length(min = 8, max = 72, message = "Password must be 8-72 characters"))]
    pub password: String,
}

/// User login request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

/// Token refresh request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct RefreshTokenRequest {
    #[validate(length(min = 1, message = "Refresh token is required"))]
    pub refresh_token: String,
}

/// A name starts with a letter and holds only letters, digits and spaces
fn validate_full_name(name: &str) -> Result<(), ValidationError> {
    let mut chars = name.chars();
    let starts_with_letter = chars.next().is_some_and(|c| c.is_ascii_alphabetic());
    if starts_with_letter && chars.all(|c| c.is_ascii_alphanumeric() || c == ' ') {
        Ok(())
    } else {
        Err(ValidationError::new("full_name").with_message(Cow::Borrowed(
            "Full name must start with a letter and contain only letters, digits and spaces",
        )))
    }
}

// ============================================================================
// Movie Requests
// ============================================================================

/// Raw listing parameters, as found in the query string
///
/// Everything stays a string so malformed numbers can be reported with
/// their own message instead of a generic deserialization failure.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListMoviesQuery {
    /// Free-text search over title and description
    pub s: Option<String>,
    pub genre: Option<String>,
    pub year: Option<String>,
    pub order_by: Option<String>,
    pub page: Option<String>,
    pub limit: Option<String>,
}

impl ListMoviesQuery {
    /// Normalized filter; non-numeric genre or year counts as unset
    pub fn filter(&self) -> MovieFilter {
        MovieFilter::new(
            self.s.as_deref().unwrap_or_default(),
            parse_or_unset(self.genre.as_deref()),
            parse_or_unset(self.year.as_deref()),
            self.order_by.as_deref().unwrap_or_default(),
        )
    }

    /// Page window; present-but-malformed values are client errors
    pub fn page_request(&self) -> Result<PageRequest, DomainError> {
        let page = parse_present(self.page.as_deref(), "current page should be a number")?;
        let per_page = parse_present(self.limit.as_deref(), "per page limit should be a number")?;
        PageRequest::from_optional(page, per_page)
    }
}

fn parse_or_unset(value: Option<&str>) -> i64 {
    value.and_then(|v| v.trim().parse().ok()).unwrap_or(0)
}

fn parse_present(value: Option<&str>, message: &str) -> Result<Option<i64>, DomainError> {
    match value.map(str::trim) {
        None | Some("") => Ok(None),
        Some(raw) => raw
            .parse()
            .map(Some)
            .map_err(|_| DomainError::InvalidPagination(message.to_string())),
    }
}

/// Create movie request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateMovieRequest {
    #[validate(length(min = 3, max = 255, message = "Title must be 3-255 characters"))]
    pub title: String,

    #[validate(length(min = 20, max = 500, message = "Description must be 20-500 characters"))]
    pub description: String,

    #[validate(range(min = 1888, max = 2100, message = "Year must be between 1888 and 2100"))]
    pub year: i32,

    pub release_date: NaiveDate,

    /// Runtime in minutes
    #[validate(range(min = 1, message = "Runtime must be at least one minute"))]
    pub runtime: i32,

    /// Id of a registered image; required on create
    pub image_id: Option<i64>,

    /// Genre names; an empty list files the movie under the fallback genre
    #[serde(default)]
    #[validate(length(max = 5, message = "A movie can have at most 5 genres"))]
    pub genres: Vec<String>,
}

/// Update movie request
///
/// Same shape as create; the image may be omitted to keep the current one.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateMovieRequest {
    #[validate(length(min = 3, max = 255, message = "Title must be 3-255 characters"))]
    pub title: String,

    #[validate(length(min = 20, max = 500, message = "Description must be 20-500 characters"))]
    pub description: String,

    #[validate(range(min = 1888, max = 2100, message = "Year must be between 1888 and 2100"))]
    pub year: i32,

    pub release_date: NaiveDate,

    #[validate(range(min = 1, message = "Runtime must be at least one minute"))]
    pub runtime: i32,

    pub image_id: Option<i64>,

    #[serde(default)]
    #[validate(length(max = 5, message = "A movie can have at most 5 genres"))]
    pub genres: Vec<String>,
}

// ============================================================================
// Genre Requests
// ============================================================================

/// Create or rename a genre
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct GenreRequest {
    #[validate(length(min = 3, max = 50, message = "Genre name must be 3-50 characters"))]
    pub genre_name: String,
}

// ============================================================================
// Rating / Comment Requests
// ============================================================================

/// Rate a movie
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct RateMovieRequest {
    #[validate(range(min = 1, message = "Invalid movie id"))]
    pub movie_id: i64,

    #[validate(range(min = 1.0, max = 10.0, message = "movie rating should be between 1.0 to 10.0"))]
    pub rating: f64,
}

/// Create or edit a comment
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CommentRequest {
    #[validate(length(min = 10, max = 500, message = "Comment must be 10-500 characters"))]
    pub comment: String,
}

// ============================================================================
// Image Requests
// ============================================================================

/// Register an image already stored by the image provider
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateImageRequest {
    #[validate(length(min = 1, max = 1024, message = "Image path must be 1-1024 characters"))]
    pub image_path: String,

    /// Name movies will refer to; generated from the path when absent
    #[validate(length(min = 1, max = 255, message = "Image name must be 1-255 characters"))]
    pub image_name: Option<String>,
}
