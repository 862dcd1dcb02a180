//! Response DTOs for API endpoints
//!
//! All response DTOs implement `Serialize` for JSON output.

use chrono::{DateTime, NaiveDate, Utc};
use filmwise_core::{GenreMap, UserType};
use serde::Serialize;

// ============================================================================
// Auth Responses
// ============================================================================

/// Authentication response with tokens
#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub access_token: String,
    pub refresh_token: String,
    pub token_type: String,
    pub expires_in: i64,
    pub user: UserResponse,
}

impl AuthResponse {
    pub fn new(
        access_token: String,
        refresh_token: String,
        expires_in: i64,
        user: UserResponse,
    ) -> Self {
        Self {
            access_token,
            refresh_token,
            token_type: "Bearer".to_string(),
            expires_in,
            user,
        }
    }
}

/// Account as seen by its owner
#[derive(Debug, Clone, Serialize)]
pub struct UserResponse {
    pub id: i64,
    pub full_name: String,
    pub email: String,
    pub user_type: UserType,
    pub created_at: DateTime<Utc>,
}

// ============================================================================
// Movie Responses
// ============================================================================

/// One movie as returned by listings, the featured strip and the detail view
#[derive(Debug, Clone, Serialize)]
pub struct MovieResponse {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub year: i32,
    pub release_date: NaiveDate,
    pub runtime: i32,
    pub rating: f64,
    /// Resolved cover URL
    pub image: String,
    pub genres: GenreMap,
    pub total_comments: i64,
    pub total_favorites: i64,
    pub is_favorite: bool,
}

/// A page of the movie listing
#[derive(Debug, Serialize)]
pub struct PaginatedMoviesResponse {
    pub total_count: i64,
    pub per_page: i64,
    pub current_page: i64,
    pub total_pages: i64,
    pub movies: Vec<MovieResponse>,
}

/// Comment as shown under a movie
#[derive(Debug, Clone, Serialize)]
pub struct MovieCommentResponse {
    pub id: i64,
    pub user_id: i64,
    pub user_name: String,
    pub comment: String,
    pub commented_at: DateTime<Utc>,
}

/// Movie detail with its comment thread
#[derive(Debug, Serialize)]
pub struct MovieDetailResponse {
    #[serde(flatten)]
    pub movie: MovieResponse,
    pub comments: Vec<MovieCommentResponse>,
}

/// Result of an admin movie write
#[derive(Debug, Serialize)]
pub struct MovieWriteResponse {
    pub id: i64,
    pub genres: GenreMap,
}

// ============================================================================
// Genre Responses
// ============================================================================

#[derive(Debug, Clone, Serialize)]
pub struct GenreResponse {
    pub id: i64,
    pub genre_name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

// ============================================================================
// Rating / Comment / Favorite Responses
// ============================================================================

#[derive(Debug, Serialize)]
pub struct RatingResponse {
    pub id: i64,
    pub movie_id: i64,
    pub rating: f64,
    /// True when this request stored the viewer's first rating of the movie
    pub created: bool,
}

/// Stored comment
#[derive(Debug, Serialize)]
pub struct CommentResponse {
    pub id: i64,
    pub movie_id: i64,
    pub user_id: i64,
    pub comment: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Serialize)]
pub struct FavoriteResponse {
    pub movie_id: i64,
    pub is_favorite: bool,
}

// ============================================================================
// Image Responses
// ============================================================================

/// Returned when an image is registered
#[derive(Debug, Serialize)]
pub struct CreatedImageResponse {
    pub id: i64,
    pub image_name: String,
}

#[derive(Debug, Serialize)]
pub struct ImageResponse {
    pub id: i64,
    pub image_path: String,
    pub image_name: String,
    pub is_used: bool,
    pub created_at: DateTime<Utc>,
}

// ============================================================================
// Operational Responses
// ============================================================================

/// Service availability, mirrored from the deployment settings
#[derive(Debug, Clone, Serialize)]
pub struct StatusResponse {
    pub status: String,
    pub environment: String,
    pub version: String,
}

impl StatusResponse {
    pub fn available(environment: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            status: "available".to_string(),
            environment: environment.into(),
            version: version.into(),
        }
    }
}

/// Health check response
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
}

impl HealthResponse {
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: Utc::now(),
        }
    }
}

/// Readiness check response
#[derive(Debug, Clone, Serialize)]
pub struct ReadinessResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
    pub checks: HealthChecks,
}

/// Health check status for each dependency
#[derive(Debug, Clone, Serialize)]
pub struct HealthChecks {
    pub database: String,
}

impl ReadinessResponse {
    pub fn ready(database_healthy: bool) -> Self {
        Self {
            status: if database_healthy { "ready" } else { "not_ready" }.to_string(),
            timestamp: Utc::now(),
            checks: HealthChecks {
                database: if database_healthy { "healthy" } else { "unhealthy" }.to_string(),
            },
        }
    }

    pub fn is_ready(&self) -> bool {
        self.status == "ready"
    }
}
