//! Test fixtures and data generators
//!
//! Request bodies and the response shapes the tests read back.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Satisfies the password strength rules
pub const TEST_PASSWORD: &str = "TestPass123!";

/// Suffix that stays unique across test runs against the same database
pub fn unique_suffix() -> String {
    let id = Uuid::new_v4().simple().to_string();
    id[..12].to_string()
}

#[derive(Debug, Serialize)]
pub struct SignupRequest {
    pub full_name: String,
    pub email: String,
    pub password: String,
}

impl SignupRequest {
    pub fn unique() -> Self {
        Self {
            full_name: "Test Viewer".to_string(),
            email: format!("viewer{}@example.com", unique_suffix()),
            password: TEST_PASSWORD.to_string(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

impl LoginRequest {
    pub fn from_signup(signup: &SignupRequest) -> Self {
        Self {
            email: signup.email.clone(),
            password: signup.password.clone(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct AuthResponse {
    pub access_token: String,
    pub refresh_token: String,
    pub token_type: String,
    pub user: UserResponse,
}

#[derive(Debug, Deserialize)]
pub struct UserResponse {
    pub id: i64,
    pub full_name: String,
    pub email: String,
    pub user_type: String,
}

#[derive(Debug, Serialize)]
pub struct GenreRequest {
    pub genre_name: String,
}

impl GenreRequest {
    pub fn unique() -> Self {
        Self {
            genre_name: format!("Genre {}", unique_suffix()),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct GenreResponse {
    pub id: i64,
    pub genre_name: String,
}

#[derive(Debug, Serialize)]
pub struct ImageRequest {
    pub image_path: String,
    pub image_name: Option<String>,
}

impl ImageRequest {
    /// Unnamed upload; the server generates the name from the extension
    pub fn uploaded() -> Self {
        Self {
            image_path: format!("/uploads/{}.jpg", unique_suffix()),
            image_name: None,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct CreatedImageResponse {
    pub id: i64,
    pub image_name: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct MovieRequest {
    pub title: String,
    pub description: String,
    pub year: i32,
    pub release_date: String,
    pub runtime: i32,
    pub image_id: Option<i64>,
    pub genres: Vec<String>,
}

impl MovieRequest {
    pub fn unique(image_id: i64, genres: Vec<String>) -> Self {
        Self {
            title: format!("Integration Movie {}", unique_suffix()),
            description: "A movie created by the integration test suite.".to_string(),
            year: 2021,
            release_date: "2021-06-18".to_string(),
            runtime: 112,
            image_id: Some(image_id),
            genres,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct MovieWriteResponse {
    pub id: i64,
    pub genres: HashMap<String, String>,
}

#[derive(Debug, Deserialize)]
pub struct MovieResponse {
    pub id: i64,
    pub title: String,
    pub rating: f64,
    pub image: String,
    pub genres: HashMap<String, String>,
    pub total_comments: i64,
    pub total_favorites: i64,
    pub is_favorite: bool,
}

#[derive(Debug, Deserialize)]
pub struct PaginatedMoviesResponse {
    pub total_count: i64,
    pub per_page: i64,
    pub current_page: i64,
    pub movies: Vec<MovieResponse>,
}

#[derive(Debug, Deserialize)]
pub struct MovieCommentResponse {
    pub id: i64,
    pub user_id: i64,
    pub user_name: String,
    pub comment: String,
}

#[derive(Debug, Deserialize)]
pub struct MovieDetailResponse {
    #[serde(flatten)]
    pub movie: MovieResponse,
    pub comments: Vec<MovieCommentResponse>,
}

#[derive(Debug, Serialize)]
pub struct RateMovieRequest {
    pub movie_id: i64,
    pub rating: f64,
}

#[derive(Debug, Deserialize)]
pub struct RatingResponse {
    pub id: i64,
    pub movie_id: i64,
    pub rating: f64,
    pub created: bool,
}

#[derive(Debug, Serialize)]
pub struct CommentRequest {
    pub comment: String,
}

impl CommentRequest {
    pub fn new(comment: &str) -> Self {
        Self {
            comment: comment.to_string(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct CommentResponse {
    pub id: i64,
    pub movie_id: i64,
    pub user_id: i64,
    pub comment: String,
}

#[derive(Debug, Deserialize)]
pub struct FavoriteResponse {
    pub movie_id: i64,
    pub is_favorite: bool,
}

#[derive(Debug, Deserialize)]
pub struct ErrorBody {
    pub error: ErrorDetail,
}

#[derive(Debug, Deserialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
}
