//! Data transfer objects for API requests and responses
//!
//! This module provides:
//! - Request DTOs with validation for API inputs
//! - Response DTOs for serializing API outputs
//! - Mappers for converting domain entities to DTOs

pub mod mappers;
pub mod requests;
pub mod responses;

// Re-export commonly used request types
pub use requests::{
    CommentRequest, CreateImageRequest, CreateMovieRequest, GenreRequest, ListMoviesQuery,
    LoginRequest, RateMovieRequest, RefreshTokenRequest, SignupRequest, UpdateMovieRequest,
};

// Re-export commonly used response types
pub use responses::{
    AuthResponse, CommentResponse, CreatedImageResponse, FavoriteResponse, GenreResponse,
    HealthChecks, HealthResponse, ImageResponse, MovieCommentResponse, MovieDetailResponse,
    MovieResponse, MovieWriteResponse, PaginatedMoviesResponse, RatingResponse,
    ReadinessResponse, StatusResponse, UserResponse,
};
