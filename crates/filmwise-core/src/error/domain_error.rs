//! Domain errors - error types for the domain layer

use thiserror::Error;

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    // =========================================================================
    // Not Found Errors
    // =========================================================================
    #[error("Movie not found: {0}")]
    MovieNotFound(i64),

    #[error("Genre not found: {0}")]
    GenreNotFound(i64),

    #[error("Comment not found: {0}")]
    CommentNotFound(i64),

    #[error("Image not found: {0}")]
    ImageNotFound(String),

    #[error("User not found: {0}")]
    UserNotFound(i64),

    // =========================================================================
    // Validation Errors
    // =========================================================================
    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("{0}")]
    InvalidPagination(String),

    #[error("movie rating should be between 1.0 to 10.0, got {0}")]
    InvalidRating(f64),

    #[error("invalid genre name: {0}")]
    UnknownGenre(String),

    #[error("a movie can have at most {max} genres")]
    TooManyGenres { max: usize },

    // =========================================================================
    // Authorization Errors
    // =========================================================================
    #[error("Admin access required")]
    AdminRequired,

    #[error("Not comment author")]
    NotCommentAuthor,

    // =========================================================================
    // Conflict Errors
    // =========================================================================
    #[error("Email already in use")]
    EmailAlreadyExists,

    #[error("the movie is already exist")]
    MovieTitleExists,

    #[error("Genre name already exists")]
    GenreNameExists,

    #[error("Image is still used by a movie")]
    ImageInUse,

    // =========================================================================
    // Infrastructure Errors (wrapped)
    // =========================================================================
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Query exceeded its {0}ms deadline")]
    QueryTimeout(u64),

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl DomainError {
    /// Get an error code string for API responses
    pub fn code(&self) -> &'static str {
        match self {
            // Not Found
            Self::MovieNotFound(_) => "UNKNOWN_MOVIE",
            Self::GenreNotFound(_) => "UNKNOWN_GENRE",
            Self::CommentNotFound(_) => "UNKNOWN_COMMENT",
            Self::ImageNotFound(_) => "UNKNOWN_IMAGE",
            Self::UserNotFound(_) => "UNKNOWN_USER",

            // Validation
            Self::ValidationError(_) => "VALIDATION_ERROR",
            Self::InvalidPagination(_) => "INVALID_PAGINATION",
            Self::InvalidRating(_) => "INVALID_RATING",
            Self::UnknownGenre(_) => "INVALID_GENRE_NAME",
            Self::TooManyGenres { .. } => "TOO_MANY_GENRES",

            // Authorization
            Self::AdminRequired => "ADMIN_REQUIRED",
            Self::NotCommentAuthor => "NOT_COMMENT_AUTHOR",

            // Conflict
            Self::EmailAlreadyExists => "EMAIL_ALREADY_EXISTS",
            Self::MovieTitleExists => "MOVIE_ALREADY_EXISTS",
            Self::GenreNameExists => "GENRE_ALREADY_EXISTS",
            Self::ImageInUse => "IMAGE_IN_USE",

            // Infrastructure
            Self::DatabaseError(_) => "DATABASE_ERROR",
            Self::QueryTimeout(_) => "QUERY_TIMEOUT",
            Self::InternalError(_) => "INTERNAL_ERROR",
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::MovieNotFound(_)
                | Self::GenreNotFound(_)
                | Self::CommentNotFound(_)
                | Self::ImageNotFound(_)
                | Self::UserNotFound(_)
        )
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::ValidationError(_)
                | Self::InvalidPagination(_)
                | Self::InvalidRating(_)
                | Self::UnknownGenre(_)
                | Self::TooManyGenres { .. }
        )
    }

    /// Check if this is an authorization error
    pub fn is_authorization(&self) -> bool {
        matches!(self, Self::AdminRequired | Self::NotCommentAuthor)
    }

    /// Check if this is a conflict error
    pub fn is_conflict(&self) -> bool {
        matches!(
            self,
            Self::EmailAlreadyExists
                | Self::MovieTitleExists
                | Self::GenreNameExists
                | Self::ImageInUse
        )
    }

    /// Check if this came from the store rather than the caller
    pub fn is_infrastructure(&self) -> bool {
        matches!(
            self,
            Self::DatabaseError(_) | Self::QueryTimeout(_) | Self::InternalError(_)
        )
    }
}
