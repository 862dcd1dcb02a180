//! Error handling utilities for repositories

use filmwise_core::error::DomainError;
use sqlx::Error as SqlxError;

/// Convert SQLx error to DomainError
pub fn map_db_error(e: SqlxError) -> DomainError {
    DomainError::DatabaseError(e.to_string())
}

/// Check for unique violation and return appropriate error or fallback
pub fn map_unique_violation<F>(e: SqlxError, on_unique: F) -> DomainError
where
    F: FnOnce() -> DomainError,
{
    if let Some(db_err) = e.as_database_error() {
        if db_err.is_unique_violation() {
            return on_unique();
        }
    }
    DomainError::DatabaseError(e.to_string())
}

/// Map a foreign key violation (e.g. rating a deleted movie) to `on_fk`
pub fn map_foreign_key_violation<F>(e: SqlxError, on_fk: F) -> DomainError
where
    F: FnOnce() -> DomainError,
{
    if let Some(db_err) = e.as_database_error() {
        if db_err.is_foreign_key_violation() {
            return on_fk();
        }
    }
    DomainError::DatabaseError(e.to_string())
}

pub fn movie_not_found(id: i64) -> DomainError {
    DomainError::MovieNotFound(id)
}

pub fn genre_not_found(id: i64) -> DomainError {
    DomainError::GenreNotFound(id)
}

pub fn comment_not_found(id: i64) -> DomainError {
    DomainError::CommentNotFound(id)
}

pub fn image_not_found(id: i64) -> DomainError {
    DomainError::ImageNotFound(id.to_string())
}
