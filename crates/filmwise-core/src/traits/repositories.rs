//! Repository traits (ports) - define the interface for data access
//!
//! The domain layer defines what it needs, and the infrastructure layer
//! provides the implementation. Every implementation bounds each statement it
//! issues by a fixed deadline and reports an overrun as
//! [`DomainError::QueryTimeout`].

use async_trait::async_trait;

use crate::entities::{
    Comment, CommentWithAuthor, Genre, GenreMap, Image, Movie, MovieDetail, MovieSummary,
    NewImage, NewMovie, NewUser, PaginatedMovies, Rating, User,
};
use crate::error::DomainError;
use crate::value_objects::{MovieFilter, PageRequest};

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

// ============================================================================
// Movie Repository
// ============================================================================

#[async_trait]
pub trait MovieRepository: Send + Sync {
    /// List one page of movies matching `filter`, with aggregates and the
    /// viewer's favorite flag folded into every row
    async fn list(
        &self,
        filter: &MovieFilter,
        page: PageRequest,
        viewer: Option<i64>,
    ) -> RepoResult<PaginatedMovies>;

    /// Most recently updated movies
    async fn featured(&self, limit: i64, viewer: Option<i64>) -> RepoResult<Vec<MovieSummary>>;

    /// Full detail view including the comment thread
    async fn find_detail(&self, id: i64, viewer: Option<i64>) -> RepoResult<Option<MovieDetail>>;

    /// Find the stored movie row
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<Movie>>;

    /// Check if a movie exists
    async fn exists(&self, id: i64) -> RepoResult<bool>;

    /// Insert a movie and its genre links atomically
    async fn create(&self, movie: &NewMovie) -> RepoResult<Movie>;

    /// Update a movie and replace its genre links atomically
    async fn update(&self, id: i64, movie: &NewMovie) -> RepoResult<Movie>;

    /// Delete a movie; ratings, comments, favorites and links go with it
    async fn delete(&self, id: i64) -> RepoResult<()>;

    /// Genre map of a single movie
    async fn genres_of(&self, id: i64) -> RepoResult<GenreMap>;
}

// ============================================================================
// Genre Repository
// ============================================================================

#[async_trait]
pub trait GenreRepository: Send + Sync {
    /// List all genres ordered by name
    async fn list(&self) -> RepoResult<Vec<Genre>>;

    async fn find_by_id(&self, id: i64) -> RepoResult<Option<Genre>>;

    async fn find_by_name(&self, name: &str) -> RepoResult<Option<Genre>>;

    /// Find every genre whose name is in `names`; missing names are simply absent
    async fn find_by_names(&self, names: &[String]) -> RepoResult<Vec<Genre>>;

    async fn create(&self, name: &str) -> RepoResult<Genre>;

    async fn rename(&self, id: i64, name: &str) -> RepoResult<Genre>;

    async fn delete(&self, id: i64) -> RepoResult<()>;
}

// ============================================================================
// Rating Repository
// ============================================================================

#[async_trait]
pub trait RatingRepository: Send + Sync {
    /// Insert or overwrite the viewer's score for a movie in one statement
    ///
    /// Returns the stored rating and whether a new row was created.
    async fn upsert(&self, movie_id: i64, user_id: i64, score: f64) -> RepoResult<(Rating, bool)>;

    async fn find(&self, movie_id: i64, user_id: i64) -> RepoResult<Option<Rating>>;
}

// ============================================================================
// Comment Repository
// ============================================================================

#[async_trait]
pub trait CommentRepository: Send + Sync {
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<Comment>>;

    /// Comments of a movie with author names, newest first
    async fn list_by_movie(&self, movie_id: i64) -> RepoResult<Vec<CommentWithAuthor>>;

    async fn create(&self, movie_id: i64, user_id: i64, comment: &str) -> RepoResult<Comment>;

    async fn update(&self, id: i64, comment: &str) -> RepoResult<Comment>;

    async fn delete(&self, id: i64) -> RepoResult<()>;
}

// ============================================================================
// Favorite Repository
// ============================================================================

#[async_trait]
pub trait FavoriteRepository: Send + Sync {
    async fn exists(&self, user_id: i64, movie_id: i64) -> RepoResult<bool>;

    /// Add the edge; returns false if it already existed
    async fn add(&self, user_id: i64, movie_id: i64) -> RepoResult<bool>;

    /// Remove the edge; returns false if there was nothing to remove
    async fn remove(&self, user_id: i64, movie_id: i64) -> RepoResult<bool>;

    /// Flip the edge in one statement; returns the new state
    async fn toggle(&self, user_id: i64, movie_id: i64) -> RepoResult<bool>;
}

// ============================================================================
// Image Repository
// ============================================================================

#[async_trait]
pub trait ImageRepository: Send + Sync {
    async fn create(&self, image: &NewImage) -> RepoResult<Image>;

    async fn find_by_id(&self, id: i64) -> RepoResult<Option<Image>>;

    async fn find_by_name(&self, name: &str) -> RepoResult<Option<Image>>;

    /// Flag an image as referenced (or no longer referenced) by a movie
    async fn mark_used(&self, name: &str, used: bool) -> RepoResult<()>;

    /// Check if any movie points at this image name
    async fn is_referenced(&self, name: &str) -> RepoResult<bool>;

    async fn delete(&self, id: i64) -> RepoResult<()>;

    /// Delete by name; a missing record is not an error
    async fn delete_by_name(&self, name: &str) -> RepoResult<()>;
}

// ============================================================================
// User Repository
// ============================================================================

#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<User>>;

    async fn find_by_email(&self, email: &str) -> RepoResult<Option<User>>;

    /// Check if email is already taken
    async fn email_exists(&self, email: &str) -> RepoResult<bool>;

    /// Create a new user
    async fn create(&self, user: &NewUser, password_hash: &str) -> RepoResult<User>;

    /// Get password hash for authentication
    async fn get_password_hash(&self, id: i64) -> RepoResult<Option<String>>;
}
