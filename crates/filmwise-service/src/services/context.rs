//! Service context - dependency container for services
//!
//! Holds all repositories and other dependencies needed by services.

use std::sync::Arc;

use filmwise_common::auth::JwtService;
use filmwise_core::traits::{
    CommentRepository, FavoriteRepository, GenreRepository, ImageRepository, MovieRepository,
    RatingRepository, UserRepository,
};
use filmwise_db::PgPool;

use super::error::{ServiceError, ServiceResult};

/// Service context containing all dependencies
///
/// This is the main dependency container that gets passed to all services.
/// It provides access to:
/// - The database pool (readiness checks)
/// - Repositories behind their core traits
/// - JWT service for authentication
#[derive(Clone)]
pub struct ServiceContext {
    // Database pool
    pool: PgPool,

    // Repositories
    movie_repo: Arc<dyn MovieRepository>,
    genre_repo: Arc<dyn GenreRepository>,
    rating_repo: Arc<dyn RatingRepository>,
    comment_repo: Arc<dyn CommentRepository>,
    favorite_repo: Arc<dyn FavoriteRepository>,
    image_repo: Arc<dyn ImageRepository>,
    user_repo: Arc<dyn UserRepository>,

    // Services
    jwt_service: Arc<JwtService>,
}

impl ServiceContext {
    // === Database Pool ===

    /// Get the PostgreSQL connection pool
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    // === Repositories ===

    pub fn movie_repo(&self) -> &dyn MovieRepository {
        self.movie_repo.as_ref()
    }

    pub fn genre_repo(&self) -> &dyn GenreRepository {
        self.genre_repo.as_ref()
    }

    pub fn rating_repo(&self) -> &dyn RatingRepository {
        self.rating_repo.as_ref()
    }

    pub fn comment_repo(&self) -> &dyn CommentRepository {
        self.comment_repo.as_ref()
    }

    pub fn favorite_repo(&self) -> &dyn FavoriteRepository {
        self.favorite_repo.as_ref()
    }

    pub fn image_repo(&self) -> &dyn ImageRepository {
        self.image_repo.as_ref()
    }

    pub fn user_repo(&self) -> &dyn UserRepository {
        self.user_repo.as_ref()
    }

    // === Services ===

    /// Get the JWT service
    pub fn jwt_service(&self) -> &JwtService {
        self.jwt_service.as_ref()
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("pool", &"PgPool")
            .field("repositories", &"...")
            .field("jwt_service", &self.jwt_service)
            .finish()
    }
}

/// Builder for creating ServiceContext
#[derive(Default)]
pub struct ServiceContextBuilder {
    pool: Option<PgPool>,
    movie_repo: Option<Arc<dyn MovieRepository>>,
    genre_repo: Option<Arc<dyn GenreRepository>>,
    rating_repo: Option<Arc<dyn RatingRepository>>,
    comment_repo: Option<Arc<dyn CommentRepository>>,
    favorite_repo: Option<Arc<dyn FavoriteRepository>>,
    image_repo: Option<Arc<dyn ImageRepository>>,
    user_repo: Option<Arc<dyn UserRepository>>,
    jwt_service: Option<Arc<JwtService>>,
}

impl ServiceContextBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pool(mut self, pool: PgPool) -> Self {
        self.pool = Some(pool);
        self
    }

    pub fn movie_repo(mut self, repo: Arc<dyn MovieRepository>) -> Self {
        self.movie_repo = Some(repo);
        self
    }

    pub fn genre_repo(mut self, repo: Arc<dyn GenreRepository>) -> Self {
        self.genre_repo = Some(repo);
        self
    }

    pub fn rating_repo(mut self, repo: Arc<dyn RatingRepository>) -> Self {
        self.rating_repo = Some(repo);
        self
    }

    pub fn comment_repo(mut self, repo: Arc<dyn CommentRepository>) -> Self {
        self.comment_repo = Some(repo);
        self
    }

    pub fn favorite_repo(mut self, repo: Arc<dyn FavoriteRepository>) -> Self {
        self.favorite_repo = Some(repo);
        self
    }

    pub fn image_repo(mut self, repo: Arc<dyn ImageRepository>) -> Self {
        self.image_repo = Some(repo);
        self
    }

    pub fn user_repo(mut self, repo: Arc<dyn UserRepository>) -> Self {
        self.user_repo = Some(repo);
        self
    }

    pub fn jwt_service(mut self, service: Arc<JwtService>) -> Self {
        self.jwt_service = Some(service);
        self
    }

    /// Build the ServiceContext
    ///
    /// # Errors
    /// Returns `ServiceError::Validation` if any required dependency is missing
    pub fn build(self) -> ServiceResult<ServiceContext> {
        Ok(ServiceContext {
            pool: self.pool.ok_or_else(|| missing("pool"))?,
            movie_repo: self.movie_repo.ok_or_else(|| missing("movie_repo"))?,
            genre_repo: self.genre_repo.ok_or_else(|| missing("genre_repo"))?,
            rating_repo: self.rating_repo.ok_or_else(|| missing("rating_repo"))?,
            comment_repo: self.comment_repo.ok_or_else(|| missing("comment_repo"))?,
            favorite_repo: self.favorite_repo.ok_or_else(|| missing("favorite_repo"))?,
            image_repo: self.image_repo.ok_or_else(|| missing("image_repo"))?,
            user_repo: self.user_repo.ok_or_else(|| missing("user_repo"))?,
            jwt_service: self.jwt_service.ok_or_else(|| missing("jwt_service"))?,
        })
    }
}

fn missing(dependency: &str) -> ServiceError {
    ServiceError::validation(format!("{dependency} is required"))
}
