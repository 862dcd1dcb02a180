//! Business logic services
//!
//! This module contains all service layer implementations that handle
//! business logic, validation, and orchestration of domain operations.

pub mod auth;
pub mod comment;
pub mod context;
pub mod error;
pub mod favorite;
pub mod genre;
pub mod image;
pub mod movie;
pub mod rating;

#[cfg(test)]
mod testing;

// Re-export all services for convenience
pub use auth::AuthService;
pub use comment::CommentService;
pub use context::{ServiceContext, ServiceContextBuilder};
pub use error::{ServiceError, ServiceResult};
pub use favorite::FavoriteService;
pub use genre::GenreService;
pub use image::ImageService;
pub use movie::{MovieService, FEATURED_LIMIT, MAX_GENRES};
pub use rating::RatingService;
