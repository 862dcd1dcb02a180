//! # filmwise-service
//!
//! Application layer containing business logic, services, and DTOs.

pub mod dto;
pub mod services;

pub use dto::*;
pub use services::{
    AuthService, CommentService, FavoriteService, GenreService, ImageService, MovieService,
    RatingService, ServiceContext, ServiceContextBuilder, ServiceError, ServiceResult,
};
