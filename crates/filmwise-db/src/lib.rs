//! # filmwise-db
//!
//! Database layer implementing repository traits with PostgreSQL via SQLx.
//!
//! ## Overview
//!
//! This crate provides PostgreSQL implementations for all repository traits
//! defined in `filmwise-core`. It handles:
//!
//! - Connection pool management and migrations
//! - Composition of the movie listing query ([`query`])
//! - Folding listing rows with their genres and favorite flags ([`aggregate`])
//! - Per-operation query deadlines ([`QueryDeadline`])
//! - Repository implementations
//!
//! ## Usage
//!
//! ```rust,ignore
//! use filmwise_core::{ImageUrlResolver, MovieFilter, MovieRepository, PageRequest};
//! use filmwise_db::{create_pool, DatabaseConfig, PgMovieRepository};
//!
//! async fn example() -> Result<(), Box<dyn std::error::Error>> {
//!     let pool = create_pool(&DatabaseConfig::default()).await?;
//!     let images = ImageUrlResolver::new("https://img.example/upload", "no-thumb.jpg");
//!     let movies = PgMovieRepository::new(pool, images);
//!
//!     let filter = MovieFilter::new("dark", 2, 0, "rating");
//!     let page = movies.list(&filter, PageRequest::default(), None).await?;
//!     println!("{} matching movies", page.total_count);
//!     Ok(())
//! }
//! ```

pub mod aggregate;
pub mod deadline;
pub mod mappers;
pub mod models;
pub mod pool;
pub mod query;
pub mod repositories;

// Re-export commonly used types
pub use deadline::QueryDeadline;
pub use pool::{create_pool, run_migrations, DatabaseConfig, PgPool};
pub use repositories::{
    PgCommentRepository, PgFavoriteRepository, PgGenreRepository, PgImageRepository,
    PgMovieRepository, PgRatingRepository, PgUserRepository,
};
