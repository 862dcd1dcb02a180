//! # filmwise-core
//!
//! Domain layer containing entities, value objects and repository traits for the
//! movie catalog. This crate has zero dependencies on infrastructure (database,
//! web framework, etc.).

pub mod entities;
pub mod error;
pub mod traits;
pub mod value_objects;

// Re-export commonly used types at crate root
pub use entities::{
    Comment, CommentWithAuthor, Genre, GenreMap, Image, Movie, MovieDetail,
    MovieSummary, NewImage, NewMovie, NewUser, PaginatedMovies, Rating, User, UserType,
    UNKNOWN_GENRE,
};
pub use error::DomainError;
pub use traits::{
    CommentRepository, FavoriteRepository, GenreRepository, ImageRepository, MovieRepository,
    RatingRepository, RepoResult, UserRepository,
};
pub use value_objects::{ImageUrlResolver, MovieFilter, OrderBy, PageRequest};
