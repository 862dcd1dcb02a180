//! Repository implementations
//!
//! PostgreSQL implementations of the repository traits defined in filmwise-core.
//! Each repository runs every operation under a [`QueryDeadline`](crate::QueryDeadline).

mod comment;
mod error;
mod favorite;
mod genre;
mod image;
mod movie;
mod rating;
mod user;

pub(crate) use error::map_db_error;

pub use comment::PgCommentRepository;
pub use favorite::PgFavoriteRepository;
pub use genre::PgGenreRepository;
pub use image::PgImageRepository;
pub use movie::PgMovieRepository;
pub use rating::PgRatingRepository;
pub use user::PgUserRepository;
