//! Database models - SQLx-compatible structs for PostgreSQL tables

mod comment;
mod genre;
mod image;
mod movie;
mod rating;
mod user;

pub use comment::{CommentModel, CommentWithAuthorModel};
pub use genre::GenreModel;
pub use image::ImageModel;
pub use movie::{MovieGenreRow, MovieModel, MovieRowModel};
pub use rating::RatingModel;
pub use user::UserModel;
