//! Domain entities - core business objects

mod comment;
mod genre;
mod image;
mod movie;
mod rating;
mod user;

pub use comment::{Comment, CommentWithAuthor};
pub use genre::{Genre, UNKNOWN_GENRE};
pub use image::{Image, NewImage};
pub use movie::{GenreMap, Movie, MovieDetail, MovieSummary, NewMovie, PaginatedMovies};
pub use rating::Rating;
pub use user::{NewUser, User, UserType};
