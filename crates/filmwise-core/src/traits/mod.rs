//! Repository traits implemented by the infrastructure layer

mod repositories;

pub use repositories::{
    CommentRepository, FavoriteRepository, GenreRepository, ImageRepository, MovieRepository,
    RatingRepository, RepoResult, UserRepository,
};
