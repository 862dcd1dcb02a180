//! Entity to DTO mappers
//!
//! Implements `From` conversions from domain entities to response DTOs.

use filmwise_core::entities::{
    Comment, CommentWithAuthor, Genre, Image, MovieDetail, MovieSummary, PaginatedMovies, User,
};

use super::responses::{
    CommentResponse, CreatedImageResponse, GenreResponse, ImageResponse, MovieCommentResponse,
    MovieDetailResponse, MovieResponse, PaginatedMoviesResponse, UserResponse,
};

// ============================================================================
// User Mappers
// ============================================================================

impl From<&User> for UserResponse {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            full_name: user.full_name.clone(),
            email: user.email.clone(),
            user_type: user.user_type,
            created_at: user.created_at,
        }
    }
}

// ============================================================================
// Movie Mappers
// ============================================================================

impl From<MovieSummary> for MovieResponse {
    fn from(movie: MovieSummary) -> Self {
        Self {
            id: movie.id,
            title: movie.title,
            description: movie.description,
            year: movie.year,
            release_date: movie.release_date,
            runtime: movie.runtime,
            rating: movie.rating,
            image: movie.image_url,
            genres: movie.genres,
            total_comments: movie.total_comments,
            total_favorites: movie.total_favorites,
            is_favorite: movie.is_favorite,
        }
    }
}

impl From<PaginatedMovies> for PaginatedMoviesResponse {
    fn from(page: PaginatedMovies) -> Self {
        Self {
            total_count: page.total_count,
            per_page: page.per_page,
            current_page: page.current_page,
            total_pages: page.total_pages(),
            movies: page.movies.into_iter().map(MovieResponse::from).collect(),
        }
    }
}

impl From<CommentWithAuthor> for MovieCommentResponse {
    fn from(comment: CommentWithAuthor) -> Self {
        Self {
            id: comment.id,
            user_id: comment.user_id,
            user_name: comment.user_name,
            comment: comment.comment,
            commented_at: comment.created_at,
        }
    }
}

impl From<MovieDetail> for MovieDetailResponse {
    fn from(detail: MovieDetail) -> Self {
        Self {
            movie: detail.movie.into(),
            comments: detail.comments.into_iter().map(Into::into).collect(),
        }
    }
}

// ============================================================================
// Genre / Comment / Image Mappers
// ============================================================================

impl From<Genre> for GenreResponse {
    fn from(genre: Genre) -> Self {
        Self {
            id: genre.id,
            genre_name: genre.genre_name,
            created_at: genre.created_at,
            updated_at: genre.updated_at,
        }
    }
}

impl From<Comment> for CommentResponse {
    fn from(comment: Comment) -> Self {
        Self {
            id: comment.id,
            movie_id: comment.movie_id,
            user_id: comment.user_id,
            comment: comment.comment,
            created_at: comment.created_at,
            updated_at: comment.updated_at,
        }
    }
}

impl From<&Image> for CreatedImageResponse {
    fn from(image: &Image) -> Self {
        Self {
            id: image.id,
            image_name: image.image_name.clone(),
        }
    }
}

impl From<Image> for ImageResponse {
    fn from(image: Image) -> Self {
        Self {
            id: image.id,
            image_path: image.image_path,
            image_name: image.image_name,
            is_used: image.is_used,
            created_at: image.created_at,
        }
    }
}
