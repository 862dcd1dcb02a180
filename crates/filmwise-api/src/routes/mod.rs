//! Route definitions
//!
//! Catalog routes are mounted under /v1; operational routes sit at the root.

use axum::{
    routing::{get, post, put},
    Router,
};

use crate::handlers::{auth, comments, favorites, genres, health, images, movies, ratings};
use crate::state::AppState;

/// Create the API router (operational routes are built separately)
pub fn create_router() -> Router<AppState> {
    Router::new().nest("/v1", api_v1_routes())
}

/// Status and health routes, kept apart so they bypass rate limiting
pub fn operational_routes() -> Router<AppState> {
    Router::new()
        .route("/status", get(health::status))
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
}

fn api_v1_routes() -> Router<AppState> {
    Router::new()
        .merge(user_routes())
        .merge(movie_routes())
        .merge(genre_routes())
        .merge(admin_routes())
}

fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/user/signup", post(auth::signup))
        .route("/user/login", post(auth::login))
        .route("/user/refresh", post(auth::refresh_token))
}

fn movie_routes() -> Router<AppState> {
    Router::new()
        .route("/movies", get(movies::list_movies))
        .route("/movies/featured", get(movies::featured_movies))
        .route("/movies/:id", get(movies::get_movie))
        .route("/movies/:id/comments", post(comments::add_comment))
        .route(
            "/movies/:id/favorite",
            post(favorites::toggle_favorite)
                .put(favorites::add_favorite)
                .delete(favorites::remove_favorite),
        )
        .route(
            "/comments/:id",
            put(comments::update_comment).delete(comments::delete_comment),
        )
        .route("/rating", post(ratings::rate_movie))
}

fn genre_routes() -> Router<AppState> {
    Router::new()
        .route("/genres", get(genres::list_genres))
        .route("/genres/:id", get(genres::get_genre))
}

fn admin_routes() -> Router<AppState> {
    Router::new()
        .route("/admin/genres", post(genres::create_genre))
        .route(
            "/admin/genres/:id",
            put(genres::rename_genre).delete(genres::delete_genre),
        )
        .route("/admin/movies", post(movies::create_movie))
        .route(
            "/admin/movies/:id",
            put(movies::update_movie).delete(movies::delete_movie),
        )
        .route("/admin/images", post(images::register_image))
        .route(
            "/admin/images/:id",
            get(images::get_image).delete(images::delete_image),
        )
}
