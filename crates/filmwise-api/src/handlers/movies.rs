//! Movie handlers
//!
//! Public listing, featured and detail endpoints plus admin writes.

use axum::{extract::State, Json};
use filmwise_service::{
    CreateMovieRequest, ListMoviesQuery, MovieDetailResponse, MovieResponse, MovieService,
    MovieWriteResponse, PaginatedMoviesResponse, UpdateMovieRequest,
};

use crate::extractors::{AdminUser, IdPath, OptionalAuthUser, QueryParams, ValidatedJson};
use crate::response::{ApiResult, Created, NoContent};
use crate::state::AppState;

/// Filtered, ordered and paginated movie listing
///
/// GET /v1/movies?s=&genre=&year=&order_by=&page=&limit=
pub async fn list_movies(
    State(state): State<AppState>,
    viewer: OptionalAuthUser,
    QueryParams(query): QueryParams<ListMoviesQuery>,
) -> ApiResult<Json<PaginatedMoviesResponse>> {
    let service = MovieService::new(state.service_context());
    let page = service.list_movies(&query, viewer.user_id()).await?;
    Ok(Json(page))
}

/// GET /v1/movies/featured
pub async fn featured_movies(
    State(state): State<AppState>,
    viewer: OptionalAuthUser,
) -> ApiResult<Json<Vec<MovieResponse>>> {
    let service = MovieService::new(state.service_context());
    let movies = service.featured_movies(viewer.user_id()).await?;
    Ok(Json(movies))
}

/// GET /v1/movies/:id
pub async fn get_movie(
    State(state): State<AppState>,
    viewer: OptionalAuthUser,
    IdPath(movie_id): IdPath,
) -> ApiResult<Json<MovieDetailResponse>> {
    let service = MovieService::new(state.service_context());
    let movie = service.get_movie(movie_id, viewer.user_id()).await?;
    Ok(Json(movie))
}

/// POST /v1/admin/movies
pub async fn create_movie(
    State(state): State<AppState>,
    _admin: AdminUser,
    ValidatedJson(request): ValidatedJson<CreateMovieRequest>,
) -> ApiResult<Created<Json<MovieWriteResponse>>> {
    let service = MovieService::new(state.service_context());
    let movie = service.create_movie(request).await?;
    Ok(Created(Json(movie)))
}

/// PUT /v1/admin/movies/:id
pub async fn update_movie(
    State(state): State<AppState>,
    _admin: AdminUser,
    IdPath(movie_id): IdPath,
    ValidatedJson(request): ValidatedJson<UpdateMovieRequest>,
) -> ApiResult<Json<MovieWriteResponse>> {
    let service = MovieService::new(state.service_context());
    let movie = service.update_movie(movie_id, request).await?;
    Ok(Json(movie))
}

/// DELETE /v1/admin/movies/:id
pub async fn delete_movie(
    State(state): State<AppState>,
    _admin: AdminUser,
    IdPath(movie_id): IdPath,
) -> ApiResult<NoContent> {
    let service = MovieService::new(state.service_context());
    service.delete_movie(movie_id).await?;
    Ok(NoContent)
}
