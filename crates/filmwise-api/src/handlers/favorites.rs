//! Favorite handlers
//!
//! POST toggles, PUT and DELETE set the flag idempotently.

use axum::{extract::State, Json};
use filmwise_service::{FavoriteResponse, FavoriteService};

use crate::extractors::{AuthUser, IdPath};
use crate::response::ApiResult;
use crate::state::AppState;

/// POST /v1/movies/:id/favorite
pub async fn toggle_favorite(
    State(state): State<AppState>,
    auth: AuthUser,
    IdPath(movie_id): IdPath,
) -> ApiResult<Json<FavoriteResponse>> {
    let service = FavoriteService::new(state.service_context());
    Ok(Json(service.toggle(auth.user_id, movie_id).await?))
}

/// PUT /v1/movies/:id/favorite
pub async fn add_favorite(
    State(state): State<AppState>,
    auth: AuthUser,
    IdPath(movie_id): IdPath,
) -> ApiResult<Json<FavoriteResponse>> {
    let service = FavoriteService::new(state.service_context());
    Ok(Json(service.add(auth.user_id, movie_id).await?))
}

/// DELETE /v1/movies/:id/favorite
pub async fn remove_favorite(
    State(state): State<AppState>,
    auth: AuthUser,
    IdPath(movie_id): IdPath,
) -> ApiResult<Json<FavoriteResponse>> {
    let service = FavoriteService::new(state.service_context());
    Ok(Json(service.remove(auth.user_id, movie_id).await?))
}
