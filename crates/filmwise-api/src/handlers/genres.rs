//! Genre handlers

use axum::{extract::State, Json};
use filmwise_service::{GenreRequest, GenreResponse, GenreService};

use crate::extractors::{AdminUser, IdPath, ValidatedJson};
use crate::response::{ApiResult, Created, NoContent};
use crate::state::AppState;

/// GET /v1/genres
pub async fn list_genres(State(state): State<AppState>) -> ApiResult<Json<Vec<GenreResponse>>> {
    let service = GenreService::new(state.service_context());
    Ok(Json(service.list_genres().await?))
}

/// GET /v1/genres/:id
pub async fn get_genre(
    State(state): State<AppState>,
    IdPath(genre_id): IdPath,
) -> ApiResult<Json<GenreResponse>> {
    let service = GenreService::new(state.service_context());
    Ok(Json(service.get_genre(genre_id).await?))
}

/// POST /v1/admin/genres
pub async fn create_genre(
    State(state): State<AppState>,
    _admin: AdminUser,
    ValidatedJson(request): ValidatedJson<GenreRequest>,
) -> ApiResult<Created<Json<GenreResponse>>> {
    let service = GenreService::new(state.service_context());
    let genre = service.create_genre(request).await?;
    Ok(Created(Json(genre)))
}

/// PUT /v1/admin/genres/:id
pub async fn rename_genre(
    State(state): State<AppState>,
    _admin: AdminUser,
    IdPath(genre_id): IdPath,
    ValidatedJson(request): ValidatedJson<GenreRequest>,
) -> ApiResult<Json<GenreResponse>> {
    let service = GenreService::new(state.service_context());
    Ok(Json(service.rename_genre(genre_id, request).await?))
}

/// DELETE /v1/admin/genres/:id
pub async fn delete_genre(
    State(state): State<AppState>,
    _admin: AdminUser,
    IdPath(genre_id): IdPath,
) -> ApiResult<NoContent> {
    let service = GenreService::new(state.service_context());
    service.delete_genre(genre_id).await?;
    Ok(NoContent)
}
