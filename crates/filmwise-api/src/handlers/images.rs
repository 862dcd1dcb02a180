//! Image record handlers (admin)
//!
//! Assets are uploaded to the media host out of band; these endpoints only
//! track the records movies point at.

use axum::{extract::State, Json};
use filmwise_service::{CreateImageRequest, CreatedImageResponse, ImageResponse, ImageService};

use crate::extractors::{AdminUser, IdPath, ValidatedJson};
use crate::response::{ApiResult, Created, NoContent};
use crate::state::AppState;

/// POST /v1/admin/images
pub async fn register_image(
    State(state): State<AppState>,
    AdminUser(admin): AdminUser,
    ValidatedJson(request): ValidatedJson<CreateImageRequest>,
) -> ApiResult<Created<Json<CreatedImageResponse>>> {
    let service = ImageService::new(state.service_context());
    let image = service.register_image(admin.user_id, request).await?;
    Ok(Created(Json(image)))
}

/// GET /v1/admin/images/:id
pub async fn get_image(
    State(state): State<AppState>,
    _admin: AdminUser,
    IdPath(image_id): IdPath,
) -> ApiResult<Json<ImageResponse>> {
    let service = ImageService::new(state.service_context());
    Ok(Json(service.get_image(image_id).await?))
}

/// DELETE /v1/admin/images/:id
pub async fn delete_image(
    State(state): State<AppState>,
    _admin: AdminUser,
    IdPath(image_id): IdPath,
) -> ApiResult<NoContent> {
    let service = ImageService::new(state.service_context());
    service.delete_image(image_id).await?;
    Ok(NoContent)
}
