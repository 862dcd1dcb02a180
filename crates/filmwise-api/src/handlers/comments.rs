//! Comment handlers

use axum::{extract::State, Json};
use filmwise_service::{CommentRequest, CommentResponse, CommentService};

use crate::extractors::{AuthUser, IdPath, ValidatedJson};
use crate::response::{ApiResult, Created, NoContent};
use crate::state::AppState;

/// POST /v1/movies/:id/comments
pub async fn add_comment(
    State(state): State<AppState>,
    auth: AuthUser,
    IdPath(movie_id): IdPath,
    ValidatedJson(request): ValidatedJson<CommentRequest>,
) -> ApiResult<Created<Json<CommentResponse>>> {
    let service = CommentService::new(state.service_context());
    let comment = service.add_comment(movie_id, auth.user_id, request).await?;
    Ok(Created(Json(comment)))
}

/// PUT /v1/comments/:id (author only)
pub async fn update_comment(
    State(state): State<AppState>,
    auth: AuthUser,
    IdPath(comment_id): IdPath,
    ValidatedJson(request): ValidatedJson<CommentRequest>,
) -> ApiResult<Json<CommentResponse>> {
    let service = CommentService::new(state.service_context());
    let comment = service
        .update_comment(comment_id, auth.user_id, request)
        .await?;
    Ok(Json(comment))
}

/// DELETE /v1/comments/:id (author or admin)
pub async fn delete_comment(
    State(state): State<AppState>,
    auth: AuthUser,
    IdPath(comment_id): IdPath,
) -> ApiResult<NoContent> {
    let service = CommentService::new(state.service_context());
    service
        .delete_comment(comment_id, auth.user_id, auth.is_admin)
        .await?;
    Ok(NoContent)
}
