//! Rating handler

use axum::{extract::State, http::StatusCode, Json};
use filmwise_service::{RateMovieRequest, RatingResponse, RatingService};

use crate::extractors::{AuthUser, ValidatedJson};
use crate::response::ApiResult;
use crate::state::AppState;

/// Insert or replace the caller's rating of a movie
///
/// POST /v1/rating
pub async fn rate_movie(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(request): ValidatedJson<RateMovieRequest>,
) -> ApiResult<(StatusCode, Json<RatingResponse>)> {
    let service = RatingService::new(state.service_context());
    let rating = service.rate_movie(auth.user_id, request).await?;

    let status = if rating.created {
        StatusCode::CREATED
    } else {
        StatusCode::OK
    };
    Ok((status, Json(rating)))
}
