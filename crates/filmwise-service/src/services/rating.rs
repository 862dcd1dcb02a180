//! Rating service

use filmwise_core::entities::Rating;
use tracing::{info, instrument};

use crate::dto::{RateMovieRequest, RatingResponse};

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Rating service
pub struct RatingService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> RatingService<'a> {
    /// Create a new RatingService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Store the user's score for a movie, replacing any earlier one
    #[instrument(skip(self, request), fields(movie_id = request.movie_id))]
    pub async fn rate_movie(
        &self,
        user_id: i64,
        request: RateMovieRequest,
    ) -> ServiceResult<RatingResponse> {
        let score = Rating::validate_score(request.rating)?;

        let (rating, created) = self
            .ctx
            .rating_repo()
            .upsert(request.movie_id, user_id, score)
            .await?;

        info!(rating_id = rating.id, created, "Movie rated");

        Ok(RatingResponse {
            id: rating.id,
            movie_id: rating.movie_id,
            rating: rating.rating,
            created,
        })
    }
}
