//! Rating model -> entity mapper

use filmwise_core::entities::Rating;

use crate::models::RatingModel;

impl From<RatingModel> for Rating {
    fn from(model: RatingModel) -> Self {
        Rating {
            id: model.id,
            movie_id: model.movie_id,
            user_id: model.user_id,
            rating: model.rating,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}
