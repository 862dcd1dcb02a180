//! Movie model -> entity mapper

use filmwise_core::entities::Movie;

use crate::models::MovieModel;

impl From<MovieModel> for Movie {
    fn from(model: MovieModel) -> Self {
        Movie {
            id: model.id,
            title: model.title,
            description: model.description,
            year: model.year,
            release_date: model.release_date,
            runtime: model.runtime,
            image: model.image.filter(|name| !name.is_empty()),
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}
