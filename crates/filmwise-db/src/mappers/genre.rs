//! Genre model -> entity mapper

use filmwise_core::entities::Genre;

use crate::models::GenreModel;

impl From<GenreModel> for Genre {
    fn from(model: GenreModel) -> Self {
        Genre {
            id: model.id,
            genre_name: model.genre_name,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}
