//! Image model -> entity mapper

use filmwise_core::entities::Image;

use crate::models::ImageModel;

impl From<ImageModel> for Image {
    fn from(model: ImageModel) -> Self {
        Image {
            id: model.id,
            user_id: model.user_id,
            image_path: model.image_path,
            image_name: model.image_name,
            is_used: model.is_used,
            created_at: model.created_at,
        }
    }
}
