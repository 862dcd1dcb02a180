//! Image service
//!
//! Records cover images that already live with the image provider. Movies
//! refer to an image by its name; the public URL is derived from it.

use filmwise_core::entities::{Image, NewImage};
use filmwise_core::DomainError;
use tracing::{info, instrument};
use uuid::Uuid;

use crate::dto::{CreateImageRequest, CreatedImageResponse, ImageResponse};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Image service
pub struct ImageService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> ImageService<'a> {
    /// Create a new ImageService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Register an uploaded image (admin)
    #[instrument(skip(self, request), fields(image_path = %request.image_path))]
    pub async fn register_image(
        &self,
        user_id: i64,
        request: CreateImageRequest,
    ) -> ServiceResult<CreatedImageResponse> {
        let image_path = request.image_path.trim().to_string();
        let image_name = match request.image_name.as_deref().map(str::trim) {
            Some(name) if !name.is_empty() => checked_image_name(name)?,
            _ => generate_image_name(&image_path)?,
        };

        let image = self
            .ctx
            .image_repo()
            .create(&NewImage {
                user_id,
                image_path,
                image_name,
            })
            .await?;

        info!(image_id = image.id, image_name = %image.image_name, "Image registered");
        Ok(CreatedImageResponse::from(&image))
    }

    #[instrument(skip(self))]
    pub async fn get_image(&self, image_id: i64) -> ServiceResult<ImageResponse> {
        Ok(self.find(image_id).await?.into())
    }

    /// Delete an image record; refused while a movie still uses it
    #[instrument(skip(self))]
    pub async fn delete_image(&self, image_id: i64) -> ServiceResult<()> {
        let image = self.find(image_id).await?;
        if self.ctx.image_repo().is_referenced(&image.image_name).await? {
            return Err(DomainError::ImageInUse.into());
        }

        self.ctx.image_repo().delete(image_id).await?;

        info!(image_id, "Image deleted");
        Ok(())
    }

    async fn find(&self, image_id: i64) -> ServiceResult<Image> {
        Ok(self
            .ctx
            .image_repo()
            .find_by_id(image_id)
            .await?
            .ok_or_else(|| DomainError::ImageNotFound(image_id.to_string()))?)
    }
}

/// `<uuid>.<ext>`, keeping the extension of the uploaded file
fn generate_image_name(image_path: &str) -> ServiceResult<String> {
    let extension = NewImage::extension(image_path)
        .ok_or_else(|| ServiceError::validation("image path must end with a file extension"))?;
    Ok(format!("{}.{extension}", Uuid::new_v4().simple()))
}

fn checked_image_name(name: &str) -> ServiceResult<String> {
    if name.contains(['/', '\\']) {
        return Err(ServiceError::validation("image name must not contain path separators"));
    }
    Ok(name.to_string())
}
