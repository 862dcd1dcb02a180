//! Favorite service

use tracing::{info, instrument};

use crate::dto::FavoriteResponse;

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Favorite service
pub struct FavoriteService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> FavoriteService<'a> {
    /// Create a new FavoriteService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Flip the favorite flag and report the new state
    #[instrument(skip(self))]
    pub async fn toggle(&self, user_id: i64, movie_id: i64) -> ServiceResult<FavoriteResponse> {
        let is_favorite = self.ctx.favorite_repo().toggle(user_id, movie_id).await?;

        info!(is_favorite, "Favorite toggled");
        Ok(FavoriteResponse {
            movie_id,
            is_favorite,
        })
    }

    /// Mark as favorite; repeating the call is harmless
    #[instrument(skip(self))]
    pub async fn add(&self, user_id: i64, movie_id: i64) -> ServiceResult<FavoriteResponse> {
        if self.ctx.favorite_repo().add(user_id, movie_id).await? {
            info!("Favorite added");
        }
        Ok(FavoriteResponse {
            movie_id,
            is_favorite: true,
        })
    }

    /// Remove from favorites; repeating the call is harmless
    #[instrument(skip(self))]
    pub async fn remove(&self, user_id: i64, movie_id: i64) -> ServiceResult<FavoriteResponse> {
        if self.ctx.favorite_repo().remove(user_id, movie_id).await? {
            info!("Favorite removed");
        }
        Ok(FavoriteResponse {
            movie_id,
            is_favorite: false,
        })
    }
}
