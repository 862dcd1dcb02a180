//! Genre service

use filmwise_core::entities::Genre;
use filmwise_core::DomainError;
use tracing::{info, instrument};

use crate::dto::{GenreRequest, GenreResponse};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Genre service
pub struct GenreService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> GenreService<'a> {
    /// Create a new GenreService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// All genres, ordered by name
    #[instrument(skip(self))]
    pub async fn list_genres(&self) -> ServiceResult<Vec<GenreResponse>> {
        let genres = self.ctx.genre_repo().list().await?;
        Ok(genres.into_iter().map(GenreResponse::from).collect())
    }

    #[instrument(skip(self))]
    pub async fn get_genre(&self, genre_id: i64) -> ServiceResult<GenreResponse> {
        Ok(self.find(genre_id).await?.into())
    }

    /// Create a genre (admin)
    #[instrument(skip(self, request), fields(genre_name = %request.genre_name))]
    pub async fn create_genre(&self, request: GenreRequest) -> ServiceResult<GenreResponse> {
        let name = request.genre_name.trim();
        let genre = self.ctx.genre_repo().create(name).await?;

        info!(genre_id = genre.id, "Genre created");
        Ok(genre.into())
    }

    /// Rename a genre (admin)
    #[instrument(skip(self, request), fields(genre_name = %request.genre_name))]
    pub async fn rename_genre(
        &self,
        genre_id: i64,
        request: GenreRequest,
    ) -> ServiceResult<GenreResponse> {
        let current = self.find(genre_id).await?;
        ensure_mutable(&current)?;

        let genre = self
            .ctx
            .genre_repo()
            .rename(genre_id, request.genre_name.trim())
            .await?;

        info!(genre_id, "Genre renamed");
        Ok(genre.into())
    }

    /// Delete a genre (admin); its movie links go with it
    #[instrument(skip(self))]
    pub async fn delete_genre(&self, genre_id: i64) -> ServiceResult<()> {
        let current = self.find(genre_id).await?;
        ensure_mutable(&current)?;

        self.ctx.genre_repo().delete(genre_id).await?;

        info!(genre_id, "Genre deleted");
        Ok(())
    }

    async fn find(&self, genre_id: i64) -> ServiceResult<Genre> {
        Ok(self
            .ctx
            .genre_repo()
            .find_by_id(genre_id)
            .await?
            .ok_or(DomainError::GenreNotFound(genre_id))?)
    }
}

/// The fallback genre backs movies created without genres
fn ensure_mutable(genre: &Genre) -> ServiceResult<()> {
    if genre.is_unknown() {
        return Err(ServiceError::validation(
            "the fallback genre cannot be renamed or deleted",
        ));
    }
    Ok(())
}
