//! Movie service
//!
//! Listing, featured strip and detail reads, plus admin writes that resolve
//! genre names and keep image records in step with the movies using them.

use filmwise_core::entities::{Image, Movie, NewMovie, UNKNOWN_GENRE};
use filmwise_core::DomainError;
use tracing::{info, instrument, warn};

use crate::dto::{
    CreateMovieRequest, ListMoviesQuery, MovieDetailResponse, MovieResponse, MovieWriteResponse,
    PaginatedMoviesResponse, UpdateMovieRequest,
};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Number of movies in the featured strip
pub const FEATURED_LIMIT: i64 = 5;

/// Upper bound on genres linked to a single movie
pub const MAX_GENRES: usize = 5;

/// Movie service
pub struct MovieService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> MovieService<'a> {
    /// Create a new MovieService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// One page of the filtered listing
    #[instrument(skip(self))]
    pub async fn list_movies(
        &self,
        query: &ListMoviesQuery,
        viewer: Option<i64>,
    ) -> ServiceResult<PaginatedMoviesResponse> {
        let page = query.page_request()?;
        let filter = query.filter();

        let movies = self.ctx.movie_repo().list(&filter, page, viewer).await?;
        Ok(movies.into())
    }

    /// Most recently updated movies
    #[instrument(skip(self))]
    pub async fn featured_movies(&self, viewer: Option<i64>) -> ServiceResult<Vec<MovieResponse>> {
        let movies = self.ctx.movie_repo().featured(FEATURED_LIMIT, viewer).await?;
        Ok(movies.into_iter().map(MovieResponse::from).collect())
    }

    /// Movie detail with its comment thread
    #[instrument(skip(self))]
    pub async fn get_movie(
        &self,
        movie_id: i64,
        viewer: Option<i64>,
    ) -> ServiceResult<MovieDetailResponse> {
        let detail = self
            .ctx
            .movie_repo()
            .find_detail(movie_id, viewer)
            .await?
            .ok_or(DomainError::MovieNotFound(movie_id))?;

        Ok(detail.into())
    }

    /// Create a movie (admin)
    #[instrument(skip(self, request), fields(title = %request.title))]
    pub async fn create_movie(&self, request: CreateMovieRequest) -> ServiceResult<MovieWriteResponse> {
        let image_id = request
            .image_id
            .ok_or_else(|| ServiceError::validation("image is required"))?;
        let image = self.find_image(image_id).await?;

        let movie = NewMovie {
            title: request.title.trim().to_string(),
            description: request.description.trim().to_string(),
            year: request.year,
            release_date: request.release_date,
            runtime: request.runtime,
            image: Some(image.image_name.clone()),
            genre_ids: self.resolve_genres(&request.genres).await?,
        };

        let created = self.ctx.movie_repo().create(&movie).await?;
        self.ctx
            .image_repo()
            .mark_used(&image.image_name, true)
            .await?;

        info!(movie_id = created.id, "Movie created");

        self.write_response(&created).await
    }

    /// Update a movie (admin); genre links are replaced wholesale
    #[instrument(skip(self, request), fields(title = %request.title))]
    pub async fn update_movie(
        &self,
        movie_id: i64,
        request: UpdateMovieRequest,
    ) -> ServiceResult<MovieWriteResponse> {
        let current = self
            .ctx
            .movie_repo()
            .find_by_id(movie_id)
            .await?
            .ok_or(DomainError::MovieNotFound(movie_id))?;

        let image = match request.image_id {
            Some(image_id) => Some(self.find_image(image_id).await?),
            None => None,
        };
        let next_image = image.map(|image| image.image_name);

        let movie = NewMovie {
            title: request.title.trim().to_string(),
            description: request.description.trim().to_string(),
            year: request.year,
            release_date: request.release_date,
            runtime: request.runtime,
            image: next_image.clone(),
            genre_ids: self.resolve_genres(&request.genres).await?,
        };

        let updated = self.ctx.movie_repo().update(movie_id, &movie).await?;

        if let Some(name) = next_image.as_deref() {
            self.ctx.image_repo().mark_used(name, true).await?;
            if current.replaces_image(Some(name)) {
                if let Some(previous) = current.image.as_deref() {
                    self.release_image(previous).await?;
                }
            }
        }

        info!(movie_id, "Movie updated");

        self.write_response(&updated).await
    }

    /// Delete a movie (admin) along with its now unreferenced cover
    #[instrument(skip(self))]
    pub async fn delete_movie(&self, movie_id: i64) -> ServiceResult<()> {
        let movie = self
            .ctx
            .movie_repo()
            .find_by_id(movie_id)
            .await?
            .ok_or(DomainError::MovieNotFound(movie_id))?;

        self.ctx.movie_repo().delete(movie_id).await?;

        if movie.has_image() {
            if let Some(image) = movie.image.as_deref() {
                self.release_image(image).await?;
            }
        }

        info!(movie_id, "Movie deleted");
        Ok(())
    }

    /// Resolve genre names to ids
    ///
    /// Names are trimmed and de-duplicated; an empty list resolves to the
    /// fallback genre and any unknown name is rejected.
    #[instrument(skip(self))]
    pub async fn resolve_genres(&self, names: &[String]) -> ServiceResult<Vec<i64>> {
        let names = normalize_genre_names(names);
        if names.len() > MAX_GENRES {
            return Err(DomainError::TooManyGenres { max: MAX_GENRES }.into());
        }

        if names.is_empty() {
            let fallback = self
                .ctx
                .genre_repo()
                .find_by_name(UNKNOWN_GENRE)
                .await?
                .ok_or_else(|| ServiceError::internal("fallback genre is missing"))?;
            return Ok(vec![fallback.id]);
        }

        let found = self.ctx.genre_repo().find_by_names(&names).await?;

        names
            .iter()
            .map(|name| {
                found
                    .iter()
                    .find(|genre| &genre.genre_name == name)
                    .map(|genre| genre.id)
                    .ok_or_else(|| ServiceError::from(DomainError::UnknownGenre(name.clone())))
            })
            .collect()
    }

    async fn find_image(&self, image_id: i64) -> ServiceResult<Image> {
        self.ctx
            .image_repo()
            .find_by_id(image_id)
            .await?
            .ok_or_else(|| ServiceError::validation("invalid image id"))
    }

    /// Drop an image record once no movie points at it anymore
    async fn release_image(&self, name: &str) -> ServiceResult<()> {
        if self.ctx.image_repo().is_referenced(name).await? {
            warn!(image_name = name, "Image still referenced, keeping it");
            return Ok(());
        }
        self.ctx.image_repo().delete_by_name(name).await?;
        Ok(())
    }

    async fn write_response(&self, movie: &Movie) -> ServiceResult<MovieWriteResponse> {
        let genres = self.ctx.movie_repo().genres_of(movie.id).await?;
        Ok(MovieWriteResponse {
            id: movie.id,
            genres,
        })
    }
}

/// Trim, drop blanks and de-duplicate, keeping first-seen order
fn normalize_genre_names(names: &[String]) -> Vec<String> {
    let mut unique: Vec<String> = Vec::with_capacity(names.len());
    for name in names.iter().map(|n| n.trim()).filter(|n| !n.is_empty()) {
        if !unique.iter().any(|seen| seen == name) {
            unique.push(name.to_string());
        }
    }
    unique
}
