//! PostgreSQL implementation of MovieRepository
//!
//! Listing and detail reads go through the same row SELECT; genre maps and the
//! viewer's favorite flags are then fetched for the whole page with one batched
//! query each and folded in memory. Any failing sub-query fails the whole read.

use std::collections::{HashMap, HashSet};

use async_trait::async_trait;
use sqlx::{PgConnection, PgPool};
use tracing::{debug, instrument};

use filmwise_core::entities::{GenreMap, Movie, MovieDetail, MovieSummary, NewMovie, PaginatedMovies};
use filmwise_core::error::DomainError;
use filmwise_core::traits::{MovieRepository, RepoResult};
use filmwise_core::value_objects::{ImageUrlResolver, MovieFilter, OrderBy, PageRequest};

use crate::aggregate::{assemble, fold_genres};
use crate::deadline::QueryDeadline;
use crate::models::{CommentWithAuthorModel, MovieGenreRow, MovieModel, MovieRowModel};
use crate::query::{order_clause, MovieListingQuery, MOVIE_ROW_SELECT};

use super::comment::COMMENT_THREAD_SQL;
use super::error::{map_unique_violation, movie_not_found};

const MOVIE_COLUMNS: &str =
    "id, title, description, year, release_date, runtime, image, created_at, updated_at";

/// PostgreSQL implementation of MovieRepository
#[derive(Clone)]
pub struct PgMovieRepository {
    pool: PgPool,
    images: ImageUrlResolver,
    deadline: QueryDeadline,
}

impl PgMovieRepository {
    /// Create a new PgMovieRepository
    pub fn new(pool: PgPool, images: ImageUrlResolver) -> Self {
        Self {
            pool,
            images,
            deadline: QueryDeadline::default(),
        }
    }

    pub fn with_deadline(mut self, deadline: QueryDeadline) -> Self {
        self.deadline = deadline;
        self
    }

    /// Genre maps for a batch of movies, one query for the whole batch
    async fn genre_maps(&self, movie_ids: &[i64]) -> RepoResult<HashMap<i64, GenreMap>> {
        if movie_ids.is_empty() {
            return Ok(HashMap::new());
        }

        let rows = self
            .deadline
            .run(
                sqlx::query_as::<_, MovieGenreRow>(
                    r"
                    SELECT mg.movie_id, g.id AS genre_id, g.genre_name
                    FROM movies_genres mg
                    JOIN genres g ON g.id = mg.genre_id
                    WHERE mg.movie_id = ANY($1)
                    ",
                )
                .bind(movie_ids)
                .fetch_all(&self.pool),
            )
            .await?;

        Ok(fold_genres(movie_ids, rows))
    }

    /// Movies in the batch the viewer has favorited
    async fn viewer_favorites(
        &self,
        viewer: Option<i64>,
        movie_ids: &[i64],
    ) -> RepoResult<HashSet<i64>> {
        let Some(user_id) = viewer else {
            return Ok(HashSet::new());
        };
        if movie_ids.is_empty() {
            return Ok(HashSet::new());
        }

        let favorites = self
            .deadline
            .run(
                sqlx::query_scalar::<_, i64>(
                    r"
                    SELECT movie_id FROM favorites
                    WHERE user_id = $1 AND movie_id = ANY($2)
                    ",
                )
                .bind(user_id)
                .bind(movie_ids)
                .fetch_all(&self.pool),
            )
            .await?;

        Ok(favorites.into_iter().collect())
    }

    async fn summarize(
        &self,
        rows: Vec<MovieRowModel>,
        viewer: Option<i64>,
    ) -> RepoResult<Vec<MovieSummary>> {
        let ids: Vec<i64> = rows.iter().map(|row| row.id).collect();
        let genres = self.genre_maps(&ids).await?;
        let favorites = self.viewer_favorites(viewer, &ids).await?;

        Ok(assemble(rows, genres, &favorites, &self.images))
    }
}

/// Replace every genre link of a movie
async fn replace_genres(
    conn: &mut PgConnection,
    movie_id: i64,
    genre_ids: &[i64],
) -> Result<(), sqlx::Error> {
    sqlx::query("DELETE FROM movies_genres WHERE movie_id = $1")
        .bind(movie_id)
        .execute(&mut *conn)
        .await?;

    sqlx::query(
        r"
        INSERT INTO movies_genres (movie_id, genre_id)
        SELECT $1, UNNEST($2::BIGINT[])
        ON CONFLICT DO NOTHING
        ",
    )
    .bind(movie_id)
    .bind(genre_ids)
    .execute(&mut *conn)
    .await?;

    Ok(())
}

#[async_trait]
impl MovieRepository for PgMovieRepository {
    #[instrument(skip(self))]
    async fn list(
        &self,
        filter: &MovieFilter,
        page: PageRequest,
        viewer: Option<i64>,
    ) -> RepoResult<PaginatedMovies> {
        let query = MovieListingQuery::new(filter, page);

        // Count and page are separate statements; under concurrent writes the
        // total may drift slightly from the rows returned.
        let count_sql = query.count_sql();
        let (total_count,) = self
            .deadline
            .run(
                query
                    .bind_count(sqlx::query_as::<_, (i64,)>(&count_sql))
                    .fetch_one(&self.pool),
            )
            .await?;

        let page_sql = query.page_sql();
        let rows = self
            .deadline
            .run(
                query
                    .bind_page(sqlx::query_as::<_, MovieRowModel>(&page_sql))
                    .fetch_all(&self.pool),
            )
            .await?;

        debug!(total_count, rows = rows.len(), "Movie listing fetched");

        let movies = self.summarize(rows, viewer).await?;

        Ok(PaginatedMovies {
            total_count,
            per_page: page.per_page(),
            current_page: page.page(),
            movies,
        })
    }

    #[instrument(skip(self))]
    async fn featured(&self, limit: i64, viewer: Option<i64>) -> RepoResult<Vec<MovieSummary>> {
        let sql = format!(
            "{MOVIE_ROW_SELECT}\n    ORDER BY {}\n    LIMIT $1",
            order_clause(OrderBy::Recent)
        );

        let rows = self
            .deadline
            .run(
                sqlx::query_as::<_, MovieRowModel>(&sql)
                    .bind(limit.max(0))
                    .fetch_all(&self.pool),
            )
            .await?;

        self.summarize(rows, viewer).await
    }

    #[instrument(skip(self))]
    async fn find_detail(&self, id: i64, viewer: Option<i64>) -> RepoResult<Option<MovieDetail>> {
        let sql = format!("{MOVIE_ROW_SELECT}\n    WHERE m.id = $1");

        let row = self
            .deadline
            .run(
                sqlx::query_as::<_, MovieRowModel>(&sql)
                    .bind(id)
                    .fetch_optional(&self.pool),
            )
            .await?;

        let Some(row) = row else {
            return Ok(None);
        };

        let comments = self
            .deadline
            .run(
                sqlx::query_as::<_, CommentWithAuthorModel>(COMMENT_THREAD_SQL)
                    .bind(id)
                    .fetch_all(&self.pool),
            )
            .await?;

        let Some(movie) = self.summarize(vec![row], viewer).await?.pop() else {
            return Ok(None);
        };

        Ok(Some(MovieDetail::new(
            movie,
            comments.into_iter().map(Into::into).collect(),
        )))
    }

    #[instrument(skip(self))]
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<Movie>> {
        let sql = format!("SELECT {MOVIE_COLUMNS} FROM movies WHERE id = $1");

        let result = self
            .deadline
            .run(
                sqlx::query_as::<_, MovieModel>(&sql)
                    .bind(id)
                    .fetch_optional(&self.pool),
            )
            .await?;

        Ok(result.map(Movie::from))
    }

    #[instrument(skip(self))]
    async fn exists(&self, id: i64) -> RepoResult<bool> {
        self.deadline
            .run(
                sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM movies WHERE id = $1)")
                    .bind(id)
                    .fetch_one(&self.pool),
            )
            .await
    }

    #[instrument(skip(self, movie), fields(title = %movie.title))]
    async fn create(&self, movie: &NewMovie) -> RepoResult<Movie> {
        let sql = format!(
            r"
            INSERT INTO movies (title, description, year, release_date, runtime, image)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING {MOVIE_COLUMNS}
            "
        );

        let model = self
            .deadline
            .run_with(
                async {
                    let mut tx = self.pool.begin().await?;

                    let model = sqlx::query_as::<_, MovieModel>(&sql)
                        .bind(&movie.title)
                        .bind(&movie.description)
                        .bind(movie.year)
                        .bind(movie.release_date)
                        .bind(movie.runtime)
                        .bind(&movie.image)
                        .fetch_one(&mut *tx)
                        .await?;

                    replace_genres(&mut tx, model.id, &movie.genre_ids).await?;

                    tx.commit().await?;
                    Ok::<_, sqlx::Error>(model)
                },
                |e| map_unique_violation(e, || DomainError::MovieTitleExists),
            )
            .await?;

        Ok(model.into())
    }

    #[instrument(skip(self, movie), fields(title = %movie.title))]
    async fn update(&self, id: i64, movie: &NewMovie) -> RepoResult<Movie> {
        let sql = format!(
            r"
            UPDATE movies
            SET title = $2, description = $3, year = $4, release_date = $5, runtime = $6,
                image = COALESCE($7, image), updated_at = NOW()
            WHERE id = $1
            RETURNING {MOVIE_COLUMNS}
            "
        );

        let model = self
            .deadline
            .run_with(
                async {
                    let mut tx = self.pool.begin().await?;

                    let model = sqlx::query_as::<_, MovieModel>(&sql)
                        .bind(id)
                        .bind(&movie.title)
                        .bind(&movie.description)
                        .bind(movie.year)
                        .bind(movie.release_date)
                        .bind(movie.runtime)
                        .bind(&movie.image)
                        .fetch_optional(&mut *tx)
                        .await?;

                    // Dropping the transaction rolls it back
                    let Some(model) = model else {
                        return Ok::<_, sqlx::Error>(None);
                    };

                    replace_genres(&mut tx, model.id, &movie.genre_ids).await?;

                    tx.commit().await?;
                    Ok(Some(model))
                },
                |e| map_unique_violation(e, || DomainError::MovieTitleExists),
            )
            .await?
            .ok_or_else(|| movie_not_found(id))?;

        Ok(model.into())
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: i64) -> RepoResult<()> {
        let result = self
            .deadline
            .run(
                sqlx::query("DELETE FROM movies WHERE id = $1")
                    .bind(id)
                    .execute(&self.pool),
            )
            .await?;

        if result.rows_affected() == 0 {
            return Err(movie_not_found(id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn genres_of(&self, id: i64) -> RepoResult<GenreMap> {
        let mut maps = self.genre_maps(&[id]).await?;
        Ok(maps.remove(&id).unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repo_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<PgMovieRepository>();
    }

    #[test]
    fn test_map_db_error_is_infrastructure() {
        let err = crate::repositories::map_db_error(sqlx::Error::PoolTimedOut);
        assert!(err.is_infrastructure());
    }
}
