//! Result aggregator - folds listing rows and their one-to-many data into summaries

use std::collections::{HashMap, HashSet};

use filmwise_core::{GenreMap, ImageUrlResolver, MovieSummary};

use crate::models::{MovieGenreRow, MovieRowModel};

/// Group genre rows by movie
///
/// Every id in `movie_ids` gets an entry, empty when the movie has no genres.
pub fn fold_genres(movie_ids: &[i64], rows: Vec<MovieGenreRow>) -> HashMap<i64, GenreMap> {
    let mut genres: HashMap<i64, GenreMap> = movie_ids
        .iter()
        .map(|id| (*id, GenreMap::new()))
        .collect();

    for row in rows {
        if let Some(map) = genres.get_mut(&row.movie_id) {
            map.insert(row.genre_id, row.genre_name);
        }
    }

    genres
}

/// Build summaries in row order
pub fn assemble(
    rows: Vec<MovieRowModel>,
    mut genres: HashMap<i64, GenreMap>,
    favorites: &HashSet<i64>,
    images: &ImageUrlResolver,
) -> Vec<MovieSummary> {
    rows.into_iter()
        .map(|row| MovieSummary {
            image_url: images.resolve(row.image.as_deref()),
            genres: genres.remove(&row.id).unwrap_or_default(),
            is_favorite: favorites.contains(&row.id),
            id: row.id,
            title: row.title,
            description: row.description,
            year: row.year,
            release_date: row.release_date,
            runtime: row.runtime,
            rating: row.rating,
            total_comments: row.total_comments,
            total_favorites: row.total_favorites,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
        .collect()
}
