//! Count and page statements for the movie listing

use filmwise_core::{MovieFilter, OrderBy, PageRequest};
use sqlx::postgres::PgArguments;
use sqlx::query::QueryAs;
use sqlx::Postgres;

use super::predicate::{movie_predicate, Predicate};

/// Columns and joins shared by every read path that yields listing rows
///
/// Ratings, comments and favorites are aggregated per movie before joining so the
/// joins never multiply each other's rows. Unrated movies get the 1.0 floor.
pub const MOVIE_ROW_SELECT: &str = r"
    SELECT m.id, m.title, m.description, m.year, m.release_date, m.runtime, m.image,
           COALESCE(r.rating, 1.0)::float8 AS rating,
           COALESCE(c.total_comments, 0) AS total_comments,
           COALESCE(f.total_favorites, 0) AS total_favorites,
           m.created_at, m.updated_at
    FROM movies m
    LEFT JOIN (
        SELECT movie_id, ROUND(AVG(rating)::numeric, 1) AS rating
        FROM ratings
        GROUP BY movie_id
    ) r ON r.movie_id = m.id
    LEFT JOIN (
        SELECT movie_id, COUNT(*) AS total_comments
        FROM comments
        GROUP BY movie_id
    ) c ON c.movie_id = m.id
    LEFT JOIN (
        SELECT movie_id, COUNT(*) AS total_favorites
        FROM favorites
        GROUP BY movie_id
    ) f ON f.movie_id = m.id";

/// ORDER BY clause for a sort key
///
/// `m.id` breaks ties so pages never overlap.
pub fn order_clause(order_by: OrderBy) -> &'static str {
    match order_by {
        OrderBy::Rating => "rating DESC, m.id DESC",
        OrderBy::Runtime => "m.runtime DESC, m.id DESC",
        OrderBy::Old => "m.updated_at ASC, m.id ASC",
        OrderBy::Name => "m.title ASC, m.id ASC",
        OrderBy::Recent => "m.updated_at DESC, m.id DESC",
    }
}

/// Count and page statements sharing one predicate
#[derive(Debug, Clone)]
pub struct MovieListingQuery {
    predicate: Predicate,
    order_by: OrderBy,
    page: PageRequest,
}

impl MovieListingQuery {
    pub fn new(filter: &MovieFilter, page: PageRequest) -> Self {
        Self {
            predicate: movie_predicate(filter),
            order_by: filter.order_by,
            page,
        }
    }

    pub fn predicate(&self) -> &Predicate {
        &self.predicate
    }

    pub fn page(&self) -> PageRequest {
        self.page
    }

    /// Total number of movies matching the predicate, ignoring the page window
    pub fn count_sql(&self) -> String {
        format!(
            "SELECT COUNT(*) FROM movies m WHERE {}",
            self.predicate.sql()
        )
    }

    /// One page of listing rows
    pub fn page_sql(&self) -> String {
        let limit = self.predicate.next_index();
        format!(
            "{MOVIE_ROW_SELECT}\n    WHERE {}\n    ORDER BY {}\n    LIMIT ${} OFFSET ${}",
            self.predicate.sql(),
            order_clause(self.order_by),
            limit,
            limit + 1
        )
    }

    /// Bind the predicate parameters for [`Self::count_sql`]
    pub fn bind_count<'q, O>(
        &'q self,
        query: QueryAs<'q, Postgres, O, PgArguments>,
    ) -> QueryAs<'q, Postgres, O, PgArguments> {
        self.predicate.bind_all(query)
    }

    /// Bind the predicate parameters plus limit and offset for [`Self::page_sql`]
    pub fn bind_page<'q, O>(
        &'q self,
        query: QueryAs<'q, Postgres, O, PgArguments>,
    ) -> QueryAs<'q, Postgres, O, PgArguments> {
        self.predicate
            .bind_all(query)
            .bind(self.page.limit())
            .bind(self.page.offset())
    }
}
