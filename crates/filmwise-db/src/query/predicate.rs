//! Predicate builder - positional placeholders assigned at render time

use filmwise_core::MovieFilter;
use sqlx::postgres::PgArguments;
use sqlx::query::QueryAs;
use sqlx::Postgres;

/// Marker written into fragments where a parameter goes
const MARKER: char = '?';

/// A value bound to a positional placeholder
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BindValue {
    Text(String),
    BigInt(i64),
    Int(i32),
}

impl BindValue {
    /// Bind this value onto a query
    pub fn bind<'q, O>(
        &'q self,
        query: QueryAs<'q, Postgres, O, PgArguments>,
    ) -> QueryAs<'q, Postgres, O, PgArguments> {
        match self {
            Self::Text(value) => query.bind(value.as_str()),
            Self::BigInt(value) => query.bind(*value),
            Self::Int(value) => query.bind(*value),
        }
    }
}

/// Rendered WHERE clause plus the parameters its placeholders refer to, in order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Predicate {
    sql: String,
    params: Vec<BindValue>,
    first_index: usize,
}

impl Predicate {
    /// Condition text, without the `WHERE` keyword
    pub fn sql(&self) -> &str {
        &self.sql
    }

    pub fn params(&self) -> &[BindValue] {
        &self.params
    }

    /// Placeholder number following the last one used by this predicate
    pub fn next_index(&self) -> usize {
        self.first_index + self.params.len()
    }

    /// Bind every parameter onto `query`, in placeholder order
    pub fn bind_all<'q, O>(
        &'q self,
        query: QueryAs<'q, Postgres, O, PgArguments>,
    ) -> QueryAs<'q, Postgres, O, PgArguments> {
        self.params.iter().fold(query, |query, value| value.bind(query))
    }
}

/// Collects `AND`-joined fragments together with their values
///
/// Fragments use `?` where a parameter goes; [`PredicateBuilder::build`] replaces the
/// markers with `$n` in a single pass, so adding or dropping an optional condition can
/// never shift the numbering of the others.
#[derive(Debug, Clone, Default)]
pub struct PredicateBuilder {
    fragments: Vec<(String, Vec<BindValue>)>,
}

impl PredicateBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a condition
    ///
    /// # Panics
    /// Panics in debug builds if the number of `?` markers does not match `values`.
    pub fn and(mut self, fragment: impl Into<String>, values: Vec<BindValue>) -> Self {
        let fragment = fragment.into();
        debug_assert_eq!(
            fragment.matches(MARKER).count(),
            values.len(),
            "placeholder count mismatch in `{fragment}`"
        );
        self.fragments.push((fragment, values));
        self
    }

    /// Append a condition only when `value` is present
    pub fn and_some<T>(
        self,
        value: Option<T>,
        fragment: &str,
        to_bind: impl FnOnce(T) -> BindValue,
    ) -> Self {
        match value {
            Some(value) => self.and(fragment, vec![to_bind(value)]),
            None => self,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.fragments.is_empty()
    }

    /// Render the conditions with placeholders numbered from `first_index`
    pub fn build(self, first_index: usize) -> Predicate {
        let mut sql = String::new();
        let mut params = Vec::new();
        let mut index = first_index;

        for (position, (fragment, values)) in self.fragments.into_iter().enumerate() {
            if position > 0 {
                sql.push_str(" AND ");
            }
            for c in fragment.chars() {
                if c == MARKER {
                    sql.push('$');
                    sql.push_str(&index.to_string());
                    index += 1;
                } else {
                    sql.push(c);
                }
            }
            params.extend(values);
        }

        if sql.is_empty() {
            sql.push_str("TRUE");
        }

        Predicate {
            sql,
            params,
            first_index,
        }
    }
}

/// Translate a listing filter into its WHERE clause
///
/// The search condition is always present; an empty search text matches every movie.
pub fn movie_predicate(filter: &MovieFilter) -> Predicate {
    let pattern = filter.search_pattern();

    PredicateBuilder::new()
        .and(
            "(m.title ILIKE ? OR m.description ILIKE ?)",
            vec![BindValue::Text(pattern.clone()), BindValue::Text(pattern)],
        )
        .and_some(filter.year, "m.year = ?", BindValue::Int)
        .and_some(
            filter.genre,
            "m.id IN (SELECT mg.movie_id FROM movies_genres mg WHERE mg.genre_id = ?)",
            BindValue::BigInt,
        )
        .build(1)
}
