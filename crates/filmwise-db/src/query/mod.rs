//! SQL composition for the movie listing
//!
//! Everything here is pure string and parameter assembly so the generated SQL can be
//! unit tested without a database. User input only ever travels as bound parameters;
//! the only text spliced into statements comes from fixed whitelists.

mod listing;
mod predicate;

pub use listing::{order_clause, MovieListingQuery, MOVIE_ROW_SELECT};
pub use predicate::{movie_predicate, BindValue, Predicate, PredicateBuilder};
