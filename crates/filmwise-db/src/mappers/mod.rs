//! Model to entity mappers
//!
//! `From<Model> for Entity` conversions from database rows to domain objects.

mod comment;
mod genre;
mod image;
mod movie;
mod rating;
mod user;
