//! Route handlers
//!
//! All HTTP request handlers organized by domain.

pub mod auth;
pub mod comments;
pub mod favorites;
pub mod genres;
pub mod health;
pub mod images;
pub mod movies;
pub mod ratings;
