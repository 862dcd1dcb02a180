//! Value objects - immutable types that represent domain concepts

mod image_url;
mod movie_filter;
mod page;

pub use image_url::ImageUrlResolver;
pub use movie_filter::{MovieFilter, OrderBy};
pub use page::PageRequest;
