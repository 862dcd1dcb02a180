//! Image entity - a cover asset already uploaded to the image provider

use chrono::{DateTime, Utc};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Image {
    pub id: i64,
    pub user_id: i64,
    pub image_path: String,
    /// Name movies refer to and the URL is built from
    pub image_name: String,
    pub is_used: bool,
    pub created_at: DateTime<Utc>,
}

/// Write model for registering an image
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewImage {
    pub user_id: i64,
    pub image_path: String,
    pub image_name: String,
}

impl NewImage {
    /// File extension of the uploaded path, lowercased, without the dot
    pub fn extension(path: &str) -> Option<String> {
        let file = path.rsplit('/').next()?;
        let (stem, ext) = file.rsplit_once('.')?;
        if stem.is_empty() || ext.is_empty() {
            return None;
        }
        Some(ext.to_ascii_lowercase())
    }
}
