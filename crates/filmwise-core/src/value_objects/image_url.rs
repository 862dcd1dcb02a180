//! Cover image URL policy

/// Turns stored image names into public URLs
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageUrlResolver {
    base: String,
    placeholder: String,
}

impl ImageUrlResolver {
    pub const DEFAULT_PLACEHOLDER: &'static str = "no-thumb.jpg";

    pub fn new(base: impl Into<String>, placeholder: impl Into<String>) -> Self {
        let base = base.into();
        Self {
            base: base.trim_end_matches('/').to_string(),
            placeholder: placeholder.into(),
        }
    }

    /// Resolve a stored image reference; null or empty yields the placeholder
    pub fn resolve(&self, image: Option<&str>) -> String {
        let name = match image.map(str::trim) {
            Some(name) if !name.is_empty() => name,
            _ => &self.placeholder,
        };
        format!("{}/{}", self.base, name.trim_start_matches('/'))
    }
}
