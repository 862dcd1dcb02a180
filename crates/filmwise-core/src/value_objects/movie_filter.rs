//! Movie listing filter - normalised search criteria for the catalog listing

/// Sort key for movie listings
///
/// Unrecognised keys fall back to [`OrderBy::Recent`] instead of failing, so the raw
/// query parameter never needs to be validated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum OrderBy {
    /// Highest average rating first
    Rating,
    /// Longest runtime first
    Runtime,
    /// Least recently updated first
    Old,
    /// Title ascending
    Name,
    /// Most recently updated first
    #[default]
    Recent,
}

impl OrderBy {
    pub fn parse(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "rating" => Self::Rating,
            "runtime" => Self::Runtime,
            "old" => Self::Old,
            "name" => Self::Name,
            _ => Self::Recent,
        }
    }
}

impl From<&str> for OrderBy {
    fn from(value: &str) -> Self {
        Self::parse(value)
    }
}

/// Search criteria for the movie listing
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MovieFilter {
    /// Lowercased substring matched against title and description; empty matches all
    pub find_by_name: String,
    pub genre: Option<i64>,
    pub year: Option<i32>,
    pub order_by: OrderBy,
}

impl MovieFilter {
    /// Normalise raw listing criteria
    ///
    /// Non-positive `genre`/`year` mean "unset".
    pub fn new(find_by_name: &str, genre: i64, year: i64, order_by: &str) -> Self {
        Self {
            find_by_name: find_by_name.trim().to_lowercase(),
            genre: (genre > 0).then_some(genre),
            year: i32::try_from(year).ok().filter(|y| *y > 0),
            order_by: OrderBy::parse(order_by),
        }
    }

    /// Match-everything filter with default ordering
    pub fn all() -> Self {
        Self::default()
    }

    pub fn with_genre(mut self, genre: i64) -> Self {
        self.genre = (genre > 0).then_some(genre);
        self
    }

    pub fn with_year(mut self, year: i32) -> Self {
        self.year = (year > 0).then_some(year);
        self
    }

    pub fn with_order(mut self, order_by: OrderBy) -> Self {
        self.order_by = order_by;
        self
    }

    /// `ILIKE` pattern for the search text
    pub fn search_pattern(&self) -> String {
        let mut pattern = String::with_capacity(self.find_by_name.len() + 2);
        pattern.push('%');
        for c in self.find_by_name.chars() {
            if matches!(c, '%' | '_' | '\\') {
                pattern.push('\\');
            }
            pattern.push(c);
        }
        pattern.push('%');
        pattern
    }
}
