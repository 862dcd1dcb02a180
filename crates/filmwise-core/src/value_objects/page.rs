//! Page window for listings

use crate::error::DomainError;

/// Validated page number and page size
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    page: i64,
    per_page: i64,
}

impl PageRequest {
    pub const DEFAULT_PAGE: i64 = 1;
    pub const DEFAULT_PER_PAGE: i64 = 3;
    pub const MAX_PER_PAGE: i64 = 100;

    /// Create a page window, rejecting non-positive values and oversized pages
    pub fn new(page: i64, per_page: i64) -> Result<Self, DomainError> {
        if page < 1 {
            return Err(DomainError::InvalidPagination(
                "current page must be greater than zero".to_string(),
            ));
        }
        if !(1..=Self::MAX_PER_PAGE).contains(&per_page) {
            return Err(DomainError::InvalidPagination(format!(
                "per page limit must be between 1 and {}",
                Self::MAX_PER_PAGE
            )));
        }
        Ok(Self { page, per_page })
    }

    /// Apply the listing defaults to absent values
    pub fn from_optional(page: Option<i64>, per_page: Option<i64>) -> Result<Self, DomainError> {
        Self::new(
            page.unwrap_or(Self::DEFAULT_PAGE),
            per_page.unwrap_or(Self::DEFAULT_PER_PAGE),
        )
    }

    #[inline]
    pub fn page(&self) -> i64 {
        self.page
    }

    #[inline]
    pub fn per_page(&self) -> i64 {
        self.per_page
    }

    /// Rows to skip: `(page - 1) * per_page`
    pub fn offset(&self) -> i64 {
        (self.page - 1).saturating_mul(self.per_page)
    }

    /// Value bound to `LIMIT`
    #[inline]
    pub fn limit(&self) -> i64 {
        self.per_page
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: Self::DEFAULT_PAGE,
            per_page: Self::DEFAULT_PER_PAGE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offset() {
        assert_eq!(PageRequest::new(1, 3).unwrap().offset(), 0);
        assert_eq!(PageRequest::new(2, 3).unwrap().offset(), 3);
        assert_eq!(PageRequest::new(5, 20).unwrap().offset(), 80);
    }

    #[test]
    fn test_offset_saturates() {
        let page = PageRequest::new(i64::MAX, 100).unwrap();
        assert_eq!(page.offset(), i64::MAX);
    }

    #[test]
    fn test_defaults() {
        let page = PageRequest::from_optional(None, None).unwrap();
        assert_eq!(page, PageRequest::default());
        assert_eq!(page.page(), 1);
        assert_eq!(page.limit(), 3);
    }

    #[test]
    fn test_rejects_non_positive() {
        assert!(matches!(
            PageRequest::new(0, 3),
            Err(DomainError::InvalidPagination(_))
        ));
        assert!(PageRequest::new(-1, 3).is_err());
        assert!(PageRequest::new(1, 0).is_err());
        assert!(PageRequest::new(1, -3).is_err());
    }

    #[test]
    fn test_rejects_oversized_page() {
        assert!(PageRequest::new(1, 100).is_ok());
        assert!(PageRequest::new(1, 101).is_err());
    }
}
