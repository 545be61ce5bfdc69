//! Pagination and sorting descriptors for list queries.

use serde::{Deserialize, Serialize};

use crate::config::{DEFAULT_PAGE_NUMBER, DEFAULT_PAGE_SIZE, DEFAULT_SORT_FIELD, MAX_PAGE_SIZE};

/// Sort order for list queries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    /// Parse a transport-level direction token.
    ///
    /// Unrecognized tokens fall back to descending. This leniency lives
    /// at the translation boundary only; the core never sees raw strings.
    pub fn from_param(raw: &str) -> Self {
        match raw.trim().to_ascii_lowercase().as_str() {
            "asc" => SortDirection::Asc,
            _ => SortDirection::Desc,
        }
    }
}

/// How to slice and order a result set.
///
/// `page` and `per_page` are expected to be >= 1; supplying zero is a
/// caller contract violation and is clamped rather than rejected here.
#[derive(Debug, Clone)]
pub struct Pagination {
    /// 1-indexed page number
    pub page: u64,
    pub per_page: u64,
    /// Name of a direct attribute on the target entity
    pub sort_field: String,
    pub sort_direction: SortDirection,
}

impl Pagination {
    pub fn new(
        page: u64,
        per_page: u64,
        sort_field: impl Into<String>,
        sort_direction: SortDirection,
    ) -> Self {
        Self {
            page,
            per_page,
            sort_field: sort_field.into(),
            sort_direction,
        }
    }

    /// Zero-based row offset of the requested window.
    pub fn offset(&self) -> u64 {
        self.page.saturating_sub(1) * self.limit()
    }

    /// Window size capped at the configured maximum.
    pub fn limit(&self) -> u64 {
        self.per_page.min(MAX_PAGE_SIZE)
    }
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE_NUMBER,
            per_page: DEFAULT_PAGE_SIZE,
            sort_field: DEFAULT_SORT_FIELD.to_string(),
            sort_direction: SortDirection::Desc,
        }
    }
}

/// A bounded slice of an ordered, filtered result set plus metadata
/// about the full matching set.
#[derive(Debug, Clone, Serialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    /// 1-indexed page number this window corresponds to
    pub page: u64,
    pub per_page: u64,
    /// Rows matching the filter, not bounded by the window
    pub total: u64,
    /// `ceil(total / per_page)`
    pub total_pages: u64,
}

impl<T> Page<T> {
    pub fn new(items: Vec<T>, page: u64, per_page: u64, total: u64) -> Self {
        let total_pages = if per_page > 0 {
            (total + per_page - 1) / per_page
        } else {
            0
        };

        Self {
            items,
            page,
            per_page,
            total,
            total_pages,
        }
    }

    /// Convert the item type, keeping the window metadata.
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            items: self.items.into_iter().map(f).collect(),
            page: self.page,
            per_page: self.per_page,
            total: self.total,
            total_pages: self.total_pages,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offset_is_zero_based() {
        let pagination = Pagination::new(1, 10, "name", SortDirection::Asc);
        assert_eq!(pagination.offset(), 0);

        let pagination = Pagination::new(3, 10, "name", SortDirection::Asc);
        assert_eq!(pagination.offset(), 20);
    }

    #[test]
    fn offset_tolerates_page_zero() {
        let pagination = Pagination::new(0, 10, "name", SortDirection::Asc);
        assert_eq!(pagination.offset(), 0);
    }

    #[test]
    fn limit_is_capped() {
        let pagination = Pagination::new(1, 10_000, "name", SortDirection::Asc);
        assert_eq!(pagination.limit(), MAX_PAGE_SIZE);
    }

    #[test]
    fn page_count_rounds_up() {
        let page: Page<i32> = Page::new(vec![], 1, 10, 25);
        assert_eq!(page.total, 25);
        assert_eq!(page.total_pages, 3);

        let page: Page<i32> = Page::new(vec![], 1, 10, 30);
        assert_eq!(page.total_pages, 3);

        let page: Page<i32> = Page::new(vec![], 1, 10, 0);
        assert_eq!(page.total_pages, 0);
    }

    #[test]
    fn map_keeps_window_metadata() {
        let page = Page::new(vec![1, 2, 3], 2, 3, 9).map(|n| n.to_string());
        assert_eq!(page.items, vec!["1", "2", "3"]);
        assert_eq!(page.page, 2);
        assert_eq!(page.total_pages, 3);
    }

    #[test]
    fn direction_parsing_is_lenient() {
        assert_eq!(SortDirection::from_param("asc"), SortDirection::Asc);
        assert_eq!(SortDirection::from_param("ASC"), SortDirection::Asc);
        assert_eq!(SortDirection::from_param("desc"), SortDirection::Desc);
        assert_eq!(SortDirection::from_param("sideways"), SortDirection::Desc);
    }
}
