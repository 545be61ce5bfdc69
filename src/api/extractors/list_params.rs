//! Translation of transport-level list parameters into core query values.
//!
//! This is the caller-contract boundary: pagination and filter values are
//! parsed and normalized here, before the store layer ever sees them.

use serde::Deserialize;
use utoipa::IntoParams;

use crate::errors::AppResult;
use crate::types::{Pagination, SearchFilter, SortDirection};

/// Query parameters accepted by every collection endpoint
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListParams {
    /// 1-indexed page number
    pub page: Option<u64>,
    /// Page size
    pub per_page: Option<u64>,
    /// Sort specification: `field`, `field:asc`, or `field:desc`
    pub sort_by: Option<String>,
    /// Filter specification: `field:value`, substring match
    pub search: Option<String>,
}

impl ListParams {
    /// Build the pagination descriptor.
    ///
    /// Page and size are clamped to at least one; an unrecognized sort
    /// direction token falls back to descending.
    pub fn pagination(&self) -> Pagination {
        let mut pagination = Pagination::default();
        if let Some(page) = self.page {
            pagination.page = page.max(1);
        }
        if let Some(per_page) = self.per_page {
            pagination.per_page = per_page.max(1);
        }
        if let Some(sort_by) = &self.sort_by {
            match sort_by.split_once(':') {
                Some((field, direction)) => {
                    pagination.sort_field = field.trim().to_string();
                    pagination.sort_direction = SortDirection::from_param(direction);
                }
                None => pagination.sort_field = sort_by.trim().to_string(),
            }
        }
        pagination
    }

    /// Build the search filter, or match-all when absent.
    pub fn filter(&self) -> AppResult<SearchFilter> {
        match &self.search {
            Some(raw) => SearchFilter::from_param(raw),
            None => Ok(SearchFilter::none()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_apply_when_params_are_absent() {
        let pagination = ListParams::default().pagination();
        assert_eq!(pagination.page, 1);
        assert_eq!(pagination.sort_field, "id");
        assert_eq!(pagination.sort_direction, SortDirection::Desc);
    }

    #[test]
    fn sort_param_splits_field_and_direction() {
        let params = ListParams {
            sort_by: Some("name:asc".to_string()),
            ..ListParams::default()
        };
        let pagination = params.pagination();
        assert_eq!(pagination.sort_field, "name");
        assert_eq!(pagination.sort_direction, SortDirection::Asc);
    }

    #[test]
    fn bare_sort_field_defaults_to_descending() {
        let params = ListParams {
            sort_by: Some("title".to_string()),
            ..ListParams::default()
        };
        let pagination = params.pagination();
        assert_eq!(pagination.sort_field, "title");
        assert_eq!(pagination.sort_direction, SortDirection::Desc);
    }

    #[test]
    fn zero_page_is_clamped() {
        let params = ListParams {
            page: Some(0),
            per_page: Some(0),
            ..ListParams::default()
        };
        let pagination = params.pagination();
        assert_eq!(pagination.page, 1);
        assert_eq!(pagination.per_page, 1);
    }

    #[test]
    fn search_param_is_parsed() {
        let params = ListParams {
            search: Some("title:rust".to_string()),
            ..ListParams::default()
        };
        assert_eq!(
            params.filter().unwrap(),
            SearchFilter::new("title", "rust")
        );
    }
}
