//! Single-field search filter for list queries.

use crate::errors::{AppError, AppResult};

/// A field-name/value substring filter.
///
/// An empty field or value means "match all rows". The field must name a
/// direct attribute of the target entity; nested or relationship paths
/// are not supported.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchFilter {
    pub field: String,
    pub value: String,
}

impl SearchFilter {
    pub fn new(field: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            value: value.into(),
        }
    }

    /// Filter that matches every row.
    pub fn none() -> Self {
        Self::default()
    }

    /// Field/value pair, or `None` when the filter matches everything.
    pub fn as_parts(&self) -> Option<(&str, &str)> {
        if self.field.is_empty() || self.value.is_empty() {
            None
        } else {
            Some((&self.field, &self.value))
        }
    }

    /// Parse a transport-level `field:value` parameter.
    pub fn from_param(raw: &str) -> AppResult<Self> {
        let (field, value) = raw.split_once(':').ok_or_else(|| {
            AppError::bad_request(format!("search must be 'field:value', got '{}'", raw))
        })?;
        Ok(Self::new(field.trim(), value.trim()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_filter_matches_all() {
        assert_eq!(SearchFilter::none().as_parts(), None);
        assert_eq!(SearchFilter::new("name", "").as_parts(), None);
        assert_eq!(SearchFilter::new("", "rust").as_parts(), None);
    }

    #[test]
    fn populated_filter_exposes_parts() {
        let filter = SearchFilter::new("title", "rust");
        assert_eq!(filter.as_parts(), Some(("title", "rust")));
    }

    #[test]
    fn parses_field_value_params() {
        let filter = SearchFilter::from_param("name: Orwell ").unwrap();
        assert_eq!(filter, SearchFilter::new("name", "Orwell"));
    }

    #[test]
    fn rejects_params_without_separator() {
        let err = SearchFilter::from_param("name").unwrap_err();
        assert!(matches!(err, AppError::BadRequest(_)));
    }
}
