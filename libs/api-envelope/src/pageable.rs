//! Request-side pagination: query parameters, limits and the resolved window.

use serde::{Deserialize, Serialize};

use crate::error::{EnvelopeError, EnvelopeResult};
use crate::page::PageResponse;

/// Page size limits applied to incoming requests.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PaginationConfig {
    /// Size used when the request does not specify one.
    pub default_size: u32,
    /// Upper bound; larger requested sizes are clamped to it.
    pub max_size: u32,
}

impl PaginationConfig {
    /// Reject limits that would make every request resolve to a zero size.
    pub fn validate(&self) -> EnvelopeResult<()> {
        if self.default_size == 0 || self.max_size == 0 {
            tracing::debug!(
                default_size = self.default_size,
                max_size = self.max_size,
                "rejecting pagination config with zero size"
            );
            return Err(EnvelopeError::ZeroPageSize);
        }
        Ok(())
    }
}

impl Default for PaginationConfig {
    fn default() -> Self {
        Self {
            default_size: 20,
            max_size: 100,
        }
    }
}

/// Pagination query parameters (`?page=2&size=50`), both optional.
#[cfg_attr(feature = "with-utoipa", derive(utoipa::IntoParams))]
#[cfg_attr(feature = "with-utoipa", into_params(parameter_in = Query))]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRequest {
    /// Zero-based page index.
    pub page: Option<u32>,
    pub size: Option<u32>,
}

impl PageRequest {
    pub fn new(page: u32, size: u32) -> Self {
        Self {
            page: Some(page),
            size: Some(size),
        }
    }

    /// Apply defaults and limits.
    ///
    /// An explicit `size=0` is rejected rather than replaced by the default.
    pub fn resolve(&self, config: &PaginationConfig) -> EnvelopeResult<Pageable> {
        let size = self
            .size
            .unwrap_or(config.default_size)
            .min(config.max_size);
        if size == 0 {
            tracing::debug!(requested = ?self.size, "rejecting zero page size");
            return Err(EnvelopeError::ZeroPageSize);
        }
        Ok(Pageable {
            page: self.page.unwrap_or(0),
            size,
        })
    }
}

/// A resolved page window; `size` is always at least 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pageable {
    page: u32,
    size: u32,
}

impl Pageable {
    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn size(&self) -> u32 {
        self.size
    }

    /// Number of items preceding this page.
    pub fn offset(&self) -> u64 {
        u64::from(self.page) * u64::from(self.size)
    }

    pub fn into_page<T>(self, content: Vec<T>, total_elements: u64) -> EnvelopeResult<PageResponse<T>> {
        PageResponse::of(content, self.page, self.size, total_elements)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_with_zero_size_is_invalid() {
        assert_eq!(PaginationConfig::default().validate(), Ok(()));
        for (default_size, max_size) in [(0, 100), (20, 0), (0, 0)] {
            let cfg = PaginationConfig {
                default_size,
                max_size,
            };
            assert_eq!(cfg.validate(), Err(EnvelopeError::ZeroPageSize));
        }
        // default above max is clamped at resolve time, not rejected here
        let clamped = PaginationConfig {
            default_size: 50,
            max_size: 10,
        };
        assert_eq!(clamped.validate(), Ok(()));
    }

    #[test]
    fn defaults_apply_when_absent() {
        let p = PageRequest::default()
            .resolve(&PaginationConfig::default())
            .unwrap();
        assert_eq!(p.page(), 0);
        assert_eq!(p.size(), 20);
        assert_eq!(p.offset(), 0);
    }

    #[test]
    fn size_is_clamped_to_max() {
        let cfg = PaginationConfig {
            default_size: 10,
            max_size: 50,
        };
        let p = PageRequest::new(3, 500).resolve(&cfg).unwrap();
        assert_eq!(p.size(), 50);
        assert_eq!(p.offset(), 150);
    }

    #[test]
    fn explicit_zero_size_is_rejected() {
        let err = PageRequest::new(0, 0)
            .resolve(&PaginationConfig::default())
            .unwrap_err();
        assert_eq!(err, EnvelopeError::ZeroPageSize);
    }

    #[test]
    fn zero_max_size_config_is_rejected() {
        let cfg = PaginationConfig {
            default_size: 10,
            max_size: 0,
        };
        assert!(PageRequest::default().resolve(&cfg).is_err());
    }

    #[test]
    fn offset_does_not_overflow() {
        let p = PageRequest::new(u32::MAX, 100)
            .resolve(&PaginationConfig::default())
            .unwrap();
        assert_eq!(p.offset(), u64::from(u32::MAX) * 100);
    }

    #[test]
    fn into_page_derives_metadata() {
        let page = PageRequest::new(1, 2)
            .resolve(&PaginationConfig::default())
            .unwrap()
            .into_page(vec!['c', 'd'], 5)
            .unwrap();
        assert_eq!(page.total_pages(), 3);
        assert!(page.has_next());
        assert!(page.has_previous());
    }

    #[test]
    fn config_deserializes_with_partial_fields() {
        let cfg: PaginationConfig = serde_json::from_str(r#"{"max_size": 30}"#).unwrap();
        assert_eq!(cfg.default_size, 20);
        assert_eq!(cfg.max_size, 30);
        assert!(serde_json::from_str::<PaginationConfig>(r#"{"maxSize": 30}"#).is_err());
    }

    #[test]
    fn negative_query_values_do_not_deserialize() {
        assert!(serde_json::from_str::<PageRequest>(r#"{"page": -1}"#).is_err());
        assert!(serde_json::from_str::<PageRequest>(r#"{"size": -5}"#).is_err());
    }
}
