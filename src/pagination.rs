//! This modules defines the common functionality for paging data.

use serde::{Deserialize, Serialize};

use crate::Error;

/// The config for pagination
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaginationConfig {
    /// The page number to default to when not specified in a request.
    pub default_page: i64,
    /// The number of records per page when not specified in a request.
    pub default_page_size: i64,
    /// The largest page size a client may ask for. Larger requests are clamped to this.
    pub max_page_size: i64,
}

impl Default for PaginationConfig {
    fn default() -> Self {
        Self {
            default_page: 1,
            default_page_size: 10,
            max_page_size: 100,
        }
    }
}

/// The raw `page` and `limit` query parameters.
///
/// The values are kept as text so that malformed numbers are reported as
/// [Error::InvalidPage] and [Error::InvalidLimit] rather than a generic
/// query rejection.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct PageQuery {
    /// The 1-based page number.
    pub page: Option<String>,
    /// The maximum number of records on a page.
    pub limit: Option<String>,
}

/// A validated page request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    /// The 1-based page number.
    pub page: i64,
    /// The maximum number of records on the page.
    pub limit: i64,
}

impl PageRequest {
    /// Parse `query`, falling back to the defaults in `config` for missing or
    /// empty parameters.
    ///
    /// # Errors
    /// Returns [Error::InvalidPage] or [Error::InvalidLimit] if the respective
    /// parameter is not a positive integer.
    pub fn parse(query: &PageQuery, config: &PaginationConfig) -> Result<Self, Error> {
        let page = match non_empty(&query.page) {
            Some(text) => parse_positive(text).ok_or_else(|| Error::InvalidPage(text.to_owned()))?,
            None => config.default_page,
        };

        let limit = match non_empty(&query.limit) {
            Some(text) => {
                parse_positive(text).ok_or_else(|| Error::InvalidLimit(text.to_owned()))?
            }
            None => config.default_page_size,
        };

        Ok(Self {
            page,
            limit: limit.min(config.max_page_size),
        })
    }

    /// The number of rows to skip before the first row of this page.
    pub fn offset(&self) -> i64 {
        (self.page - 1).saturating_mul(self.limit)
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|text| !text.is_empty())
}

fn parse_positive(text: &str) -> Option<i64> {
    text.parse::<i64>().ok().filter(|value| *value > 0)
}

/// The pagination block of a paged response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination {
    /// The page that was returned.
    pub current_page: i64,
    /// The total number of pages.
    ///
    /// This is not computed and is always zero.
    pub total_pages: i64,
    /// The maximum number of records per page.
    pub per_page: i64,
}

impl From<PageRequest> for Pagination {
    fn from(request: PageRequest) -> Self {
        Self {
            current_page: request.page,
            total_pages: 0,
            per_page: request.limit,
        }
    }
}
