use serde::{Deserialize, Serialize};
use serde_aux::prelude::*;
use validator::Validate;

pub const DEFAULT_PAGE: u32 = 1;
pub const DEFAULT_LIMIT: u32 = 10;

/// Pagination query parameters, 1-indexed.
///
/// These are flattened into each resource's page-params struct, so the raw
/// values arrive as strings and need the string-tolerant deserializers.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct PageParams {
    #[serde(default, deserialize_with = "deserialize_option_number_from_string")]
    #[validate(range(min = 1, message = "page must be at least 1"))]
    pub page: Option<u32>,
    #[serde(default, deserialize_with = "deserialize_option_number_from_string")]
    #[validate(range(min = 1, message = "limit must be at least 1"))]
    pub limit: Option<u32>,
}

impl PageParams {
    pub fn page(&self) -> u32 {
        self.page.unwrap_or(DEFAULT_PAGE)
    }

    pub fn limit(&self) -> u32 {
        self.limit.unwrap_or(DEFAULT_LIMIT)
    }
}

/// Page envelope returned by every list endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Paginated<T> {
    pub data: Vec<T>,
    pub pagination: PageMeta,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageMeta {
    pub page: u32,
    pub limit: u32,
    pub total: u64,
    pub total_pages: u32,
}

impl<T> Paginated<T> {
    /// Assemble a page envelope; `total_pages` rounds up.
    pub fn new(data: Vec<T>, page: u32, limit: u32, total: u64) -> Self {
        Self {
            data,
            pagination: PageMeta {
                page,
                limit,
                total,
                total_pages: ((total as f64) / (limit as f64)).ceil() as u32,
            },
        }
    }
}

/// Path segment carrying an entity id.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct PathId {
    #[validate(length(min = 1, message = "id is required"))]
    pub id: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn total_pages_rounds_up() {
        let page = Paginated::new(vec![1, 2, 3], 1, 10, 23);
        assert_eq!(page.pagination.total_pages, 3);
        assert_eq!(page.pagination.total, 23);
    }

    #[test]
    fn total_pages_is_zero_for_no_rows() {
        let page: Paginated<u8> = Paginated::new(vec![], 1, 10, 0);
        assert_eq!(page.pagination.total_pages, 0);
    }

    #[test]
    fn page_params_fall_back_to_defaults() {
        let params = PageParams::default();
        assert_eq!(params.page(), DEFAULT_PAGE);
        assert_eq!(params.limit(), DEFAULT_LIMIT);
    }
}
