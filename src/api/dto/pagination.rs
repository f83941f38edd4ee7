//! Listing query parameters and page-count arithmetic.

use serde::Deserialize;
use serde_with::{DisplayFromStr, serde_as};
use validator::Validate;

/// Default page size when the request omits `pageSize`.
pub const DEFAULT_PAGE_SIZE: u32 = 10;

/// Query parameters for `GET /api/catalog-items`.
///
/// Pages are zero-based. `pageSize=0` is valid and yields an empty page
/// (with `pageCount` collapsing to 0 or 1). Uses `serde_with` to parse the
/// integers out of query strings.
#[serde_as]
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ListingParams {
    #[serde_as(as = "Option<DisplayFromStr>")]
    #[serde(default)]
    pub page_index: Option<u32>,

    /// Capped at 1000 as a request-size guard, not a business rule.
    #[serde_as(as = "Option<DisplayFromStr>")]
    #[serde(default)]
    #[validate(range(max = 1000))]
    pub page_size: Option<u32>,

    #[serde_as(as = "Option<DisplayFromStr>")]
    #[serde(default)]
    pub catalog_brand_id: Option<i64>,

    #[serde_as(as = "Option<DisplayFromStr>")]
    #[serde(default)]
    pub catalog_type_id: Option<i64>,
}

impl ListingParams {
    /// Page index with the default applied (first page).
    pub fn page_index(&self) -> u32 {
        self.page_index.unwrap_or(0)
    }

    /// Page size with the default applied.
    pub fn page_size(&self) -> u32 {
        self.page_size.unwrap_or(DEFAULT_PAGE_SIZE)
    }
}

/// Derives the total page count from a total item count and a page size.
///
/// Exact integer ceiling for `page_size > 0`; for a zero page size the whole
/// matching set counts as a single page when non-empty.
pub fn page_count(total_items: i64, page_size: u32) -> i64 {
    if page_size == 0 {
        return if total_items > 0 { 1 } else { 0 };
    }

    let page_size = i64::from(page_size);
    (total_items + page_size - 1) / page_size
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_count_rounds_up() {
        assert_eq!(page_count(10, 3), 4);
        assert_eq!(page_count(25, 10), 3);
    }

    #[test]
    fn test_page_count_exact_division() {
        assert_eq!(page_count(30, 10), 3);
        assert_eq!(page_count(10, 10), 1);
    }

    #[test]
    fn test_page_count_no_items() {
        assert_eq!(page_count(0, 10), 0);
    }

    #[test]
    fn test_page_count_zero_page_size() {
        assert_eq!(page_count(5, 0), 1);
        assert_eq!(page_count(0, 0), 0);
    }

    #[test]
    fn test_page_count_single_partial_page() {
        assert_eq!(page_count(1, 10), 1);
        assert_eq!(page_count(9, 10), 1);
    }

    #[test]
    fn test_page_count_large_totals_stay_exact() {
        // Values where a float ceiling would lose precision.
        assert_eq!(page_count(i64::MAX - 1, 1), i64::MAX - 1);
        assert_eq!(page_count(1_000_000_007, 10), 100_000_001);
    }

    #[test]
    fn test_params_defaults() {
        let params: ListingParams = serde_json::from_str("{}").unwrap();

        assert_eq!(params.page_index(), 0);
        assert_eq!(params.page_size(), DEFAULT_PAGE_SIZE);
        assert!(params.catalog_brand_id.is_none());
        assert!(params.catalog_type_id.is_none());
    }

    #[test]
    fn test_params_parse_from_strings() {
        let json = r#"{"pageIndex": "2", "pageSize": "50", "catalogBrandId": "7"}"#;
        let params: ListingParams = serde_json::from_str(json).unwrap();

        assert_eq!(params.page_index(), 2);
        assert_eq!(params.page_size(), 50);
        assert_eq!(params.catalog_brand_id, Some(7));
        assert_eq!(params.catalog_type_id, None);
    }

    #[test]
    fn test_params_page_size_guard() {
        let ok: ListingParams = serde_json::from_str(r#"{"pageSize": "1000"}"#).unwrap();
        assert!(ok.validate().is_ok());

        let too_big: ListingParams = serde_json::from_str(r#"{"pageSize": "1001"}"#).unwrap();
        assert!(too_big.validate().is_err());
    }

    #[test]
    fn test_params_zero_page_size_is_valid() {
        let params: ListingParams = serde_json::from_str(r#"{"pageSize": "0"}"#).unwrap();

        assert!(params.validate().is_ok());
        assert_eq!(params.page_size(), 0);
    }
}
