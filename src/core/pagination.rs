//! Pagination arithmetic
//!
//! Reproduces the paging contract of the query surface exactly:
//! `totalPages = ceil(totalItems / limit)`, a 1-based page number, and a
//! slice clipped to the sequence bounds. An empty sequence has zero total
//! pages (not one), and out-of-range pages come back with an empty item
//! list but still echo the requested page number.

use serde::Serialize;

/// Page number used when none (or zero) is supplied
pub const DEFAULT_PAGE: usize = 1;

/// Page size used when none (or zero) is supplied
pub const DEFAULT_LIMIT: usize = 5;

/// One page of a query result
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    pub page: usize,
    pub total_pages: usize,
    pub total_items: usize,
    pub items: Vec<T>,
}

/// Slice a sequence into one page
///
/// A `page` or `limit` of zero falls back to the defaults, mirroring the
/// original query parsing where zero is indistinguishable from absent.
///
/// # Arguments
///
/// * `items` - The full source sequence
/// * `page` - 1-based page number
/// * `limit` - Maximum items per page
pub fn paginate<T: Clone>(items: &[T], page: usize, limit: usize) -> Page<T> {
    let page = if page == 0 { DEFAULT_PAGE } else { page };
    let limit = if limit == 0 { DEFAULT_LIMIT } else { limit };

    let total_items = items.len();
    let total_pages = total_items.div_ceil(limit);

    let start = (page - 1).saturating_mul(limit).min(total_items);
    let end = start.saturating_add(limit).min(total_items);

    Page {
        page,
        total_pages,
        total_items,
        items: items[start..end].to_vec(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::first_page(1, 2, vec![1, 2])]
    #[case::middle_page(2, 2, vec![3, 4])]
    #[case::short_last_page(3, 2, vec![5])]
    #[case::exact_fit(1, 5, vec![1, 2, 3, 4, 5])]
    #[case::oversized_limit(1, 10, vec![1, 2, 3, 4, 5])]
    fn test_paginate_slicing(#[case] page: usize, #[case] limit: usize, #[case] expected: Vec<i32>) {
        let items = vec![1, 2, 3, 4, 5];

        let result = paginate(&items, page, limit);

        assert_eq!(result.items, expected);
        assert_eq!(result.page, page);
        assert_eq!(result.total_items, 5);
    }

    #[rstest]
    #[case(5, 2, 3)]
    #[case(5, 5, 1)]
    #[case(6, 5, 2)]
    #[case(1, 5, 1)]
    fn test_total_pages_is_ceiling(#[case] len: usize, #[case] limit: usize, #[case] expected: usize) {
        let items: Vec<usize> = (0..len).collect();
        assert_eq!(paginate(&items, 1, limit).total_pages, expected);
    }

    #[test]
    fn test_empty_sequence_has_zero_total_pages() {
        let items: Vec<i32> = Vec::new();

        let result = paginate(&items, 1, 5);

        assert_eq!(result.total_pages, 0);
        assert_eq!(result.total_items, 0);
        assert!(result.items.is_empty());
    }

    #[test]
    fn test_out_of_range_page_echoes_request() {
        let items = vec![1, 2, 3];

        let result = paginate(&items, 9, 2);

        assert_eq!(result.page, 9);
        assert_eq!(result.total_pages, 2);
        assert_eq!(result.total_items, 3);
        assert!(result.items.is_empty());
    }

    #[rstest]
    #[case::zero_page(0, 3)]
    #[case::zero_limit(1, 0)]
    fn test_zero_parameters_fall_back_to_defaults(#[case] page: usize, #[case] limit: usize) {
        let items: Vec<usize> = (0..12).collect();

        let result = paginate(&items, page, limit);

        assert!(result.page >= 1);
        assert!(!result.items.is_empty());
    }

    #[test]
    fn test_concatenated_pages_reproduce_the_sequence() {
        let items: Vec<usize> = (0..17).collect();

        for limit in 1..=7 {
            let total_pages = paginate(&items, 1, limit).total_pages;
            let mut collected = Vec::new();
            for page in 1..=total_pages {
                collected.extend(paginate(&items, page, limit).items);
            }
            assert_eq!(collected, items, "round-trip failed at limit {}", limit);
        }
    }

    #[test]
    fn test_page_serializes_with_camel_case_fields() {
        let page = paginate(&[1, 2, 3], 1, 2);

        let json = serde_json::to_value(&page).unwrap();
        assert_eq!(json["page"], 1);
        assert_eq!(json["totalPages"], 2);
        assert_eq!(json["totalItems"], 3);
        assert_eq!(json["items"], serde_json::json!([1, 2]));
    }
}
