//! Pagination types shared by list responses.

use serde::{Deserialize, Serialize};

/// A navigation link in a paginated response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
    /// The URL of the linked page.
    pub href: String,
}

/// Pagination metadata accompanying a list response.
///
/// List operations return a single page; navigating to other pages is the
/// caller's job, using the links carried here. The `next` and `previous`
/// links are absent on the last and first page respectively.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination {
    /// Link to the first page.
    pub first: Option<Link>,

    /// Link to the last page.
    pub last: Option<Link>,

    /// Link to the next page, if any.
    pub next: Option<Link>,

    /// Link to the previous page, if any.
    pub previous: Option<Link>,

    /// Total number of pages.
    pub total_pages: u32,

    /// Total number of results across all pages.
    pub total_results: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pagination_round_trips_all_fields() {
        let json = r#"{
            "first": {"href": "test-first-link"},
            "last": {"href": "test-last-link"},
            "next": {"href": "test-next-link"},
            "previous": {"href": "test-previous-link"},
            "total_pages": 1,
            "total_results": 1
        }"#;

        let pagination: Pagination = serde_json::from_str(json).unwrap();

        assert_eq!(
            pagination,
            Pagination {
                first: Some(Link {
                    href: "test-first-link".to_string()
                }),
                last: Some(Link {
                    href: "test-last-link".to_string()
                }),
                next: Some(Link {
                    href: "test-next-link".to_string()
                }),
                previous: Some(Link {
                    href: "test-previous-link".to_string()
                }),
                total_pages: 1,
                total_results: 1,
            }
        );
    }

    #[test]
    fn missing_links_deserialize_as_none() {
        let json = r#"{"total_pages": 3, "total_results": 42}"#;

        let pagination: Pagination = serde_json::from_str(json).unwrap();

        assert_eq!(pagination.first, None);
        assert_eq!(pagination.next, None);
        assert_eq!(pagination.total_pages, 3);
        assert_eq!(pagination.total_results, 42);
    }
}
