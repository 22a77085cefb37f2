//! Page-count detection for multi-page search listings.
//!
//! The directory site splits long search results into numbered pages and
//! prints a marker near the top of the first one:
//!
//! ```text
//! Page 1 of 3
//! ```
//!
//! Subsequent pages are addressed by appending `&pg=N` to the search URL.

use regex::Regex;

/// Maximum number of pages a single listing may declare before the
/// aggregator refuses to fetch it.
///
/// This is an added guard: the site itself imposes no limit, and a plain
/// aggregator would fetch every declared page. Listings above the cap fail
/// with [`ScraperError::PaginationLimit`](crate::ScraperError::PaginationLimit).
pub const MAX_PAGES: usize = 200;

/// Separator placed between concatenated pages. No extraction pattern can
/// match across it.
pub const PAGE_SEPARATOR: &str = "\n";

/// Extracts the declared total page count from the first page of a listing.
///
/// Returns `None` when no `Page 1 of N` marker is present, or when `N` does
/// not fit in a `usize`. Only the first marker is considered.
#[must_use]
pub fn extract_page_count(first_page: &str) -> Option<usize> {
    let re = Regex::new(r"Page 1 of (\d+)").expect("valid page count regex");
    re.captures(first_page)?.get(1)?.as_str().parse().ok()
}

/// Builds the URL of page `page` of the listing at `base_url`.
///
/// `base_url` must already carry a query string; the page number is
/// appended as a further `&pg=` parameter.
#[must_use]
pub fn page_url(base_url: &str, page: usize) -> String {
    format!("{base_url}&pg={page}")
}
