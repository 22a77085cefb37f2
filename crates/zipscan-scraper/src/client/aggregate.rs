//! Multi-page listing aggregation for `ZipCodesClient`.

use crate::error::ScraperError;
use crate::pagination::{extract_page_count, page_url, MAX_PAGES, PAGE_SEPARATOR};

use super::ZipCodesClient;

impl ZipCodesClient {
    /// Fetches every remaining page of the listing at `base_url` and joins
    /// them after `first_page`.
    ///
    /// The page count comes from the `Page 1 of N` marker on `first_page`.
    /// With `N <= 1` the first page is returned unchanged. Otherwise pages
    /// `2..=N` are fetched strictly in ascending order and all `N` texts are
    /// joined with [`PAGE_SEPARATOR`], first page first.
    ///
    /// All-or-nothing: a failure on any page discards the pages already
    /// fetched.
    ///
    /// # Errors
    ///
    /// - [`ScraperError::PageCountNotFound`] if `first_page` has no marker.
    /// - [`ScraperError::PaginationLimit`] if the marker declares more than
    ///   [`MAX_PAGES`] pages.
    /// - [`ScraperError::Network`] from any page fetch.
    pub async fn aggregate_pages(
        &self,
        base_url: &str,
        first_page: String,
    ) -> Result<String, ScraperError> {
        let page_count =
            extract_page_count(&first_page).ok_or_else(|| ScraperError::PageCountNotFound {
                url: base_url.to_owned(),
            })?;

        if page_count <= 1 {
            return Ok(first_page);
        }
        if page_count > MAX_PAGES {
            return Err(ScraperError::PaginationLimit {
                url: base_url.to_owned(),
                declared: page_count,
                max_pages: MAX_PAGES,
            });
        }

        tracing::debug!(url = base_url, page_count, "listing spans multiple pages");

        let mut pages = Vec::with_capacity(page_count);
        pages.push(first_page);
        for page in 2..=page_count {
            let text = self.fetch_page(&page_url(base_url, page)).await?;
            pages.push(text);
        }

        Ok(pages.join(PAGE_SEPARATOR))
    }
}
