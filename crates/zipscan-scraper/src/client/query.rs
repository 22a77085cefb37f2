//! The three public lookups: radius search, county search, coordinates.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use zipscan_core::{CoordinateRecord, CountyQuery, CountyRecord, RadiusQuery, RadiusRecord};

use crate::assemble::{assemble_coordinates, assemble_county, assemble_radius};
use crate::error::ScraperError;
use crate::extract::extract_fields;
use crate::patterns::{self, COORDINATES, ZIPS};

use super::ZipCodesClient;

/// Characters left as-is in query values and path segments.
const URL_VALUE: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

fn encode(value: &str) -> String {
    utf8_percent_encode(value, URL_VALUE).to_string()
}

impl ZipCodesClient {
    /// Lists zip codes between `lower_radius` and `upper_radius` miles of
    /// `base_zipcode`, one row per surrounding code.
    ///
    /// # Errors
    ///
    /// - [`ScraperError::Network`] if the search page cannot be fetched.
    /// - [`ScraperError::EmptyResult`] if the page lists no surrounding codes.
    pub async fn zips_within_radius(
        &self,
        query: &RadiusQuery,
    ) -> Result<Vec<RadiusRecord>, ScraperError> {
        let url = self.radius_url(query);
        let page = self.fetch_page(&url).await?;

        let patterns = [(ZIPS, patterns::radius_field(&query.base_zipcode)?)];
        let mut fields = extract_fields(&page, &patterns);
        let records = assemble_radius(query, fields.take(ZIPS))?;

        tracing::info!(
            base_zipcode = %query.base_zipcode,
            upper_radius = query.upper_radius,
            rows = records.len(),
            "radius search complete"
        );
        Ok(records)
    }

    /// Lists every zip code of `county` in `state` with its city and county
    /// names, following the listing across all of its pages.
    ///
    /// # Errors
    ///
    /// - [`ScraperError::Network`] if any page cannot be fetched.
    /// - [`ScraperError::PageCountNotFound`] if the first page has no
    ///   `Page 1 of N` marker.
    /// - [`ScraperError::PaginationLimit`] if the listing is too long.
    /// - [`ScraperError::FieldAlignment`] if the zip, city, and county lists
    ///   differ in length.
    pub async fn zips_in_county(
        &self,
        query: &CountyQuery,
    ) -> Result<Vec<CountyRecord>, ScraperError> {
        let url = self.county_url(query);
        let first_page = self.fetch_page(&url).await?;
        let text = self.aggregate_pages(&url, first_page).await?;

        let patterns = patterns::county_fields(&query.state)?;
        let fields = extract_fields(&text, &patterns);
        let records = assemble_county(&fields, &query.state)?;

        tracing::info!(
            state = %query.state,
            county = %query.county,
            rows = records.len(),
            "county search complete"
        );
        Ok(records)
    }

    /// Looks up latitude and longitude for `base_zipcode`.
    ///
    /// # Errors
    ///
    /// - [`ScraperError::Network`] if the detail page cannot be fetched.
    /// - [`ScraperError::CoordinatesNotFound`] if the page does not carry
    ///   enough numeric info cells.
    pub async fn zip_coordinates(
        &self,
        base_zipcode: &str,
    ) -> Result<CoordinateRecord, ScraperError> {
        let url = self.coordinates_url(base_zipcode);
        let page = self.fetch_page(&url).await?;

        let patterns = [(COORDINATES, patterns::coordinate_field()?)];
        let mut fields = extract_fields(&page, &patterns);
        let record = assemble_coordinates(base_zipcode, fields.take(COORDINATES))?;

        tracing::info!(
            base_zipcode,
            latitude = %record.latitude,
            longitude = %record.longitude,
            "coordinate lookup complete"
        );
        Ok(record)
    }

    pub(crate) fn radius_url(&self, query: &RadiusQuery) -> String {
        format!(
            "{}/zip-code-radius-finder.asp?zipmileslow={}&zipmileshigh={}&zip1={}",
            self.base_url,
            query.lower_radius,
            query.upper_radius,
            encode(&query.base_zipcode)
        )
    }

    /// The site only matches lower-case state and county values.
    pub(crate) fn county_url(&self, query: &CountyQuery) -> String {
        format!(
            "{}/search.asp?fld-state={}&fld-county={}",
            self.base_url,
            encode(&query.state.to_lowercase()),
            encode(&query.county.to_lowercase())
        )
    }

    pub(crate) fn coordinates_url(&self, base_zipcode: &str) -> String {
        let zip = encode(base_zipcode);
        format!("{}/zip-code/{zip}/zip-code-{zip}.asp", self.base_url)
    }
}
