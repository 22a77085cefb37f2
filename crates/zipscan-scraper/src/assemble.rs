//! Assembly of extracted field lists into tabular records.
//!
//! Field lists are extracted independently, so row alignment is checked
//! here rather than assumed.

use zipscan_core::{CoordinateRecord, CountyRecord, RadiusQuery, RadiusRecord};

use crate::error::ScraperError;
use crate::extract::ExtractedFields;
use crate::patterns::{CITY, COUNTY, ZIPS};

/// Builds one [`RadiusRecord`] per surrounding zip, in discovery order.
///
/// # Errors
///
/// Returns [`ScraperError::EmptyResult`] if `surrounding_zips` is empty.
pub fn assemble_radius(
    query: &RadiusQuery,
    surrounding_zips: Vec<String>,
) -> Result<Vec<RadiusRecord>, ScraperError> {
    if surrounding_zips.is_empty() {
        return Err(ScraperError::EmptyResult {
            base_zipcode: query.base_zipcode.clone(),
            lower_radius: query.lower_radius,
            upper_radius: query.upper_radius,
        });
    }

    Ok(surrounding_zips
        .into_iter()
        .map(|surrounding_zip| RadiusRecord {
            zip: query.base_zipcode.clone(),
            surrounding_zip,
            upper_radius: query.upper_radius,
        })
        .collect())
}

/// Zips the `zips`, `city`, and `county` lists row by row and stamps each
/// row with the upper-cased `state`.
///
/// City and county slugs are normalized with [`normalize_place_name`]; zips
/// are kept verbatim. A field that was never extracted counts as empty.
///
/// # Errors
///
/// Returns [`ScraperError::FieldAlignment`] if the three lists differ in
/// length.
pub fn assemble_county(
    fields: &ExtractedFields,
    state: &str,
) -> Result<Vec<CountyRecord>, ScraperError> {
    let zips = fields.get(ZIPS).unwrap_or_default();
    let cities = fields.get(CITY).unwrap_or_default();
    let counties = fields.get(COUNTY).unwrap_or_default();

    if zips.len() != cities.len() || zips.len() != counties.len() {
        return Err(ScraperError::FieldAlignment {
            lengths: vec![
                (ZIPS.to_owned(), zips.len()),
                (CITY.to_owned(), cities.len()),
                (COUNTY.to_owned(), counties.len()),
            ],
        });
    }

    let state = state.to_uppercase();
    Ok(zips
        .iter()
        .zip(cities)
        .zip(counties)
        .map(|((zip, city), county)| CountyRecord {
            city: normalize_place_name(city),
            state: state.clone(),
            county: normalize_place_name(county),
            zip: zip.clone(),
        })
        .collect())
}

/// Builds the coordinate row for `base_zipcode` from the numeric info-cell
/// matches of its detail page.
///
/// The last match is dropped as a trailing non-coordinate value and the
/// first two remaining are taken as latitude and longitude.
///
/// # Errors
///
/// Returns [`ScraperError::CoordinatesNotFound`] if fewer than two values
/// remain after dropping the last match.
pub fn assemble_coordinates(
    base_zipcode: &str,
    mut matches: Vec<String>,
) -> Result<CoordinateRecord, ScraperError> {
    // TODO: confirm against live pages that the trailing info value is never a coordinate.
    matches.pop();

    let found = matches.len();
    let mut values = matches.into_iter();
    match (values.next(), values.next()) {
        (Some(latitude), Some(longitude)) => Ok(CoordinateRecord {
            zip: base_zipcode.to_owned(),
            latitude,
            longitude,
        }),
        _ => Err(ScraperError::CoordinatesNotFound {
            base_zipcode: base_zipcode.to_owned(),
            found,
        }),
    }
}

/// Turns a URL slug such as `san-diego` into `San Diego`.
///
/// Hyphens become spaces; the first letter of every run of letters is
/// upper-cased and the rest lower-cased.
#[must_use]
pub fn normalize_place_name(slug: &str) -> String {
    let mut out = String::with_capacity(slug.len());
    let mut in_word = false;
    for c in slug.chars() {
        let c = if c == '-' { ' ' } else { c };
        if c.is_alphabetic() {
            if in_word {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            in_word = true;
        } else {
            out.push(c);
            in_word = false;
        }
    }
    out
}

#[cfg(test)]
#[path = "assemble_test.rs"]
mod tests;
