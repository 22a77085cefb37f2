//! Field patterns for the directory site's markup.
//!
//! These are tied to the site's current HTML and will silently stop
//! matching if it changes.

use crate::error::ScraperError;
use crate::extract::RegexField;

pub const ZIPS: &str = "zips";
pub const CITY: &str = "city";
pub const COUNTY: &str = "county";
pub const COORDINATES: &str = "coordinates";

/// Matches the second zip of every radius-result link for `base_zipcode`,
/// e.g. `zip1=92101&zip2=92102"` yields `92102`.
///
/// # Errors
///
/// Returns [`ScraperError::InvalidPattern`] if the pattern fails to compile.
pub fn radius_field(base_zipcode: &str) -> Result<RegexField, ScraperError> {
    let zip = regex::escape(base_zipcode);
    RegexField::new(ZIPS, &format!(r#"zip1={zip}&zip2=(\d+)""#))
}

/// Zip, city, and county patterns for a county listing in `state`.
///
/// City and county slugs look like `city/ca-san-diego.asp"`; the state
/// prefix is matched lower-cased.
///
/// # Errors
///
/// Returns [`ScraperError::InvalidPattern`] if a pattern fails to compile.
pub fn county_fields(state: &str) -> Result<Vec<(&'static str, RegexField)>, ScraperError> {
    let state = regex::escape(&state.to_lowercase());
    Ok(vec![
        (ZIPS, RegexField::new(ZIPS, r"zip-code/(\d+)/zip")?),
        (
            CITY,
            RegexField::new(CITY, &format!(r#"city/{state}-(\w+(?:-\w+)*)\.asp""#))?,
        ),
        (
            COUNTY,
            RegexField::new(COUNTY, &format!(r#"county/{state}-(\w+(?:-\w+)*)\.asp""#))?,
        ),
    ])
}

/// Numeric values in the info cells of a zip-code detail page. The sign,
/// when printed, is part of the captured value.
///
/// # Errors
///
/// Returns [`ScraperError::InvalidPattern`] if the pattern fails to compile.
pub fn coordinate_field() -> Result<RegexField, ScraperError> {
    RegexField::new(COORDINATES, r#"class="info">([+-]?\d+\.\d+)</td"#)
}

#[cfg(test)]
mod tests {
    use crate::extract::{extract_fields, FieldPattern};

    use super::*;

    #[test]
    fn radius_field_matches_only_links_from_base_zip() {
        let field = radius_field("92101").unwrap();
        let html = concat!(
            r#"<a href="radius.asp?zip1=92101&zip2=92102">x</a>"#,
            r#"<a href="radius.asp?zip1=90210&zip2=90211">x</a>"#,
            r#"<a href="radius.asp?zip1=92101&zip2=92103">x</a>"#,
        );
        assert_eq!(field.captures(html), vec!["92102", "92103"]);
    }

    #[test]
    fn radius_field_escapes_base_zip() {
        let field = radius_field("9.101").unwrap();
        assert!(field.captures(r#"zip1=92101&zip2=92102""#).is_empty());
    }

    #[test]
    fn county_fields_extract_zip_city_and_county() {
        let html = concat!(
            r#"<a href="/zip-code/92101/zip-code-92101.asp">92101</a>"#,
            r#"<a href="/city/ca-san-diego.asp">San Diego</a>"#,
            r#"<a href="/county/ca-san-diego.asp">San Diego</a>"#,
        );
        let patterns = county_fields("CA").unwrap();
        let fields = extract_fields(html, &patterns);

        assert_eq!(fields.get(ZIPS), Some(&["92101".to_owned()][..]));
        assert_eq!(fields.get(CITY), Some(&["san-diego".to_owned()][..]));
        assert_eq!(fields.get(COUNTY), Some(&["san-diego".to_owned()][..]));
    }

    #[test]
    fn county_fields_ignore_other_states() {
        let patterns = county_fields("ca").unwrap();
        let fields = extract_fields(r#"<a href="/city/nv-reno.asp">Reno</a>"#, &patterns);
        assert_eq!(fields.get(CITY), Some(&[][..]));
    }

    #[test]
    fn coordinate_field_keeps_sign() {
        let html = concat!(
            r#"<td class="info">32.7157</td>"#,
            r#"<td class="info">-117.1611</td>"#,
            r#"<td class="info">+99.9999</td>"#,
        );
        assert_eq!(
            coordinate_field().unwrap().captures(html),
            vec!["32.7157", "-117.1611", "+99.9999"]
        );
    }
}
