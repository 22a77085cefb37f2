//! Query parameters for the three lookup flows, as read from the JSON
//! query document or supplied on the command line.

use serde::{Deserialize, Deserializer, Serialize};

/// Parameters for a radius search around a base zip code.
///
/// `upper_radius` is capped at 30 miles by the directory site. Larger
/// values are passed through unchanged and come back as an empty result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RadiusQuery {
    pub lower_radius: u32,
    pub upper_radius: u32,
    #[serde(deserialize_with = "zipcode_from_str_or_int")]
    pub base_zipcode: String,
}

/// Parameters for listing every zip code of a state/county pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountyQuery {
    pub state: String,
    pub county: String,
}

/// The JSON query document consumed at process start.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScrapeConfig {
    pub within_radius: RadiusQuery,
    pub county: CountyQuery,
}

/// Accepts `"02134"` as well as `2134`. Integers are rendered as written;
/// leading zeros only survive when the document uses a string.
fn zipcode_from_str_or_int<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawZip {
        Text(String),
        Number(u64),
    }

    Ok(match RawZip::deserialize(deserializer)? {
        RawZip::Text(s) => s.trim().to_string(),
        RawZip::Number(n) => n.to_string(),
    })
}
