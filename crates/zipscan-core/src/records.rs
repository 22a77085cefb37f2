//! Row types produced by the three lookup flows.
//!
//! Records are plain values built once per query. Each one serializes to a
//! JSON object keyed by its column names, and implements [`Tabular`] so the
//! CLI can print any result set the same way.

use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};

/// A row with named columns, rendered in column order.
pub trait Tabular {
    /// Column headers, in display order.
    fn columns(&self) -> Vec<String>;

    /// Cell values, aligned with [`Tabular::columns`].
    fn values(&self) -> Vec<&str>;
}

/// One surrounding zip code found within `upper_radius` miles of `zip`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RadiusRecord {
    pub zip: String,
    pub surrounding_zip: String,
    pub upper_radius: u32,
}

impl RadiusRecord {
    /// Header of the surrounding-code column, e.g. `Zip_within_10_miles`.
    #[must_use]
    pub fn radius_column(&self) -> String {
        format!("Zip_within_{}_miles", self.upper_radius)
    }
}

impl Tabular for RadiusRecord {
    fn columns(&self) -> Vec<String> {
        vec!["Zip".to_string(), self.radius_column()]
    }

    fn values(&self) -> Vec<&str> {
        vec![self.zip.as_str(), self.surrounding_zip.as_str()]
    }
}

// The second key depends on the queried radius, so derive cannot express it.
impl Serialize for RadiusRecord {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(2))?;
        map.serialize_entry("Zip", &self.zip)?;
        map.serialize_entry(&self.radius_column(), &self.surrounding_zip)?;
        map.end()
    }
}

/// One zip code listed for a county, with its normalized place names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountyRecord {
    pub city: String,
    pub state: String,
    pub county: String,
    pub zip: String,
}

impl Tabular for CountyRecord {
    fn columns(&self) -> Vec<String> {
        ["city", "state", "county", "zip"]
            .iter()
            .map(ToString::to_string)
            .collect()
    }

    fn values(&self) -> Vec<&str> {
        vec![
            self.city.as_str(),
            self.state.as_str(),
            self.county.as_str(),
            self.zip.as_str(),
        ]
    }
}

/// Latitude and longitude of a single zip code, kept as the site prints them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoordinateRecord {
    #[serde(rename = "Zip")]
    pub zip: String,
    #[serde(rename = "Latitude")]
    pub latitude: String,
    #[serde(rename = "Longitude")]
    pub longitude: String,
}

impl Tabular for CoordinateRecord {
    fn columns(&self) -> Vec<String> {
        ["Zip", "Latitude", "Longitude"]
            .iter()
            .map(ToString::to_string)
            .collect()
    }

    fn values(&self) -> Vec<&str> {
        vec![
            self.zip.as_str(),
            self.latitude.as_str(),
            self.longitude.as_str(),
        ]
    }
}
