//! Lookup command handlers for the CLI.
//!
//! Command-line values take precedence; anything left out is filled in from
//! the JSON query document, which is only read when needed.

use std::path::PathBuf;

use clap::Args;
use zipscan_core::{ConfigError, CountyQuery, RadiusQuery, ScrapeConfig};
use zipscan_scraper::ZipCodesClient;

use crate::output::{print_table, Results};

pub(crate) const RADIUS_FLOW: &str = "within_radius";
pub(crate) const COUNTY_FLOW: &str = "county";
pub(crate) const COORDINATES_FLOW: &str = "coordinates";

/// Arguments for `zipscan radius`.
#[derive(Debug, Args)]
pub(crate) struct RadiusArgs {
    /// Lower bound of the mile range
    #[arg(long)]
    pub(crate) lower: Option<u32>,
    /// Upper bound of the mile range (the site caps this at 30)
    #[arg(long)]
    pub(crate) upper: Option<u32>,
    /// Base zip code
    #[arg(long)]
    pub(crate) zip: Option<String>,
}

impl RadiusArgs {
    pub(crate) fn resolve(self, document: &mut QueryDocument) -> Result<RadiusQuery, ConfigError> {
        if let (Some(lower_radius), Some(upper_radius), Some(base_zipcode)) =
            (self.lower, self.upper, self.zip.clone())
        {
            return Ok(RadiusQuery {
                lower_radius,
                upper_radius,
                base_zipcode,
            });
        }

        let defaults = &document.get()?.within_radius;
        Ok(RadiusQuery {
            lower_radius: self.lower.unwrap_or(defaults.lower_radius),
            upper_radius: self.upper.unwrap_or(defaults.upper_radius),
            base_zipcode: self
                .zip
                .unwrap_or_else(|| defaults.base_zipcode.clone()),
        })
    }
}

/// Arguments for `zipscan county`.
#[derive(Debug, Args)]
pub(crate) struct CountyArgs {
    /// State abbreviation (e.g., CA)
    #[arg(long)]
    pub(crate) state: Option<String>,
    /// County name, spaces or hyphens (e.g., san-diego)
    #[arg(long)]
    pub(crate) county: Option<String>,
}

impl CountyArgs {
    pub(crate) fn resolve(self, document: &mut QueryDocument) -> Result<CountyQuery, ConfigError> {
        if let (Some(state), Some(county)) = (self.state.clone(), self.county.clone()) {
            return Ok(CountyQuery { state, county });
        }

        let defaults = &document.get()?.county;
        Ok(CountyQuery {
            state: self.state.unwrap_or_else(|| defaults.state.clone()),
            county: self.county.unwrap_or_else(|| defaults.county.clone()),
        })
    }
}

/// The JSON query document, read on first use.
#[derive(Debug)]
pub(crate) struct QueryDocument {
    path: PathBuf,
    loaded: Option<ScrapeConfig>,
}

impl QueryDocument {
    pub(crate) fn new(path: PathBuf) -> Self {
        Self { path, loaded: None }
    }

    pub(crate) fn get(&mut self) -> Result<&ScrapeConfig, ConfigError> {
        let document = match self.loaded.take() {
            Some(document) => document,
            None => {
                tracing::debug!(path = %self.path.display(), "loading query document");
                zipscan_core::load_scrape_config(&self.path)?
            }
        };
        Ok(self.loaded.insert(document))
    }
}

pub(crate) async fn run_radius(
    client: &ZipCodesClient,
    query: &RadiusQuery,
    results: &mut Results,
) -> anyhow::Result<()> {
    let rows = client.zips_within_radius(query).await?;
    print_table(&rows)?;
    results.insert(RADIUS_FLOW, &rows)
}

pub(crate) async fn run_county(
    client: &ZipCodesClient,
    query: &CountyQuery,
    results: &mut Results,
) -> anyhow::Result<()> {
    let rows = client.zips_in_county(query).await?;
    if rows.is_empty() {
        tracing::warn!(state = %query.state, county = %query.county, "county listing has no rows");
    }
    print_table(&rows)?;
    results.insert(COUNTY_FLOW, &rows)
}

pub(crate) async fn run_coordinates(
    client: &ZipCodesClient,
    base_zipcode: &str,
    results: &mut Results,
) -> anyhow::Result<()> {
    let record = client.zip_coordinates(base_zipcode).await?;
    print_table(std::slice::from_ref(&record))?;
    results.insert(COORDINATES_FLOW, &record)
}

/// Runs the three lookups in order: radius, county, then coordinates of the
/// radius base code. The first failure stops the run.
pub(crate) async fn run_all(
    client: &ZipCodesClient,
    document: &mut QueryDocument,
    results: &mut Results,
) -> anyhow::Result<()> {
    let ScrapeConfig {
        within_radius,
        county,
    } = document.get()?.clone();

    run_radius(client, &within_radius, results).await?;
    println!();
    run_county(client, &county, results).await?;
    println!();
    run_coordinates(client, &within_radius.base_zipcode, results).await
}
