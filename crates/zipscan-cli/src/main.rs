mod lookup;
mod output;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;
use zipscan_core::ConfigError;
use zipscan_scraper::{ScraperError, ZipCodesClient};

use crate::lookup::{CountyArgs, QueryDocument, RadiusArgs};

const EXIT_FAILURE: u8 = 1;
const EXIT_CONFIG: u8 = 2;
const EXIT_NETWORK: u8 = 3;
const EXIT_EMPTY_RESULT: u8 = 4;
const EXIT_PAGE_STRUCTURE: u8 = 5;
/// Malformed command line (sysexits `EX_USAGE`).
const EXIT_USAGE: u8 = 64;

#[derive(Debug, Parser)]
#[command(name = "zipscan")]
#[command(about = "Postal-code metadata lookups from the zip-codes.com directory")]
struct Cli {
    /// JSON query document with `within_radius` and `county` sections
    /// (defaults to `ZIPSCAN_CONFIG_PATH`)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Also write the results to this path as a JSON document
    #[arg(long, global = true)]
    export: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// List zip codes within a mile range of a base zip code
    Radius(RadiusArgs),
    /// List every zip code of a state/county pair
    County(CountyArgs),
    /// Look up latitude and longitude of a zip code
    Coords {
        /// Zip code to look up (defaults to the query document's radius base code)
        #[arg(long)]
        zip: Option<String>,
    },
    /// Run the radius, county, and coordinate lookups from the query document
    All,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            // Help and version requests land here too and go to stdout.
            let _ = e.print();
            return ExitCode::from(usage_exit_code(&e));
        }
    };

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e:#}");
            ExitCode::from(exit_code_for(&e))
        }
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let config = zipscan_core::load_app_config()?;
    let env_filter =
        EnvFilter::try_from_default_env().or_else(|_| parse_log_level(&config.log_level))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let client = ZipCodesClient::from_app_config(&config)?;
    let mut document = QueryDocument::new(cli.config.unwrap_or(config.config_path));
    let mut results = output::Results::default();

    match cli.command {
        Commands::Radius(args) => {
            let query = args.resolve(&mut document)?;
            lookup::run_radius(&client, &query, &mut results).await?;
        }
        Commands::County(args) => {
            let query = args.resolve(&mut document)?;
            lookup::run_county(&client, &query, &mut results).await?;
        }
        Commands::Coords { zip } => {
            let zip = match zip {
                Some(zip) => zip,
                None => document.get()?.within_radius.base_zipcode.clone(),
            };
            lookup::run_coordinates(&client, &zip, &mut results).await?;
        }
        Commands::All => lookup::run_all(&client, &mut document, &mut results).await?,
    }

    if let Some(path) = cli.export {
        zipscan_core::export_json(&results, &path)?;
        eprintln!("Successfully exported results to {}", path.display());
    }

    Ok(())
}

/// Builds the fallback log filter from `ZIPSCAN_LOG_LEVEL`.
fn parse_log_level(level: &str) -> Result<EnvFilter, ConfigError> {
    EnvFilter::try_new(level).map_err(|e| ConfigError::InvalidEnvVar {
        var: "ZIPSCAN_LOG_LEVEL".to_owned(),
        reason: e.to_string(),
    })
}

/// Exit code for a failed parse: zero for `--help`/`--version`, otherwise
/// [`EXIT_USAGE`] so usage mistakes stay distinct from config failures.
fn usage_exit_code(err: &clap::Error) -> u8 {
    if err.use_stderr() {
        EXIT_USAGE
    } else {
        0
    }
}

/// Maps the first recognised cause in the error chain to a process exit code.
fn exit_code_for(err: &anyhow::Error) -> u8 {
    for cause in err.chain() {
        if cause.downcast_ref::<ConfigError>().is_some() {
            return EXIT_CONFIG;
        }
        if let Some(e) = cause.downcast_ref::<ScraperError>() {
            return match e {
                ScraperError::Network { .. } => EXIT_NETWORK,
                ScraperError::EmptyResult { .. } => EXIT_EMPTY_RESULT,
                ScraperError::PageCountNotFound { .. }
                | ScraperError::PaginationLimit { .. }
                | ScraperError::FieldAlignment { .. }
                | ScraperError::CoordinatesNotFound { .. } => EXIT_PAGE_STRUCTURE,
                ScraperError::InvalidBaseUrl { .. } => EXIT_CONFIG,
                ScraperError::Client(_) | ScraperError::InvalidPattern { .. } => EXIT_FAILURE,
            };
        }
    }
    EXIT_FAILURE
}
