use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScraperError {
    #[error("HTTP client error: {0}")]
    Client(#[from] reqwest::Error),

    #[error("network error fetching {url}: {source}")]
    Network {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("couldn't find surrounding zips for {base_zipcode} within {lower_radius}-{upper_radius} miles")]
    EmptyResult {
        base_zipcode: String,
        lower_radius: u32,
        upper_radius: u32,
    },

    #[error("no \"Page 1 of N\" marker found in listing at {url}")]
    PageCountNotFound { url: String },

    #[error("listing at {url} declares {declared} pages, exceeding the limit of {max_pages}")]
    PaginationLimit {
        url: String,
        declared: usize,
        max_pages: usize,
    },

    #[error("extracted fields have unequal lengths: {}", describe_lengths(.lengths))]
    FieldAlignment { lengths: Vec<(String, usize)> },

    #[error("expected two coordinate values for {base_zipcode}, found {found}")]
    CoordinatesNotFound { base_zipcode: String, found: usize },

    #[error("invalid field pattern \"{name}\": {reason}")]
    InvalidPattern { name: String, reason: String },

    #[error("invalid base URL \"{base_url}\": {reason}")]
    InvalidBaseUrl { base_url: String, reason: String },
}

fn describe_lengths(lengths: &[(String, usize)]) -> String {
    lengths
        .iter()
        .map(|(name, len)| format!("{name}={len}"))
        .collect::<Vec<_>>()
        .join(", ")
}
