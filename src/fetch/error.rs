use polars::error::PolarsError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("Network request failed for {0}")]
    NetworkRequest(String, #[source] reqwest::Error),

    #[error("HTTP request failed for {url} with status {status}")]
    HttpStatus {
        url: String,
        status: reqwest::StatusCode,
        #[source]
        source: reqwest::Error,
    },

    #[error("Failed to parse the JSON response from {0}")]
    JsonParse(String, #[source] reqwest::Error),

    #[error("ACIS rejected the request for station '{station}': {message}")]
    Service { station: String, message: String },

    #[error("Row {row} for station '{station}' has {found} values, expected {expected}")]
    SchemaMismatch {
        station: String,
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("Row {row} for station '{station}' has an unreadable date '{value}'")]
    InvalidDate {
        station: String,
        row: usize,
        value: String,
    },

    #[error("Failed building DataFrame: {0}")]
    DataFrameProcessing(#[from] PolarsError),
}
