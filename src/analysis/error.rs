use polars::error::PolarsError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StatisticsError {
    #[error("Required column '{0}' not found in DataFrame")]
    ColumnNotFound(String),

    #[error("Column '{column}' has no observed values in the period")]
    AllMissing { column: String },

    #[error("Column '{column}' needs at least {needed} observed values, found {found}")]
    InsufficientData {
        column: String,
        needed: usize,
        found: usize,
    },

    #[error("Column '{column}' row {row} holds '{value}', which is neither a number nor a sentinel")]
    MalformedValue {
        column: String,
        row: usize,
        value: String,
    },

    #[error("Column '{column}' has type {dtype}, which cannot be read as numbers")]
    UnsupportedType { column: String, dtype: String },

    #[error("Rank range {start}..{end} is reversed")]
    InvalidRankRange { start: usize, end: usize },

    #[error("Failed processing DataFrame: {0}")]
    DataFrameProcessing(#[from] PolarsError),
}
