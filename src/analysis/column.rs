//! Reading station-table columns as plain numbers and dates.

use crate::analysis::error::StatisticsError;
use chrono::NaiveDate;
use polars::prelude::*;

/// Marks a day with no observation.
pub(crate) const MISSING: &str = "M";
/// Marks a precipitation or snow amount too small to measure.
pub(crate) const TRACE: &str = "T";
/// Marks a day whose amount is folded into a later multi-day accumulation.
pub(crate) const SUBSEQUENT: &str = "S";
/// Suffix ACIS appends to the day that reports a multi-day accumulation.
const ACCUMULATED_SUFFIX: char = 'A';

// 1970-01-01 counted from 0001-01-01.
const EPOCH_DAYS_FROM_CE: i32 = 719_163;

/// Parses one raw cell. Missing and subsequent markers become NaN, a trace becomes 0.0.
pub(crate) fn parse_cell(
    column: &str,
    row: usize,
    raw: Option<&str>,
) -> Result<f64, StatisticsError> {
    let Some(raw) = raw else {
        return Ok(f64::NAN);
    };
    let value = raw.trim();
    match value {
        MISSING | SUBSEQUENT => Ok(f64::NAN),
        TRACE => Ok(0.0),
        _ => value
            .strip_suffix(ACCUMULATED_SUFFIX)
            .unwrap_or(value)
            .parse::<f64>()
            .map_err(|_| StatisticsError::MalformedValue {
                column: column.to_string(),
                row,
                value: raw.to_string(),
            }),
    }
}

/// Returns the values of `column` as `f64`, with NaN wherever a value is missing.
///
/// Textual columns are parsed cell by cell (sentinels included); integer and float
/// columns are cast to `Float64` with nulls mapped to NaN.
pub(crate) fn numeric_values(frame: &DataFrame, column: &str) -> Result<Vec<f64>, StatisticsError> {
    let series = frame
        .column(column)
        .map_err(|_| StatisticsError::ColumnNotFound(column.to_string()))?;
    column_as_f64(series, column)
}

pub(crate) fn column_as_f64(series: &Column, column: &str) -> Result<Vec<f64>, StatisticsError> {
    match series.dtype() {
        DataType::String => series
            .str()?
            .into_iter()
            .enumerate()
            .map(|(row, raw)| parse_cell(column, row, raw))
            .collect(),
        dtype if dtype.is_float() || dtype.is_integer() => {
            let floats = series.cast(&DataType::Float64)?;
            Ok(floats
                .f64()?
                .into_iter()
                .map(|value| value.unwrap_or(f64::NAN))
                .collect())
        }
        dtype => Err(StatisticsError::UnsupportedType {
            column: column.to_string(),
            dtype: dtype.to_string(),
        }),
    }
}

/// Non-missing values, in table order.
pub(crate) fn observed_values(frame: &DataFrame, column: &str) -> Result<Vec<f64>, StatisticsError> {
    Ok(numeric_values(frame, column)?
        .into_iter()
        .filter(|value| !value.is_nan())
        .collect())
}

/// Reads the date column. Accepts a Polars `Date` column or `YYYY-MM-DD` strings.
pub(crate) fn date_values(
    frame: &DataFrame,
    column: &str,
) -> Result<Vec<NaiveDate>, StatisticsError> {
    let series = frame
        .column(column)
        .map_err(|_| StatisticsError::ColumnNotFound(column.to_string()))?;

    let malformed = |row: usize, value: String| StatisticsError::MalformedValue {
        column: column.to_string(),
        row,
        value,
    };

    match series.dtype() {
        DataType::Date => {
            let days = series.cast(&DataType::Int32)?;
            days.i32()?
                .into_iter()
                .enumerate()
                .map(|(row, day)| {
                    day.and_then(|d| NaiveDate::from_num_days_from_ce_opt(EPOCH_DAYS_FROM_CE + d))
                        .ok_or_else(|| malformed(row, format!("{:?}", day)))
                })
                .collect()
        }
        DataType::String => series
            .str()?
            .into_iter()
            .enumerate()
            .map(|(row, raw)| {
                raw.and_then(|s| NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").ok())
                    .ok_or_else(|| malformed(row, raw.unwrap_or_default().to_string()))
            })
            .collect(),
        dtype => Err(StatisticsError::UnsupportedType {
            column: column.to_string(),
            dtype: dtype.to_string(),
        }),
    }
}

/// Builds a Polars `Date` column.
pub(crate) fn date_column(name: &str, dates: &[NaiveDate]) -> Column {
    DateChunked::from_naive_date(name.into(), dates.iter().copied())
        .into_series()
        .into()
}
