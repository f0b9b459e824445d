//! Turns a `StnData` response into a raw station table.

use crate::analysis::column::date_column;
use crate::fetch::error::FetchError;
use crate::fetch::request::StnDataResponse;
use crate::types::element::{Element, DATE_COLUMN};
use chrono::NaiveDate;
use log::warn;
use polars::prelude::*;
use serde_json::Value;

/// Builds the raw table: a `Date` column followed by one `String` column per
/// [`Element`], in [`Element::ALL`] order. Values keep their ACIS spelling,
/// sentinels included; a JSON `null` becomes a null cell.
///
/// # Errors
///
/// * [`FetchError::Service`] if the response carries an error message.
/// * [`FetchError::SchemaMismatch`] if a row is not one date plus one value per element.
/// * [`FetchError::InvalidDate`] if a row's date is not `YYYY-MM-DD`.
pub(crate) fn response_to_frame(
    station: &str,
    response: &StnDataResponse,
) -> Result<DataFrame, FetchError> {
    if let Some(message) = &response.error {
        warn!("ACIS returned an error for station {}: {}", station, message);
        return Err(FetchError::Service {
            station: station.to_string(),
            message: message.clone(),
        });
    }

    let expected = Element::ALL.len() + 1;
    let rows = response.data.len();
    let mut dates: Vec<NaiveDate> = Vec::with_capacity(rows);
    let mut values: Vec<Vec<Option<String>>> = (0..Element::ALL.len())
        .map(|_| Vec::with_capacity(rows))
        .collect();

    for (row, cells) in response.data.iter().enumerate() {
        if cells.len() != expected {
            warn!(
                "Row {} for station {} has {} values instead of {}",
                row,
                station,
                cells.len(),
                expected
            );
            return Err(FetchError::SchemaMismatch {
                station: station.to_string(),
                row,
                expected,
                found: cells.len(),
            });
        }

        let raw_date = cell_text(&cells[0]).unwrap_or_default();
        let date = NaiveDate::parse_from_str(&raw_date, "%Y-%m-%d").map_err(|_| {
            FetchError::InvalidDate {
                station: station.to_string(),
                row,
                value: raw_date.clone(),
            }
        })?;
        dates.push(date);

        for (column, cell) in values.iter_mut().zip(&cells[1..]) {
            column.push(cell_text(cell));
        }
    }

    let mut columns = Vec::with_capacity(expected);
    columns.push(date_column(DATE_COLUMN, &dates));
    columns.extend(
        Element::ALL
            .iter()
            .zip(values)
            .map(|(element, column)| Column::new(element.column_name().into(), column)),
    );
    Ok(DataFrame::new(columns)?)
}

/// The textual form of one cell.
///
/// ACIS sends values as strings, but numbers are accepted too. When value flags are
/// requested a cell is a `[value, flag]` pair and the value is kept.
fn cell_text(cell: &Value) -> Option<String> {
    match cell {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Array(items) => items.first().and_then(cell_text),
        other => Some(other.to_string()),
    }
}
