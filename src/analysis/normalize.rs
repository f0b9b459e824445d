//! Replaces the ACIS missing (`"M"`) and trace (`"T"`) sentinels with numbers.

use crate::analysis::column::{column_as_f64, numeric_values, TRACE};
use crate::analysis::error::StatisticsError;
use crate::types::element::{Element, DATE_COLUMN};
use bon::builder;
use log::debug;
use polars::prelude::*;

/// A station table after sentinel replacement.
#[derive(Debug, Clone)]
pub struct Normalized {
    /// The table with every element column as `Float64`; missing days are NaN.
    pub frame: DataFrame,
    /// Missing days in the requested column, if one was named.
    pub missing: Option<usize>,
}

/// Converts every element column to `Float64`, mapping `"M"` to NaN and `"T"` to 0.0.
///
/// Textual columns are parsed cell by cell. Columns that are already numeric cannot
/// hold sentinels, so they go through a cast to `Float64` instead, with nulls becoming
/// NaN. The date column and columns of any other type are left untouched, as is the
/// column order. Running this on an already normalized table changes nothing.
///
/// Builder arguments:
///
/// * `.column(&str)`: Optional. Count the missing days of this column into
///   [`Normalized::missing`].
/// * `.date_column(&str)`: Optional. Name of the date column to leave alone. Defaults
///   to `"Date"`.
///
/// # Errors
///
/// * [`StatisticsError::MalformedValue`] if a textual cell is neither a number nor a sentinel.
/// * [`StatisticsError::ColumnNotFound`] if `column` is not in the table.
///
/// # Examples
///
/// ```
/// use acis_stats::normalize;
/// use polars::prelude::*;
///
/// let raw = DataFrame::new(vec![Column::new("Precipitation".into(), ["0.12", "T", "M"])])?;
/// let normalized = normalize(raw).column("Precipitation").call()?;
/// assert_eq!(normalized.missing, Some(1));
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[builder]
pub fn normalize(
    #[builder(start_fn)] frame: DataFrame,
    column: Option<&str>,
    date_column: Option<&str>,
) -> Result<Normalized, StatisticsError> {
    let date_column = date_column.unwrap_or(DATE_COLUMN);
    let mut frame = frame;
    let names: Vec<PlSmallStr> = frame.get_column_names().into_iter().cloned().collect();

    let mut converted = 0usize;
    for name in names {
        if name.as_str() == date_column {
            continue;
        }
        let series = frame.column(name.as_str())?;
        let dtype = series.dtype();
        if !(matches!(dtype, DataType::String) || dtype.is_float() || dtype.is_integer()) {
            continue;
        }
        let values = column_as_f64(series, name.as_str())?;
        frame.with_column(Column::new(name, values))?;
        converted += 1;
    }
    debug!("Normalized {} columns of {} rows", converted, frame.height());

    let missing = match column {
        Some(column) => Some(number_of_missing_days(&frame, column)?),
        None => None,
    };

    Ok(Normalized { frame, missing })
}

/// Replaces trace markers with zero in textual columns, leaving everything else as is.
///
/// A trace is counted as zero in climatology. The columns stay textual so that missing
/// markers remain visible to a later [`normalize`] call. Columns named after an
/// [`Element`] that never reports traces (temperatures and degree days) are skipped.
pub fn replace_trace_with_zeros(frame: DataFrame) -> Result<DataFrame, StatisticsError> {
    let mut frame = frame;
    let names: Vec<PlSmallStr> = frame.get_column_names().into_iter().cloned().collect();

    for name in names {
        if Element::from_column_name(name.as_str()).is_some_and(|e| !e.accepts_trace()) {
            continue;
        }
        let series = frame.column(name.as_str())?;
        if !matches!(series.dtype(), DataType::String) {
            continue;
        }
        let replaced: Vec<Option<String>> = series
            .str()?
            .into_iter()
            .map(|value| {
                value.map(|s| {
                    if s.trim() == TRACE {
                        "0.00".to_string()
                    } else {
                        s.to_string()
                    }
                })
            })
            .collect();
        frame.with_column(Column::new(name, replaced))?;
    }
    Ok(frame)
}

/// Counts the missing days of `column`, reading sentinels where the column is still textual.
pub fn number_of_missing_days(frame: &DataFrame, column: &str) -> Result<usize, StatisticsError> {
    Ok(numeric_values(frame, column)?
        .iter()
        .filter(|value| value.is_nan())
        .count())
}
