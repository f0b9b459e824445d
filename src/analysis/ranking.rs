//! Ranks the days of a period by one column ("the five hottest days", "places 5 to 10").

use crate::analysis::column::{date_column, date_values, numeric_values};
use crate::analysis::error::StatisticsError;
use crate::types::element::DATE_COLUMN;
use bon::builder;
use chrono::NaiveDate;
use ordered_float::OrderedFloat;
use polars::prelude::{Column, DataFrame, PolarsError};
use std::cmp::Reverse;

/// Number of days taken by [`RankSubset::First`] and [`RankSubset::Last`] in the usual
/// top-five and bottom-five tables.
pub const DEFAULT_RANK_COUNT: usize = 5;

/// Which part of the sorted period to return.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RankSubset {
    /// Every day with an observation. Missing days are never ranked, so this can be
    /// shorter than the column.
    #[default]
    None,
    /// The first `n` days of the sorted sequence.
    First(usize),
    /// The last `n` days, walking backward from the end of the sorted sequence.
    ///
    /// With a descending sort this yields the lowest value first.
    Last(usize),
    /// Sorted positions `start..end` (end exclusive, zero-based).
    Between { start: usize, end: usize },
}

/// One ranked day.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RankedDay {
    pub date: NaiveDate,
    pub value: f64,
}

/// The result of [`period_rankings`].
#[derive(Debug, Clone, PartialEq)]
pub struct Ranking {
    /// The ranked column.
    pub column: String,
    pub days: Vec<RankedDay>,
}

impl Ranking {
    pub fn len(&self) -> usize {
        self.days.len()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    /// Converts the ranking into a two-column table: `date_column` and the ranked column.
    pub fn to_frame(&self, date_column_name: &str) -> Result<DataFrame, PolarsError> {
        let dates: Vec<NaiveDate> = self.days.iter().map(|d| d.date).collect();
        let values: Vec<f64> = self.days.iter().map(|d| d.value).collect();
        DataFrame::new(vec![
            date_column(date_column_name, &dates),
            Column::new(self.column.as_str().into(), values),
        ])
    }
}

/// Ranks the observed days of `column`.
///
/// Days are sorted highest first unless `ascending` is set. The sort is stable, so days
/// with equal values keep their date order. Missing days are not ranked.
///
/// Builder arguments:
///
/// * `.ascending(bool)`: Optional. Sort low to high. Defaults to `false`.
/// * `.subset(RankSubset)`: Optional. Which ranks to return. Defaults to [`RankSubset::None`].
/// * `.date_column(&str)`: Optional. Name of the date column. Defaults to `"Date"`.
///
/// Counts and range ends beyond the number of ranked days are clamped.
///
/// # Errors
///
/// * [`StatisticsError::ColumnNotFound`] if `column` or the date column is absent.
/// * [`StatisticsError::InvalidRankRange`] for a [`RankSubset::Between`] whose start is
///   after its end.
///
/// # Examples
///
/// ```
/// use acis_stats::{period_rankings, RankSubset};
/// use polars::prelude::*;
///
/// let frame = DataFrame::new(vec![
///     Column::new("Date".into(), ["2025-07-01", "2025-07-02", "2025-07-03"]),
///     Column::new("Maximum Temperature".into(), [88.0, 95.0, 91.0]),
/// ])?;
/// let hottest = period_rankings(&frame, "Maximum Temperature")
///     .subset(RankSubset::First(2))
///     .call()?;
/// let values: Vec<f64> = hottest.days.iter().map(|d| d.value).collect();
/// assert_eq!(values, vec![95.0, 91.0]);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[builder]
pub fn period_rankings(
    #[builder(start_fn)] frame: &DataFrame,
    #[builder(start_fn)] column: &str,
    ascending: Option<bool>,
    subset: Option<RankSubset>,
    date_column: Option<&str>,
) -> Result<Ranking, StatisticsError> {
    let ascending = ascending.unwrap_or(false);
    let subset = subset.unwrap_or_default();
    let date_column = date_column.unwrap_or(DATE_COLUMN);

    let dates = date_values(frame, date_column)?;
    let values = numeric_values(frame, column)?;

    let mut ranked: Vec<RankedDay> = dates
        .into_iter()
        .zip(values)
        .filter(|(_, value)| !value.is_nan())
        .map(|(date, value)| RankedDay { date, value })
        .collect();

    // `sort_by_key` is stable: ties keep their date order in both directions.
    if ascending {
        ranked.sort_by_key(|day| OrderedFloat(day.value));
    } else {
        ranked.sort_by_key(|day| Reverse(OrderedFloat(day.value)));
    }

    let len = ranked.len();
    let days = match subset {
        RankSubset::None => ranked,
        RankSubset::First(n) => ranked.into_iter().take(n.min(len)).collect(),
        RankSubset::Last(n) => ranked.into_iter().rev().take(n.min(len)).collect(),
        RankSubset::Between { start, end } => {
            if start > end {
                return Err(StatisticsError::InvalidRankRange { start, end });
            }
            let end = end.min(len);
            let start = start.min(end);
            ranked[start..end].to_vec()
        }
    };

    Ok(Ranking {
        column: column.to_string(),
        days,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use polars::prelude::*;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 1, d).unwrap()
    }

    fn frame(values: &[f64]) -> DataFrame {
        let dates: Vec<NaiveDate> = (1..=values.len() as u32).map(day).collect();
        DataFrame::new(vec![
            date_column(DATE_COLUMN, &dates),
            Column::new("Maximum Temperature".into(), values.to_vec()),
        ])
        .unwrap()
    }

    fn values(ranking: &Ranking) -> Vec<f64> {
        ranking.days.iter().map(|d| d.value).collect()
    }

    // Ten unique values; the descending order is 100, 90, ..., 10.
    fn ten_unique() -> DataFrame {
        frame(&[40.0, 100.0, 10.0, 70.0, 30.0, 90.0, 60.0, 20.0, 80.0, 50.0])
    }

    #[test]
    fn test_full_ranking_descending() -> Result<(), StatisticsError> {
        let ranking = period_rankings(&ten_unique(), "Maximum Temperature").call()?;
        assert_eq!(
            values(&ranking),
            vec![100.0, 90.0, 80.0, 70.0, 60.0, 50.0, 40.0, 30.0, 20.0, 10.0]
        );
        assert_eq!(ranking.days[0].date, day(2));
        Ok(())
    }

    #[test]
    fn test_first_and_last_partition_the_period() -> Result<(), StatisticsError> {
        let df = ten_unique();
        let full = period_rankings(&df, "Maximum Temperature").call()?;
        let first = period_rankings(&df, "Maximum Temperature")
            .subset(RankSubset::First(5))
            .call()?;
        let last = period_rankings(&df, "Maximum Temperature")
            .subset(RankSubset::Last(5))
            .call()?;

        // First covers sorted indices 0..=4, last walks 9 down to 5.
        assert_eq!(first.days, full.days[0..5].to_vec());
        let expected_last: Vec<RankedDay> = (5..10).rev().map(|i| full.days[i]).collect();
        assert_eq!(last.days, expected_last);
        assert_eq!(values(&last), vec![10.0, 20.0, 30.0, 40.0, 50.0]);

        let mut covered: Vec<NaiveDate> = first.days.iter().chain(&last.days).map(|d| d.date).collect();
        covered.sort();
        assert_eq!(covered, (1..=10).map(day).collect::<Vec<_>>());
        Ok(())
    }

    #[test]
    fn test_between_and_ascending() -> Result<(), StatisticsError> {
        let df = ten_unique();
        let middle = period_rankings(&df, "Maximum Temperature")
            .subset(RankSubset::Between { start: 5, end: 8 })
            .call()?;
        assert_eq!(values(&middle), vec![50.0, 40.0, 30.0]);

        let coldest = period_rankings(&df, "Maximum Temperature")
            .ascending(true)
            .subset(RankSubset::First(DEFAULT_RANK_COUNT))
            .call()?;
        assert_eq!(values(&coldest), vec![10.0, 20.0, 30.0, 40.0, 50.0]);
        Ok(())
    }

    #[test]
    fn test_ties_keep_date_order() -> Result<(), StatisticsError> {
        let df = frame(&[75.0, 80.0, 75.0, 80.0]);
        let ranking = period_rankings(&df, "Maximum Temperature").call()?;
        let dates: Vec<NaiveDate> = ranking.days.iter().map(|d| d.date).collect();
        assert_eq!(dates, vec![day(2), day(4), day(1), day(3)]);

        let ascending = period_rankings(&df, "Maximum Temperature")
            .ascending(true)
            .call()?;
        let dates: Vec<NaiveDate> = ascending.days.iter().map(|d| d.date).collect();
        assert_eq!(dates, vec![day(1), day(3), day(2), day(4)]);
        Ok(())
    }

    #[test]
    fn test_missing_days_and_clamping() -> Result<(), StatisticsError> {
        let df = frame(&[61.0, f64::NAN, 58.0]);
        let top = period_rankings(&df, "Maximum Temperature")
            .subset(RankSubset::First(5))
            .call()?;
        assert_eq!(values(&top), vec![61.0, 58.0]);

        let full = period_rankings(&df, "Maximum Temperature").call()?;
        assert_eq!(full.len(), 2);
        assert!(full.days.iter().all(|d| !d.value.is_nan()));

        let beyond = period_rankings(&df, "Maximum Temperature")
            .subset(RankSubset::Between { start: 4, end: 9 })
            .call()?;
        assert!(beyond.is_empty());

        assert!(matches!(
            period_rankings(&df, "Maximum Temperature")
                .subset(RankSubset::Between { start: 2, end: 1 })
                .call(),
            Err(StatisticsError::InvalidRankRange { start: 2, end: 1 })
        ));
        Ok(())
    }

    #[test]
    fn test_custom_date_column_and_frame_output() -> Result<(), Box<dyn std::error::Error>> {
        let df = DataFrame::new(vec![
            Column::new("DATE".into(), ["2025-01-01", "2025-01-02"]),
            Column::new("Snowfall".into(), ["T", "2.5"]),
        ])?;
        let ranking = period_rankings(&df, "Snowfall").date_column("DATE").call()?;
        assert_eq!(values(&ranking), vec![2.5, 0.0]);

        let table = ranking.to_frame("DATE")?;
        assert_eq!(table.shape(), (2, 2));
        assert_eq!(table.column("DATE")?.dtype(), &DataType::Date);
        assert_eq!(table.column("Snowfall")?.f64()?.get(0), Some(2.5));
        Ok(())
    }
}
