//! Cumulative ("running") sums and means over a period.
//!
//! Both sequences accumulate from the first day of the period. A running mean here is
//! the mean of every day so far, not a moving average over a fixed window.

use crate::analysis::column::numeric_values;
use crate::analysis::error::StatisticsError;
use bon::builder;
use polars::prelude::DataFrame;

/// Default number of consecutive missing days filled by interpolation.
pub const DEFAULT_INTERPOLATION_LIMIT: usize = 3;

/// Fills missing values (NaN) by linear interpolation, at most `limit` per gap.
///
/// Interpolation runs forward: inside a gap, the first `limit` missing days take the
/// value on the straight line between the observations around the gap and the rest stay
/// NaN. Missing days before the first observation are never filled. Missing days after
/// the last observation repeat it, again at most `limit` of them.
///
/// # Examples
///
/// ```
/// use acis_stats::interpolate_gaps;
///
/// let filled = interpolate_gaps(&[10.0, f64::NAN, 30.0, f64::NAN], 3);
/// assert_eq!(filled, vec![10.0, 20.0, 30.0, 30.0]);
/// ```
pub fn interpolate_gaps(values: &[f64], limit: usize) -> Vec<f64> {
    let mut filled = values.to_vec();
    let Some(first_observed) = values.iter().position(|v| !v.is_nan()) else {
        return filled;
    };

    let mut previous = first_observed;
    let mut i = first_observed + 1;
    while i < values.len() {
        if !values[i].is_nan() {
            previous = i;
            i += 1;
            continue;
        }
        let gap_start = i;
        while i < values.len() && values[i].is_nan() {
            i += 1;
        }
        let from = values[previous];
        // `i` is the next observation, or the end of the series for a trailing gap.
        let to = values.get(i).copied();
        for (offset, slot) in filled[gap_start..i].iter_mut().take(limit).enumerate() {
            *slot = match to {
                Some(to) => {
                    let step = (offset + gap_start - previous) as f64 / (i - previous) as f64;
                    from + (to - from) * step
                }
                None => from,
            };
        }
    }
    filled
}

/// Cumulative sums of `values`. A NaN poisons every later entry.
pub fn cumulative_sums(values: &[f64]) -> Vec<f64> {
    values
        .iter()
        .scan(0.0, |total, value| {
            *total += value;
            Some(*total)
        })
        .collect()
}

/// Cumulative means: entry `i` is the sum of the first `i + 1` values over `i + 1`.
pub fn cumulative_means(values: &[f64]) -> Vec<f64> {
    cumulative_sums(values)
        .into_iter()
        .enumerate()
        .map(|(i, sum)| sum / (i + 1) as f64)
        .collect()
}

/// The running sum of `column`, one entry per row.
///
/// Gaps of up to `.interpolation_limit(usize)` consecutive missing days (default
/// [`DEFAULT_INTERPOLATION_LIMIT`]) are interpolated first. A longer gap leaves a NaN in
/// the data, and every running sum from that day on is NaN, which shows up as a break in
/// a chart.
///
/// # Examples
///
/// ```
/// use acis_stats::running_sum;
/// use polars::prelude::*;
///
/// let frame = DataFrame::new(vec![Column::new("Precipitation".into(), [0.5, 0.0, 0.25])])?;
/// let sums = running_sum(&frame, "Precipitation").call()?;
/// assert_eq!(sums, vec![0.5, 0.5, 0.75]);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[builder]
pub fn running_sum(
    #[builder(start_fn)] frame: &DataFrame,
    #[builder(start_fn)] column: &str,
    interpolation_limit: Option<usize>,
) -> Result<Vec<f64>, StatisticsError> {
    let limit = interpolation_limit.unwrap_or(DEFAULT_INTERPOLATION_LIMIT);
    let values = numeric_values(frame, column)?;
    Ok(cumulative_sums(&interpolate_gaps(&values, limit)))
}

/// The running mean of `column`: the mean from the first day of the period through
/// each day.
///
/// This is a cumulative mean, not a fixed-window moving average. Gap handling is the
/// same as in [`running_sum`].
#[builder]
pub fn running_mean(
    #[builder(start_fn)] frame: &DataFrame,
    #[builder(start_fn)] column: &str,
    interpolation_limit: Option<usize>,
) -> Result<Vec<f64>, StatisticsError> {
    let limit = interpolation_limit.unwrap_or(DEFAULT_INTERPOLATION_LIMIT);
    let values = numeric_values(frame, column)?;
    Ok(cumulative_means(&interpolate_gaps(&values, limit)))
}
