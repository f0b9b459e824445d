//! Scalar statistics over one column of a station table.
//!
//! Every statistic goes through [`period_statistic`]: compute over the observed
//! (non-missing) values, then apply the shared [`StatOptions`] rounding policy.

use crate::analysis::column::observed_values;
use crate::analysis::error::StatisticsError;
use crate::types::rounding::{StatOptions, StatValue};
use log::warn;
use ordered_float::OrderedFloat;
use polars::prelude::DataFrame;
use std::collections::BTreeMap;
use std::fmt;

/// The statistic to compute over a period.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatKind {
    Mean,
    Median,
    /// The most frequent value; the smallest one when several tie.
    Mode,
    /// Sample standard deviation (n - 1 denominator).
    StandardDeviation,
    /// Sample variance (n - 1 denominator).
    Variance,
    /// Adjusted Fisher-Pearson skewness. Needs at least three values.
    Skewness,
    /// Bias-corrected excess kurtosis. Needs at least four values.
    Kurtosis,
    Maximum,
    Minimum,
    Sum,
}

impl StatKind {
    pub const ALL: [StatKind; 10] = [
        StatKind::Mean,
        StatKind::Median,
        StatKind::Mode,
        StatKind::StandardDeviation,
        StatKind::Variance,
        StatKind::Skewness,
        StatKind::Kurtosis,
        StatKind::Maximum,
        StatKind::Minimum,
        StatKind::Sum,
    ];

    fn min_count(&self) -> usize {
        match self {
            StatKind::StandardDeviation | StatKind::Variance => 2,
            StatKind::Skewness => 3,
            StatKind::Kurtosis => 4,
            _ => 1,
        }
    }

    /// Computes the raw statistic over observed values.
    ///
    /// `values` must hold at least [`StatKind::min_count`] entries and no NaN.
    fn compute(&self, values: &[f64]) -> f64 {
        let n = values.len() as f64;
        match self {
            StatKind::Mean => values.iter().sum::<f64>() / n,
            StatKind::Sum => values.iter().sum(),
            StatKind::Maximum => values.iter().copied().fold(f64::NEG_INFINITY, f64::max),
            StatKind::Minimum => values.iter().copied().fold(f64::INFINITY, f64::min),
            StatKind::Median => {
                let mut sorted = values.to_vec();
                sorted.sort_by_key(|v| OrderedFloat(*v));
                let mid = sorted.len() / 2;
                if sorted.len() % 2 == 0 {
                    (sorted[mid - 1] + sorted[mid]) / 2.0
                } else {
                    sorted[mid]
                }
            }
            StatKind::Mode => {
                let mut counts: BTreeMap<OrderedFloat<f64>, usize> = BTreeMap::new();
                for v in values {
                    *counts.entry(OrderedFloat(*v)).or_default() += 1;
                }
                // BTreeMap iterates in ascending order, so the first maximum wins ties.
                let mut best = (OrderedFloat(f64::NAN), 0usize);
                for (value, count) in counts {
                    if count > best.1 {
                        best = (value, count);
                    }
                }
                best.0.into_inner()
            }
            StatKind::Variance => central_sums(values).m2 / (n - 1.0),
            StatKind::StandardDeviation => (central_sums(values).m2 / (n - 1.0)).sqrt(),
            StatKind::Skewness => {
                let sums = central_sums(values);
                if sums.m2 == 0.0 {
                    return 0.0;
                }
                (n * (n - 1.0).sqrt() / (n - 2.0)) * (sums.m3 / sums.m2.powf(1.5))
            }
            StatKind::Kurtosis => {
                let sums = central_sums(values);
                let denominator = (n - 2.0) * (n - 3.0) * sums.m2 * sums.m2;
                if denominator == 0.0 {
                    return 0.0;
                }
                let numerator = n * (n + 1.0) * (n - 1.0) * sums.m4;
                let adjustment = 3.0 * (n - 1.0).powi(2) / ((n - 2.0) * (n - 3.0));
                numerator / denominator - adjustment
            }
        }
    }
}

impl fmt::Display for StatKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            StatKind::Mean => "mean",
            StatKind::Median => "median",
            StatKind::Mode => "mode",
            StatKind::StandardDeviation => "standard deviation",
            StatKind::Variance => "variance",
            StatKind::Skewness => "skewness",
            StatKind::Kurtosis => "kurtosis",
            StatKind::Maximum => "maximum",
            StatKind::Minimum => "minimum",
            StatKind::Sum => "sum",
        };
        write!(f, "{}", name)
    }
}

/// Sums of the 2nd, 3rd and 4th powers of deviations from the mean.
struct CentralSums {
    m2: f64,
    m3: f64,
    m4: f64,
}

fn central_sums(values: &[f64]) -> CentralSums {
    let mean = values.iter().sum::<f64>() / values.len() as f64;
    let mut sums = CentralSums {
        m2: 0.0,
        m3: 0.0,
        m4: 0.0,
    };
    for v in values {
        let d = v - mean;
        let d2 = d * d;
        sums.m2 += d2;
        sums.m3 += d2 * d;
        sums.m4 += d2 * d2;
    }
    sums
}

/// Computes one statistic over the observed values of `column`.
///
/// # Errors
///
/// * [`StatisticsError::ColumnNotFound`] if the column is absent.
/// * [`StatisticsError::AllMissing`] if every day in the period is missing.
/// * [`StatisticsError::InsufficientData`] if there are too few observations for the
///   statistic (two for the spread measures, three for skewness, four for kurtosis).
/// * [`StatisticsError::MalformedValue`] if a textual cell cannot be read as a number.
///
/// # Examples
///
/// ```
/// use acis_stats::{period_statistic, NumericKind, StatKind, StatOptions, StatValue};
/// use polars::prelude::*;
///
/// let frame = DataFrame::new(vec![Column::new("Maximum Temperature".into(), [51.0, 60.0, 63.0])])?;
/// let options = StatOptions::builder().data_type(NumericKind::Integer).build();
/// let mean = period_statistic(&frame, "Maximum Temperature", StatKind::Mean, options)?;
/// assert_eq!(mean, StatValue::Integer(58));
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub fn period_statistic(
    frame: &DataFrame,
    column: &str,
    kind: StatKind,
    options: StatOptions,
) -> Result<StatValue, StatisticsError> {
    let values = observed_values(frame, column)?;
    if values.is_empty() {
        warn!("No observed values in '{}', cannot compute its {}", column, kind);
        return Err(StatisticsError::AllMissing {
            column: column.to_string(),
        });
    }
    if values.len() < kind.min_count() {
        return Err(StatisticsError::InsufficientData {
            column: column.to_string(),
            needed: kind.min_count(),
            found: values.len(),
        });
    }
    Ok(options.finish(kind.compute(&values)))
}

macro_rules! period_statistic_fn {
    ($(#[$doc:meta])* $name:ident => $kind:expr) => {
        $(#[$doc])*
        ///
        /// See [`period_statistic`] for the rounding policy and errors.
        pub fn $name(
            frame: &DataFrame,
            column: &str,
            options: StatOptions,
        ) -> Result<StatValue, StatisticsError> {
            period_statistic(frame, column, $kind, options)
        }
    };
}

period_statistic_fn!(
    /// The period mean of `column`.
    period_mean => StatKind::Mean
);
period_statistic_fn!(
    /// The period median of `column`.
    period_median => StatKind::Median
);
period_statistic_fn!(
    /// The period mode of `column`.
    period_mode => StatKind::Mode
);
period_statistic_fn!(
    /// The sample standard deviation of `column` over the period.
    period_standard_deviation => StatKind::StandardDeviation
);
period_statistic_fn!(
    /// The sample variance of `column` over the period.
    period_variance => StatKind::Variance
);
period_statistic_fn!(
    /// The skewness of `column` over the period.
    period_skewness => StatKind::Skewness
);
period_statistic_fn!(
    /// The excess kurtosis of `column` over the period.
    period_kurtosis => StatKind::Kurtosis
);
period_statistic_fn!(
    /// The period maximum of `column`.
    period_maximum => StatKind::Maximum
);
period_statistic_fn!(
    /// The period minimum of `column`.
    period_minimum => StatKind::Minimum
);
period_statistic_fn!(
    /// The period sum of `column`, typically precipitation or degree days.
    period_sum => StatKind::Sum
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::rounding::{NumericKind, Precision};
    use polars::prelude::*;

    const TOL: f64 = 1e-9;

    fn frame(values: &[f64]) -> DataFrame {
        DataFrame::new(vec![Column::new("Average Temperature".into(), values.to_vec())]).unwrap()
    }

    fn raw(frame: &DataFrame, kind: StatKind) -> f64 {
        period_statistic(frame, "Average Temperature", kind, StatOptions::default())
            .unwrap()
            .as_f64()
    }

    #[test]
    fn test_clean_column_matches_arithmetic() {
        let values = [31.5, 40.25, 28.0, 35.75, 44.0];
        let df = frame(&values);
        let mean = values.iter().sum::<f64>() / values.len() as f64;

        assert!((raw(&df, StatKind::Mean) - mean).abs() < TOL);
        assert_eq!(raw(&df, StatKind::Maximum), 44.0);
        assert_eq!(raw(&df, StatKind::Minimum), 28.0);
        assert!((raw(&df, StatKind::Sum) - 179.5).abs() < TOL);

        let tenths = StatOptions::builder()
            .round(true)
            .to_nearest(Precision::Tenth)
            .build();
        let rounded = period_mean(&df, "Average Temperature", tenths).unwrap();
        assert!((rounded.as_f64() - 35.9).abs() < TOL);
    }

    #[test]
    fn test_integer_kind_rounds_without_round_flag() {
        let df = frame(&[5.0, 6.0, 6.1]);
        let options = StatOptions::builder()
            .round(false)
            .data_type(NumericKind::Integer)
            .build();
        assert_eq!(
            period_mean(&df, "Average Temperature", options).unwrap(),
            StatValue::Integer(6)
        );
    }

    #[test]
    fn test_median_and_mode() {
        let df = frame(&[3.0, 1.0, 2.0, 2.0, 7.0, 7.0]);
        assert_eq!(raw(&df, StatKind::Median), 2.5);
        // 2 and 7 both appear twice; the smaller wins.
        assert_eq!(raw(&df, StatKind::Mode), 2.0);

        let odd = frame(&[9.0, 1.0, 4.0]);
        assert_eq!(raw(&odd, StatKind::Median), 4.0);
    }

    #[test]
    fn test_spread_statistics() {
        let df = frame(&[2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0]);
        assert!((raw(&df, StatKind::Variance) - 32.0 / 7.0).abs() < TOL);
        assert!((raw(&df, StatKind::StandardDeviation) - (32.0f64 / 7.0).sqrt()).abs() < TOL);
        assert!((raw(&df, StatKind::Skewness) - 0.818_487_553_356_799_7).abs() < 1e-9);
        assert!((raw(&df, StatKind::Kurtosis) - 0.940_625).abs() < 1e-9);
    }

    #[test]
    fn test_symmetric_and_flat_shapes() {
        let symmetric = frame(&[1.0, 2.0, 3.0, 4.0, 5.0]);
        assert!(raw(&symmetric, StatKind::Skewness).abs() < TOL);
        assert!((raw(&symmetric, StatKind::Kurtosis) + 1.2).abs() < TOL);

        let flat = frame(&[3.0, 3.0, 3.0, 3.0]);
        assert_eq!(raw(&flat, StatKind::Skewness), 0.0);
        assert_eq!(raw(&flat, StatKind::Kurtosis), 0.0);
    }

    #[test]
    fn test_missing_values_are_skipped() {
        let df = frame(&[10.0, f64::NAN, 20.0]);
        assert_eq!(raw(&df, StatKind::Mean), 15.0);
        assert_eq!(raw(&df, StatKind::Sum), 30.0);
    }

    #[test]
    fn test_sentinel_strings_are_read() -> Result<(), Box<dyn std::error::Error>> {
        let df = DataFrame::new(vec![Column::new("Precipitation".into(), ["0.25", "T", "M", "1.00"])])?;
        let total = period_sum(&df, "Precipitation", StatOptions::default())?;
        assert_eq!(total, StatValue::Float(1.25));
        Ok(())
    }

    #[test]
    fn test_failures_are_typed() {
        let df = frame(&[f64::NAN, f64::NAN]);
        assert!(matches!(
            period_mean(&df, "Average Temperature", StatOptions::default()),
            Err(StatisticsError::AllMissing { .. })
        ));
        assert!(matches!(
            period_mean(&df, "Snowfall", StatOptions::default()),
            Err(StatisticsError::ColumnNotFound(_))
        ));

        let short = frame(&[1.0, 2.0, 3.0]);
        assert!(matches!(
            period_kurtosis(&short, "Average Temperature", StatOptions::default()),
            Err(StatisticsError::InsufficientData { needed: 4, found: 3, .. })
        ));
        assert!(period_skewness(&short, "Average Temperature", StatOptions::default()).is_ok());
    }

    #[test]
    fn test_every_kind_has_a_wrapper() {
        let df = frame(&[1.0, 2.0, 4.0, 8.0, 16.0]);
        let options = StatOptions::default();
        let wrappers: [fn(&DataFrame, &str, StatOptions) -> Result<StatValue, StatisticsError>; 10] = [
            period_mean,
            period_median,
            period_mode,
            period_standard_deviation,
            period_variance,
            period_skewness,
            period_kurtosis,
            period_maximum,
            period_minimum,
            period_sum,
        ];
        for (wrapper, kind) in wrappers.iter().zip(StatKind::ALL) {
            let direct = period_statistic(&df, "Average Temperature", kind, options).unwrap();
            assert_eq!(wrapper(&df, "Average Temperature", options).unwrap(), direct);
        }
    }
}
