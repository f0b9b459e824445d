//! Rounding and numeric-kind policy shared by every period statistic.

use bon::Builder;
use std::fmt;

/// How many decimals a rounded statistic keeps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Precision {
    /// Round to a whole number.
    #[default]
    Whole,
    /// Round to the nearest tenth (0.1).
    Tenth,
    /// Round to the nearest hundredth (0.01).
    Hundredth,
}

impl Precision {
    /// Number of decimal places.
    pub fn decimals(&self) -> u32 {
        match self {
            Precision::Whole => 0,
            Precision::Tenth => 1,
            Precision::Hundredth => 2,
        }
    }

    /// Rounds `value` half away from zero to this precision.
    pub fn apply(&self, value: f64) -> f64 {
        let factor = 10f64.powi(self.decimals() as i32);
        (value * factor).round() / factor
    }
}

/// The numeric type a statistic is returned as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum NumericKind {
    Integer,
    #[default]
    Float,
}

/// Rounding options for a period statistic.
///
/// # Examples
///
/// ```
/// use acis_stats::{NumericKind, Precision, StatOptions};
///
/// let tenths = StatOptions::builder()
///     .round(true)
///     .to_nearest(Precision::Tenth)
///     .build();
/// assert_eq!(tenths.data_type, NumericKind::Float);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Builder)]
pub struct StatOptions {
    /// Round the statistic to `to_nearest`. Defaults to `false`.
    #[builder(default)]
    pub round: bool,
    /// Precision used when `round` is set. Defaults to [`Precision::Whole`].
    #[builder(default)]
    pub to_nearest: Precision,
    /// Output kind. Defaults to [`NumericKind::Float`].
    ///
    /// [`NumericKind::Integer`] always rounds to a whole number, even when `round` is
    /// `false`.
    #[builder(default)]
    pub data_type: NumericKind,
}

impl StatOptions {
    /// Applies the rounding and type policy to a computed statistic.
    pub fn finish(&self, value: f64) -> StatValue {
        match (self.data_type, self.round) {
            (NumericKind::Integer, _) => StatValue::Integer(value.round() as i64),
            (NumericKind::Float, true) => StatValue::Float(self.to_nearest.apply(value)),
            (NumericKind::Float, false) => StatValue::Float(value),
        }
    }
}

/// A computed period statistic.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StatValue {
    Integer(i64),
    Float(f64),
}

impl StatValue {
    pub fn as_f64(&self) -> f64 {
        match *self {
            StatValue::Integer(v) => v as f64,
            StatValue::Float(v) => v,
        }
    }
}

impl fmt::Display for StatValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StatValue::Integer(v) => write!(f, "{}", v),
            StatValue::Float(v) => write!(f, "{}", v),
        }
    }
}
