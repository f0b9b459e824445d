//! Analysis periods: inclusive date ranges resolved from dates, strings or a
//! "days back from" anchor.

use crate::types::traits::any_date::AnyDate;
use chrono::{Days, NaiveDate};
use std::fmt;
use std::fmt::{Display, Formatter};
use thiserror::Error;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Ord, PartialOrd, Hash)]
pub struct Year(pub i32);
impl Year {
    pub fn get(self) -> i32 {
        self.0
    }
}

impl Display for Year {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}", self.0)
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PeriodError {
    #[error("Could not resolve a date from the given input")]
    DateParsing,

    #[error("Period start {start} is after its end {end}")]
    Reversed { start: NaiveDate, end: NaiveDate },

    #[error("Going back {days} days from {from_when} leaves the supported date range")]
    OutOfRange { days: u32, from_when: NaiveDate },
}

/// An inclusive range of calendar days.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Period {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl Period {
    /// Creates a period from the start of `start` to the end of `end`.
    ///
    /// # Errors
    ///
    /// Returns [`PeriodError::DateParsing`] if either bound cannot be resolved and
    /// [`PeriodError::Reversed`] if the start falls after the end.
    ///
    /// # Examples
    ///
    /// ```
    /// use acis_stats::Period;
    /// use chrono::NaiveDate;
    ///
    /// let january = Period::new("2025-01-01", "2025-01-31")?;
    /// assert_eq!(january.days(), 31);
    /// # Ok::<(), acis_stats::PeriodError>(())
    /// ```
    pub fn new(start: impl AnyDate, end: impl AnyDate) -> Result<Period, PeriodError> {
        let start = start.get_date_range().ok_or(PeriodError::DateParsing)?.start;
        let end = end.get_date_range().ok_or(PeriodError::DateParsing)?.end;
        if start > end {
            return Err(PeriodError::Reversed { start, end });
        }
        Ok(Period { start, end })
    }

    /// The period reaching `days` days back from `from_when`, ending on `from_when`.
    ///
    /// `Period::trailing_days(30, jan_31)` starts on January 1st.
    ///
    /// # Errors
    ///
    /// Returns [`PeriodError::OutOfRange`] if the start would fall before the earliest
    /// representable date.
    pub fn trailing_days(days: u32, from_when: NaiveDate) -> Result<Period, PeriodError> {
        let start = from_when
            .checked_sub_days(Days::new(u64::from(days)))
            .ok_or(PeriodError::OutOfRange { days, from_when })?;
        Ok(Period {
            start,
            end: from_when,
        })
    }

    /// Number of calendar days covered, both ends included.
    pub fn days(&self) -> i64 {
        (self.end - self.start).num_days() + 1
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }
}

impl Display for Period {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{} to {}", self.start, self.end)
    }
}

/// The day before `today`, the usual anchor for trailing periods.
///
/// Callers pass "today" explicitly so the result never depends on when the
/// process started.
pub fn yesterday(today: NaiveDate) -> NaiveDate {
    today - Days::new(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_new_from_mixed_inputs() -> Result<(), PeriodError> {
        let period = Period::new(date(2024, 3, 1), "2024-03-10")?;
        assert_eq!(period.start, date(2024, 3, 1));
        assert_eq!(period.end, date(2024, 3, 10));
        assert_eq!(period.days(), 10);

        let whole_year = Period::new(Year(2024), Year(2024))?;
        assert_eq!(whole_year.days(), 366);
        Ok(())
    }

    #[test]
    fn test_new_rejects_bad_input() {
        assert_eq!(
            Period::new("2024-03-10", "2024-03-01"),
            Err(PeriodError::Reversed {
                start: date(2024, 3, 10),
                end: date(2024, 3, 1)
            })
        );
        assert_eq!(
            Period::new("yesterday", "2024-03-01"),
            Err(PeriodError::DateParsing)
        );
    }

    #[test]
    fn test_trailing_days_from_explicit_anchor() -> Result<(), PeriodError> {
        let today = date(2025, 2, 1);
        let period = Period::trailing_days(30, yesterday(today))?;
        assert_eq!(period.end, date(2025, 1, 31));
        assert_eq!(period.start, date(2025, 1, 1));
        assert!(period.contains(date(2025, 1, 15)));
        assert!(!period.contains(today));
        assert_eq!(period.to_string(), "2025-01-01 to 2025-01-31");
        Ok(())
    }

    #[test]
    fn test_trailing_days_beyond_date_range() {
        let anchor = date(2025, 1, 1);
        assert_eq!(
            Period::trailing_days(u32::MAX, anchor),
            Err(PeriodError::OutOfRange {
                days: u32::MAX,
                from_when: anchor
            })
        );
        assert_eq!(Period::trailing_days(0, anchor).map(|p| p.days()), Ok(1));
    }
}
