use crate::types::period::{Period, Year};
use chrono::NaiveDate;

/// Something that resolves to an inclusive span of calendar days.
///
/// A single date resolves to a one-day span, a [`Year`] to January 1st through
/// December 31st. Strings are parsed as `YYYY-MM-DD`.
pub trait AnyDate {
    fn get_date_range(self) -> Option<Period>;
}

impl AnyDate for NaiveDate {
    fn get_date_range(self) -> Option<Period> {
        Some(Period {
            start: self,
            end: self,
        })
    }
}

impl AnyDate for &str {
    fn get_date_range(self) -> Option<Period> {
        NaiveDate::parse_from_str(self.trim(), "%Y-%m-%d")
            .ok()
            .and_then(|date| date.get_date_range())
    }
}

impl AnyDate for String {
    fn get_date_range(self) -> Option<Period> {
        self.as_str().get_date_range()
    }
}

impl AnyDate for Year {
    fn get_date_range(self) -> Option<Period> {
        Some(Period {
            start: NaiveDate::from_ymd_opt(self.0, 1, 1)?,
            end: NaiveDate::from_ymd_opt(self.0, 12, 31)?,
        })
    }
}
