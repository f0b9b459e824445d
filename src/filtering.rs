use crate::types::element::DATE_COLUMN;
use crate::types::period::Period;
use polars::prelude::{col, lit, DataType, LazyFrame};

pub trait AcisFrameFilterExt {
    /// Keeps the rows whose `Date` falls inside `period`, both ends included.
    ///
    /// The column is cast to `Date` first, so `YYYY-MM-DD` strings work too. Parsing
    /// errors surface on `collect`.
    fn filter_period(self, period: Period) -> LazyFrame;
}

impl AcisFrameFilterExt for LazyFrame {
    fn filter_period(self, period: Period) -> LazyFrame {
        self.filter(
            col(DATE_COLUMN)
                .cast(DataType::Date)
                .gt_eq(lit(period.start))
                .and(col(DATE_COLUMN).cast(DataType::Date).lt_eq(lit(period.end))),
        )
    }
}
