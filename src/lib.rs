mod acis;
mod analysis;
mod error;
mod fetch;
mod filtering;
mod output;
mod types;

pub use acis::*;
pub use error::AcisError;
pub use filtering::AcisFrameFilterExt;

pub use analysis::normalize::{normalize, number_of_missing_days, replace_trace_with_zeros, Normalized};
pub use analysis::ranking::*;
pub use analysis::running::*;
pub use analysis::statistics::*;
pub use analysis::summary::*;

pub use types::element::{Element, ElementSpec, DATE_COLUMN};
pub use types::period::{yesterday, Period, PeriodError, Year};
pub use types::rounding::{NumericKind, Precision, StatOptions, StatValue};
pub use types::traits::any_date::AnyDate;

pub use fetch::request::{StationMeta, StnDataRequest, StnDataResponse};
pub use output::csv::{export_station_csv, write_csv};
pub use output::paths::{ChartTarget, OutputPaths, RunningKind};

pub use analysis::error::StatisticsError;
pub use fetch::error::FetchError;
pub use output::error::OutputError;
