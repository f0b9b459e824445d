use crate::analysis::error::StatisticsError;
use crate::fetch::error::FetchError;
use crate::output::error::OutputError;
use crate::types::period::PeriodError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AcisError {
    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error(transparent)]
    Statistics(#[from] StatisticsError),

    #[error(transparent)]
    Output(#[from] OutputError),

    #[error(transparent)]
    Period(#[from] PeriodError),
}
