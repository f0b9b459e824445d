//! The entry point for downloading daily station data from the ACIS web services.
//!
//! A fetched table has a `Date` column followed by one textual column per
//! [`Element`](crate::Element), with the ACIS sentinels (`"M"`, `"T"`) still in place.
//! Pass it to [`normalize`](crate::normalize) or use [`AcisClient::fetch_normalized`]
//! to get numeric columns.

use crate::analysis::normalize::normalize;
use crate::error::AcisError;
use crate::fetch::frame::response_to_frame;
use crate::fetch::loader::StnDataLoader;
use crate::fetch::request::{StationMeta, StnDataRequest};
use crate::types::period::Period;
use bon::bon;
use log::info;
use polars::prelude::DataFrame;
use reqwest::Client;

/// Base URL of the public ACIS web services.
pub const DEFAULT_BASE_URL: &str = "https://data.rcc-acis.org";

/// One station's daily data for a period.
#[derive(Debug, Clone)]
pub struct StationData {
    /// The upper-cased station identifier the data was requested for.
    pub station: String,
    pub meta: Option<StationMeta>,
    pub period: Period,
    pub frame: DataFrame,
}

/// Client for the ACIS `StnData` service.
///
/// # Examples
///
/// ```rust,no_run
/// # use acis_stats::{AcisClient, AcisError, Period};
/// # #[tokio::main]
/// # async fn main() -> Result<(), AcisError> {
/// let client = AcisClient::new();
/// let data = client
///     .station_data()
///     .station("KBOS")
///     .period(Period::new("2025-01-01", "2025-01-31")?)
///     .call()
///     .await?;
/// assert_eq!(data.frame.width(), 11);
/// # Ok(())
/// # }
/// ```
pub struct AcisClient {
    loader: StnDataLoader,
}

impl Default for AcisClient {
    fn default() -> Self {
        Self::new()
    }
}

#[bon]
impl AcisClient {
    /// Creates a client for [`DEFAULT_BASE_URL`].
    pub fn new() -> Self {
        Self::with_base_url(DEFAULT_BASE_URL)
    }

    /// Creates a client for another deployment of the ACIS services, such as a
    /// regional mirror.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self::with_http_client(base_url, Client::new())
    }

    /// Creates a client that sends its requests through `client`.
    pub fn with_http_client(base_url: impl Into<String>, client: Client) -> Self {
        let base_url = base_url.into();
        AcisClient {
            loader: StnDataLoader::new(&base_url, client),
        }
    }

    pub fn base_url(&self) -> &str {
        self.loader.base_url()
    }

    /// Downloads the raw daily table of `station` over `period`.
    ///
    /// Builder arguments:
    ///
    /// * `.station(&str)`: **Required.** An ACIS station identifier such as `"KBOS"`;
    ///   it is upper-cased before sending.
    /// * `.period(Period)`: **Required.** The days to download, both ends included.
    ///
    /// # Errors
    ///
    /// Returns [`AcisError::Fetch`] when the request fails, the service rejects it,
    /// or the reply does not have one value per element on every row.
    #[builder]
    pub async fn station_data(
        &self,
        station: &str,
        period: Period,
    ) -> Result<StationData, AcisError> {
        let request = StnDataRequest::new(station, period);
        let response = self.loader.download(&request).await?;
        let frame = response_to_frame(&request.sid, &response)?;
        info!(
            "Built a {}x{} table for station {} ({})",
            frame.height(),
            frame.width(),
            request.sid,
            period
        );
        Ok(StationData {
            station: request.sid,
            meta: response.meta,
            period,
            frame,
        })
    }

    /// Like [`AcisClient::station_data`], with the table passed through
    /// [`normalize`](crate::normalize): every element column is `Float64`, missing days
    /// are NaN and traces are zero.
    ///
    /// # Errors
    ///
    /// As [`AcisClient::station_data`], plus [`AcisError::Statistics`] if a value is
    /// neither a number nor a known sentinel.
    #[builder]
    pub async fn fetch_normalized(
        &self,
        station: &str,
        period: Period,
    ) -> Result<StationData, AcisError> {
        let raw = self
            .station_data()
            .station(station)
            .period(period)
            .call()
            .await?;
        let normalized = normalize(raw.frame).call()?;
        Ok(StationData {
            frame: normalized.frame,
            ..raw
        })
    }
}
