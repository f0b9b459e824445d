//! Directory layout for exported tables and rendered charts.
//!
//! ```text
//! {root}/ACIS Data/{STATION}/{product_type}/{STATION} {product_type}.csv
//! {root}/ACIS Graphics/{STATION}/{product_type}/{plot_type} {With|Without} Running {Mean|Sum|Data}/{STATION} {product_type}.png
//! ```

use crate::fetch::request::normalize_station_id;
use crate::output::error::OutputError;
use bon::Builder;
use log::debug;
use std::fmt;
use std::path::{Path, PathBuf};

const DATA_DIR: &str = "ACIS Data";
const GRAPHICS_DIR: &str = "ACIS Graphics";

/// The running aggregate drawn on a chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunningKind {
    Mean,
    Sum,
}

impl fmt::Display for RunningKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RunningKind::Mean => write!(f, "Mean"),
            RunningKind::Sum => write!(f, "Sum"),
        }
    }
}

/// Identifies one chart.
///
/// * `station`: the station identifier, upper-cased in paths.
/// * `product_type`: the summary, e.g. `"Comprehensive 30 Day Summary"`.
/// * `plot_type`: what is drawn, e.g. `"Temperature Summary"`.
/// * `show_running`: whether the running aggregate is drawn. Defaults to `false`.
/// * `running`: which running aggregate the chart carries, if any.
#[derive(Debug, Clone, Builder)]
pub struct ChartTarget<'a> {
    station: &'a str,
    product_type: &'a str,
    plot_type: &'a str,
    #[builder(default)]
    show_running: bool,
    running: Option<RunningKind>,
}

impl ChartTarget<'_> {
    fn variant_dir(&self) -> String {
        let with = if self.show_running { "With" } else { "Without" };
        let running = match self.running {
            Some(kind) => kind.to_string(),
            None => "Data".to_string(),
        };
        format!("{} {} Running {}", self.plot_type, with, running)
    }
}

/// Resolves output locations under a root directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputPaths {
    root: PathBuf,
}

impl Default for OutputPaths {
    /// Paths relative to the working directory.
    fn default() -> Self {
        OutputPaths::new(".")
    }
}

impl OutputPaths {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        OutputPaths { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// `{root}/ACIS Data/{STATION}/{product_type}`
    pub fn csv_dir(&self, station: &str, product_type: &str) -> PathBuf {
        self.root
            .join(DATA_DIR)
            .join(normalize_station_id(station))
            .join(product_type)
    }

    /// `{csv_dir}/{STATION} {product_type}.csv`
    pub fn csv_file(&self, station: &str, product_type: &str) -> PathBuf {
        self.csv_dir(station, product_type).join(format!(
            "{} {}.csv",
            normalize_station_id(station),
            product_type
        ))
    }

    /// `{root}/ACIS Graphics/{STATION}/{product_type}/{plot_type} {With|Without} Running {Mean|Sum|Data}`
    pub fn image_dir(&self, target: &ChartTarget<'_>) -> PathBuf {
        self.root
            .join(GRAPHICS_DIR)
            .join(normalize_station_id(target.station))
            .join(target.product_type)
            .join(target.variant_dir())
    }

    /// `{image_dir}/{STATION} {product_type}.png`
    pub fn image_file(&self, target: &ChartTarget<'_>) -> PathBuf {
        self.image_dir(target).join(format!(
            "{} {}.png",
            normalize_station_id(target.station),
            target.product_type
        ))
    }

    /// Creates [`OutputPaths::csv_dir`] if needed and returns it.
    pub async fn prepare_csv_dir(
        &self,
        station: &str,
        product_type: &str,
    ) -> Result<PathBuf, OutputError> {
        ensure_dir(self.csv_dir(station, product_type)).await
    }

    /// Creates [`OutputPaths::image_dir`] if needed and returns it.
    pub async fn prepare_image_dir(&self, target: &ChartTarget<'_>) -> Result<PathBuf, OutputError> {
        ensure_dir(self.image_dir(target)).await
    }
}

async fn ensure_dir(dir: PathBuf) -> Result<PathBuf, OutputError> {
    tokio::fs::create_dir_all(&dir)
        .await
        .map_err(|e| OutputError::DirCreation(dir.clone(), e))?;
    debug!("Output directory ready at {:?}", dir);
    Ok(dir)
}
