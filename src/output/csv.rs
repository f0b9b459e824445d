use crate::output::error::OutputError;
use crate::output::paths::OutputPaths;
use log::info;
use polars::prelude::*;
use std::path::{Path, PathBuf};
use tokio::task;

/// Writes `frame` to `path` as CSV with a header row, replacing any existing file.
///
/// Dates are written as `YYYY-MM-DD`. The parent directory must exist.
pub async fn write_csv(mut frame: DataFrame, path: &Path) -> Result<(), OutputError> {
    let path_buf = path.to_path_buf();
    task::spawn_blocking(move || {
        let file = std::fs::File::create(&path_buf)
            .map_err(|e| OutputError::CsvWriteIo(path_buf.clone(), e))?;
        CsvWriter::new(file)
            .include_header(true)
            .finish(&mut frame)
            .map_err(|e| OutputError::CsvWritePolars(path_buf, e))?;
        Ok::<(), OutputError>(())
    })
    .await??;
    Ok(())
}

/// Writes a station table to [`OutputPaths::csv_file`], creating its directory first.
/// Returns the path written.
pub async fn export_station_csv(
    paths: &OutputPaths,
    station: &str,
    product_type: &str,
    frame: DataFrame,
) -> Result<PathBuf, OutputError> {
    paths.prepare_csv_dir(station, product_type).await?;
    let file = paths.csv_file(station, product_type);
    let rows = frame.height();
    write_csv(frame, &file).await?;
    info!("Wrote {} rows for station {} to {:?}", rows, station, file);
    Ok(file)
}
