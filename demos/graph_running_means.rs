//! demos/graph_running_means.rs
//!
//! Fetches the last 30 days of data for a station, prints the period summary and
//! plots the daily average temperature next to its running mean.
//!
//! To run this demo:
//! cargo run --example graph_running_means --features examples -- KBOS

use std::error::Error;

use acis_stats::{
    running_mean, yesterday, AcisClient, DegreeDaySums, Element, MissingDays, Period,
    PeriodSummary, StatValue, StatisticsError,
};
use chrono::Local;
use plotlars::{Axis, Legend, Line, Plot, Rgb, Text, TimeSeriesPlot};
use polars::prelude::*;

const RUNNING_MEAN: &str = "Running Mean";

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let station = std::env::args().nth(1).unwrap_or_else(|| "KBOS".to_string());
    let period = Period::trailing_days(30, yesterday(Local::now().date_naive()))?;

    println!("Fetching {} for {}...", period, station);
    let client = AcisClient::new();
    let data = client
        .fetch_normalized()
        .station(&station)
        .period(period)
        .call()
        .await?;

    print_summary(&data.frame)?;

    let column = Element::AverageTemperature.column_name();
    let means = running_mean(&data.frame, column).call()?;
    let mut frame = data.frame.clone();
    frame.with_column(Column::new(RUNNING_MEAN.into(), means))?;

    println!("Generating plot...");
    plot_running_mean(&frame, column, &data.station);
    println!("Plot shown in browser.");

    Ok(())
}

fn print_summary(frame: &DataFrame) -> Result<(), Box<dyn Error>> {
    let summary = PeriodSummary::from_frame(frame);
    for element in &summary.elements {
        let show = |value: &Result<StatValue, StatisticsError>| match value {
            Ok(v) => format!("{}", v),
            Err(_) => "n/a".to_string(),
        };
        println!(
            "{:<32} mean {:>8}  max {:>8}  min {:>8}",
            element.element.to_string(),
            show(&element.mean),
            show(&element.maximum),
            show(&element.minimum)
        );
    }

    let degree_days = DegreeDaySums::from_frame(frame);
    if let (Ok(heating), Ok(cooling)) = (&degree_days.heating, &degree_days.cooling) {
        println!("Heating degree days {}, cooling degree days {}", heating, cooling);
    }

    let missing = MissingDays::count(frame, &Element::ALL)?;
    println!("Missing days: {} ({:?})", missing.max(), missing.level());
    Ok(())
}

fn plot_running_mean(data: &DataFrame, column: &str, station: &str) {
    let title = format!("{} Average Temperature", station);
    TimeSeriesPlot::builder()
        .data(data)
        .x("Date")
        .y(column)
        .additional_series(vec![RUNNING_MEAN])
        .size(8)
        .colors(vec![Rgb(235, 117, 0), Rgb(69, 157, 230)])
        .lines(vec![Line::Solid, Line::Dash])
        .plot_title(
            Text::from(title.as_str()).font("Arial").size(18),
        )
        .legend(&Legend::new().x(0.05).y(0.9))
        .x_title("Date")
        .y_title(Text::from("°F").color(Rgb(0, 0, 0)))
        .y_axis(
            &Axis::new()
                .value_color(Rgb(0, 0, 0))
                .show_grid(false)
                .zero_line_color(Rgb(0, 0, 0)),
        )
        .build()
        .plot();
}
