//! demos/plot_daily.rs
//!
//! Plots the daily maximum, mean and minimum temperature of one city and year
//! using the `plotlars` crate.
//!
//! To run this demo:
//! cargo run --example plot_daily --features examples -- banco_dados_climaticos.csv Recife 2020

use heatwave::{columns, HeatWaveDataset, HeatWaveFrameFilterExt};
use plotlars::{Legend, Line, Plot, Rgb, Text, TimeSeriesPlot};
use polars::prelude::*;
use std::env;
use std::error::Error;
use std::path::PathBuf;

fn main() -> Result<(), Box<dyn Error>> {
    let args: Vec<String> = env::args().skip(1).collect();
    let [path, city, year] = args.as_slice() else {
        return Err("usage: plot_daily <data file> <city> <year>".into());
    };
    let year: i32 = year.parse()?;

    let dataset = HeatWaveDataset::load(&PathBuf::from(path)).call()?;
    let daily = dataset
        .lazy()
        .filter_city_year(city, year)
        .sort_by_exprs(vec![col(columns::TIMESTAMP)], SortMultipleOptions::default())
        .collect()?;

    if daily.height() == 0 {
        println!("No observations for {city} in {year}");
        return Ok(());
    }

    plot_temperatures(&daily, &format!("{city} {year}"));
    println!("Plot shown in browser.");
    Ok(())
}

fn plot_temperatures(data: &DataFrame, title: &str) {
    TimeSeriesPlot::builder()
        .data(data)
        .x(columns::TIMESTAMP)
        .y(columns::TEMP_MAX)
        .additional_series(vec![columns::TEMP_MED, columns::TEMP_MIN])
        .colors(vec![Rgb(214, 39, 40), Rgb(255, 127, 14), Rgb(31, 119, 180)])
        .lines(vec![Line::Solid, Line::Dash, Line::Solid])
        .plot_title(Text::from(title).size(18))
        .legend(&Legend::new().x(0.05).y(0.9))
        .x_title("date")
        .y_title("temperature (°C)")
        .build()
        .plot();
}
