//! Small in-memory dataset shared by the unit tests.
//!
//! Recife 2020 has heat-wave days on two January dates and one March date and a
//! `temp_med` mean of 29; Recife 2019 averages 27. Fortaleza has one row per year with
//! `temp_med` 28, 30, 29. Natal has a single 2020 row and no heat-wave days at all.

use crate::dataset::columns::SourceColumns;
use crate::dataset::heat_wave_dataset::HeatWaveDataset;
use polars::prelude::*;
use std::io::Write;
use tempfile::NamedTempFile;

// (city, date, year, tempMed, isHW)
const ROWS: [(&str, &str, i32, f64, &str); 11] = [
    ("Recife", "2020-03-10", 2020, 29.0, "True"),
    ("Recife", "2020-01-05", 2020, 30.0, "TRUE"),
    ("Recife", "2020-07-15", 2020, 28.0, "false"),
    ("Recife", "2020-01-20", 2020, 31.0, "true"),
    ("Recife", "2020-02-01", 2020, 27.0, "FALSE"),
    ("Recife", "2019-06-01", 2019, 26.0, "FALSE"),
    ("Recife", "2019-12-30", 2019, 28.0, "TRUE"),
    ("Fortaleza", "2018-05-01", 2018, 28.0, "no"),
    ("Fortaleza", "2019-05-01", 2019, 30.0, "TRUE"),
    ("Fortaleza", "2020-05-01", 2020, 29.0, "0"),
    ("Natal", "2020-08-10", 2020, 27.5, "false"),
];

fn coordinates(city: &str) -> (f64, f64) {
    match city {
        "Recife" => (-8.05, -34.9),
        "Fortaleza" => (-3.72, -38.54),
        _ => (-5.79, -35.21),
    }
}

/// The fixture rows with raw (source) column names.
pub(crate) fn fixture_frame() -> DataFrame {
    let cities: Vec<&str> = ROWS.iter().map(|r| r.0).collect();
    let dates: Vec<&str> = ROWS.iter().map(|r| r.1).collect();
    let years: Vec<i32> = ROWS.iter().map(|r| r.2).collect();
    let med: Vec<f64> = ROWS.iter().map(|r| r.3).collect();
    let max: Vec<f64> = med.iter().map(|t| t + 4.0).collect();
    let min: Vec<f64> = med.iter().map(|t| t - 3.0).collect();
    let flags: Vec<&str> = ROWS.iter().map(|r| r.4).collect();
    let lat: Vec<f64> = ROWS.iter().map(|r| coordinates(r.0).0).collect();
    let lon: Vec<f64> = ROWS.iter().map(|r| coordinates(r.0).1).collect();

    df!(
        "cidade" => cities,
        "index" => dates,
        "year" => years,
        "tempMax" => max,
        "tempMed" => med,
        "tempMin" => min,
        "isHW" => flags,
        "Lat" => lat,
        "Long" => lon,
    )
    .expect("fixture frame")
}

pub(crate) fn fixture_dataset() -> HeatWaveDataset {
    HeatWaveDataset::from_frame(fixture_frame(), &SourceColumns::default())
        .expect("fixture dataset")
}

/// The fixture rows written to a `.csv` temp file.
pub(crate) fn fixture_csv() -> NamedTempFile {
    let mut file = tempfile::Builder::new()
        .suffix(".csv")
        .tempfile()
        .expect("temp file");
    writeln!(file, "cidade,index,year,tempMax,tempMed,tempMin,isHW,Lat,Long").expect("header");
    for (city, date, year, med, flag) in ROWS {
        let (lat, lon) = coordinates(city);
        writeln!(
            file,
            "{},{},{},{},{},{},{},{},{}",
            city,
            date,
            year,
            med + 4.0,
            med,
            med - 3.0,
            flag,
            lat,
            lon
        )
        .expect("row");
    }
    file.flush().expect("flush");
    file
}
