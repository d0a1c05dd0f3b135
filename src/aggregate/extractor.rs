//! Helpers that turn collected polars columns into plain Rust values.
//!
//! Aggregation results never legitimately contain nulls, so a null is reported as
//! [`AggregateError::UnexpectedData`] instead of being silently skipped.

use crate::aggregate::error::AggregateError;
use crate::dataset::columns::names;
use crate::types::observation::Observation;
use chrono::NaiveDate;
use polars::prelude::*;

/// Retrieves a column by name from a DataFrame.
fn get_column<'a>(df: &'a DataFrame, name: &str) -> Result<&'a Column, AggregateError> {
    df.column(name)
        .map_err(|e| AggregateError::ColumnNotFound(name.to_string(), e))
}

fn unexpected_null(name: &str) -> AggregateError {
    AggregateError::UnexpectedData {
        column: name.to_string(),
        message: "null value".to_string(),
    }
}

pub(crate) fn str_values(df: &DataFrame, name: &str) -> Result<Vec<String>, AggregateError> {
    get_column(df, name)?
        .str()?
        .into_iter()
        .map(|v| v.map(str::to_string).ok_or_else(|| unexpected_null(name)))
        .collect()
}

pub(crate) fn f64_values(df: &DataFrame, name: &str) -> Result<Vec<f64>, AggregateError> {
    get_column(df, name)?
        .f64()?
        .into_iter()
        .map(|v| v.ok_or_else(|| unexpected_null(name)))
        .collect()
}

pub(crate) fn i32_values(df: &DataFrame, name: &str) -> Result<Vec<i32>, AggregateError> {
    get_column(df, name)?
        .i32()?
        .into_iter()
        .map(|v| v.ok_or_else(|| unexpected_null(name)))
        .collect()
}

pub(crate) fn u32_values(df: &DataFrame, name: &str) -> Result<Vec<u32>, AggregateError> {
    get_column(df, name)?
        .u32()?
        .into_iter()
        .map(|v| v.ok_or_else(|| unexpected_null(name)))
        .collect()
}

pub(crate) fn bool_values(df: &DataFrame, name: &str) -> Result<Vec<bool>, AggregateError> {
    get_column(df, name)?
        .bool()?
        .into_iter()
        .map(|v| v.ok_or_else(|| unexpected_null(name)))
        .collect()
}

pub(crate) fn date_values(df: &DataFrame, name: &str) -> Result<Vec<NaiveDate>, AggregateError> {
    get_column(df, name)?
        .date()?
        .as_date_iter()
        .map(|v| v.ok_or_else(|| unexpected_null(name)))
        .collect()
}

/// Reads the first (and only) value of a single-row aggregate.
pub(crate) fn single_f64(df: &DataFrame, name: &str) -> Result<f64, AggregateError> {
    f64_values(df, name)?
        .first()
        .copied()
        .ok_or_else(|| AggregateError::UnexpectedData {
            column: name.to_string(),
            message: "expected one row, found none".to_string(),
        })
}

/// Converts a frame with the normalized schema back into observations, row by row.
pub(crate) fn observations_from_frame(df: &DataFrame) -> Result<Vec<Observation>, AggregateError> {
    let cities = str_values(df, names::CITY)?;
    let timestamps = date_values(df, names::TIMESTAMP)?;
    let years = i32_values(df, names::YEAR)?;
    let temp_max = f64_values(df, names::TEMP_MAX)?;
    let temp_med = f64_values(df, names::TEMP_MED)?;
    let temp_min = f64_values(df, names::TEMP_MIN)?;
    let heat_wave = bool_values(df, names::HEAT_WAVE)?;
    let latitudes = f64_values(df, names::LATITUDE)?;
    let longitudes = f64_values(df, names::LONGITUDE)?;

    Ok(cities
        .into_iter()
        .enumerate()
        .map(|(i, city)| Observation {
            city,
            timestamp: timestamps[i],
            year: years[i],
            temp_max: temp_max[i],
            temp_med: temp_med[i],
            temp_min: temp_min[i],
            is_heat_wave_day: heat_wave[i],
            latitude: latitudes[i],
            longitude: longitudes[i],
        })
        .collect())
}
