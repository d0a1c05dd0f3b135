use crate::aggregate::error::AggregateError;
use crate::aggregate::extractor::{i32_values, str_values, u32_values};
use crate::dataset::columns::names;
use crate::dataset::heat_wave_dataset::HeatWaveDataset;
use crate::filtering::HeatWaveFrameFilterExt;
use crate::types::records::HeatWaveSummary;
use polars::prelude::*;

const COL_DAYS: &str = "days_of_heat_wave";

/// Counts heat-wave days per (city, year).
///
/// Only pairs with at least one heat-wave day appear; a city/year without any is
/// absent rather than reported as zero. Rows are sorted by city, then year.
///
/// # Errors
///
/// Returns [`AggregateError::Polars`] if the query fails to execute.
pub fn summarize_heat_wave_days(
    dataset: &HeatWaveDataset,
) -> Result<Vec<HeatWaveSummary>, AggregateError> {
    let grouped = dataset
        .lazy()
        .filter_heat_wave_days()
        .group_by([col(names::CITY), col(names::YEAR)])
        .agg([len().cast(DataType::UInt32).alias(COL_DAYS)])
        .sort_by_exprs(
            vec![col(names::CITY), col(names::YEAR)],
            SortMultipleOptions::default(),
        )
        .collect()?;

    let cities = str_values(&grouped, names::CITY)?;
    let years = i32_values(&grouped, names::YEAR)?;
    let days = u32_values(&grouped, COL_DAYS)?;

    Ok(cities
        .into_iter()
        .zip(years)
        .zip(days)
        .map(|((city, year), days_of_heat_wave)| HeatWaveSummary {
            city,
            year,
            days_of_heat_wave,
        })
        .collect())
}
