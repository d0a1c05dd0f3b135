use crate::aggregate::ensure_city_year;
use crate::aggregate::error::AggregateError;
use crate::aggregate::extractor::u32_values;
use crate::dataset::columns::names;
use crate::dataset::heat_wave_dataset::HeatWaveDataset;
use crate::filtering::HeatWaveFrameFilterExt;
use crate::types::month::{month_from_number, CALENDAR_MONTHS};
use crate::types::records::MonthlyHeatWaveFrequency;
use polars::prelude::*;

const COL_MONTH: &str = "month";
const COL_FREQUENCY: &str = "frequency";

/// Counts heat-wave days per calendar month for one city and year.
///
/// Always returns all twelve months, January first, with a frequency of 0 for months
/// without heat-wave days. A radial chart needs a value at every angle to draw a
/// closed contour.
///
/// # Errors
///
/// Returns [`AggregateError::UnknownCity`] if `city` has no observations and
/// [`AggregateError::NoObservations`] if it has none in `year`. A valid selection
/// with no heat-wave days succeeds with twelve zeros.
pub fn compute_monthly_heat_wave_frequency(
    dataset: &HeatWaveDataset,
    city: &str,
    year: i32,
) -> Result<[MonthlyHeatWaveFrequency; 12], AggregateError> {
    ensure_city_year(dataset, city, year)?;

    let counts = dataset
        .lazy()
        .filter_city_year(city, year)
        .filter_heat_wave_days()
        .group_by([col(names::TIMESTAMP)
            .dt()
            .month()
            .cast(DataType::UInt32)
            .alias(COL_MONTH)])
        .agg([len().cast(DataType::UInt32).alias(COL_FREQUENCY)])
        .collect()?;

    let months = u32_values(&counts, COL_MONTH)?;
    let frequencies = u32_values(&counts, COL_FREQUENCY)?;

    let mut by_month = [0u32; 12];
    for (number, frequency) in months.into_iter().zip(frequencies) {
        let month = month_from_number(number).ok_or_else(|| AggregateError::UnexpectedData {
            column: COL_MONTH.to_string(),
            message: format!("{} is not a calendar month", number),
        })?;
        by_month[month.number_from_month() as usize - 1] = frequency;
    }

    Ok(std::array::from_fn(|i| MonthlyHeatWaveFrequency {
        month: CALENDAR_MONTHS[i],
        frequency: by_month[i],
    }))
}
