//! Pure aggregations over a [`HeatWaveDataset`].
//!
//! Every function takes the dataset plus explicit parameters, builds a fresh polars
//! query and returns newly allocated records. Nothing is cached between calls.

pub mod annual_anomaly;
pub mod daily;
pub mod error;
mod extractor;
pub mod heat_wave_summary;
pub mod monthly_frequency;
pub mod station_map;

pub use annual_anomaly::compute_annual_anomalies;
pub use daily::filter_daily;
pub use heat_wave_summary::summarize_heat_wave_days;
pub use monthly_frequency::compute_monthly_heat_wave_frequency;
pub use station_map::locate_cities;

use crate::aggregate::error::AggregateError;
use crate::dataset::heat_wave_dataset::HeatWaveDataset;

fn ensure_city(dataset: &HeatWaveDataset, city: &str) -> Result<(), AggregateError> {
    if dataset.contains_city(city) {
        Ok(())
    } else {
        Err(AggregateError::UnknownCity(city.to_string()))
    }
}

fn ensure_city_year(dataset: &HeatWaveDataset, city: &str, year: i32) -> Result<(), AggregateError> {
    ensure_city(dataset, city)?;
    if dataset.has_observations(city, year) {
        Ok(())
    } else {
        Err(AggregateError::NoObservations {
            city: city.to_string(),
            year,
        })
    }
}
