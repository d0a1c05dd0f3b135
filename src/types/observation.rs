use chrono::NaiveDate;
use serde::Serialize;

/// One normalized row of the climate dataset: a single day at a single city.
///
/// `year` is stored as delivered by the source and is the value used for grouping,
/// even though it is normally redundant with `timestamp`.
#[derive(Debug, PartialEq, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Observation {
    pub city: String,
    pub timestamp: NaiveDate,
    pub year: i32,
    pub temp_max: f64,          // tempMax (°C)
    pub temp_med: f64,          // tempMed (°C)
    pub temp_min: f64,          // tempMin (°C)
    pub is_heat_wave_day: bool, // isHW
    pub latitude: f64,
    pub longitude: f64,
}
