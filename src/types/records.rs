//! Row types of the derived views. Every record is built fresh by an aggregation
//! call and never cached.

use crate::types::lat_lon::LatLon;
use crate::types::month::serialize_month_name;
use chrono::Month;
use serde::Serialize;

/// Number of heat-wave days recorded for one city in one year.
///
/// Only (city, year) pairs with at least one heat-wave day are ever produced.
#[derive(Debug, PartialEq, Eq, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HeatWaveSummary {
    pub city: String,
    pub year: i32,
    pub days_of_heat_wave: u32,
}

/// Mean temperature of one year for a city and its deviation from that city's baseline.
#[derive(Debug, PartialEq, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnnualAnomaly {
    pub year: i32,
    /// Mean of `temp_med` over the city's observations in `year`.
    pub mean_temp: f64,
    /// `mean_temp - baseline`.
    pub anomaly: f64,
    /// Mean of `temp_med` over all of the city's observations, every year included.
    /// Identical on every row returned for the same city.
    pub baseline: f64,
}

/// Heat-wave day count for one calendar month of a (city, year) selection.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Serialize)]
pub struct MonthlyHeatWaveFrequency {
    #[serde(serialize_with = "serialize_month_name")]
    pub month: Month,
    pub frequency: u32,
}

impl MonthlyHeatWaveFrequency {
    /// Canonical English month name, e.g. `"January"`.
    pub fn month_name(&self) -> &'static str {
        self.month.name()
    }
}

/// A single map marker. Every city has exactly one.
#[derive(Debug, PartialEq, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CityMarker {
    pub city: String,
    pub location: LatLon,
}

/// The station map: one marker per distinct city and the point the map is centred on.
#[derive(Debug, PartialEq, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StationMap {
    /// Mean latitude and mean longitude over every observation in the dataset.
    pub center: LatLon,
    /// Sorted by city name.
    pub markers: Vec<CityMarker>,
}
