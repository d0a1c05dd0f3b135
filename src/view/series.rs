//! Renderer-facing shapes of the five dashboard views.
//!
//! Each shape is a plain serializable struct built from the aggregate records. The
//! presentation layer receives a [`ViewSeries`] and picks the chart type from its tag.

use crate::types::observation::Observation;
use crate::types::records::{AnnualAnomaly, HeatWaveSummary, MonthlyHeatWaveFrequency, StationMap};
use crate::view::kind::ViewKind;
use chrono::NaiveDate;
use serde::Serialize;

/// Three temperature lines over the days of one (city, year) selection.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyTemperatureSeries {
    pub city: String,
    pub year: i32,
    pub dates: Vec<NaiveDate>,
    pub temp_max: Vec<f64>,
    pub temp_med: Vec<f64>,
    pub temp_min: Vec<f64>,
}

impl DailyTemperatureSeries {
    pub fn from_observations(city: &str, year: i32, observations: &[Observation]) -> Self {
        Self {
            city: city.to_string(),
            year,
            dates: observations.iter().map(|o| o.timestamp).collect(),
            temp_max: observations.iter().map(|o| o.temp_max).collect(),
            temp_med: observations.iter().map(|o| o.temp_med).collect(),
            temp_min: observations.iter().map(|o| o.temp_min).collect(),
        }
    }
}

/// One scatter point: a year on the x axis, its anomaly on the y axis, its mean
/// temperature as color, and the absolute anomaly as marker size.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnomalyPoint {
    pub year: i32,
    pub mean_temp: f64,
    pub anomaly: f64,
    pub marker_size: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnomalyScatter {
    pub city: String,
    pub baseline: f64,
    pub points: Vec<AnomalyPoint>,
}

impl AnomalyScatter {
    pub fn from_anomalies(city: &str, anomalies: &[AnnualAnomaly]) -> Self {
        let baseline = anomalies.first().map_or(0.0, |a| a.baseline);
        let points = anomalies
            .iter()
            .map(|a| AnomalyPoint {
                year: a.year,
                mean_temp: a.mean_temp,
                anomaly: a.anomaly,
                marker_size: a.anomaly.abs(),
            })
            .collect();
        Self {
            city: city.to_string(),
            baseline,
            points,
        }
    }
}

/// Heatmap cells keyed by (year, city). Pairs without heat-wave days have no cell.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HeatWaveHeatmap {
    pub cells: Vec<HeatWaveSummary>,
}

/// Closed radial contour: month names as angles, heat-wave day counts as radii.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyRadialSeries {
    pub city: String,
    pub year: i32,
    pub theta: Vec<String>,
    pub r: Vec<u32>,
}

impl MonthlyRadialSeries {
    pub fn from_frequencies(city: &str, year: i32, months: &[MonthlyHeatWaveFrequency]) -> Self {
        Self {
            city: city.to_string(),
            year,
            theta: months.iter().map(|m| m.month_name().to_string()).collect(),
            r: months.iter().map(|m| m.frequency).collect(),
        }
    }
}

/// The data behind one rendered view, tagged with the view it belongs to.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "view", rename_all = "kebab-case")]
pub enum ViewSeries {
    StationMap(StationMap),
    DailyTemperatures(DailyTemperatureSeries),
    AnnualAnomalies(AnomalyScatter),
    HeatWaveHeatmap(HeatWaveHeatmap),
    MonthlyHeatWaves(MonthlyRadialSeries),
}

impl ViewSeries {
    pub fn kind(&self) -> ViewKind {
        match self {
            ViewSeries::StationMap(_) => ViewKind::StationMap,
            ViewSeries::DailyTemperatures(_) => ViewKind::DailyTemperatures,
            ViewSeries::AnnualAnomalies(_) => ViewKind::AnnualAnomalies,
            ViewSeries::HeatWaveHeatmap(_) => ViewKind::HeatWaveHeatmap,
            ViewSeries::MonthlyHeatWaves(_) => ViewKind::MonthlyHeatWaves,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Month;

    #[test]
    fn test_marker_size_is_absolute_anomaly() {
        let anomalies = vec![
            AnnualAnomaly {
                year: 2018,
                mean_temp: 28.0,
                anomaly: -1.0,
                baseline: 29.0,
            },
            AnnualAnomaly {
                year: 2019,
                mean_temp: 30.0,
                anomaly: 1.0,
                baseline: 29.0,
            },
        ];
        let scatter = AnomalyScatter::from_anomalies("Fortaleza", &anomalies);
        assert_eq!(scatter.baseline, 29.0);
        assert_eq!(scatter.points[0].marker_size, 1.0);
        assert_eq!(scatter.points[1].marker_size, 1.0);
    }

    #[test]
    fn test_radial_series_keeps_calendar_order() {
        let months = [
            MonthlyHeatWaveFrequency {
                month: Month::January,
                frequency: 2,
            },
            MonthlyHeatWaveFrequency {
                month: Month::February,
                frequency: 0,
            },
        ];
        let series = MonthlyRadialSeries::from_frequencies("Recife", 2020, &months);
        assert_eq!(series.theta, vec!["January", "February"]);
        assert_eq!(series.r, vec![2, 0]);
    }

    #[test]
    fn test_tagged_serialization() -> Result<(), serde_json::Error> {
        let series = ViewSeries::HeatWaveHeatmap(HeatWaveHeatmap {
            cells: vec![HeatWaveSummary {
                city: "Recife".to_string(),
                year: 2020,
                days_of_heat_wave: 3,
            }],
        });
        let json = serde_json::to_value(&series)?;
        assert_eq!(
            json,
            serde_json::json!({
                "view": "heat-wave-heatmap",
                "cells": [{ "city": "Recife", "year": 2020, "daysOfHeatWave": 3 }]
            })
        );
        assert_eq!(series.kind().to_string(), "heat-wave-heatmap");
        Ok(())
    }
}
