//! This module provides the main entry point of the crate: the `Dashboard`, which turns
//! a view request and the user's selection into the data series for that view.

use crate::aggregate::{
    compute_annual_anomalies, compute_monthly_heat_wave_frequency, filter_daily, locate_cities,
    summarize_heat_wave_days,
};
use crate::dataset::heat_wave_dataset::HeatWaveDataset;
use crate::error::HeatWaveError;
use crate::types::records::StationMap;
use crate::view::error::InvalidSelectionError;
use crate::view::kind::ViewKind;
use crate::view::selection::Selection;
use crate::view::series::{
    AnomalyScatter, DailyTemperatureSeries, HeatWaveHeatmap, MonthlyRadialSeries, ViewSeries,
};
use bon::bon;
use log::{debug, warn};
use serde::Serialize;

/// Values the dashboard's selection controls are populated with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Controls {
    /// City dropdown entries, sorted.
    pub cities: Vec<String>,
    /// Every year in the dataset, sorted.
    pub years: Vec<i32>,
    /// Lower bound of the year slider.
    pub first_year: i32,
    /// Upper bound of the year slider.
    pub last_year: i32,
}

/// The view dispatcher.
///
/// Owns the loaded [`HeatWaveDataset`] and maps each (view, selection) request to a single
/// aggregation call. The station map and the heat-wave heatmap do not depend on the
/// selection, so they are computed once when the dashboard is built.
///
/// # Examples
///
/// ```no_run
/// # use heatwave::{Dashboard, HeatWaveDataset, HeatWaveError, ViewKind};
/// # use std::path::Path;
/// # fn main() -> Result<(), HeatWaveError> {
/// let dataset = HeatWaveDataset::load(Path::new("banco_dados_climaticos.csv")).call()?;
/// let dashboard = Dashboard::new(dataset)?;
///
/// let series = dashboard
///     .render()
///     .view(ViewKind::MonthlyHeatWaves)
///     .city("Recife")
///     .year(2020)
///     .call()?;
/// println!("{}", serde_json::to_string_pretty(&series).unwrap_or_default());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct Dashboard {
    dataset: HeatWaveDataset,
    station_map: StationMap,
    heatmap: HeatWaveHeatmap,
}

#[bon]
impl Dashboard {
    /// Builds the dashboard and precomputes the selection-independent views.
    ///
    /// # Errors
    ///
    /// Returns [`HeatWaveError::Aggregate`] if the station map or heatmap query fails.
    pub fn new(dataset: HeatWaveDataset) -> Result<Self, HeatWaveError> {
        let station_map = locate_cities(&dataset)?;
        let heatmap = HeatWaveHeatmap {
            cells: summarize_heat_wave_days(&dataset)?,
        };
        Ok(Self {
            dataset,
            station_map,
            heatmap,
        })
    }

    pub fn dataset(&self) -> &HeatWaveDataset {
        &self.dataset
    }

    pub fn controls(&self) -> Controls {
        let years: Vec<i32> = self.dataset.years().collect();
        Controls {
            cities: self.dataset.cities().map(str::to_string).collect(),
            first_year: years.first().copied().unwrap_or_default(),
            last_year: years.last().copied().unwrap_or_default(),
            years,
        }
    }

    /// Renders one view for the given selection.
    ///
    /// This method uses a builder pattern.
    ///
    /// # Arguments
    ///
    /// * `.view(ViewKind)`: **Required.** The view to render.
    /// * `.city(&str)`: Required by the daily, anomaly and monthly views; ignored otherwise.
    /// * `.year(i32)`: Required by the daily and monthly views; ignored otherwise.
    ///
    /// # Errors
    ///
    /// Returns [`HeatWaveError::Selection`] if a required parameter is missing, names an
    /// unknown city or year, or the (city, year) pair has no observations. Returns
    /// [`HeatWaveError::Aggregate`] if the underlying query fails.
    #[builder]
    pub fn render(
        &self,
        view: ViewKind,
        city: Option<&str>,
        year: Option<i32>,
    ) -> Result<ViewSeries, HeatWaveError> {
        debug!(
            "Rendering {} view (city: {:?}, year: {:?})",
            view, city, year
        );
        match view {
            ViewKind::StationMap => Ok(ViewSeries::StationMap(self.station_map.clone())),
            ViewKind::HeatWaveHeatmap => Ok(ViewSeries::HeatWaveHeatmap(self.heatmap.clone())),
            ViewKind::AnnualAnomalies => {
                let city = self.checked_city(view, city)?;
                let anomalies = compute_annual_anomalies(&self.dataset, city)?;
                Ok(ViewSeries::AnnualAnomalies(AnomalyScatter::from_anomalies(
                    city, &anomalies,
                )))
            }
            ViewKind::DailyTemperatures => {
                let (city, year) = self.checked_city_year(view, city, year)?;
                let observations = filter_daily(&self.dataset, city, year)?;
                Ok(ViewSeries::DailyTemperatures(
                    DailyTemperatureSeries::from_observations(city, year, &observations),
                ))
            }
            ViewKind::MonthlyHeatWaves => {
                let (city, year) = self.checked_city_year(view, city, year)?;
                let months = compute_monthly_heat_wave_frequency(&self.dataset, city, year)?;
                Ok(ViewSeries::MonthlyHeatWaves(
                    MonthlyRadialSeries::from_frequencies(city, year, &months),
                ))
            }
        }
    }

    /// Plain-function form of [`Dashboard::render`] for a selection snapshot.
    pub fn render_selection(
        &self,
        view: ViewKind,
        selection: &Selection,
    ) -> Result<ViewSeries, HeatWaveError> {
        self.render()
            .view(view)
            .maybe_city(selection.city.as_deref())
            .maybe_year(selection.year)
            .call()
    }

    /// Renders every view for one selection, in tab order.
    pub fn render_all(&self, selection: &Selection) -> Vec<Result<ViewSeries, HeatWaveError>> {
        ViewKind::ALL
            .iter()
            .map(|view| self.render_selection(*view, selection))
            .collect()
    }

    fn checked_city<'a>(
        &self,
        view: ViewKind,
        city: Option<&'a str>,
    ) -> Result<&'a str, InvalidSelectionError> {
        let city = city.ok_or(InvalidSelectionError::MissingCity { view })?;
        if !self.dataset.contains_city(city) {
            warn!("Rejected {} view: unknown city '{}'", view, city);
            return Err(InvalidSelectionError::UnknownCity(city.to_string()));
        }
        Ok(city)
    }

    fn checked_city_year<'a>(
        &self,
        view: ViewKind,
        city: Option<&'a str>,
        year: Option<i32>,
    ) -> Result<(&'a str, i32), InvalidSelectionError> {
        let city = self.checked_city(view, city)?;
        let year = year.ok_or(InvalidSelectionError::MissingYear { view })?;
        if !self.dataset.contains_year(year) {
            warn!("Rejected {} view: unknown year {}", view, year);
            return Err(InvalidSelectionError::UnknownYear(year));
        }
        if !self.dataset.has_observations(city, year) {
            warn!(
                "Rejected {} view: no observations for '{}' in {}",
                view, city, year
            );
            return Err(InvalidSelectionError::NoObservations {
                city: city.to_string(),
                year,
            });
        }
        Ok((city, year))
    }
}
