//! Defines `ViewKind`, the set of dashboard views the presentation layer can request.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A dashboard view and, through [`ViewKind::requires_city`] and
/// [`ViewKind::requires_year`], the selection it is parameterized by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ViewKind {
    /// One marker per city. Not parameterized.
    StationMap,
    /// Daily maximum, mean and minimum temperature lines for a city and year.
    DailyTemperatures,
    /// Yearly temperature anomalies for a city.
    AnnualAnomalies,
    /// Heat-wave day counts for every (year, city). Not parameterized.
    HeatWaveHeatmap,
    /// Heat-wave days per month of a city and year, drawn on a polar chart.
    MonthlyHeatWaves,
}

impl ViewKind {
    /// Every view, in the order the dashboard tabs show them.
    pub const ALL: [ViewKind; 5] = [
        ViewKind::StationMap,
        ViewKind::DailyTemperatures,
        ViewKind::AnnualAnomalies,
        ViewKind::HeatWaveHeatmap,
        ViewKind::MonthlyHeatWaves,
    ];

    pub fn requires_city(self) -> bool {
        matches!(
            self,
            ViewKind::DailyTemperatures | ViewKind::AnnualAnomalies | ViewKind::MonthlyHeatWaves
        )
    }

    pub fn requires_year(self) -> bool {
        matches!(self, ViewKind::DailyTemperatures | ViewKind::MonthlyHeatWaves)
    }

    pub(crate) fn slug(&self) -> &'static str {
        match self {
            ViewKind::StationMap => "station-map",
            ViewKind::DailyTemperatures => "daily-temperatures",
            ViewKind::AnnualAnomalies => "annual-anomalies",
            ViewKind::HeatWaveHeatmap => "heat-wave-heatmap",
            ViewKind::MonthlyHeatWaves => "monthly-heat-waves",
        }
    }
}

/// Formats a `ViewKind` using its kebab-case slug.
///
/// # Examples
///
/// ```
/// use heatwave::ViewKind;
///
/// assert_eq!(ViewKind::AnnualAnomalies.to_string(), "annual-anomalies");
/// ```
impl fmt::Display for ViewKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.slug())
    }
}
