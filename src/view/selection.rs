use crate::dataset::heat_wave_dataset::HeatWaveDataset;
use serde::{Deserialize, Serialize};

/// The user's current choice of city and year.
///
/// The presentation layer owns and mutates this value; the dashboard only reads a
/// snapshot of it per render. Fields a view does not use are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selection {
    pub city: Option<String>,
    pub year: Option<i32>,
}

impl Selection {
    pub fn new(city: impl Into<String>, year: i32) -> Self {
        Self {
            city: Some(city.into()),
            year: Some(year),
        }
    }

    pub fn city(city: impl Into<String>) -> Self {
        Self {
            city: Some(city.into()),
            year: None,
        }
    }

    pub fn with_year(mut self, year: i32) -> Self {
        self.year = Some(year);
        self
    }

    /// The dashboard's initial state: the first city in sorted order and the most
    /// recent year. `None` only for a dataset without cities.
    pub fn initial(dataset: &HeatWaveDataset) -> Option<Self> {
        let city = dataset.cities().next()?;
        let year = dataset.years().last()?;
        Some(Self::new(city, year))
    }
}
