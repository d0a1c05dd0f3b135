mod aggregate;
mod dashboard;
mod dataset;
mod error;
mod filtering;
mod types;
mod view;

#[cfg(test)]
mod test_fixtures;

pub use dashboard::{Controls, Dashboard};
pub use error::HeatWaveError;

pub use dataset::columns::names as columns;
pub use dataset::columns::{SourceColumns, SourceFormat};
pub use dataset::error::LoadError;
pub use dataset::heat_wave_dataset::HeatWaveDataset;

pub use aggregate::error::AggregateError;
pub use aggregate::{
    compute_annual_anomalies, compute_monthly_heat_wave_frequency, filter_daily, locate_cities,
    summarize_heat_wave_days,
};

pub use types::lat_lon::LatLon;
pub use types::month::CALENDAR_MONTHS;
pub use types::observation::Observation;
pub use types::records::*;

pub use view::error::InvalidSelectionError;
pub use view::kind::ViewKind;
pub use view::selection::Selection;
pub use view::series::*;

pub use filtering::HeatWaveFrameFilterExt;
