use crate::aggregate::ensure_city_year;
use crate::aggregate::error::AggregateError;
use crate::aggregate::extractor::observations_from_frame;
use crate::dataset::columns::names;
use crate::dataset::heat_wave_dataset::HeatWaveDataset;
use crate::filtering::HeatWaveFrameFilterExt;
use crate::types::observation::Observation;
use polars::prelude::*;

/// All observations of `city` in `year`, oldest first. No aggregation.
///
/// # Errors
///
/// Returns [`AggregateError::UnknownCity`] or [`AggregateError::NoObservations`] when
/// the selection matches no rows at all.
pub fn filter_daily(
    dataset: &HeatWaveDataset,
    city: &str,
    year: i32,
) -> Result<Vec<Observation>, AggregateError> {
    ensure_city_year(dataset, city, year)?;

    let frame = dataset
        .lazy()
        .filter_city_year(city, year)
        .sort_by_exprs(
            vec![col(names::TIMESTAMP)],
            SortMultipleOptions::default().with_maintain_order(true),
        )
        .collect()?;

    observations_from_frame(&frame)
}
