use crate::aggregate::error::AggregateError;
use crate::aggregate::extractor::{f64_values, single_f64, str_values};
use crate::dataset::columns::names;
use crate::dataset::heat_wave_dataset::HeatWaveDataset;
use crate::types::lat_lon::LatLon;
use crate::types::records::{CityMarker, StationMap};
use polars::prelude::*;

const COL_CENTER_LAT: &str = "center_lat";
const COL_CENTER_LON: &str = "center_lon";

/// Builds the station map: one marker per distinct city, placed at the coordinates of
/// the city's first observation, and a centre at the mean of every observation's
/// coordinates.
pub fn locate_cities(dataset: &HeatWaveDataset) -> Result<StationMap, AggregateError> {
    let first_rows = dataset
        .lazy()
        .group_by([col(names::CITY)])
        .agg([
            col(names::LATITUDE).first(),
            col(names::LONGITUDE).first(),
        ])
        .sort_by_exprs(vec![col(names::CITY)], SortMultipleOptions::default())
        .collect()?;

    let cities = str_values(&first_rows, names::CITY)?;
    let latitudes = f64_values(&first_rows, names::LATITUDE)?;
    let longitudes = f64_values(&first_rows, names::LONGITUDE)?;
    let markers = cities
        .into_iter()
        .zip(latitudes)
        .zip(longitudes)
        .map(|((city, lat), lon)| CityMarker {
            city,
            location: LatLon(lat, lon),
        })
        .collect();

    let center_frame = dataset
        .lazy()
        .select([
            col(names::LATITUDE).mean().alias(COL_CENTER_LAT),
            col(names::LONGITUDE).mean().alias(COL_CENTER_LON),
        ])
        .collect()?;
    let center = LatLon(
        single_f64(&center_frame, COL_CENTER_LAT)?,
        single_f64(&center_frame, COL_CENTER_LON)?,
    );

    Ok(StationMap { center, markers })
}
