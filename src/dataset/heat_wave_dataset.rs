//! Contains the `HeatWaveDataset`, the immutable, normalized observation table every
//! aggregation reads from.

use crate::dataset::columns::{names, SourceColumns, SourceFormat};
use crate::dataset::error::LoadError;
use crate::dataset::loader::{normalize_frame, read_source};
use bon::bon;
use log::info;
use polars::prelude::{DataFrame, IntoLazy, LazyFrame};
use std::collections::{BTreeMap, BTreeSet};
use std::path::{Path, PathBuf};
use tokio::task;

/// The loaded climate dataset.
///
/// Holds a normalized polars `DataFrame` (columns listed in [`crate::columns`]) plus the
/// known selection domain: which cities exist, which years exist, and which
/// (city, year) pairs have at least one observation.
///
/// A dataset is built once and never mutated. It is cheap to clone (the frame is
/// reference counted) and safe to share between threads, so it can be handed to every
/// aggregation call instead of living in a global.
///
/// # Examples
///
/// ```no_run
/// use heatwave::{HeatWaveDataset, LoadError};
/// use std::path::Path;
///
/// # fn main() -> Result<(), LoadError> {
/// let dataset = HeatWaveDataset::load(Path::new("banco_dados_climaticos.csv")).call()?;
/// println!("{} observations for {} cities", dataset.len(), dataset.cities().count());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct HeatWaveDataset {
    frame: DataFrame,
    coverage: BTreeMap<String, BTreeSet<i32>>,
    years: BTreeSet<i32>,
}

#[bon]
impl HeatWaveDataset {
    /// Loads and normalizes a dataset from a CSV or Parquet file.
    ///
    /// This method uses a builder pattern.
    ///
    /// # Arguments
    ///
    /// * `path`: **Required.** The source file.
    /// * `.columns(SourceColumns)`: Optional. Raw column names; defaults to [`SourceColumns::default`].
    /// * `.format(SourceFormat)`: Optional. Overrides format detection from the file extension.
    ///
    /// # Errors
    ///
    /// Returns a [`LoadError`] if the file cannot be read, its format cannot be determined,
    /// a required column is missing or has unusable values, or the source has no rows.
    #[builder]
    pub fn load(
        #[builder(start_fn)] path: &Path,
        columns: Option<SourceColumns>,
        format: Option<SourceFormat>,
    ) -> Result<Self, LoadError> {
        let format = match format.or_else(|| SourceFormat::from_path(path)) {
            Some(format) => format,
            None => return Err(LoadError::UnsupportedFormat(path.to_path_buf())),
        };
        let columns = columns.unwrap_or_default();
        let raw = read_source(path, format)?;
        Self::from_frame(raw, &columns)
    }

    /// Same as [`HeatWaveDataset::load`], run on tokio's blocking thread pool so an async
    /// caller is not stalled while the file is parsed.
    pub async fn open(path: PathBuf, columns: SourceColumns) -> Result<Self, LoadError> {
        task::spawn_blocking(move || Self::load(&path).columns(columns).call()).await?
    }

    /// Normalizes an already materialized frame with raw column names.
    pub fn from_frame(raw: DataFrame, columns: &SourceColumns) -> Result<Self, LoadError> {
        let frame = normalize_frame(raw, columns)?;

        let mut coverage: BTreeMap<String, BTreeSet<i32>> = BTreeMap::new();
        {
            let cities = frame
                .column(names::CITY)
                .and_then(|c| c.str())
                .map_err(LoadError::Normalize)?;
            let years = frame
                .column(names::YEAR)
                .and_then(|c| c.i32())
                .map_err(LoadError::Normalize)?;
            for (city, year) in cities.into_iter().zip(years.into_iter()) {
                if let (Some(city), Some(year)) = (city, year) {
                    coverage.entry(city.to_string()).or_default().insert(year);
                }
            }
        }
        let years: BTreeSet<i32> = coverage.values().flatten().copied().collect();

        info!(
            "Loaded {} observations: {} cities, {} years",
            frame.height(),
            coverage.len(),
            years.len()
        );
        Ok(Self {
            frame,
            coverage,
            years,
        })
    }

    /// The normalized frame.
    pub fn frame(&self) -> &DataFrame {
        &self.frame
    }

    /// A fresh lazy query over the whole dataset.
    pub fn lazy(&self) -> LazyFrame {
        self.frame.clone().lazy()
    }

    /// Number of observations.
    pub fn len(&self) -> usize {
        self.frame.height()
    }

    pub fn is_empty(&self) -> bool {
        self.frame.height() == 0
    }

    /// Distinct cities in ascending order.
    pub fn cities(&self) -> impl Iterator<Item = &str> + '_ {
        self.coverage.keys().map(String::as_str)
    }

    /// Distinct years (over all cities) in ascending order.
    pub fn years(&self) -> impl Iterator<Item = i32> + '_ {
        self.years.iter().copied()
    }

    /// Years that have at least one observation for `city`, ascending.
    pub fn years_for(&self, city: &str) -> impl Iterator<Item = i32> + '_ {
        self.coverage.get(city).into_iter().flatten().copied()
    }

    pub fn contains_city(&self, city: &str) -> bool {
        self.coverage.contains_key(city)
    }

    pub fn contains_year(&self, year: i32) -> bool {
        self.years.contains(&year)
    }

    /// Whether at least one observation exists for this (city, year) pair.
    pub fn has_observations(&self, city: &str, year: i32) -> bool {
        self.coverage
            .get(city)
            .is_some_and(|years| years.contains(&year))
    }
}
