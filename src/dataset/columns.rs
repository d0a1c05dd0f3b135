//! Column naming: the raw source columns a dataset is read from and the normalized
//! column names every query in this crate runs against.

use bon::Builder;
use std::fmt;
use std::path::Path;

/// Normalized column names of a loaded [`crate::HeatWaveDataset`] frame.
pub mod names {
    pub const CITY: &str = "city";
    pub const TIMESTAMP: &str = "timestamp";
    pub const YEAR: &str = "year";
    pub const TEMP_MAX: &str = "temp_max";
    pub const TEMP_MED: &str = "temp_med";
    pub const TEMP_MIN: &str = "temp_min";
    pub const HEAT_WAVE: &str = "is_heat_wave_day";
    pub const LATITUDE: &str = "latitude";
    pub const LONGITUDE: &str = "longitude";
}

/// Names of the raw columns in the source file, and how to read its timestamps.
///
/// The defaults match the consolidated climate workbook export
/// (`cidade`, `index`, `year`, `tempMax`, `tempMed`, `tempMin`, `isHW`, `Lat`, `Long`).
///
/// # Examples
///
/// ```
/// use heatwave::SourceColumns;
///
/// let defaults = SourceColumns::default();
/// assert_eq!(defaults.city, "cidade");
///
/// let english = SourceColumns::builder()
///     .city("station")
///     .timestamp("date")
///     .heat_wave("heat_wave")
///     .build();
/// assert_eq!(english.city, "station");
/// assert_eq!(english.year, "year");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Builder)]
pub struct SourceColumns {
    #[builder(default = String::from("cidade"), into)]
    pub city: String,
    #[builder(default = String::from("index"), into)]
    pub timestamp: String,
    #[builder(default = String::from("year"), into)]
    pub year: String,
    #[builder(default = String::from("tempMax"), into)]
    pub temp_max: String,
    #[builder(default = String::from("tempMed"), into)]
    pub temp_med: String,
    #[builder(default = String::from("tempMin"), into)]
    pub temp_min: String,
    #[builder(default = String::from("isHW"), into)]
    pub heat_wave: String,
    #[builder(default = String::from("Lat"), into)]
    pub latitude: String,
    #[builder(default = String::from("Long"), into)]
    pub longitude: String,
    /// `strftime` format for timestamps that arrive as text. Matched non-exactly,
    /// so a trailing time of day is ignored.
    #[builder(default = String::from("%Y-%m-%d"), into)]
    pub date_format: String,
}

impl Default for SourceColumns {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl SourceColumns {
    /// Raw column name paired with the normalized name it is loaded into.
    pub(crate) fn mapping(&self) -> [(&str, &'static str); 9] {
        [
            (self.city.as_str(), names::CITY),
            (self.timestamp.as_str(), names::TIMESTAMP),
            (self.year.as_str(), names::YEAR),
            (self.temp_max.as_str(), names::TEMP_MAX),
            (self.temp_med.as_str(), names::TEMP_MED),
            (self.temp_min.as_str(), names::TEMP_MIN),
            (self.heat_wave.as_str(), names::HEAT_WAVE),
            (self.latitude.as_str(), names::LATITUDE),
            (self.longitude.as_str(), names::LONGITUDE),
        ]
    }
}

/// File format of a dataset source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SourceFormat {
    /// Comma separated values with a header row.
    Csv,
    /// Apache Parquet.
    Parquet,
}

impl SourceFormat {
    /// Infers the format from the file extension (`.csv`, `.parquet`, `.pq`), case-insensitively.
    pub fn from_path(path: &Path) -> Option<Self> {
        let extension = path.extension()?.to_str()?.to_ascii_lowercase();
        match extension.as_str() {
            "csv" => Some(SourceFormat::Csv),
            "parquet" | "pq" => Some(SourceFormat::Parquet),
            _ => None,
        }
    }
}

impl fmt::Display for SourceFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SourceFormat::Csv => write!(f, "csv"),
            SourceFormat::Parquet => write!(f, "parquet"),
        }
    }
}
