//! Reads a raw dataset source into a polars `DataFrame` and normalizes it to the
//! crate's column names and types.

use crate::dataset::columns::{names, SourceColumns, SourceFormat};
use crate::dataset::error::LoadError;
use log::{debug, info, warn};
use polars::prelude::*;
use std::fs::File;
use std::path::Path;

/// Number of rows polars samples to infer CSV column types.
const CSV_INFER_SCHEMA_ROWS: usize = 10_000;

/// Reads the source file into an un-normalized `DataFrame`.
pub(crate) fn read_source(path: &Path, format: SourceFormat) -> Result<DataFrame, LoadError> {
    let metadata =
        std::fs::metadata(path).map_err(|e| LoadError::SourceOpen(path.to_path_buf(), e))?;
    if !metadata.is_file() {
        return Err(LoadError::SourceOpen(
            path.to_path_buf(),
            std::io::Error::new(std::io::ErrorKind::InvalidInput, "not a regular file"),
        ));
    }

    info!("Reading {} source {:?}", format, path);
    match format {
        SourceFormat::Csv => read_csv(path),
        SourceFormat::Parquet => read_parquet(path),
    }
}

fn read_csv(path: &Path) -> Result<DataFrame, LoadError> {
    CsvReadOptions::default()
        .with_has_header(true)
        .with_infer_schema_length(Some(CSV_INFER_SCHEMA_ROWS))
        .try_into_reader_with_file_path(Some(path.to_path_buf()))
        .map_err(|e| LoadError::CsvRead {
            path: path.to_path_buf(),
            source: e,
        })?
        .finish()
        .map_err(|e| LoadError::CsvRead {
            path: path.to_path_buf(),
            source: e,
        })
}

fn read_parquet(path: &Path) -> Result<DataFrame, LoadError> {
    let file = File::open(path).map_err(|e| LoadError::SourceOpen(path.to_path_buf(), e))?;
    ParquetReader::new(file)
        .finish()
        .map_err(|e| LoadError::ParquetRead {
            path: path.to_path_buf(),
            source: e,
        })
}

/// Selects, renames and casts the raw columns into the normalized schema.
///
/// * `timestamp` becomes a `Date`. CSV dates are read as text and always parsed with
///   `columns.date_format`; Parquet datetimes are truncated to their date.
/// * `is_heat_wave_day` is `true` only where the raw value, rendered as text and
///   uppercased, equals `"TRUE"`. Nulls and every other value become `false`.
/// * Any other required column holding nulls (or values that fail to cast) is rejected.
pub(crate) fn normalize_frame(
    raw: DataFrame,
    columns: &SourceColumns,
) -> Result<DataFrame, LoadError> {
    for (raw_name, _) in columns.mapping() {
        if raw.column(raw_name).is_err() {
            return Err(LoadError::MissingColumn(raw_name.to_string()));
        }
    }

    let timestamp = timestamp_expr(&raw, columns)?;
    let heat_wave = col(columns.heat_wave.as_str())
        .cast(DataType::String)
        .str()
        .to_uppercase()
        .eq(lit("TRUE"))
        .fill_null(lit(false));

    let normalized = raw
        .lazy()
        .select([
            col(columns.city.as_str())
                .cast(DataType::String)
                .alias(names::CITY),
            timestamp.alias(names::TIMESTAMP),
            col(columns.year.as_str())
                .cast(DataType::Int32)
                .alias(names::YEAR),
            col(columns.temp_max.as_str())
                .cast(DataType::Float64)
                .alias(names::TEMP_MAX),
            col(columns.temp_med.as_str())
                .cast(DataType::Float64)
                .alias(names::TEMP_MED),
            col(columns.temp_min.as_str())
                .cast(DataType::Float64)
                .alias(names::TEMP_MIN),
            heat_wave.alias(names::HEAT_WAVE),
            col(columns.latitude.as_str())
                .cast(DataType::Float64)
                .alias(names::LATITUDE),
            col(columns.longitude.as_str())
                .cast(DataType::Float64)
                .alias(names::LONGITUDE),
        ])
        .collect()
        .map_err(LoadError::Normalize)?;

    for (raw_name, normalized_name) in columns.mapping() {
        let count = normalized
            .column(normalized_name)
            .map_err(LoadError::Normalize)?
            .null_count();
        if count > 0 {
            warn!("Column '{}' has {} null value(s) after normalization", raw_name, count);
            return Err(LoadError::NullValues {
                column: raw_name.to_string(),
                count,
            });
        }
    }

    if normalized.height() == 0 {
        return Err(LoadError::EmptySource);
    }

    warn_on_moving_cities(&normalized)?;
    debug!("Normalized {} observations", normalized.height());
    Ok(normalized)
}

fn timestamp_expr(raw: &DataFrame, columns: &SourceColumns) -> Result<Expr, LoadError> {
    let name = columns.timestamp.as_str();
    let dtype = raw
        .column(name)
        .map_err(|_| LoadError::MissingColumn(name.to_string()))?
        .dtype()
        .clone();

    match dtype {
        DataType::Date => Ok(col(name)),
        DataType::Datetime(_, _) => Ok(col(name).cast(DataType::Date)),
        DataType::String => Ok(col(name).str().to_date(StrptimeOptions {
            format: Some(columns.date_format.as_str().into()),
            strict: false,
            exact: false,
            cache: true,
        })),
        found => Err(LoadError::ColumnType {
            column: name.to_string(),
            found,
            expected: "date, datetime or text",
        }),
    }
}

/// Every city is expected to sit at one fixed coordinate. The map keeps the first
/// one it sees, so a city that moves is only reported.
fn warn_on_moving_cities(normalized: &DataFrame) -> Result<(), LoadError> {
    let moving = normalized
        .clone()
        .lazy()
        .group_by([col(names::CITY)])
        .agg([
            col(names::LATITUDE).min().alias("lat_min"),
            col(names::LATITUDE).max().alias("lat_max"),
            col(names::LONGITUDE).min().alias("lon_min"),
            col(names::LONGITUDE).max().alias("lon_max"),
        ])
        .filter(
            col("lat_min")
                .neq(col("lat_max"))
                .or(col("lon_min").neq(col("lon_max"))),
        )
        .collect()
        .map_err(LoadError::Normalize)?;

    let cities = moving
        .column(names::CITY)
        .and_then(|c| c.str())
        .map_err(LoadError::Normalize)?;
    for city in cities.into_iter().flatten() {
        warn!(
            "City '{}' has more than one coordinate pair; its map marker uses the first",
            city
        );
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const HEADER: &str = "cidade,index,year,tempMax,tempMed,tempMin,isHW,Lat,Long";

    fn csv_file(rows: &[&str]) -> NamedTempFile {
        let mut file = tempfile::Builder::new()
            .suffix(".csv")
            .tempfile()
            .expect("temp file");
        writeln!(file, "{}", HEADER).expect("write header");
        for row in rows {
            writeln!(file, "{}", row).expect("write row");
        }
        file.flush().expect("flush");
        file
    }

    fn heat_wave_flags(df: &DataFrame) -> Vec<bool> {
        df.column(names::HEAT_WAVE)
            .unwrap()
            .bool()
            .unwrap()
            .into_iter()
            .map(|v| v.unwrap())
            .collect()
    }

    #[test]
    fn test_normalize_csv_schema() -> Result<(), Box<dyn std::error::Error>> {
        let file = csv_file(&[
            "Recife,2020-01-05,2020,34.0,30.0,26.0,TRUE,-8.05,-34.9",
            "Recife,2020-01-06,2020,31.0,27.0,23.0,FALSE,-8.05,-34.9",
        ]);
        let raw = read_source(file.path(), SourceFormat::Csv)?;
        let df = normalize_frame(raw, &SourceColumns::default())?;

        assert_eq!(df.height(), 2);
        assert_eq!(df.column(names::TIMESTAMP)?.dtype(), &DataType::Date);
        assert_eq!(df.column(names::YEAR)?.dtype(), &DataType::Int32);
        assert_eq!(df.column(names::TEMP_MED)?.dtype(), &DataType::Float64);
        assert_eq!(df.column(names::HEAT_WAVE)?.dtype(), &DataType::Boolean);
        Ok(())
    }

    #[test]
    fn test_heat_wave_flag_normalization() -> Result<(), Box<dyn std::error::Error>> {
        let raw = df!(
            "cidade" => ["A", "A", "A", "A", "A", "A", "A"],
            "index" => ["2020-01-01", "2020-01-02", "2020-01-03", "2020-01-04", "2020-01-05", "2020-01-06", "2020-01-07"],
            "year" => [2020i32; 7],
            "tempMax" => [30.0f64; 7],
            "tempMed" => [25.0f64; 7],
            "tempMin" => [20.0f64; 7],
            "isHW" => ["TRUE", "true", "True", "false", "1", "yes", ""],
            "Lat" => [1.0f64; 7],
            "Long" => [2.0f64; 7],
        )?;
        let df = normalize_frame(raw, &SourceColumns::default())?;
        assert_eq!(
            heat_wave_flags(&df),
            vec![true, true, true, false, false, false, false]
        );
        Ok(())
    }

    #[test]
    fn test_heat_wave_flag_from_booleans_and_nulls() -> Result<(), Box<dyn std::error::Error>> {
        let raw = df!(
            "cidade" => ["A", "A", "A"],
            "index" => ["2020-01-01", "2020-01-02", "2020-01-03"],
            "year" => [2020i32; 3],
            "tempMax" => [30.0f64; 3],
            "tempMed" => [25.0f64; 3],
            "tempMin" => [20.0f64; 3],
            "isHW" => [Some(true), Some(false), None],
            "Lat" => [1.0f64; 3],
            "Long" => [2.0f64; 3],
        )?;
        let df = normalize_frame(raw, &SourceColumns::default())?;
        assert_eq!(heat_wave_flags(&df), vec![true, false, false]);
        Ok(())
    }

    #[test]
    fn test_text_timestamps_with_time_of_day() -> Result<(), Box<dyn std::error::Error>> {
        let raw = df!(
            "cidade" => ["A"],
            "index" => ["2021-03-04 00:00:00"],
            "year" => [2021i32],
            "tempMax" => [30.0f64],
            "tempMed" => [25.0f64],
            "tempMin" => [20.0f64],
            "isHW" => ["TRUE"],
            "Lat" => [1.0f64],
            "Long" => [2.0f64],
        )?;
        let df = normalize_frame(raw, &SourceColumns::default())?;
        assert_eq!(df.column(names::TIMESTAMP)?.dtype(), &DataType::Date);
        assert_eq!(df.column(names::TIMESTAMP)?.null_count(), 0);
        Ok(())
    }

    #[test]
    fn test_csv_dates_follow_configured_format() -> Result<(), Box<dyn std::error::Error>> {
        // Both rows read as a valid date under either day/month order.
        let file = csv_file(&[
            "Recife,02/01/2020,2020,34.0,30.0,26.0,TRUE,-8.05,-34.9",
            "Recife,03/01/2020,2020,31.0,27.0,23.0,TRUE,-8.05,-34.9",
        ]);
        let columns = SourceColumns::builder().date_format("%m/%d/%Y").build();
        let raw = read_source(file.path(), SourceFormat::Csv)?;
        let df = normalize_frame(raw, &columns)?;

        let months: Vec<Option<u32>> = df
            .clone()
            .lazy()
            .select([col(names::TIMESTAMP).dt().month().cast(DataType::UInt32)])
            .collect()?
            .column(names::TIMESTAMP)?
            .u32()?
            .into_iter()
            .collect();
        assert_eq!(months, vec![Some(2), Some(3)]);
        Ok(())
    }

    #[test]
    fn test_missing_column_is_rejected() {
        let file = NamedTempFile::new().expect("temp file");
        std::fs::write(
            file.path(),
            "cidade,index,year,tempMax,tempMed,tempMin,Lat,Long\nRecife,2020-01-05,2020,34.0,30.0,26.0,-8.05,-34.9\n",
        )
        .expect("write csv");

        let raw = read_source(file.path(), SourceFormat::Csv).expect("readable csv");
        let result = normalize_frame(raw, &SourceColumns::default());
        match result {
            Err(LoadError::MissingColumn(column)) => assert_eq!(column, "isHW"),
            other => panic!("Expected MissingColumn, got {:?}", other.map(|df| df.height())),
        }
    }

    #[test]
    fn test_null_temperature_is_rejected() {
        let file = csv_file(&[
            "Recife,2020-01-05,2020,34.0,,26.0,TRUE,-8.05,-34.9",
            "Recife,2020-01-06,2020,31.0,27.0,23.0,FALSE,-8.05,-34.9",
        ]);
        let raw = read_source(file.path(), SourceFormat::Csv).expect("readable csv");
        match normalize_frame(raw, &SourceColumns::default()) {
            Err(LoadError::NullValues { column, count }) => {
                assert_eq!(column, "tempMed");
                assert_eq!(count, 1);
            }
            other => panic!("Expected NullValues, got {:?}", other.map(|df| df.height())),
        }
    }

    #[test]
    fn test_header_only_source_is_empty() {
        let file = csv_file(&[]);
        let result = read_source(file.path(), SourceFormat::Csv)
            .and_then(|raw| normalize_frame(raw, &SourceColumns::default()));
        assert!(result.is_err(), "A source without rows must not load");
    }

    #[test]
    fn test_missing_file_is_source_open_error() {
        let result = read_source(Path::new("/definitely/not/here.csv"), SourceFormat::Csv);
        assert!(matches!(result, Err(LoadError::SourceOpen(_, _))));
    }
}
