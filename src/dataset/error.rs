use polars::error::PolarsError;
use polars::prelude::DataType;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("Failed to open source file '{0}'")]
    SourceOpen(PathBuf, #[source] std::io::Error),

    #[error("Cannot determine the format of '{0}'; expected a .csv or .parquet file")]
    UnsupportedFormat(PathBuf),

    #[error("Failed to read CSV source '{path}'")]
    CsvRead {
        path: PathBuf,
        #[source]
        source: PolarsError,
    },

    #[error("Failed to read Parquet source '{path}'")]
    ParquetRead {
        path: PathBuf,
        #[source]
        source: PolarsError,
    },

    #[error("Required column '{0}' not found in source")]
    MissingColumn(String),

    #[error("Column '{column}' has type {found}, expected {expected}")]
    ColumnType {
        column: String,
        found: DataType,
        expected: &'static str,
    },

    #[error("Column '{column}' contains {count} null or unparsable value(s)")]
    NullValues { column: String, count: usize },

    #[error("Source contains no observations")]
    EmptySource,

    #[error("Failed to normalize source data")]
    Normalize(#[source] PolarsError),

    #[error("Background load task failed to complete")]
    TaskJoin(#[from] tokio::task::JoinError),
}
