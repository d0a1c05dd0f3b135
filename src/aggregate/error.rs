use polars::error::PolarsError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AggregateError {
    // Raised when there is nothing to compute a baseline from.
    #[error("Unknown city '{0}': no observations in the dataset")]
    UnknownCity(String),

    #[error("No observations for city '{city}' in {year}")]
    NoObservations { city: String, year: i32 },

    #[error("Required column '{0}' not found in DataFrame")]
    ColumnNotFound(String, #[source] PolarsError),

    #[error("Unexpected data in column '{column}': {message}")]
    UnexpectedData { column: String, message: String },

    #[error("Failed processing DataFrame: {0}")]
    Polars(#[from] PolarsError),
}
