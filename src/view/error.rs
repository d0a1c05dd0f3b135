use crate::view::kind::ViewKind;
use thiserror::Error;

/// A selection that does not name an existing part of the dataset.
///
/// Raised by the dashboard before any aggregation runs. The presentation layer shows
/// these as a "no such selection" placeholder instead of a chart.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidSelectionError {
    #[error("The {view} view needs a city to be selected")]
    MissingCity { view: ViewKind },

    #[error("The {view} view needs a year to be selected")]
    MissingYear { view: ViewKind },

    #[error("No such city '{0}'")]
    UnknownCity(String),

    #[error("No such year {0}")]
    UnknownYear(i32),

    #[error("No observations for city '{city}' in {year}")]
    NoObservations { city: String, year: i32 },
}
