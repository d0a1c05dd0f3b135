use crate::aggregate::error::AggregateError;
use crate::dataset::error::LoadError;
use crate::view::error::InvalidSelectionError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum HeatWaveError {
    #[error(transparent)]
    Load(#[from] LoadError),

    #[error(transparent)]
    Selection(#[from] InvalidSelectionError),

    #[error(transparent)]
    Aggregate(#[from] AggregateError),
}

impl HeatWaveError {
    /// Whether this is a rejected selection, shown as "no such selection" rather than a failure.
    pub fn is_selection_rejection(&self) -> bool {
        matches!(self, HeatWaveError::Selection(_))
    }
}
