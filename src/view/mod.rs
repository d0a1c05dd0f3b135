pub mod error;
pub mod kind;
pub mod selection;
pub mod series;
