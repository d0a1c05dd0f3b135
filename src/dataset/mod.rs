pub mod columns;
pub mod error;
pub mod heat_wave_dataset;
mod loader;
