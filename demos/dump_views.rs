//! demos/dump_views.rs
//!
//! Loads a climate CSV (or Parquet) file and prints every dashboard view for the
//! initial selection as JSON, the way a web front end would receive it.
//!
//! To run this demo:
//! RUST_LOG=debug cargo run --example dump_views -- banco_dados_climaticos.csv [city] [year]

use heatwave::{Dashboard, HeatWaveDataset, Selection, SourceColumns, ViewKind};
use std::env;
use std::error::Error;
use std::path::PathBuf;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let mut args = env::args().skip(1);
    let path: PathBuf = args
        .next()
        .ok_or("usage: dump_views <data file> [city] [year]")?
        .into();

    let dataset = HeatWaveDataset::open(path, SourceColumns::default()).await?;
    let dashboard = Dashboard::new(dataset)?;

    let mut selection = Selection::initial(dashboard.dataset()).unwrap_or_default();
    if let Some(city) = args.next() {
        selection.city = Some(city);
    }
    if let Some(year) = args.next() {
        selection.year = Some(year.parse()?);
    }

    println!("{}", serde_json::to_string_pretty(&dashboard.controls())?);
    for view in ViewKind::ALL {
        match dashboard.render_selection(view, &selection) {
            Ok(series) => println!("{}", serde_json::to_string_pretty(&series)?),
            Err(e) if e.is_selection_rejection() => println!("{view}: no such selection ({e})"),
            Err(e) => return Err(e.into()),
        }
    }

    Ok(())
}
