use std::path::PathBuf;

use anyhow::Result;
use storage_dispatch::config::{Config, OutputFormat};
use storage_dispatch::{input, optimizer, telemetry};
use tracing::info;

fn main() -> Result<()> {
    telemetry::init_tracing();

    let cfg = Config::load()?;

    // A CSV path on the command line overrides the configured one.
    let path = std::env::args_os()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| cfg.input.path.clone());

    let prices = input::load_price_csv(&path, &cfg.input.price_column)?;
    info!(
        n_steps = prices.len(),
        path = %path.display(),
        "optimizing storage dispatch"
    );

    let schedule = optimizer::optimize(&prices, &cfg.storage)?;

    match cfg.output.format {
        OutputFormat::Table => print!("{}", schedule.render_table()),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&schedule)?),
    }
    Ok(())
}
