mod loader;
mod report;
mod stats;

use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(version, about)]
struct CLI {
    /// CSV file with a header row followed by `data,hash` rows
    data_file: PathBuf,

    /// Optional file to save the results to as JSON
    #[arg(long)]
    results_file: Option<PathBuf>,
}

fn main() {
    env_logger::Builder::new()
        .format_timestamp_millis()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    if let Err(error) = run_cli() {
        log::error!("{error:#?}");
        std::process::exit(1);
    }
}

fn run_cli() -> Result<()> {
    let args = CLI::parse();
    log::info!("{args:#?}");

    let dataset = loader::load_dataset(&args.data_file)
        .with_context(|| format!("failed to load {:?}", args.data_file))?;

    let result = dataset.compute().context("failed to compute statistics")?;

    report::print_result(&result);

    if let Some(results_file) = &args.results_file {
        report::save_result(&result, results_file)
            .with_context(|| format!("failed to save {results_file:?}"))?;
        log::info!("saved {results_file:?}");
    }

    Ok(())
}
