use crate::stats::StatsResult;
use anyhow::{Context, Result};
use std::{fs::File, io::BufWriter, path::Path};

/// Print a [`StatsResult`] to stdout, one labelled line per statistic.
pub fn print_result(result: &StatsResult) {
    println!("Input data average: {}", result.mean_x);
    println!("Hashes average: {}", result.mean_y);
    println!("Standard deviation input data: {}", result.std_dev_x);
    println!("Standard deviation hashes: {}", result.std_dev_y);
    println!("Correlation coefficient: {}", result.correlation);
}

/// Save a [`StatsResult`] as pretty-printed JSON.
pub fn save_result<P: AsRef<Path>>(result: &StatsResult, file: P) -> Result<()> {
    let file = file.as_ref();
    let file = File::create(file).with_context(|| format!("failed to create {file:?}"))?;
    let writer = BufWriter::new(file);

    serde_json::to_writer_pretty(writer, result).context("failed to serialize result")?;
    Ok(())
}
