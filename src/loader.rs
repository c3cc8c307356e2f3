use crate::stats::PairedDataset;
use anyhow::{Context, Result, bail};
use csv::ReaderBuilder;
use std::{fs::File, io::BufReader, path::Path};

/// Load a two-column CSV file into a [`PairedDataset`].
///
/// The file must have a single header row followed by rows of the form
/// `data,hash`. Both fields are parsed as numbers; any malformed row
/// aborts the load.
pub fn load_dataset<P: AsRef<Path>>(file: P) -> Result<PairedDataset> {
    let file = file.as_ref();
    let file = File::open(file).with_context(|| format!("failed to open {file:?}"))?;
    let reader = BufReader::new(file);

    let mut csv_reader = ReaderBuilder::new().has_headers(true).from_reader(reader);

    let mut data_vals = Vec::new();
    let mut hash_vals = Vec::new();
    for (i_row, record) in csv_reader.records().enumerate() {
        let record = record.with_context(|| format!("failed to read row {i_row}"))?;
        let (data, hash) = parse_row(&record).with_context(|| format!("invalid row {i_row}"))?;
        data_vals.push(data);
        hash_vals.push(hash);
    }

    let dataset = PairedDataset::new(data_vals, hash_vals)?;
    log::info!("loaded {} pairs", dataset.len());

    Ok(dataset)
}

fn parse_row(record: &csv::StringRecord) -> Result<(f64, f64)> {
    let n_fields = record.len();
    if n_fields != 2 {
        bail!("row must have 2 fields, but has {n_fields}");
    }

    let data: f64 = record[0]
        .trim()
        .parse()
        .with_context(|| format!("failed to parse data field {:?}", &record[0]))?;
    let hash: f64 = record[1]
        .trim()
        .parse()
        .with_context(|| format!("failed to parse hash field {:?}", &record[1]))?;

    Ok((data, hash))
}
