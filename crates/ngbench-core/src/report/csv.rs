//! CSV result table, one row per (model, prompt) pair.

use crate::model::BenchRecord;
use anyhow::Context;
use std::path::Path;

/// Column order of the result table.
const HEADER: [&str; 5] = [
    "model",
    "prompt",
    "generated_code",
    "evaluation_score",
    "generation_time",
];

/// Write all records to `path`, overwriting any existing file.
///
/// An empty slice still produces the header row.
pub fn write_csv(records: &[BenchRecord], path: &Path) -> anyhow::Result<()> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_path(path)
        .with_context(|| format!("failed to open {} for writing", path.display()))?;

    writer.write_record(HEADER)?;
    for record in records {
        writer.serialize(record)?;
    }
    writer
        .flush()
        .with_context(|| format!("failed to flush {}", path.display()))?;
    Ok(())
}

/// Read a result table back. Counterpart of [`write_csv`].
pub fn read_csv(path: &Path) -> anyhow::Result<Vec<BenchRecord>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_path(path)
        .with_context(|| format!("failed to open {}", path.display()))?;

    let mut records = Vec::new();
    for row in reader.deserialize() {
        let record: BenchRecord =
            row.with_context(|| format!("malformed row in {}", path.display()))?;
        records.push(record);
    }
    Ok(records)
}
