//! Report files
//!
//! CSV is the primary result format; JSON is kept for machine consumers.

use std::collections::BTreeMap;
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::application::PredictionResult;
use crate::error::BindigoResult;

/// Create `path` and any missing parents. Returns the path.
pub fn ensure_directory(path: &Path) -> BindigoResult<PathBuf> {
    fs::create_dir_all(path)?;
    Ok(path.to_path_buf())
}

/// Write `rows` as CSV with a header row derived from the field names.
pub fn write_csv<T: Serialize>(path: &Path, rows: &[T]) -> BindigoResult<()> {
    let mut writer = csv::Writer::from_path(path)?;
    for row in rows {
        writer.serialize(row)?;
    }
    writer.flush()?;
    Ok(())
}

/// Read a CSV file into one `header → value` map per row.
pub fn read_csv(path: &Path) -> BindigoResult<Vec<BTreeMap<String, String>>> {
    let mut reader = csv::Reader::from_path(path)?;
    let mut rows = Vec::new();
    for record in reader.deserialize() {
        rows.push(record?);
    }
    Ok(rows)
}

/// Write `value` as pretty-printed JSON.
pub fn write_json<T: Serialize + ?Sized>(path: &Path, value: &T) -> BindigoResult<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    serde_json::to_writer_pretty(&mut writer, value)?;
    writeln!(writer)?;
    writer.flush()?;
    Ok(())
}

pub fn read_json<T: DeserializeOwned>(path: &Path) -> BindigoResult<T> {
    let reader = BufReader::new(File::open(path)?);
    Ok(serde_json::from_reader(reader)?)
}

/// Write the one-row CSV report to the validated output path.
pub fn write_prediction_report(result: &PredictionResult) -> BindigoResult<PathBuf> {
    write_csv(&result.output, std::slice::from_ref(result))?;
    tracing::info!(path = %result.output.display(), "results saved");
    Ok(result.output.clone())
}
