mod csv;
mod options;

pub use self::csv::{read_samples, write_samples};
pub use options::{ColumnNames, CsvOptions, LoadOptions};

use crate::errors::AnalysisError;
use crate::types::Sample;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

/// Load samples from a CSV file.
///
/// # Errors
/// Returns I/O errors on read failures, `MissingColumn` when a required header
/// is absent and `MalformedRow` for the first unparsable row.
pub fn load_file<P: AsRef<Path>>(path: P, opts: &LoadOptions) -> Result<Vec<Sample>, AnalysisError> {
    log::info!("load: path={}", path.as_ref().display());
    let file = File::open(&path)?;
    let samples = load_from_reader(BufReader::new(file), opts)?;
    log::info!("load: {} samples from {}", samples.len(), path.as_ref().display());
    Ok(samples)
}

/// Load samples from an arbitrary reader.
///
/// # Errors
/// Same as [`load_file`], minus the open.
pub fn load_from_reader<R: Read>(reader: R, opts: &LoadOptions) -> Result<Vec<Sample>, AnalysisError> {
    read_samples(reader, opts)
}

/// Write samples to `path` atomically.
///
/// # Errors
/// Returns an error if the destination cannot be created or the write/persist fails.
pub fn save_samples<P: AsRef<Path>>(path: P, samples: &[Sample], opts: &LoadOptions) -> Result<(), AnalysisError> {
    log::info!("save: {} samples to {}", samples.len(), path.as_ref().display());
    crate::fsutil::write_atomically(path.as_ref(), |w| write_samples(w, samples, opts))
}
