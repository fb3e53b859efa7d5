use crate::aggregate::AggregatedTable;
use crate::errors::AnalysisError;
use crate::fsutil;
use crate::load::ColumnNames;
use std::io::Write;
use std::path::Path;

/// Write the aggregated table as CSV with header `<algo>,<taille>,<temps>,trials`.
///
/// The mean is written under the measured-time column, so the output loads back
/// as one sample per aggregated point.
///
/// # Errors
/// CSV or I/O errors from the writer.
pub fn write_aggregated_csv<W: Write>(writer: W, table: &AggregatedTable, columns: &ColumnNames) -> Result<(), AnalysisError> {
    let mut w = csv::Writer::from_writer(writer);
    w.write_record([
        columns.algorithm.as_str(),
        columns.input_size.as_str(),
        columns.measured_time.as_str(),
        "trials",
    ])?;
    for p in table.points() {
        w.write_record([
            p.algorithm.clone(),
            p.input_size.to_string(),
            format!("{:.9}", p.mean_measured_time),
            p.trials.to_string(),
        ])?;
    }
    w.flush()?;
    Ok(())
}

/// Atomically export the aggregated table to `path`. Returns the number of rows written.
///
/// # Errors
/// Same as [`write_aggregated_csv`], plus temp-file and persist failures.
pub fn export_aggregated(path: &Path, table: &AggregatedTable, columns: &ColumnNames) -> Result<usize, AnalysisError> {
    fsutil::write_atomically(path, |w| write_aggregated_csv(w, table, columns))?;
    log::info!("export: {} aggregated rows -> {}", table.len(), path.display());
    Ok(table.len())
}
