use crate::errors::AnalysisError;
use crate::types::Sample;
use std::io::{Read, Write};

use super::options::{ColumnNames, LoadOptions};

struct ColumnIndex {
    algorithm: usize,
    input_size: usize,
    measured_time: usize,
}

impl ColumnIndex {
    fn resolve(headers: &csv::StringRecord, names: &ColumnNames) -> Result<Self, AnalysisError> {
        let find = |name: &str| headers.iter().position(|h| h == name);
        let wanted = [&names.algorithm, &names.input_size, &names.measured_time];
        let missing: Vec<&str> =
            wanted.iter().filter(|n| find(n).is_none()).map(|n| n.as_str()).collect();
        if !missing.is_empty() {
            return Err(AnalysisError::MissingColumn(missing.join(", ")));
        }
        Ok(Self {
            algorithm: find(&names.algorithm).unwrap_or_default(),
            input_size: find(&names.input_size).unwrap_or_default(),
            measured_time: find(&names.measured_time).unwrap_or_default(),
        })
    }
}

fn field<'r>(rec: &'r csv::StringRecord, idx: usize, row: usize, column: &str) -> Result<&'r str, AnalysisError> {
    rec.get(idx).ok_or_else(|| AnalysisError::MalformedRow {
        row,
        column: column.to_string(),
        value: String::new(),
    })
}

fn parse_row(rec: &csv::StringRecord, idx: &ColumnIndex, names: &ColumnNames, row: usize) -> Result<Sample, AnalysisError> {
    let malformed = |column: &str, value: &str| AnalysisError::MalformedRow {
        row,
        column: column.to_string(),
        value: value.to_string(),
    };
    let algorithm = field(rec, idx.algorithm, row, &names.algorithm)?;
    if algorithm.is_empty() {
        return Err(malformed(&names.algorithm, algorithm));
    }
    let size_raw = field(rec, idx.input_size, row, &names.input_size)?;
    let input_size = size_raw.parse::<u64>().map_err(|_| malformed(&names.input_size, size_raw))?;
    let time_raw = field(rec, idx.measured_time, row, &names.measured_time)?;
    let measured_time = time_raw
        .parse::<f64>()
        .ok()
        .filter(|t| t.is_finite() && *t >= 0.0)
        .ok_or_else(|| malformed(&names.measured_time, time_raw))?;
    Ok(Sample::new(algorithm, input_size, measured_time))
}

/// Read every sample from a headed CSV stream. Fails on the first bad row.
pub fn read_samples<R: Read>(reader: R, opts: &LoadOptions) -> Result<Vec<Sample>, AnalysisError> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .delimiter(opts.csv.delimiter)
        .trim(if opts.csv.trim { csv::Trim::All } else { csv::Trim::None })
        .from_reader(reader);
    let headers = rdr.headers()?.clone();
    let idx = ColumnIndex::resolve(&headers, &opts.columns)?;
    let mut samples = Vec::new();
    for (i, rec) in rdr.records().enumerate() {
        let rec = rec?;
        samples.push(parse_row(&rec, &idx, &opts.columns, i + 1)?);
    }
    Ok(samples)
}

/// Write samples with a header row in the loader's format.
pub fn write_samples<W: Write>(writer: W, samples: &[Sample], opts: &LoadOptions) -> Result<(), AnalysisError> {
    let mut w = csv::WriterBuilder::new().delimiter(opts.csv.delimiter).from_writer(writer);
    let cols = &opts.columns;
    w.write_record([&cols.algorithm, &cols.input_size, &cols.measured_time])?;
    for s in samples {
        w.write_record([s.algorithm.clone(), s.input_size.to_string(), format!("{:.9}", s.measured_time)])?;
    }
    w.flush()?;
    Ok(())
}
