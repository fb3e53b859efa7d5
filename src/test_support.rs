#![cfg(test)]

// Test-only builders for sample tables and benchmark files
use crate::types::Sample;
use std::path::{Path, PathBuf};

/// Samples from `(algo, taille, temps)` triples.
pub fn samples(rows: &[(&str, u64, f64)]) -> Vec<Sample> {
    rows.iter().map(|&(a, n, t)| Sample::new(a, n, t)).collect()
}

/// Write `rows` under the default header to `dir/name` and return the path.
pub fn write_bench_csv(dir: &Path, name: &str, rows: &[(&str, u64, f64)]) -> PathBuf {
    let mut body = String::from("algo,taille,temps\n");
    for (a, n, t) in rows {
        body.push_str(&format!("{a},{n},{t}\n"));
    }
    let path = dir.join(name);
    std::fs::write(&path, body).expect("write bench csv failed");
    path
}
