use std::path::{Path, PathBuf};

/// The insertion-sort example: two trials at n=10, one at n=20.
pub const INSERTION_ROWS: &[(&str, u64, f64)] = &[("insertion", 10, 1.0), ("insertion", 10, 3.0), ("insertion", 20, 16.0)];

/// Write `rows` as a benchmark CSV with the default `algo,taille,temps` header.
pub fn write_bench(dir: &Path, name: &str, rows: &[(&str, u64, f64)]) -> PathBuf {
    let mut body = String::from("algo,taille,temps\n");
    for (a, n, t) in rows {
        body.push_str(&format!("{a},{n},{t}\n"));
    }
    let path = dir.join(name);
    std::fs::write(&path, body).unwrap();
    path
}

/// Rows following `time = coef * growth(n)` exactly.
pub fn exact_rows<'a>(algo: &'a str, growth: benchcurve::Growth, coef: f64, sizes: &[u64]) -> Vec<(&'a str, u64, f64)> {
    sizes.iter().map(|&n| (algo, n, coef * growth.eval(n))).collect()
}
