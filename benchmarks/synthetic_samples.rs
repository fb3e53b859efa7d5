use benchcurve::hypothesis::{HypothesisTable, Preset};
use benchcurve::load::{LoadOptions, write_samples};
use benchcurve::types::Sample;
use rand::Rng;
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

const SIZES: [u64; 8] = [1_000, 2_000, 4_000, 8_000, 16_000, 32_000, 64_000, 128_000];
const TRIALS: usize = 5;
/// Time per unit of hypothesis cost, in seconds.
const SCALE: f64 = 1e-8;
/// Multiplicative jitter around the ideal curve.
const NOISE: f64 = 0.05;

fn generate(table: &HypothesisTable) -> Vec<Sample> {
    let mut rng = rand::rng();
    let mut out = Vec::with_capacity(table.len() * SIZES.len() * TRIALS);
    for (algo, h) in table.iter() {
        for &n in &SIZES {
            let ideal = SCALE * h.eval(n) + 1e-6;
            for _ in 0..TRIALS {
                let jitter: f64 = rng.random_range(-NOISE..NOISE);
                out.push(Sample::new(algo, n, ideal * (1.0 + jitter)));
            }
        }
    }
    out
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let csv_path = std::env::args().nth(1).unwrap_or_else(|| "synthetic_samples.csv".to_string());
    let preset: Preset = std::env::args().nth(2).as_deref().unwrap_or("all").parse()?;

    if Path::new(&csv_path).exists() {
        println!("File '{csv_path}' already exists. Skipping generation.");
        return Ok(());
    }
    let samples = generate(&HypothesisTable::preset(preset));
    write_samples(BufWriter::new(File::create(&csv_path)?), &samples, &LoadOptions::default())?;
    println!("Generated {} samples ({preset} preset) at '{csv_path}'.", samples.len());
    Ok(())
}
