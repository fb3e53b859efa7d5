//! Timing harness producing samples for the sorting preset.

mod sorts;

pub use sorts::{MERGE_THRESHOLD, SortAlgorithm, insertion_sort, merge_sort};

use crate::errors::AnalysisError;
use crate::types::Sample;
use crate::utils::num::u64_to_usize;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::time::Instant;

#[derive(Debug, Clone)]
pub struct MeasureOptions {
    pub algorithms: Vec<SortAlgorithm>,
    pub sizes: Vec<u64>,
    pub trials: usize,
    pub seed: u64,
    /// Inputs are drawn uniformly from `-max_value..=max_value`.
    pub max_value: i64,
}

impl Default for MeasureOptions {
    fn default() -> Self {
        Self {
            algorithms: SortAlgorithm::ALL.to_vec(),
            sizes: vec![1_000, 2_000, 4_000, 8_000],
            trials: 3,
            seed: 0,
            max_value: 1_000_000,
        }
    }
}

fn random_input(rng: &mut StdRng, len: usize, max_value: i64) -> Vec<i64> {
    (0..len).map(|_| rng.random_range(-max_value..=max_value)).collect()
}

/// Time every algorithm on the same random inputs.
///
/// One input vector is drawn per (size, trial) and every algorithm sorts its
/// own copy, so algorithms are compared on identical data.
///
/// # Errors
/// `InvalidArgument` for empty sizes/algorithms, zero trials or sizes that do
/// not fit in memory; `Measurement` if an algorithm leaves its input unsorted.
pub fn run_campaign(opts: &MeasureOptions) -> Result<Vec<Sample>, AnalysisError> {
    if opts.algorithms.is_empty() || opts.sizes.is_empty() {
        return Err(AnalysisError::invalid_argument("measure needs at least one algorithm and one size"));
    }
    if opts.trials == 0 {
        return Err(AnalysisError::invalid_argument("trials must be at least 1"));
    }
    if opts.max_value < 0 {
        return Err(AnalysisError::invalid_argument("max_value must be non-negative"));
    }
    let mut rng = StdRng::seed_from_u64(opts.seed);
    let mut samples = Vec::with_capacity(opts.sizes.len() * opts.trials * opts.algorithms.len());
    for &size in &opts.sizes {
        let len = u64_to_usize(size)
            .ok_or_else(|| AnalysisError::invalid_argument(format!("size {size} too large")))?;
        for _ in 0..opts.trials {
            let input = random_input(&mut rng, len, opts.max_value);
            for &algo in &opts.algorithms {
                let mut v = input.clone();
                let start = Instant::now();
                algo.sort(&mut v);
                let secs = start.elapsed().as_secs_f64();
                if !v.is_sorted() {
                    return Err(AnalysisError::Measurement(format!("{algo} left {size} elements unsorted")));
                }
                samples.push(Sample::new(algo.name(), size, secs));
            }
        }
        log::info!("measure: size={size} done ({} samples so far)", samples.len());
    }
    Ok(samples)
}
