//! Benchmark curve analysis: aggregate timing samples, then compare them to
//! theoretical complexity curves with a regression (constants test) or a
//! normalized ratio (ratio test).

pub mod aggregate;
pub mod analysis;
pub mod cli;
pub mod config;
pub mod errors;
pub mod fsutil;
pub mod hypothesis;
pub mod load;
pub mod logger;
pub mod measure;
pub mod render;
pub mod report;
pub mod stats;
pub mod types;
pub mod utils;

#[cfg(test)]
mod test_support;

pub use aggregate::{AggregatedTable, aggregate};
pub use analysis::{AlgorithmOutcome, Analyzer, UnknownAlgorithmPolicy, fit_mode, ratio_mode};
pub use errors::AnalysisError;
pub use hypothesis::{Growth, Hypothesis, HypothesisTable, Preset};
pub use types::{AggregatedPoint, FitReport, RatioPoint, RatioSeries, RegressionResult, Sample};
