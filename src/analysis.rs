//! Constants test (regression) and ratio test over aggregated benchmark points.

use crate::aggregate::{AggregatedTable, aggregate};
use crate::errors::AnalysisError;
use crate::hypothesis::{Hypothesis, HypothesisTable};
use crate::stats::linregress;
use crate::types::{AggregatedPoint, FitReport, RatioPoint, RatioSeries, Sample};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// What to do with algorithms present in the data but absent from the hypothesis table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnknownAlgorithmPolicy {
    /// Drop them from the analysis and log a warning.
    #[default]
    Skip,
    /// Fail the run, naming every unknown algorithm.
    Reject,
}

impl FromStr for UnknownAlgorithmPolicy {
    type Err = AnalysisError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "skip" => Ok(Self::Skip),
            "reject" | "strict" => Ok(Self::Reject),
            other => Err(AnalysisError::invalid_argument(format!("unknown policy: {other}"))),
        }
    }
}

/// Regression of mean time on `hypothesis(input_size)` for one algorithm's points.
///
/// No points gives a report without regression.
///
/// # Errors
/// `DegenerateFit` when every hypothesis value is the same (one point included),
/// when the hypothesis is not finite at some size (`n log n` or `log n` at 0,
/// `2^n` past the `f64` range), or when the moments of the fit overflow.
pub fn fit_mode(algorithm: &str, points: &[AggregatedPoint], hypothesis: &Hypothesis) -> Result<FitReport, AnalysisError> {
    let mut pairs: Vec<(f64, f64)> = Vec::with_capacity(points.len());
    for p in points {
        let h = hypothesis.eval(p.input_size);
        if !h.is_finite() {
            return Err(AnalysisError::DegenerateFit {
                algorithm: algorithm.to_string(),
                reason: format!("hypothesis is {h} at input size {}", p.input_size),
            });
        }
        pairs.push((h, p.mean_measured_time));
    }
    let regression = if pairs.is_empty() {
        None
    } else {
        let (x, y): (Vec<f64>, Vec<f64>) = pairs.iter().copied().unzip();
        Some(linregress(&x, &y).map_err(|f| f.into_error(algorithm))?)
    };
    Ok(FitReport {
        algorithm: algorithm.to_string(),
        label: hypothesis.label.clone(),
        points: pairs,
        regression,
    })
}

/// `mean / hypothesis(input_size)` for one algorithm's points, ascending by size.
///
/// # Errors
/// `NonPositiveHypothesis` for the first size where the hypothesis is not a
/// strictly positive finite number.
pub fn ratio_mode(algorithm: &str, points: &[AggregatedPoint], hypothesis: &Hypothesis) -> Result<RatioSeries, AnalysisError> {
    let mut sorted: Vec<&AggregatedPoint> = points.iter().collect();
    sorted.sort_by_key(|p| p.input_size);
    let mut out = Vec::with_capacity(sorted.len());
    for p in sorted {
        let h = hypothesis.eval(p.input_size);
        if !(h.is_finite() && h > 0.0) {
            return Err(AnalysisError::NonPositiveHypothesis {
                algorithm: algorithm.to_string(),
                input_size: p.input_size,
                value: h,
            });
        }
        out.push(RatioPoint { input_size: p.input_size, ratio: p.mean_measured_time / h });
    }
    Ok(RatioSeries { algorithm: algorithm.to_string(), label: hypothesis.label.clone(), points: out })
}

/// Result of one per-algorithm computation inside a batch.
#[derive(Debug)]
pub struct AlgorithmOutcome<T> {
    pub algorithm: String,
    pub label: String,
    pub result: Result<T, AnalysisError>,
}

/// Aggregated data restricted to algorithms with a hypothesis.
#[derive(Debug, Clone)]
pub struct Analyzer {
    table: AggregatedTable,
    hypotheses: HypothesisTable,
    skipped: Vec<String>,
}

impl Analyzer {
    /// Aggregate `samples` and apply the unknown-algorithm policy.
    ///
    /// # Errors
    /// `UnknownAlgorithm` under `Reject` when any algorithm lacks a hypothesis.
    pub fn new(samples: &[Sample], hypotheses: HypothesisTable, policy: UnknownAlgorithmPolicy) -> Result<Self, AnalysisError> {
        Self::from_table(&aggregate(samples), hypotheses, policy)
    }

    /// # Errors
    /// Same as [`Analyzer::new`].
    pub fn from_table(table: &AggregatedTable, hypotheses: HypothesisTable, policy: UnknownAlgorithmPolicy) -> Result<Self, AnalysisError> {
        let skipped: Vec<String> = table
            .algorithms()
            .into_iter()
            .filter(|a| !hypotheses.contains(a))
            .map(str::to_string)
            .collect();
        if !skipped.is_empty() {
            match policy {
                UnknownAlgorithmPolicy::Reject => return Err(AnalysisError::UnknownAlgorithm(skipped)),
                UnknownAlgorithmPolicy::Skip => {
                    log::warn!("skipping algorithms without hypothesis: {}", skipped.join(", "));
                }
            }
        }
        let kept: AggregatedTable = table
            .points()
            .iter()
            .filter(|p| hypotheses.contains(&p.algorithm))
            .cloned()
            .collect();
        Ok(Self { table: kept, hypotheses, skipped })
    }

    #[must_use]
    pub fn table(&self) -> &AggregatedTable {
        &self.table
    }

    #[must_use]
    pub fn hypotheses(&self) -> &HypothesisTable {
        &self.hypotheses
    }

    /// Algorithms dropped under the `Skip` policy, sorted.
    #[must_use]
    pub fn skipped(&self) -> &[String] {
        &self.skipped
    }

    /// Algorithms with data, in hypothesis-table order.
    #[must_use]
    pub fn algorithms(&self) -> Vec<&str> {
        self.hypotheses
            .iter()
            .map(|(name, _)| name)
            .filter(|name| !self.table.for_algorithm(name).is_empty())
            .collect()
    }

    fn hypothesis(&self, algorithm: &str) -> Result<&Hypothesis, AnalysisError> {
        self.hypotheses
            .get(algorithm)
            .ok_or_else(|| AnalysisError::UnknownAlgorithm(vec![algorithm.to_string()]))
    }

    /// # Errors
    /// `UnknownAlgorithm` if `algorithm` has no hypothesis, else see [`fit_mode`].
    pub fn fit_mode(&self, algorithm: &str) -> Result<FitReport, AnalysisError> {
        let h = self.hypothesis(algorithm)?;
        fit_mode(algorithm, self.table.for_algorithm(algorithm), h)
    }

    /// # Errors
    /// `UnknownAlgorithm` if `algorithm` has no hypothesis, else see [`ratio_mode`].
    pub fn ratio_mode(&self, algorithm: &str) -> Result<RatioSeries, AnalysisError> {
        let h = self.hypothesis(algorithm)?;
        ratio_mode(algorithm, self.table.for_algorithm(algorithm), h)
    }

    fn run_all<T>(&self, op: impl Fn(&str) -> Result<T, AnalysisError>) -> Vec<AlgorithmOutcome<T>> {
        self.algorithms()
            .into_iter()
            .map(|algorithm| {
                let result = op(algorithm);
                match &result {
                    Err(e) if e.is_per_algorithm() => log::warn!("{algorithm}: {e}"),
                    Err(e) => log::error!("{algorithm}: {e}"),
                    Ok(_) => {}
                }
                AlgorithmOutcome {
                    algorithm: algorithm.to_string(),
                    label: self.hypotheses.get(algorithm).map(|h| h.label.clone()).unwrap_or_default(),
                    result,
                }
            })
            .collect()
    }

    /// Constants test for every algorithm with data; failures stay per algorithm.
    #[must_use]
    pub fn fit_all(&self) -> Vec<AlgorithmOutcome<FitReport>> {
        self.run_all(|a| self.fit_mode(a))
    }

    /// Ratio test for every algorithm with data; failures stay per algorithm.
    #[must_use]
    pub fn ratio_all(&self) -> Vec<AlgorithmOutcome<RatioSeries>> {
        self.run_all(|a| self.ratio_mode(a))
    }
}
