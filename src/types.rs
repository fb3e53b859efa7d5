use serde::{Deserialize, Serialize};

pub type AlgorithmName = String;
pub type InputSize = u64;

/// One measured trial of an algorithm at one input size.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Sample {
    pub algorithm: AlgorithmName,
    pub input_size: InputSize,
    pub measured_time: f64,
}

impl Sample {
    #[must_use]
    pub fn new(algorithm: impl Into<AlgorithmName>, input_size: InputSize, measured_time: f64) -> Self {
        Self { algorithm: algorithm.into(), input_size, measured_time }
    }
}

/// Mean measured time for one algorithm at one input size.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct AggregatedPoint {
    pub algorithm: AlgorithmName,
    pub input_size: InputSize,
    pub mean_measured_time: f64,
    pub trials: usize,
}

/// Ordinary least-squares fit of mean time against a hypothesis value.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct RegressionResult {
    pub slope: f64,
    pub intercept: f64,
    pub correlation_coefficient: f64,
    pub p_value: f64,
    /// Standard error of the slope.
    pub standard_error: f64,
    pub intercept_stderr: f64,
    pub points: usize,
}

impl RegressionResult {
    #[must_use]
    pub fn r_squared(&self) -> f64 {
        self.correlation_coefficient * self.correlation_coefficient
    }

    #[must_use]
    pub fn predict(&self, x: f64) -> f64 {
        self.slope * x + self.intercept
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct RatioPoint {
    pub input_size: InputSize,
    pub ratio: f64,
}

/// Measured-time-to-hypothesis ratios for one algorithm, ascending by input size.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct RatioSeries {
    pub algorithm: AlgorithmName,
    pub label: String,
    pub points: Vec<RatioPoint>,
}

impl RatioSeries {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// (min, max) of the ratios, `None` when empty.
    #[must_use]
    pub fn bounds(&self) -> Option<(f64, f64)> {
        self.points.iter().map(|p| p.ratio).fold(None, |acc, r| match acc {
            None => Some((r, r)),
            Some((lo, hi)) => Some((lo.min(r), hi.max(r))),
        })
    }
}

/// Points used for a constants test and the regression over them.
///
/// `regression` is `None` when the algorithm has no aggregated points.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct FitReport {
    pub algorithm: AlgorithmName,
    pub label: String,
    /// (hypothesis value, mean measured time) pairs, ascending by input size.
    pub points: Vec<(f64, f64)>,
    pub regression: Option<RegressionResult>,
}

impl FitReport {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.regression.is_none()
    }
}
