use thiserror::Error;

#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("missing column: {0}")]
    MissingColumn(String),

    #[error("malformed row {row}: column '{column}' has invalid value '{value}'")]
    MalformedRow { row: usize, column: String, value: String },

    #[error("no hypothesis for algorithm(s): {}", .0.join(", "))]
    UnknownAlgorithm(Vec<String>),

    #[error("hypothesis for '{algorithm}' is {value} at input size {input_size}; ratio undefined")]
    NonPositiveHypothesis { algorithm: String, input_size: u64, value: f64 },

    #[error("cannot fit '{algorithm}': {reason}")]
    DegenerateFit { algorithm: String, reason: String },

    #[error("unknown growth function: {0}")]
    UnknownGrowth(String),

    #[error("statistics error: {0}")]
    Stats(String),

    #[error("measurement error: {0}")]
    Measurement(String),

    #[error("render error: {0}")]
    Render(String),

    #[error("config error: {0}")]
    Config(#[from] toml::de::Error),

    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

impl AnalysisError {
    pub fn render<T: ToString>(err: T) -> Self {
        AnalysisError::Render(err.to_string())
    }

    pub fn invalid_argument<T: Into<String>>(msg: T) -> Self {
        AnalysisError::InvalidArgument(msg.into())
    }

    /// True for errors scoped to one algorithm, which leave the rest of a batch untouched.
    #[must_use]
    pub fn is_per_algorithm(&self) -> bool {
        matches!(
            self,
            AnalysisError::NonPositiveHypothesis { .. }
                | AnalysisError::DegenerateFit { .. }
                | AnalysisError::Stats(_)
        )
    }
}
