//! Console and file output of analysis results.

mod console;
mod export;

pub use console::{write_aggregated, write_fit, write_hypotheses, write_ratio};
pub use export::{export_aggregated, write_aggregated_csv};

use crate::errors::AnalysisError;
use std::str::FromStr;

#[derive(Copy, Clone, Debug, Eq, PartialEq, Default)]
pub enum OutputMode {
    #[default]
    Human,
    Plain,
    Json,
}

impl FromStr for OutputMode {
    type Err = AnalysisError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "human" => Ok(OutputMode::Human),
            "plain" | "text" => Ok(OutputMode::Plain),
            "json" | "ndjson" => Ok(OutputMode::Json),
            other => Err(AnalysisError::invalid_argument(format!("unknown output format: {other}"))),
        }
    }
}
