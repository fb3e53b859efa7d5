use crate::analysis::UnknownAlgorithmPolicy;
use crate::config::AppConfig;
use crate::errors::AnalysisError;
use crate::hypothesis::{HypothesisTable, Preset};
use crate::load::LoadOptions;
use crate::measure::MeasureOptions;
use crate::render::RenderOptions;
use std::path::PathBuf;

pub enum Command {
    Aggregate {
        input: PathBuf,
        export: Option<PathBuf>,
    },
    /// Constants test; `plot` is the SVG destination, `None` to skip the figure.
    Fit {
        input: PathBuf,
        plot: Option<PathBuf>,
    },
    /// Ratio test; `plot` as for `Fit`.
    Ratio {
        input: PathBuf,
        plot: Option<PathBuf>,
    },
    Hypotheses,
    Measure {
        options: MeasureOptions,
        output: PathBuf,
    },
}

/// Resolved settings shared by every command.
#[derive(Debug, Clone)]
pub struct Settings {
    pub hypotheses: HypothesisTable,
    pub policy: UnknownAlgorithmPolicy,
    pub load: LoadOptions,
    pub render: RenderOptions,
}

impl Settings {
    /// # Errors
    /// Unknown preset or growth names and invalid delimiters in `cfg`.
    pub fn from_config(cfg: &AppConfig) -> Result<Self, AnalysisError> {
        Ok(Self {
            hypotheses: cfg.hypothesis_table()?,
            policy: cfg.unknown_algorithms,
            load: cfg.load_options()?,
            render: cfg.render.clone(),
        })
    }

    /// Settings with a given preset and every other value at its default.
    #[must_use]
    pub fn with_preset(preset: Preset) -> Self {
        Self {
            hypotheses: HypothesisTable::preset(preset),
            policy: UnknownAlgorithmPolicy::default(),
            load: LoadOptions::default(),
            render: RenderOptions::default(),
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self::with_preset(Preset::default())
    }
}
