//! TOML configuration file.
//!
//! Precedence is command line > config file > defaults; the command line side
//! is applied by the binary on top of the [`AppConfig`] loaded here.

use crate::analysis::UnknownAlgorithmPolicy;
use crate::errors::AnalysisError;
use crate::hypothesis::{Growth, Hypothesis, HypothesisTable, Preset};
use crate::load::{ColumnNames, LoadOptions};
use crate::render::RenderOptions;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

pub const CONFIG_FILE_NAME: &str = "benchcurve.toml";

/// A `[hypotheses]` entry: either `algo = "n^2"` or `algo = { growth = "n^2", label = "n²" }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum HypothesisEntry {
    Growth(String),
    Labeled { growth: String, label: Option<String> },
}

impl HypothesisEntry {
    /// # Errors
    /// `UnknownGrowth` for an unrecognized growth name.
    pub fn to_hypothesis(&self) -> Result<Hypothesis, AnalysisError> {
        match self {
            HypothesisEntry::Growth(g) => Ok(Hypothesis::new(g.parse::<Growth>()?)),
            HypothesisEntry::Labeled { growth, label } => {
                let growth: Growth = growth.parse()?;
                Ok(match label {
                    Some(l) => Hypothesis::with_label(growth, l.clone()),
                    None => Hypothesis::new(growth),
                })
            }
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// error|warn|info|debug|trace
    pub level: Option<String>,
    /// Directory for the rolling `benchcurve.log`; console only when unset.
    pub dir: Option<PathBuf>,
    /// Rolled files to keep.
    pub retention: Option<usize>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Name of the base hypothesis table (`sorting`, `tower`, `all`, `none`).
    pub preset: Option<String>,
    pub unknown_algorithms: UnknownAlgorithmPolicy,
    pub delimiter: Option<char>,
    pub columns: ColumnNames,
    /// Entries added to (or replacing) the preset, in algorithm-name order.
    pub hypotheses: BTreeMap<String, HypothesisEntry>,
    pub render: RenderOptions,
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// # Errors
    /// `Config` when the text is not valid TOML for this schema.
    pub fn from_toml_str(s: &str) -> Result<Self, AnalysisError> {
        Ok(toml::from_str(s)?)
    }

    /// # Errors
    /// `Io` when the file cannot be read, `Config` when it does not parse.
    pub fn from_file(path: &Path) -> Result<Self, AnalysisError> {
        let text = std::fs::read_to_string(path)?;
        let cfg = Self::from_toml_str(&text)?;
        log::debug!("config: loaded {}", path.display());
        Ok(cfg)
    }

    /// # Errors
    /// `InvalidArgument` for an unknown preset name.
    pub fn preset(&self) -> Result<Preset, AnalysisError> {
        self.preset.as_deref().map_or(Ok(Preset::default()), str::parse::<Preset>)
    }

    /// Preset table with the `[hypotheses]` entries applied on top.
    ///
    /// # Errors
    /// Unknown preset or growth names.
    pub fn hypothesis_table(&self) -> Result<HypothesisTable, AnalysisError> {
        let mut table = HypothesisTable::preset(self.preset()?);
        for (algo, entry) in &self.hypotheses {
            table.insert(algo.clone(), entry.to_hypothesis()?);
        }
        Ok(table)
    }

    /// # Errors
    /// `InvalidArgument` when the delimiter is not a single-byte character.
    pub fn load_options(&self) -> Result<LoadOptions, AnalysisError> {
        let mut opts = LoadOptions { columns: self.columns.clone(), ..LoadOptions::default() };
        if let Some(c) = self.delimiter {
            opts.csv.delimiter = u8::try_from(c)
                .ok()
                .filter(u8::is_ascii)
                .ok_or_else(|| AnalysisError::invalid_argument(format!("delimiter must be ASCII, got '{c}'")))?;
        }
        Ok(opts)
    }
}

/// Files consulted, in order: the explicit path, `./benchcurve.toml`, then the
/// user config directory.
#[must_use]
pub fn candidate_paths(explicit: Option<&Path>) -> Vec<PathBuf> {
    let mut paths = Vec::new();
    if let Some(p) = explicit {
        paths.push(p.to_path_buf());
    }
    if let Ok(cur) = std::env::current_dir() {
        paths.push(cur.join(CONFIG_FILE_NAME));
    }
    if let Some(dir) = dirs_next::config_dir() {
        paths.push(dir.join(CONFIG_FILE_NAME));
    }
    paths
}

/// Load the first config file found, or defaults when there is none.
///
/// An explicit path must exist; discovered files are optional.
///
/// # Errors
/// Missing explicit file, unreadable or invalid TOML.
pub fn load_config(explicit: Option<&Path>) -> Result<AppConfig, AnalysisError> {
    if let Some(p) = explicit.filter(|p| !p.exists()) {
        return Err(AnalysisError::invalid_argument(format!("config file not found: {}", p.display())));
    }
    for p in candidate_paths(explicit) {
        if p.is_file() {
            return AppConfig::from_file(&p);
        }
    }
    Ok(AppConfig::default())
}
