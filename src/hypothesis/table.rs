use super::growth::Growth;
use crate::errors::AnalysisError;
use crate::types::InputSize;
use std::fmt;
use std::str::FromStr;

/// A growth function paired with its display label.
#[derive(Debug, Clone, PartialEq)]
pub struct Hypothesis {
    pub growth: Growth,
    pub label: String,
}

impl Hypothesis {
    #[must_use]
    pub fn new(growth: Growth) -> Self {
        Self { growth, label: growth.label().to_string() }
    }

    #[must_use]
    pub fn with_label(growth: Growth, label: impl Into<String>) -> Self {
        Self { growth, label: label.into() }
    }

    #[must_use]
    pub fn eval(&self, n: InputSize) -> f64 {
        self.growth.eval(n)
    }
}

/// Named hypothesis tables shipped with the crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Preset {
    /// Sorting benchmark: stdsort, qsort, insertion, merge, mergeSeuil.
    Sorting,
    /// Tower-building heuristics: vorace, progdyn, tabou.
    Tower,
    #[default]
    All,
    None,
}

impl FromStr for Preset {
    type Err = AnalysisError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "sorting" | "sort" => Ok(Preset::Sorting),
            "tower" => Ok(Preset::Tower),
            "all" => Ok(Preset::All),
            "none" | "empty" => Ok(Preset::None),
            other => Err(AnalysisError::invalid_argument(format!("unknown preset: {other}"))),
        }
    }
}

impl fmt::Display for Preset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Preset::Sorting => "sorting",
            Preset::Tower => "tower",
            Preset::All => "all",
            Preset::None => "none",
        };
        f.write_str(s)
    }
}

/// Ordered mapping from algorithm identifier to hypothesis.
///
/// Order is insertion order and drives report and figure layout.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HypothesisTable {
    entries: Vec<(String, Hypothesis)>,
}

impl HypothesisTable {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn preset(preset: Preset) -> Self {
        let mut table = Self::new();
        match preset {
            Preset::Sorting => table.extend_sorting(),
            Preset::Tower => table.extend_tower(),
            Preset::All => {
                table.extend_sorting();
                table.extend_tower();
            }
            Preset::None => {}
        }
        table
    }

    fn extend_sorting(&mut self) {
        self.insert("stdsort", Hypothesis::new(Growth::NLogN));
        self.insert("qsort", Hypothesis::new(Growth::NLogN));
        self.insert("insertion", Hypothesis::new(Growth::Quadratic));
        self.insert("merge", Hypothesis::new(Growth::NLogN));
        self.insert("mergeSeuil", Hypothesis::new(Growth::NLogN));
    }

    fn extend_tower(&mut self) {
        self.insert("vorace", Hypothesis::new(Growth::NLogN));
        self.insert("progdyn", Hypothesis::new(Growth::Cubic));
        self.insert("tabou", Hypothesis::new(Growth::Quadratic));
    }

    /// Insert or replace; a replaced entry keeps its position.
    pub fn insert(&mut self, algorithm: impl Into<String>, hypothesis: Hypothesis) {
        let algorithm = algorithm.into();
        if let Some(slot) = self.entries.iter_mut().find(|(name, _)| *name == algorithm) {
            slot.1 = hypothesis;
        } else {
            self.entries.push((algorithm, hypothesis));
        }
    }

    pub fn remove(&mut self, algorithm: &str) -> Option<Hypothesis> {
        let idx = self.entries.iter().position(|(name, _)| name == algorithm)?;
        Some(self.entries.remove(idx).1)
    }

    #[must_use]
    pub fn get(&self, algorithm: &str) -> Option<&Hypothesis> {
        self.entries.iter().find(|(name, _)| name == algorithm).map(|(_, h)| h)
    }

    #[must_use]
    pub fn contains(&self, algorithm: &str) -> bool {
        self.get(algorithm).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Hypothesis)> {
        self.entries.iter().map(|(name, h)| (name.as_str(), h))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Parse an `algo=growth` override, as given on the command line.
    ///
    /// # Errors
    /// Returns `InvalidArgument` when `=` is missing and `UnknownGrowth` for bad growth names.
    pub fn parse_override(raw: &str) -> Result<(String, Hypothesis), AnalysisError> {
        let (algo, growth) = raw
            .split_once('=')
            .ok_or_else(|| AnalysisError::invalid_argument(format!("expected algo=growth, got '{raw}'")))?;
        let algo = algo.trim();
        if algo.is_empty() {
            return Err(AnalysisError::invalid_argument(format!("empty algorithm name in '{raw}'")));
        }
        Ok((algo.to_string(), Hypothesis::new(growth.parse()?)))
    }
}
