//! Grouping of repeated trials into per-(algorithm, input size) means.

use crate::types::{AggregatedPoint, InputSize, Sample};
use crate::utils::num::usize_to_f64;
use std::collections::BTreeMap;

/// Ordered mapping from (algorithm, input size) to the measured times of every trial.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SampleGroups {
    groups: BTreeMap<(String, InputSize), Vec<f64>>,
}

impl SampleGroups {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, sample: &Sample) {
        self.groups
            .entry((sample.algorithm.clone(), sample.input_size))
            .or_default()
            .push(sample.measured_time);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Reduce every group to its arithmetic mean.
    #[must_use]
    pub fn reduce(&self) -> AggregatedTable {
        let points = self
            .groups
            .iter()
            .map(|((algorithm, input_size), times)| AggregatedPoint {
                algorithm: algorithm.clone(),
                input_size: *input_size,
                mean_measured_time: mean(times),
                trials: times.len(),
            })
            .collect();
        AggregatedTable { points }
    }
}

impl<'a> FromIterator<&'a Sample> for SampleGroups {
    fn from_iter<I: IntoIterator<Item = &'a Sample>>(iter: I) -> Self {
        let mut groups = SampleGroups::new();
        for s in iter {
            groups.push(s);
        }
        groups
    }
}

fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / usize_to_f64(values.len())
}

/// Aggregated points sorted by (algorithm, input size).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AggregatedTable {
    points: Vec<AggregatedPoint>,
}

impl AggregatedTable {
    #[must_use]
    pub fn points(&self) -> &[AggregatedPoint] {
        &self.points
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Points of one algorithm, ascending by input size. Empty for unknown names.
    #[must_use]
    pub fn for_algorithm(&self, algorithm: &str) -> &[AggregatedPoint] {
        let start = self.points.partition_point(|p| p.algorithm.as_str() < algorithm);
        let end = start + self.points[start..].partition_point(|p| p.algorithm == algorithm);
        &self.points[start..end]
    }

    /// Distinct algorithm names, sorted.
    #[must_use]
    pub fn algorithms(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.points.iter().map(|p| p.algorithm.as_str()).collect();
        names.dedup();
        names
    }
}

impl FromIterator<AggregatedPoint> for AggregatedTable {
    fn from_iter<I: IntoIterator<Item = AggregatedPoint>>(iter: I) -> Self {
        let mut points: Vec<AggregatedPoint> = iter.into_iter().collect();
        points.sort_by(|a, b| a.algorithm.cmp(&b.algorithm).then(a.input_size.cmp(&b.input_size)));
        AggregatedTable { points }
    }
}

/// Group samples by (algorithm, input size) and average each group.
#[must_use]
pub fn aggregate(samples: &[Sample]) -> AggregatedTable {
    let groups: SampleGroups = samples.iter().collect();
    let table = groups.reduce();
    log::debug!("aggregate: {} samples -> {} points", samples.len(), table.len());
    table
}
