use crate::errors::AnalysisError;
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// Below this length `mergeSeuil` falls back to insertion sort.
pub const MERGE_THRESHOLD: usize = 1250;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortAlgorithm {
    /// Stable library sort.
    StdSort,
    /// Unstable library sort driven by an explicit comparator.
    QSort,
    Insertion,
    Merge,
    /// Insertion sort below [`MERGE_THRESHOLD`], merge sort otherwise.
    MergeThreshold,
}

impl SortAlgorithm {
    pub const ALL: [SortAlgorithm; 5] = [
        SortAlgorithm::StdSort,
        SortAlgorithm::QSort,
        SortAlgorithm::Insertion,
        SortAlgorithm::Merge,
        SortAlgorithm::MergeThreshold,
    ];

    /// Identifier written to the `algo` column; matches the sorting preset.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            SortAlgorithm::StdSort => "stdsort",
            SortAlgorithm::QSort => "qsort",
            SortAlgorithm::Insertion => "insertion",
            SortAlgorithm::Merge => "merge",
            SortAlgorithm::MergeThreshold => "mergeSeuil",
        }
    }

    pub fn sort(self, v: &mut [i64]) {
        match self {
            SortAlgorithm::StdSort => v.sort(),
            SortAlgorithm::QSort => v.sort_unstable_by(compare),
            SortAlgorithm::Insertion => insertion_sort(v),
            SortAlgorithm::Merge => merge_sort(v),
            SortAlgorithm::MergeThreshold => {
                if v.len() < MERGE_THRESHOLD {
                    insertion_sort(v);
                } else {
                    merge_sort(v);
                }
            }
        }
    }
}

impl fmt::Display for SortAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SortAlgorithm {
    type Err = AnalysisError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SortAlgorithm::ALL
            .into_iter()
            .find(|a| a.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| AnalysisError::invalid_argument(format!("unknown sort algorithm: {s}")))
    }
}

fn compare(a: &i64, b: &i64) -> Ordering {
    if a < b {
        Ordering::Less
    } else if a > b {
        Ordering::Greater
    } else {
        Ordering::Equal
    }
}

/// Binary insertion: each element is rotated into place after its upper bound.
pub fn insertion_sort(v: &mut [i64]) {
    for i in 1..v.len() {
        let x = v[i];
        let pos = v[..i].partition_point(|e| *e <= x);
        v[pos..=i].rotate_right(1);
    }
}

/// Top-down merge sort with one scratch buffer.
pub fn merge_sort(v: &mut [i64]) {
    let mut buf = v.to_vec();
    merge_sort_rec(v, &mut buf);
}

fn merge_sort_rec(v: &mut [i64], buf: &mut [i64]) {
    let n = v.len();
    if n <= 1 {
        return;
    }
    let mid = n / 2;
    {
        let (left, right) = v.split_at_mut(mid);
        let (bl, br) = buf.split_at_mut(mid);
        merge_sort_rec(left, bl);
        merge_sort_rec(right, br);
    }
    buf.copy_from_slice(v);
    let (left, right) = buf.split_at(mid);
    let (mut i, mut j) = (0, 0);
    for slot in v.iter_mut() {
        if j >= right.len() || (i < left.len() && left[i] <= right[j]) {
            *slot = left[i];
            i += 1;
        } else {
            *slot = right[j];
            j += 1;
        }
    }
}
