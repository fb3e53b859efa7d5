use crate::errors::AnalysisError;
use crate::hypothesis::HypothesisTable;
use crate::measure::SortAlgorithm;
use crate::utils::num::u64_to_usize;

/// Upper bound on the number of sizes a `--sizes` argument may expand to.
pub const MAX_SIZES: usize = 10_000;

fn parse_size(s: &str) -> Result<u64, AnalysisError> {
    s.trim()
        .replace('_', "")
        .parse::<u64>()
        .map_err(|_| AnalysisError::invalid_argument(format!("invalid size: '{s}'")))
}

/// Sizes as a comma list (`100,200`) mixed with inclusive ranges (`1000..8000:1000`).
///
/// # Errors
/// `InvalidArgument` on bad numbers, a zero step, an empty result or more than
/// [`MAX_SIZES`] sizes.
pub fn parse_sizes(raw: &str) -> Result<Vec<u64>, AnalysisError> {
    let mut sizes = Vec::new();
    for part in raw.split(',').map(str::trim).filter(|p| !p.is_empty()) {
        if let Some((start, rest)) = part.split_once("..") {
            let (end, step) = rest.split_once(':').unwrap_or((rest, "1"));
            let (start, end, step) = (parse_size(start)?, parse_size(end)?, parse_size(step)?);
            if step == 0 {
                return Err(AnalysisError::invalid_argument(format!("zero step in '{part}'")));
            }
            let count = if start <= end { ((end - start) / step).saturating_add(1) } else { 0 };
            if u64_to_usize(count).is_none_or(|c| c > MAX_SIZES - sizes.len()) {
                return Err(AnalysisError::invalid_argument(format!(
                    "'{part}' expands past {MAX_SIZES} sizes"
                )));
            }
            let mut n = start;
            while n <= end {
                sizes.push(n);
                match n.checked_add(step) {
                    Some(next) => n = next,
                    None => break,
                }
            }
        } else {
            if sizes.len() >= MAX_SIZES {
                return Err(AnalysisError::invalid_argument(format!("more than {MAX_SIZES} sizes")));
            }
            sizes.push(parse_size(part)?);
        }
    }
    if sizes.is_empty() {
        return Err(AnalysisError::invalid_argument(format!("no sizes in '{raw}'")));
    }
    Ok(sizes)
}

/// Sort algorithm names; an empty list or `all` selects every algorithm.
///
/// # Errors
/// `InvalidArgument` for unknown names.
pub fn parse_algorithms(names: &[String]) -> Result<Vec<SortAlgorithm>, AnalysisError> {
    if names.is_empty() || names.iter().any(|n| n.eq_ignore_ascii_case("all")) {
        return Ok(SortAlgorithm::ALL.to_vec());
    }
    names.iter().map(|n| n.parse()).collect()
}

/// Apply `algo=growth` overrides on top of `table`, in order.
///
/// # Errors
/// See [`HypothesisTable::parse_override`].
pub fn apply_overrides(table: &mut HypothesisTable, overrides: &[String]) -> Result<(), AnalysisError> {
    for raw in overrides {
        let (algo, h) = HypothesisTable::parse_override(raw)?;
        table.insert(algo, h);
    }
    Ok(())
}
