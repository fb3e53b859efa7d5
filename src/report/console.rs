use crate::aggregate::AggregatedTable;
use crate::analysis::AlgorithmOutcome;
use crate::hypothesis::HypothesisTable;
use crate::types::{FitReport, RatioSeries, RegressionResult};
use serde_json::json;
use std::io::{self, Write};

use super::OutputMode;

fn regression_json(r: &RegressionResult) -> serde_json::Value {
    json!({
        "slope": r.slope,
        "intercept": r.intercept,
        "r_value": r.correlation_coefficient,
        "r_squared": r.r_squared(),
        "p_value": r.p_value,
        "std_err": r.standard_error,
        "intercept_stderr": r.intercept_stderr,
        "points": r.points,
    })
}

/// Constants test results, one block (human) or one line (plain, json) per algorithm.
///
/// # Errors
/// Returns an error if writing to `out` fails.
pub fn write_fit(out: &mut dyn Write, outcomes: &[AlgorithmOutcome<FitReport>], mode: OutputMode) -> io::Result<()> {
    for o in outcomes {
        let algo = &o.algorithm;
        match (&o.result, mode) {
            (Ok(report), OutputMode::Json) => {
                let reg = report.regression.as_ref().map(regression_json);
                writeln!(out, "{}", json!({"algorithm": algo, "label": o.label, "regression": reg}))?;
            }
            (Err(e), OutputMode::Json) => {
                writeln!(out, "{}", json!({"algorithm": algo, "label": o.label, "error": e.to_string()}))?;
            }
            (Ok(FitReport { regression: Some(r), .. }), OutputMode::Human) => {
                writeln!(out, "{algo} : slope = {}", r.slope)?;
                writeln!(out, "{algo} : intercept = {}", r.intercept)?;
                writeln!(out, "{algo} : r_value = {}", r.correlation_coefficient)?;
                writeln!(out, "{algo} : r_squared = {}", r.r_squared())?;
                writeln!(out, "{algo} : p_value = {}", r.p_value)?;
                writeln!(out, "{algo} : std_err = {}", r.standard_error)?;
            }
            (Ok(FitReport { regression: Some(r), .. }), OutputMode::Plain) => writeln!(
                out,
                "algo={algo} slope={} intercept={} r_value={} r_squared={} p_value={} std_err={} n={}",
                r.slope,
                r.intercept,
                r.correlation_coefficient,
                r.r_squared(),
                r.p_value,
                r.standard_error,
                r.points
            )?,
            (Ok(_), OutputMode::Human) => writeln!(out, "{algo} : no data")?,
            (Ok(_), OutputMode::Plain) => writeln!(out, "algo={algo} n=0")?,
            (Err(e), OutputMode::Human) => writeln!(out, "{algo} : error = {e}")?,
            (Err(e), OutputMode::Plain) => writeln!(out, "algo={algo} error=\"{e}\"")?,
        }
    }
    Ok(())
}

/// Ratio test results: every (size, ratio) pair, or the error for that algorithm.
///
/// # Errors
/// Returns an error if writing to `out` fails.
pub fn write_ratio(out: &mut dyn Write, outcomes: &[AlgorithmOutcome<RatioSeries>], mode: OutputMode) -> io::Result<()> {
    for o in outcomes {
        let algo = &o.algorithm;
        match (&o.result, mode) {
            (Ok(series), OutputMode::Json) => {
                writeln!(out, "{}", json!({"algorithm": algo, "label": o.label, "points": series.points}))?;
            }
            (Err(e), OutputMode::Json) => {
                writeln!(out, "{}", json!({"algorithm": algo, "label": o.label, "error": e.to_string()}))?;
            }
            (Ok(series), OutputMode::Human) => {
                writeln!(out, "{algo} : f(x) / {}", o.label)?;
                for p in &series.points {
                    writeln!(out, "{algo} : {} -> {}", p.input_size, p.ratio)?;
                }
            }
            (Ok(series), OutputMode::Plain) => {
                for p in &series.points {
                    writeln!(out, "algo={algo} taille={} ratio={}", p.input_size, p.ratio)?;
                }
            }
            (Err(e), OutputMode::Human) => writeln!(out, "{algo} : error = {e}")?,
            (Err(e), OutputMode::Plain) => writeln!(out, "algo={algo} error=\"{e}\"")?,
        }
    }
    Ok(())
}

/// # Errors
/// Returns an error if writing to `out` fails.
pub fn write_aggregated(out: &mut dyn Write, table: &AggregatedTable, mode: OutputMode) -> io::Result<()> {
    for p in table.points() {
        match mode {
            OutputMode::Json => writeln!(out, "{}", serde_json::to_string(p)?)?,
            OutputMode::Plain => writeln!(
                out,
                "algo={} taille={} temps={} trials={}",
                p.algorithm, p.input_size, p.mean_measured_time, p.trials
            )?,
            OutputMode::Human => writeln!(
                out,
                "{} : {} -> {} ({} trials)",
                p.algorithm, p.input_size, p.mean_measured_time, p.trials
            )?,
        }
    }
    Ok(())
}

/// # Errors
/// Returns an error if writing to `out` fails.
pub fn write_hypotheses(out: &mut dyn Write, table: &HypothesisTable, mode: OutputMode) -> io::Result<()> {
    for (algo, h) in table.iter() {
        match mode {
            OutputMode::Json => {
                writeln!(out, "{}", json!({"algorithm": algo, "growth": h.growth.name(), "label": h.label}))?;
            }
            OutputMode::Plain => writeln!(out, "algo={algo} growth={} label={}", h.growth.name(), h.label)?,
            OutputMode::Human => writeln!(out, "{algo} : {}", h.label)?,
        }
    }
    Ok(())
}
