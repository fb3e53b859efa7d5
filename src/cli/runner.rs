use crate::aggregate::aggregate;
use crate::analysis::Analyzer;
use crate::load::{load_file, save_samples};
use crate::measure::run_campaign;
use crate::render::{render_fit, render_ratio};
use crate::report::{self, OutputMode, export_aggregated};
use std::io::Write;

use super::command::{Command, Settings};

fn analyzer_for(input: &std::path::Path, settings: &Settings) -> Result<Analyzer, Box<dyn std::error::Error>> {
    let samples = load_file(input, &settings.load)?;
    Ok(Analyzer::new(&samples, settings.hypotheses.clone(), settings.policy)?)
}

fn write_skipped(out: &mut dyn Write, analyzer: &Analyzer, mode: OutputMode) -> std::io::Result<()> {
    if mode == OutputMode::Human && !analyzer.skipped().is_empty() {
        writeln!(out, "skipped (no hypothesis): {}", analyzer.skipped().join(", "))?;
    }
    Ok(())
}

/// Execute `cmd`, writing results to `out`.
///
/// # Errors
/// Any load, analysis, render or I/O error that ends the run. Per-algorithm
/// failures are reported in the output and do not fail the command.
pub fn run_with_format(
    out: &mut dyn Write,
    cmd: Command,
    settings: &Settings,
    mode: OutputMode,
) -> Result<(), Box<dyn std::error::Error>> {
    match cmd {
        Command::Aggregate { input, export } => {
            let samples = load_file(&input, &settings.load)?;
            let table = aggregate(&samples);
            report::write_aggregated(out, &table, mode)?;
            if let Some(path) = export {
                export_aggregated(&path, &table, &settings.load.columns)?;
            }
            Ok(())
        }
        Command::Fit { input, plot } => {
            let analyzer = analyzer_for(&input, settings)?;
            let outcomes = analyzer.fit_all();
            report::write_fit(out, &outcomes, mode)?;
            write_skipped(out, &analyzer, mode)?;
            if let Some(path) = plot {
                let reports: Vec<_> = outcomes.into_iter().filter_map(|o| o.result.ok()).collect();
                render_fit(&path, &reports, &settings.render)?;
            }
            Ok(())
        }
        Command::Ratio { input, plot } => {
            let analyzer = analyzer_for(&input, settings)?;
            let outcomes = analyzer.ratio_all();
            report::write_ratio(out, &outcomes, mode)?;
            write_skipped(out, &analyzer, mode)?;
            if let Some(path) = plot {
                let series: Vec<_> = outcomes.into_iter().filter_map(|o| o.result.ok()).collect();
                render_ratio(&path, &series, &settings.render)?;
            }
            Ok(())
        }
        Command::Hypotheses => {
            report::write_hypotheses(out, &settings.hypotheses, mode)?;
            Ok(())
        }
        Command::Measure { options, output } => {
            let samples = run_campaign(&options)?;
            save_samples(&output, &samples, &settings.load)?;
            let dest = output.display();
            match mode {
                OutputMode::Json => {
                    let json = serde_json::json!({"samples": samples.len(), "output": dest.to_string()});
                    writeln!(out, "{json}")?;
                }
                OutputMode::Plain => writeln!(out, "samples={} output={dest}", samples.len())?,
                OutputMode::Human => writeln!(out, "measured {} samples -> {dest}", samples.len())?,
            }
            Ok(())
        }
    }
}

/// [`run_with_format`] to stdout in human mode.
///
/// # Errors
/// See [`run_with_format`].
pub fn run(cmd: Command, settings: &Settings) -> Result<(), Box<dyn std::error::Error>> {
    let stdout = std::io::stdout();
    let mut lock = stdout.lock();
    run_with_format(&mut lock, cmd, settings, OutputMode::Human)
}
