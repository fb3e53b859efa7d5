use super::super::_support::{INSERTION_ROWS, write_bench};
use benchcurve::cli::{Command, OutputMode, Settings, apply_overrides, run, run_with_format};
use benchcurve::hypothesis::Preset;
use benchcurve::measure::{MeasureOptions, SortAlgorithm};
use tempfile::tempdir;

fn capture(cmd: Command, settings: &Settings, mode: OutputMode) -> String {
    let mut buf = Vec::new();
    run_with_format(&mut buf, cmd, settings, mode).unwrap();
    String::from_utf8(buf).unwrap()
}

#[test]
fn fit_human_output_matches_report_format() {
    let dir = tempdir().unwrap();
    let input = write_bench(dir.path(), "bench.csv", INSERTION_ROWS);
    let text = capture(Command::Fit { input, plot: None }, &Settings::with_preset(Preset::Sorting), OutputMode::Human);
    let keys: Vec<&str> = text.lines().map(|l| l.split(" = ").next().unwrap()).collect();
    assert_eq!(
        keys,
        [
            "insertion : slope",
            "insertion : intercept",
            "insertion : r_value",
            "insertion : r_squared",
            "insertion : p_value",
            "insertion : std_err"
        ]
    );
}

#[test]
fn ratio_json_with_override_and_plot() {
    let dir = tempdir().unwrap();
    let input = write_bench(dir.path(), "bench.csv", &[("bubble", 2, 8.0), ("bubble", 4, 32.0)]);
    let mut settings = Settings::with_preset(Preset::None);
    apply_overrides(&mut settings.hypotheses, &["bubble=n^2".to_string()]).unwrap();
    let plot = dir.path().join("ratio.svg");
    let text = capture(Command::Ratio { input, plot: Some(plot.clone()) }, &settings, OutputMode::Json);
    let row: serde_json::Value = serde_json::from_str(text.trim()).unwrap();
    assert_eq!(row["algorithm"], "bubble");
    assert_eq!(row["points"][0]["ratio"], 2.0);
    assert_eq!(row["points"][1]["ratio"], 2.0);
    assert!(std::fs::read_to_string(plot).unwrap().contains("Ratio test bubble"));
}

#[test]
fn measure_then_fit_round_trip() {
    let dir = tempdir().unwrap();
    let output = dir.path().join("samples.csv");
    let options = MeasureOptions {
        algorithms: vec![SortAlgorithm::StdSort, SortAlgorithm::Insertion],
        sizes: vec![16, 32, 64],
        trials: 2,
        seed: 42,
        max_value: 1000,
    };
    let settings = Settings::with_preset(Preset::Sorting);
    let text = capture(Command::Measure { options, output: output.clone() }, &settings, OutputMode::Plain);
    assert!(text.starts_with("samples=12 "));

    let text = capture(Command::Fit { input: output, plot: None }, &settings, OutputMode::Plain);
    let algos: Vec<&str> = text.lines().map(|l| l.split_whitespace().next().unwrap()).collect();
    assert_eq!(algos, ["algo=stdsort", "algo=insertion"]);
}

#[test]
fn hypotheses_lists_active_table() {
    let text = capture(Command::Hypotheses, &Settings::default(), OutputMode::Human);
    assert_eq!(text.lines().count(), 8);
    assert!(text.contains("progdyn : n³"));
    run(Command::Hypotheses, &Settings::default()).unwrap();
}

#[test]
fn missing_input_is_an_error() {
    let dir = tempdir().unwrap();
    let mut buf = Vec::new();
    let cmd = Command::Aggregate { input: dir.path().join("absent.csv"), export: None };
    assert!(run_with_format(&mut buf, cmd, &Settings::default(), OutputMode::Human).is_err());
}

#[test]
fn fit_reports_size_zero_under_nlogn_as_an_error_line() {
    let dir = tempdir().unwrap();
    let mut rows = INSERTION_ROWS.to_vec();
    rows.extend([("merge", 0, 0.0), ("merge", 10, 1.0), ("merge", 20, 2.5)]);
    let input = write_bench(dir.path(), "bench.csv", &rows);
    let plot = dir.path().join("fit.svg");
    let text = capture(Command::Fit { input, plot: Some(plot.clone()) }, &Settings::with_preset(Preset::Sorting), OutputMode::Human);
    assert!(text.contains("insertion : slope = "));
    assert!(text.contains("merge : error = cannot fit 'merge': hypothesis is NaN at input size 0"));
    assert!(!text.contains("NaN\n"));
    assert!(plot.exists());
}
