use super::super::_support::{INSERTION_ROWS, write_bench};
use std::process::Command;
use tempfile::tempdir;

fn benchcurve() -> Command {
    Command::new(env!("CARGO_BIN_EXE_benchcurve"))
}

#[test]
fn fit_writes_report_and_figure() {
    let dir = tempdir().unwrap();
    let input = write_bench(dir.path(), "bench.csv", INSERTION_ROWS);
    let plot = dir.path().join("fit.svg");
    let out = benchcurve()
        .current_dir(dir.path())
        .args(["--log-level", "off", "--preset", "sorting", "fit"])
        .arg(&input)
        .arg("--plot")
        .arg(&plot)
        .output()
        .unwrap();
    assert!(out.status.success(), "{}", String::from_utf8_lossy(&out.stderr));
    let stdout = String::from_utf8(out.stdout).unwrap();
    assert!(stdout.contains("insertion : slope = "));
    assert!(plot.exists());
}

#[test]
fn strict_unknown_algorithm_exits_with_error() {
    let dir = tempdir().unwrap();
    let input = write_bench(dir.path(), "bench.csv", &[("bogo", 4, 1.0)]);
    let out = benchcurve()
        .current_dir(dir.path())
        .args(["--log-level", "off", "--strict", "ratio", "--no-plot"])
        .arg(&input)
        .output()
        .unwrap();
    assert_eq!(out.status.code(), Some(1));
    let stderr = String::from_utf8(out.stderr).unwrap();
    assert!(stderr.contains("error: no hypothesis for algorithm(s): bogo"));
}

#[test]
fn config_file_in_working_directory_is_used() {
    let dir = tempdir().unwrap();
    std::fs::write(dir.path().join("benchcurve.toml"), "preset = \"none\"\n[hypotheses]\nbogo = \"n\"\n").unwrap();
    let out = benchcurve()
        .current_dir(dir.path())
        .args(["--log-level", "off", "--format", "plain", "hypotheses"])
        .output()
        .unwrap();
    assert!(out.status.success());
    assert_eq!(String::from_utf8(out.stdout).unwrap().trim(), "algo=bogo growth=n label=n");
}
