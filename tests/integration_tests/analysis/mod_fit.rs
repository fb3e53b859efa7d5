use super::super::_support::{INSERTION_ROWS, exact_rows, write_bench};
use benchcurve::analysis::{Analyzer, UnknownAlgorithmPolicy};
use benchcurve::hypothesis::{Growth, Hypothesis, HypothesisTable, Preset};
use benchcurve::load::{LoadOptions, load_file};
use benchcurve::{AnalysisError, Sample};
use tempfile::tempdir;

#[test]
fn insertion_example_from_csv() {
    let dir = tempdir().unwrap();
    let path = write_bench(dir.path(), "bench.csv", INSERTION_ROWS);
    let samples = load_file(&path, &LoadOptions::default()).unwrap();
    let an = Analyzer::new(&samples, HypothesisTable::preset(Preset::Sorting), UnknownAlgorithmPolicy::Reject).unwrap();
    let report = an.fit_mode("insertion").unwrap();
    let means: Vec<f64> = report.points.iter().map(|p| p.1).collect();
    assert_eq!(means, vec![2.0, 16.0]);
    let reg = report.regression.unwrap();
    assert!((reg.slope - 0.0467).abs() < 1e-4);
    assert!((reg.intercept + 2.67).abs() < 1e-2);
    assert_eq!(reg.points, 2);
}

#[test]
fn affine_in_hypothesis_is_recovered() {
    let mut table = HypothesisTable::new();
    table.insert("cube", Hypothesis::new(Growth::Cubic));
    let samples: Vec<Sample> = [2u64, 3, 5, 7, 11]
        .iter()
        .map(|&n| Sample::new("cube", n, 2.0 * Growth::Cubic.eval(n) + 3.0))
        .collect();
    let an = Analyzer::new(&samples, table, UnknownAlgorithmPolicy::Reject).unwrap();
    let reg = an.fit_mode("cube").unwrap().regression.unwrap();
    assert!((reg.slope - 2.0).abs() < 1e-9);
    assert!((reg.intercept - 3.0).abs() < 1e-6);
    assert!((reg.correlation_coefficient - 1.0).abs() < 1e-12);
    assert!(reg.p_value < 1e-6);
}

#[test]
fn fit_all_follows_table_order_and_isolates_failures() {
    let mut rows = exact_rows("tabou", Growth::Quadratic, 1e-3, &[10, 20, 40]);
    rows.push(("vorace", 50, 1.0));
    rows.extend(exact_rows("progdyn", Growth::Cubic, 1e-6, &[10, 20, 40]));
    let samples: Vec<Sample> = rows.iter().map(|&(a, n, t)| Sample::new(a, n, t)).collect();
    let an = Analyzer::new(&samples, HypothesisTable::preset(Preset::Tower), UnknownAlgorithmPolicy::Reject).unwrap();
    let outcomes = an.fit_all();
    let names: Vec<&str> = outcomes.iter().map(|o| o.algorithm.as_str()).collect();
    assert_eq!(names, ["vorace", "progdyn", "tabou"]);
    assert!(matches!(outcomes[0].result, Err(AnalysisError::DegenerateFit { .. })));
    assert!(outcomes[1].result.is_ok());
    assert!(outcomes[2].result.is_ok());
}
