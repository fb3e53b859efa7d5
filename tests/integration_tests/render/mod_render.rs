use benchcurve::analysis::{Analyzer, UnknownAlgorithmPolicy};
use benchcurve::hypothesis::{HypothesisTable, Preset};
use benchcurve::render::{RenderOptions, render_fit, render_ratio};
use benchcurve::Sample;
use tempfile::tempdir;

fn analyzer() -> Analyzer {
    let mut samples = Vec::new();
    for (algo, scale) in [("stdsort", 1e-8), ("qsort", 2e-8), ("insertion", 1e-9), ("merge", 3e-8)] {
        for n in [1_000u64, 2_000, 4_000, 8_000] {
            samples.push(Sample::new(algo, n, scale * n as f64 * (n as f64).ln()));
        }
    }
    Analyzer::new(&samples, HypothesisTable::preset(Preset::Sorting), UnknownAlgorithmPolicy::Reject).unwrap()
}

#[test]
fn one_panel_per_algorithm_in_table_order() {
    let dir = tempdir().unwrap();
    let an = analyzer();
    let reports: Vec<_> = an.fit_all().into_iter().filter_map(|o| o.result.ok()).collect();
    let path = dir.path().join("test_constantes.svg");
    assert_eq!(render_fit(&path, &reports, &RenderOptions::default()).unwrap(), 4);
    let svg = std::fs::read_to_string(&path).unwrap();
    let first = svg.find("Constants test stdsort").unwrap();
    let last = svg.find("Constants test merge").unwrap();
    assert!(first < last);
}

#[test]
fn ratio_figure_replaces_existing_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("test_rapport.svg");
    std::fs::write(&path, "stale").unwrap();
    let series: Vec<_> = analyzer().ratio_all().into_iter().filter_map(|o| o.result.ok()).collect();
    let opts = RenderOptions { columns: 2, ..RenderOptions::default() };
    assert_eq!(render_ratio(&path, &series, &opts).unwrap(), 4);
    let svg = std::fs::read_to_string(&path).unwrap();
    assert!(svg.starts_with("<svg") || svg.starts_with("<?xml"));
    assert!(svg.contains("Ratio test insertion"));
}
