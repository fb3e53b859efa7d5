use benchcurve::{Analyzer, Growth, HypothesisTable, Preset, Sample, UnknownAlgorithmPolicy, aggregate};

#[test]
fn crate_root_reexports_cover_a_full_run() {
    let samples = vec![Sample::new("qsort", 100, 0.5), Sample::new("qsort", 200, 1.1)];
    assert_eq!(aggregate(&samples).len(), 2);
    let table = HypothesisTable::preset(Preset::Sorting);
    assert_eq!(table.get("qsort").unwrap().growth, Growth::NLogN);
    let an = Analyzer::new(&samples, table, UnknownAlgorithmPolicy::Reject).unwrap();
    assert_eq!(an.fit_all().len(), 1);
}
