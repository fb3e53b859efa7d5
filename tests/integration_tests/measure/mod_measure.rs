use benchcurve::aggregate;
use benchcurve::measure::{MeasureOptions, SortAlgorithm, run_campaign};

#[test]
fn campaign_covers_every_algorithm_size_and_trial() {
    let opts = MeasureOptions { sizes: vec![8, 1300], trials: 2, seed: 1, ..MeasureOptions::default() };
    let samples = run_campaign(&opts).unwrap();
    assert_eq!(samples.len(), SortAlgorithm::ALL.len() * 2 * 2);
    let table = aggregate(&samples);
    assert_eq!(table.len(), SortAlgorithm::ALL.len() * 2);
    assert!(table.points().iter().all(|p| p.trials == 2));
    let names = table.algorithms();
    assert!(names.contains(&"mergeSeuil"));
}

#[test]
fn same_seed_same_inputs() {
    let opts = MeasureOptions {
        algorithms: vec![SortAlgorithm::Merge],
        sizes: vec![32],
        trials: 1,
        seed: 9,
        max_value: 10,
    };
    let a = run_campaign(&opts).unwrap();
    let b = run_campaign(&opts).unwrap();
    assert_eq!(a.len(), b.len());
    assert_eq!(a[0].algorithm, b[0].algorithm);
}
