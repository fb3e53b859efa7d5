use benchcurve::{Sample, aggregate};
use proptest::prelude::*;
use std::collections::BTreeSet;

fn sample_strategy() -> impl Strategy<Value = Sample> {
    (prop::sample::select(vec!["merge", "qsort", "insertion"]), 0u64..20, 0.0f64..1_000.0)
        .prop_map(|(a, n, t)| Sample::new(a, n, t))
}

proptest! {
    #![proptest_config(proptest::test_runner::Config {
        failure_persistence: Some(Box::new(proptest::test_runner::FileFailurePersistence::WithSource("proptest-regressions"))),
        .. proptest::test_runner::Config::default()
    })]
    #[test]
    fn prop_one_row_per_unique_key(samples in prop::collection::vec(sample_strategy(), 0..200)) {
        let keys: BTreeSet<(String, u64)> = samples.iter().map(|s| (s.algorithm.clone(), s.input_size)).collect();
        let table = aggregate(&samples);
        prop_assert_eq!(table.len(), keys.len());
        let got: Vec<(String, u64)> = table.points().iter().map(|p| (p.algorithm.clone(), p.input_size)).collect();
        prop_assert_eq!(got, keys.into_iter().collect::<Vec<_>>());
        prop_assert_eq!(table.points().iter().map(|p| p.trials).sum::<usize>(), samples.len());
    }

    #[test]
    fn prop_unique_keys_pass_through_unchanged(
        times in prop::collection::btree_map(0u64..10_000, 0.0f64..1e6, 0..100)
    ) {
        let samples: Vec<Sample> = times.iter().map(|(&n, &t)| Sample::new("merge", n, t)).collect();
        let table = aggregate(&samples);
        for (p, s) in table.points().iter().zip(&samples) {
            prop_assert_eq!(p.input_size, s.input_size);
            prop_assert_eq!(p.mean_measured_time, s.measured_time);
            prop_assert_eq!(p.trials, 1);
        }
    }

    #[test]
    fn prop_mean_lies_between_min_and_max(times in prop::collection::vec(0.0f64..1e6, 1..50)) {
        let samples: Vec<Sample> = times.iter().map(|&t| Sample::new("qsort", 64, t)).collect();
        let table = aggregate(&samples);
        let p = &table.points()[0];
        let lo = times.iter().copied().fold(f64::INFINITY, f64::min);
        let hi = times.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        prop_assert!(p.mean_measured_time >= lo * (1.0 - 1e-12) && p.mean_measured_time <= hi * (1.0 + 1e-12));
    }
}
