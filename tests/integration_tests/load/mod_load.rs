use super::super::_support::write_bench;
use benchcurve::config::AppConfig;
use benchcurve::load::{LoadOptions, load_file, save_samples};
use benchcurve::{AnalysisError, Sample};
use tempfile::tempdir;

#[test]
fn configured_columns_and_delimiter() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("bench.csv");
    std::fs::write(&path, "name;n;seconds;host\nqsort;100;0.5;a\nqsort;200;1.25;b\n").unwrap();
    let cfg = AppConfig::from_toml_str(
        "delimiter = \";\"\n[columns]\nalgorithm = \"name\"\ninput_size = \"n\"\nmeasured_time = \"seconds\"\n",
    )
    .unwrap();
    let samples = load_file(&path, &cfg.load_options().unwrap()).unwrap();
    assert_eq!(samples, vec![Sample::new("qsort", 100, 0.5), Sample::new("qsort", 200, 1.25)]);
}

#[test]
fn malformed_rows_fail_fast_with_position() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("bad.csv");
    std::fs::write(&path, "algo,taille,temps\nmerge,10,1\nmerge,ten,1\nmerge,-3,1\n").unwrap();
    match load_file(&path, &LoadOptions::default()) {
        Err(AnalysisError::MalformedRow { row, column, value }) => {
            assert_eq!((row, column.as_str(), value.as_str()), (2, "taille", "ten"));
        }
        other => panic!("expected MalformedRow, got {other:?}"),
    }
    std::fs::write(&path, "algo,taille,temps\nmerge,10,-0.5\n").unwrap();
    assert!(matches!(load_file(&path, &LoadOptions::default()), Err(AnalysisError::MalformedRow { .. })));
}

#[test]
fn size_zero_is_accepted() {
    let dir = tempdir().unwrap();
    let path = write_bench(dir.path(), "zero.csv", &[("insertion", 0, 0.0)]);
    assert_eq!(load_file(&path, &LoadOptions::default()).unwrap().len(), 1);
}

#[test]
fn saved_samples_load_back() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("out.csv");
    let samples = vec![Sample::new("merge", 1024, 0.001_5), Sample::new("qsort", 2048, 0.002)];
    save_samples(&path, &samples, &LoadOptions::default()).unwrap();
    assert_eq!(load_file(&path, &LoadOptions::default()).unwrap(), samples);
}
