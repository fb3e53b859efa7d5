#![no_main]
use benchcurve::stats::linregress;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|pairs: Vec<(f64, f64)>| {
    if pairs.len() > 1024 { return; }
    let (x, y): (Vec<f64>, Vec<f64>) = pairs.into_iter().unzip();
    if let Ok(r) = linregress(&x, &y) {
        if x.iter().chain(&y).all(|v| v.is_finite() && v.abs() < 1e50) {
            assert!((-1.0..=1.0).contains(&r.correlation_coefficient));
        }
    }
});
