#![no_main]
use benchcurve::analysis::{Analyzer, UnknownAlgorithmPolicy};
use benchcurve::hypothesis::{HypothesisTable, Preset};
use benchcurve::load::{LoadOptions, load_from_reader};
use libfuzzer_sys::fuzz_target;
use std::io::Cursor;

fuzz_target!(|data: &[u8]| {
    if data.len() > 16384 { return; }
    let Ok(samples) = load_from_reader(Cursor::new(data), &LoadOptions::default()) else { return };
    let Ok(an) = Analyzer::new(&samples, HypothesisTable::preset(Preset::All), UnknownAlgorithmPolicy::Skip) else { return };
    for o in an.ratio_all() {
        if let Ok(series) = o.result {
            assert!(series.points.iter().all(|p| !p.ratio.is_nan()));
        }
    }
    let _ = an.fit_all();
});
