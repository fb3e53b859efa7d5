#![no_main]
use benchcurve::hypothesis::{Growth, HypothesisTable};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        if let Ok(g) = s.parse::<Growth>() {
            assert_eq!(g.name().parse::<Growth>().ok(), Some(g));
        }
        let _ = HypothesisTable::parse_override(s);
    }
});
