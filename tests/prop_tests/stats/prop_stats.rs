use benchcurve::stats::linregress;
use proptest::prelude::*;

proptest! {
    #[test]
    fn prop_statistics_stay_in_range(
        pts in prop::collection::vec((-1e3f64..1e3, -1e3f64..1e3), 3..40)
    ) {
        let (x, y): (Vec<f64>, Vec<f64>) = pts.into_iter().unzip();
        if let Ok(r) = linregress(&x, &y) {
            prop_assert!((-1.0..=1.0).contains(&r.correlation_coefficient));
            prop_assert!((0.0..=1.0 + 1e-12).contains(&r.p_value));
            prop_assert!(r.standard_error >= 0.0);
            prop_assert!((0.0..=1.0).contains(&r.r_squared()));
        }
    }

    #[test]
    fn prop_fit_passes_through_means(
        pts in prop::collection::vec((-1e3f64..1e3, -1e3f64..1e3), 2..40)
    ) {
        let (x, y): (Vec<f64>, Vec<f64>) = pts.into_iter().unzip();
        if let Ok(r) = linregress(&x, &y) {
            let n = x.len() as f64;
            let (xm, ym) = (x.iter().sum::<f64>() / n, y.iter().sum::<f64>() / n);
            prop_assert!((r.predict(xm) - ym).abs() <= 1e-6 * (1.0 + ym.abs() + r.slope.abs() * xm.abs()));
        }
    }
}
