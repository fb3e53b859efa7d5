use crate::errors::AnalysisError;
use crate::types::RegressionResult;
use crate::utils::num::usize_to_f64;
use statrs::distribution::{ContinuousCDF, StudentsT};

const TINY: f64 = 1.0e-20;

/// Why a regression could not be computed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FitFailure {
    LengthMismatch,
    Empty,
    ConstantX,
    NonFinite,
    Distribution(String),
}

impl FitFailure {
    #[must_use]
    pub fn reason(&self) -> String {
        match self {
            FitFailure::LengthMismatch => "x and y differ in length".to_string(),
            FitFailure::Empty => "no points".to_string(),
            FitFailure::ConstantX => "all hypothesis values are identical".to_string(),
            FitFailure::NonFinite => "values or moments are not finite".to_string(),
            FitFailure::Distribution(e) => format!("t distribution: {e}"),
        }
    }

    /// Attach the algorithm name.
    #[must_use]
    pub fn into_error(self, algorithm: &str) -> AnalysisError {
        match self {
            FitFailure::Distribution(e) => AnalysisError::Stats(e),
            other => AnalysisError::DegenerateFit { algorithm: algorithm.to_string(), reason: other.reason() },
        }
    }
}

fn mean(v: &[f64]) -> f64 {
    v.iter().sum::<f64>() / usize_to_f64(v.len())
}

/// Ordinary least-squares fit of `y = slope * x + intercept`.
///
/// Moments are population moments; correlation, two-sided p-value (Student t,
/// `n - 2` degrees of freedom) and standard errors follow the usual `linregress`
/// definitions.
///
/// # Errors
/// Returns a `FitFailure` for inputs that admit no fit: empty, mismatched,
/// constant `x`, or any value or moment that is NaN or infinite.
pub fn linregress(x: &[f64], y: &[f64]) -> Result<RegressionResult, FitFailure> {
    if x.len() != y.len() {
        return Err(FitFailure::LengthMismatch);
    }
    if x.is_empty() {
        return Err(FitFailure::Empty);
    }
    if x.iter().chain(y).any(|v| !v.is_finite()) {
        return Err(FitFailure::NonFinite);
    }
    let n = x.len();
    let nf = usize_to_f64(n);
    let xmean = mean(x);
    let ymean = mean(y);
    let (mut ssxm, mut ssym, mut ssxym) = (0.0, 0.0, 0.0);
    for (xi, yi) in x.iter().zip(y) {
        let dx = xi - xmean;
        let dy = yi - ymean;
        ssxm += dx * dx;
        ssym += dy * dy;
        ssxym += dx * dy;
    }
    ssxm /= nf;
    ssym /= nf;
    ssxym /= nf;
    if !(xmean.is_finite() && ymean.is_finite() && ssxm.is_finite() && ssym.is_finite() && ssxym.is_finite()) {
        return Err(FitFailure::NonFinite);
    }
    if ssxm == 0.0 {
        return Err(FitFailure::ConstantX);
    }

    let r_den = (ssxm * ssym).sqrt();
    let r = if r_den == 0.0 { 0.0 } else { (ssxym / r_den).clamp(-1.0, 1.0) };
    let slope = ssxym / ssxm;
    let intercept = ymean - slope * xmean;
    if !(r.is_finite() && slope.is_finite() && intercept.is_finite()) {
        return Err(FitFailure::NonFinite);
    }

    let (p_value, standard_error, intercept_stderr) = if n == 2 {
        let p = if y[0] == y[1] { 1.0 } else { 0.0 };
        (p, 0.0, 0.0)
    } else {
        let df = nf - 2.0;
        let t = r * (df / ((1.0 - r) * (1.0 + r) + TINY)).sqrt();
        if !t.is_finite() {
            return Err(FitFailure::NonFinite);
        }
        let dist = StudentsT::new(0.0, 1.0, df).map_err(|e| FitFailure::Distribution(e.to_string()))?;
        let p = 2.0 * dist.sf(t.abs());
        let slope_se = ((1.0 - r * r) * ssym / ssxm / df).sqrt();
        (p, slope_se, slope_se * (ssxm + xmean * xmean).sqrt())
    };

    Ok(RegressionResult {
        slope,
        intercept,
        correlation_coefficient: r,
        p_value,
        standard_error,
        intercept_stderr,
        points: n,
    })
}
