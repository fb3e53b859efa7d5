mod regression;

pub use regression::{FitFailure, linregress};
