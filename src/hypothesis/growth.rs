use crate::errors::AnalysisError;
use crate::types::InputSize;
use crate::utils::num::u64_to_f64;
use std::fmt;
use std::str::FromStr;

/// Theoretical growth functions. Logarithms are natural.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Growth {
    Constant,
    Log,
    Linear,
    NLogN,
    Quadratic,
    Cubic,
    Exponential,
}

impl Growth {
    pub const ALL: [Growth; 7] = [
        Growth::Constant,
        Growth::Log,
        Growth::Linear,
        Growth::NLogN,
        Growth::Quadratic,
        Growth::Cubic,
        Growth::Exponential,
    ];

    #[must_use]
    pub fn eval(self, n: InputSize) -> f64 {
        let x = u64_to_f64(n);
        match self {
            Growth::Constant => 1.0,
            Growth::Log => x.ln(),
            Growth::Linear => x,
            Growth::NLogN => x * x.ln(),
            Growth::Quadratic => x * x,
            Growth::Cubic => x * x * x,
            Growth::Exponential => x.exp2(),
        }
    }

    /// Canonical name, accepted back by `from_str`.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Growth::Constant => "1",
            Growth::Log => "logn",
            Growth::Linear => "n",
            Growth::NLogN => "nlogn",
            Growth::Quadratic => "n^2",
            Growth::Cubic => "n^3",
            Growth::Exponential => "2^n",
        }
    }

    /// Default axis label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Growth::Constant => "1",
            Growth::Log => "log n",
            Growth::Linear => "n",
            Growth::NLogN => "n log n",
            Growth::Quadratic => "n²",
            Growth::Cubic => "n³",
            Growth::Exponential => "2ⁿ",
        }
    }
}

impl fmt::Display for Growth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Growth {
    type Err = AnalysisError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key: String = s.chars().filter(|c| !c.is_whitespace()).collect::<String>().to_lowercase();
        let g = match key.as_str() {
            "1" | "const" | "constant" => Growth::Constant,
            "log" | "logn" | "ln" | "lnn" => Growth::Log,
            "n" | "linear" => Growth::Linear,
            "nlogn" | "nlnn" | "n*logn" => Growth::NLogN,
            "n^2" | "n2" | "n**2" | "quadratic" => Growth::Quadratic,
            "n^3" | "n3" | "n**3" | "cubic" => Growth::Cubic,
            "2^n" | "2**n" | "exp" | "exponential" => Growth::Exponential,
            _ => return Err(AnalysisError::UnknownGrowth(s.to_string())),
        };
        Ok(g)
    }
}
