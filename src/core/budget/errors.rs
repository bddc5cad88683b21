use std::error::Error;
use std::fmt;

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum BudgetError {
    InvalidSlope { slope: f64 },
    InvalidGrowth { growth_per_doubling: f64 },
    InvalidExponent { exponent: f64 },
    InvalidReferenceScale { reference_scale: f64 },
    MinAboveCap { min_iterations: u32, hard_cap: u32 },
}

impl fmt::Display for BudgetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidSlope { slope } => {
                write!(f, "linear budget slope must be finite and non-negative, got {}", slope)
            }
            Self::InvalidGrowth {
                growth_per_doubling,
            } => write!(
                f,
                "exponential budget growth must be finite and at least 1, got {}",
                growth_per_doubling
            ),
            Self::InvalidExponent { exponent } => {
                write!(f, "power-law budget exponent must be finite and non-negative, got {}", exponent)
            }
            Self::InvalidReferenceScale { reference_scale } => write!(
                f,
                "budget reference scale must be finite and positive, got {}",
                reference_scale
            ),
            Self::MinAboveCap {
                min_iterations,
                hard_cap,
            } => write!(
                f,
                "minimum iterations {} exceed the hard cap {}",
                min_iterations, hard_cap
            ),
        }
    }
}

impl Error for BudgetError {}
