use serde::{Deserialize, Serialize};

use crate::core::budget::errors::BudgetError;

/// How the automatic iteration budget grows with zoom depth.
///
/// Every variant is non-decreasing in depth once validated.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "strategy", rename_all = "snake_case")]
pub enum BudgetGrowth {
    Fixed,
    Linear { slope: f64 },
    Exponential { growth_per_doubling: f64 },
    PowerLaw { exponent: f64 },
}

impl BudgetGrowth {
    pub fn validate(&self) -> Result<(), BudgetError> {
        match *self {
            Self::Fixed => Ok(()),
            Self::Linear { slope } => {
                if slope.is_finite() && slope >= 0.0 {
                    Ok(())
                } else {
                    Err(BudgetError::InvalidSlope { slope })
                }
            }
            Self::Exponential {
                growth_per_doubling,
            } => {
                if growth_per_doubling.is_finite() && growth_per_doubling >= 1.0 {
                    Ok(())
                } else {
                    Err(BudgetError::InvalidGrowth {
                        growth_per_doubling,
                    })
                }
            }
            Self::PowerLaw { exponent } => {
                if exponent.is_finite() && exponent >= 0.0 {
                    Ok(())
                } else {
                    Err(BudgetError::InvalidExponent { exponent })
                }
            }
        }
    }

    /// Unclamped budget at `depth` (>= 1) for the given base.
    #[must_use]
    pub fn budget_at(&self, base: f64, depth: f64) -> f64 {
        match *self {
            Self::Fixed => base,
            Self::Linear { slope } => base + slope * (depth - 1.0),
            Self::Exponential {
                growth_per_doubling,
            } => base * growth_per_doubling.powf(depth.log2()),
            Self::PowerLaw { exponent } => base * depth.powf(exponent),
        }
    }

    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::Fixed => "fixed",
            Self::Linear { .. } => "linear",
            Self::Exponential { .. } => "exponential",
            Self::PowerLaw { .. } => "power_law",
        }
    }
}

impl Default for BudgetGrowth {
    fn default() -> Self {
        Self::PowerLaw { exponent: 0.5 }
    }
}
