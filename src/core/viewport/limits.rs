use serde::{Deserialize, Serialize};

use crate::core::data::complex::Complex;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewportLimits {
    pub min_scale: f64,
    pub max_scale: f64,
    pub max_center_abs: f64,
}

impl ViewportLimits {
    /// Limits with the bounds swapped into order and signs normalised.
    #[must_use]
    pub fn normalized(&self) -> Self {
        Self {
            min_scale: self.min_scale.min(self.max_scale),
            max_scale: self.min_scale.max(self.max_scale),
            max_center_abs: self.max_center_abs.abs(),
        }
    }

    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.min_scale.is_finite()
            && self.max_scale.is_finite()
            && self.max_center_abs.is_finite()
            && self.min_scale > 0.0
            && self.max_scale >= self.min_scale
            && self.max_center_abs > 0.0
    }

    #[must_use]
    pub fn admits_scale(&self, scale: f64) -> bool {
        (self.min_scale..=self.max_scale).contains(&scale)
    }

    #[must_use]
    pub fn admits_center(&self, center: Complex) -> bool {
        center.real.abs() <= self.max_center_abs && center.imag.abs() <= self.max_center_abs
    }
}

impl Default for ViewportLimits {
    fn default() -> Self {
        Self {
            // below this, f64 pixel spacing collapses at typical centers
            min_scale: 1e-13,
            max_scale: 20.0,
            max_center_abs: 100.0,
        }
    }
}
