use crate::core::data::complex::Complex;
use crate::core::fractals::escape_time::params::{NumericFallback, RenderParameters};
use crate::core::fractals::escape_time::result::IterationResult;

/// Escape-time test for `z -> z^power + c` starting at zero.
///
/// Stateless apart from values derived from the parameters, so one instance is
/// shared across every pixel of a frame.
#[derive(Debug, Clone, Copy)]
pub struct EscapeTimeEvaluator {
    power: u32,
    max_iterations: u32,
    fallback: NumericFallback,
    bailout_radius: f64,
    bailout_squared: f64,
    log_bailout: f64,
    log_power: f64,
}

impl EscapeTimeEvaluator {
    #[must_use]
    pub fn new(params: &RenderParameters) -> Self {
        Self {
            power: params.power,
            max_iterations: params.max_iterations,
            fallback: params.fallback,
            bailout_radius: params.bailout_radius,
            bailout_squared: params.bailout_radius * params.bailout_radius,
            log_bailout: params.bailout_radius.ln(),
            log_power: f64::from(params.power).ln(),
        }
    }

    #[must_use]
    pub fn evaluate(&self, c: Complex) -> IterationResult {
        let mut z = Complex::ZERO;

        for iteration in 0..self.max_iterations {
            z = z.powi(self.power) + c;

            if !z.is_finite() {
                match self.fallback {
                    NumericFallback::Strict => {
                        return IterationResult::Escaped {
                            iteration,
                            smooth_value: 0.0,
                        };
                    }
                    NumericFallback::Recover => z = c,
                }
            }

            if self.has_escaped(z) {
                return IterationResult::Escaped {
                    iteration,
                    smooth_value: self.smooth_value(iteration, z),
                };
            }
        }

        IterationResult::Interior
    }

    fn has_escaped(&self, z: Complex) -> bool {
        if self.bailout_squared.is_finite() {
            z.magnitude_squared() >= self.bailout_squared
        } else {
            z.magnitude() >= self.bailout_radius
        }
    }

    fn smooth_value(&self, iteration: u32, z: Complex) -> f64 {
        let n = f64::from(iteration);
        let smooth = n - (z.magnitude().ln() / self.log_bailout).ln() / self.log_power;

        if smooth.is_finite() { smooth } else { n }
    }
}
