use std::ops::{Add, Mul};

use serde::{Deserialize, Serialize};

// hand-rolled rather than num-complex: the evaluator only needs add, mul and integer powers
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct Complex {
    pub real: f64,
    pub imag: f64,
}

impl Complex {
    pub const ZERO: Self = Self {
        real: 0.0,
        imag: 0.0,
    };

    pub const ONE: Self = Self {
        real: 1.0,
        imag: 0.0,
    };

    #[must_use]
    pub const fn new(real: f64, imag: f64) -> Self {
        Self { real, imag }
    }

    #[must_use]
    pub fn magnitude_squared(&self) -> f64 {
        self.real * self.real + self.imag * self.imag
    }

    /// Modulus computed with `hypot`, so it stays finite where the squared
    /// magnitude would overflow.
    #[must_use]
    pub fn magnitude(&self) -> f64 {
        self.real.hypot(self.imag)
    }

    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.real.is_finite() && self.imag.is_finite()
    }

    /// Raises to a non-negative integer power by repeated squaring.
    #[must_use]
    pub fn powi(self, exponent: u32) -> Self {
        match exponent {
            0 => Self::ONE,
            1 => self,
            2 => self * self,
            _ => {
                let mut result = Self::ONE;
                let mut base = self;
                let mut remaining = exponent;

                while remaining > 0 {
                    if remaining & 1 == 1 {
                        result = result * base;
                    }
                    remaining >>= 1;
                    if remaining > 0 {
                        base = base * base;
                    }
                }

                result
            }
        }
    }
}

impl Add for Complex {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self {
            real: self.real + other.real,
            imag: self.imag + other.imag,
        }
    }
}

impl Mul for Complex {
    type Output = Self;

    fn mul(self, other: Self) -> Self {
        Self {
            real: self.real * other.real - self.imag * other.imag,
            imag: self.real * other.imag + self.imag * other.real,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_magnitude_squared_ignores_signs() {
        for (real, imag) in [(3.0, 4.0), (-3.0, 4.0), (3.0, -4.0), (-3.0, -4.0)] {
            assert_eq!(Complex::new(real, imag).magnitude_squared(), 25.0);
        }
    }

    #[test]
    fn test_magnitude_survives_large_components() {
        let c = Complex::new(1e200, 1e200);

        assert!(c.magnitude_squared().is_infinite());
        assert!(c.magnitude().is_finite());
    }

    #[test]
    fn test_add() {
        let result = Complex::new(1.0, 2.0) + Complex::new(-3.0, -7.0);

        assert_eq!(result, Complex::new(-2.0, -5.0));
    }

    #[test]
    fn test_mul() {
        // (1 + 2i)(3 + 4i) = 3 + 4i + 6i + 8i² = -5 + 10i
        let result = Complex::new(1.0, 2.0) * Complex::new(3.0, 4.0);

        assert_eq!(result, Complex::new(-5.0, 10.0));
    }

    #[test]
    fn test_powi_small_exponents() {
        let c = Complex::new(2.0, 3.0);

        assert_eq!(c.powi(0), Complex::ONE);
        assert_eq!(c.powi(1), c);
        // (2 + 3i)² = 4 + 12i - 9
        assert_eq!(c.powi(2), Complex::new(-5.0, 12.0));
    }

    #[test]
    fn test_powi_matches_repeated_multiplication() {
        let c = Complex::new(0.5, -0.25);

        for exponent in 3..=9 {
            let mut expected = Complex::ONE;
            for _ in 0..exponent {
                expected = expected * c;
            }
            let actual = c.powi(exponent);

            assert!((actual.real - expected.real).abs() < 1e-12, "exponent {exponent}");
            assert!((actual.imag - expected.imag).abs() < 1e-12, "exponent {exponent}");
        }
    }

    #[test]
    fn test_powi_of_i_cycles() {
        let i = Complex::new(0.0, 1.0);

        assert_eq!(i.powi(4), Complex::ONE);
        assert_eq!(i.powi(3), Complex::new(0.0, -1.0));
    }

    #[test]
    fn test_is_finite() {
        assert!(Complex::new(1.0, -1.0).is_finite());
        assert!(!Complex::new(f64::NAN, 0.0).is_finite());
        assert!(!Complex::new(0.0, f64::INFINITY).is_finite());
    }
}
