use std::error::Error;
use std::fmt;

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum ViewportError {
    NonPositiveScale { scale: f64 },
    NonFiniteCenter { real: f64, imag: f64 },
    NonFinitePan { dx: f64, dy: f64 },
    InvalidZoomFactor { factor: f64 },
    NonFiniteResult,
    ScaleOutsideLimits { scale: f64, min_scale: f64, max_scale: f64 },
    CenterOutsideLimits { real: f64, imag: f64, max_center_abs: f64 },
}

impl fmt::Display for ViewportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonPositiveScale { scale } => {
                write!(f, "viewport scale must be finite and positive, got {}", scale)
            }
            Self::NonFiniteCenter { real, imag } => {
                write!(f, "viewport center must be finite, got ({}, {})", real, imag)
            }
            Self::NonFinitePan { dx, dy } => {
                write!(f, "pan delta must be finite, got ({}, {})", dx, dy)
            }
            Self::InvalidZoomFactor { factor } => {
                write!(f, "zoom factor must be finite and positive, got {}", factor)
            }
            Self::NonFiniteResult => {
                write!(f, "viewport update produced a non-finite state")
            }
            Self::ScaleOutsideLimits {
                scale,
                min_scale,
                max_scale,
            } => {
                write!(
                    f,
                    "viewport scale {} outside limits [{}, {}]",
                    scale, min_scale, max_scale
                )
            }
            Self::CenterOutsideLimits {
                real,
                imag,
                max_center_abs,
            } => {
                write!(
                    f,
                    "viewport center ({}, {}) outside +/-{}",
                    real, imag, max_center_abs
                )
            }
        }
    }
}

impl Error for ViewportError {}
