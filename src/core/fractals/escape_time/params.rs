use serde::{Deserialize, Serialize};

use crate::core::fractals::escape_time::errors::EscapeTimeError;

/// What the evaluator does when an iterate stops being finite.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NumericFallback {
    /// Restart the orbit from `c` and keep iterating.
    #[default]
    Recover,
    /// Treat the point as escaped at the failing iteration with smooth value zero.
    Strict,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderParameters {
    pub power: u32,
    pub bailout_radius: f64,
    pub max_iterations: u32,
    /// Smooth iterations per full trip around the palette.
    pub color_cycle_speed: f64,
    pub fallback: NumericFallback,
}

impl RenderParameters {
    pub fn validate(&self) -> Result<(), EscapeTimeError> {
        if self.power < 2 {
            return Err(EscapeTimeError::PowerTooSmall { power: self.power });
        }

        if !self.bailout_radius.is_finite() || self.bailout_radius <= 0.0 {
            return Err(EscapeTimeError::InvalidBailout {
                bailout_radius: self.bailout_radius,
            });
        }

        if !self.color_cycle_speed.is_finite() || self.color_cycle_speed <= 0.0 {
            return Err(EscapeTimeError::InvalidCycleSpeed {
                color_cycle_speed: self.color_cycle_speed,
            });
        }

        Ok(())
    }
}

impl Default for RenderParameters {
    fn default() -> Self {
        Self {
            power: 2,
            bailout_radius: 2.0,
            max_iterations: 100,
            color_cycle_speed: 64.0,
            fallback: NumericFallback::default(),
        }
    }
}
