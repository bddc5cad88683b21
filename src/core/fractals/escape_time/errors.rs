use std::error::Error;
use std::fmt;

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum EscapeTimeError {
    PowerTooSmall { power: u32 },
    InvalidBailout { bailout_radius: f64 },
    InvalidCycleSpeed { color_cycle_speed: f64 },
}

impl fmt::Display for EscapeTimeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PowerTooSmall { power } => {
                write!(f, "power must be at least 2, got {}", power)
            }
            Self::InvalidBailout { bailout_radius } => {
                write!(f, "bailout radius must be finite and positive, got {}", bailout_radius)
            }
            Self::InvalidCycleSpeed { color_cycle_speed } => write!(
                f,
                "colour cycle speed must be finite and positive, got {}",
                color_cycle_speed
            ),
        }
    }
}

impl Error for EscapeTimeError {}
