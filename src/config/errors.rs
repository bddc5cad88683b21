use std::error::Error;
use std::fmt;
use std::io;
use std::path::PathBuf;

use crate::core::budget::errors::BudgetError;
use crate::core::data::resolution::ResolutionError;
use crate::core::fractals::escape_time::errors::EscapeTimeError;
use crate::core::palette::errors::PaletteError;
use crate::core::viewport::errors::ViewportError;

/// Rejected configuration. Always raised before the render loop starts.
#[derive(Debug)]
pub enum ConfigError {
    Read { path: PathBuf, source: io::Error },
    Parse { source: serde_json::Error },
    Resolution(ResolutionError),
    View(ViewportError),
    InvalidLimits,
    Render(EscapeTimeError),
    Budget(BudgetError),
    Palette(PaletteError),
    InvalidFrameRate { frame_rate_hz: f64 },
    InvalidInputSetting { name: &'static str, value: f64 },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Read { path, source } => {
                write!(f, "failed to read config {}: {}", path.display(), source)
            }
            Self::Parse { source } => write!(f, "failed to parse config: {}", source),
            Self::Resolution(err) => write!(f, "invalid window size: {}", err),
            Self::View(err) => write!(f, "invalid initial view: {}", err),
            Self::InvalidLimits => {
                write!(f, "viewport limits must be finite with 0 < min_scale <= max_scale and max_center_abs > 0")
            }
            Self::Render(err) => write!(f, "invalid render parameters: {}", err),
            Self::Budget(err) => write!(f, "invalid iteration budget: {}", err),
            Self::Palette(err) => write!(f, "invalid palette: {}", err),
            Self::InvalidFrameRate { frame_rate_hz } => {
                write!(f, "frame rate must be finite and positive, got {}", frame_rate_hz)
            }
            Self::InvalidInputSetting { name, value } => {
                write!(f, "input setting {} has invalid value {}", name, value)
            }
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Read { source, .. } => Some(source),
            Self::Parse { source } => Some(source),
            Self::Resolution(err) => Some(err),
            Self::View(err) => Some(err),
            Self::Render(err) => Some(err),
            Self::Budget(err) => Some(err),
            Self::Palette(err) => Some(err),
            Self::InvalidLimits
            | Self::InvalidFrameRate { .. }
            | Self::InvalidInputSetting { .. } => None,
        }
    }
}

impl From<ResolutionError> for ConfigError {
    fn from(err: ResolutionError) -> Self {
        Self::Resolution(err)
    }
}

impl From<ViewportError> for ConfigError {
    fn from(err: ViewportError) -> Self {
        Self::View(err)
    }
}

impl From<EscapeTimeError> for ConfigError {
    fn from(err: EscapeTimeError) -> Self {
        Self::Render(err)
    }
}

impl From<BudgetError> for ConfigError {
    fn from(err: BudgetError) -> Self {
        Self::Budget(err)
    }
}

impl From<PaletteError> for ConfigError {
    fn from(err: PaletteError) -> Self {
        Self::Palette(err)
    }
}
