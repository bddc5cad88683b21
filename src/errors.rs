use std::error::Error;
use std::fmt;
use std::io;
use std::path::PathBuf;

use crate::config::errors::ConfigError;
use crate::core::palette::errors::PaletteError;

/// Failure to acquire something the viewer needs to run. Fatal at startup.
#[derive(Debug)]
pub enum ResourceError {
    Window { message: String },
    Surface { message: String },
    PaletteFile { path: PathBuf, source: io::Error },
    Palette(PaletteError),
    Output { path: PathBuf, source: io::Error },
}

impl fmt::Display for ResourceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Window { message } => write!(f, "failed to create window: {}", message),
            Self::Surface { message } => write!(f, "failed to create drawing surface: {}", message),
            Self::PaletteFile { path, source } => {
                write!(f, "palette file {}: {}", path.display(), source)
            }
            Self::Palette(err) => write!(f, "failed to build palette: {}", err),
            Self::Output { path, source } => {
                write!(f, "failed to write {}: {}", path.display(), source)
            }
        }
    }
}

impl Error for ResourceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::PaletteFile { source, .. } | Self::Output { source, .. } => Some(source),
            Self::Palette(err) => Some(err),
            Self::Window { .. } | Self::Surface { .. } => None,
        }
    }
}

impl From<PaletteError> for ResourceError {
    fn from(err: PaletteError) -> Self {
        Self::Palette(err)
    }
}

#[derive(Debug)]
pub enum StartupError {
    Config(ConfigError),
    Resource(ResourceError),
}

impl fmt::Display for StartupError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config(err) => write!(f, "configuration rejected: {}", err),
            Self::Resource(err) => write!(f, "{}", err),
        }
    }
}

impl Error for StartupError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Config(err) => Some(err),
            Self::Resource(err) => Some(err),
        }
    }
}

impl From<ConfigError> for StartupError {
    fn from(err: ConfigError) -> Self {
        Self::Config(err)
    }
}

impl From<ResourceError> for StartupError {
    fn from(err: ResourceError) -> Self {
        Self::Resource(err)
    }
}
