use std::error::Error;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaletteError {
    EmptyPalette,
    TooLarge { size: usize, max_size: usize },
    ByteLengthMismatch { length: usize },
}

impl fmt::Display for PaletteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyPalette => write!(f, "palette must contain at least one colour"),
            Self::TooLarge { size, max_size } => {
                write!(f, "palette size {} exceeds the maximum of {}", size, max_size)
            }
            Self::ByteLengthMismatch { length } => write!(
                f,
                "palette data of {} bytes is not a whole number of RGBA entries",
                length
            ),
        }
    }
}

impl Error for PaletteError {}
