use std::error::Error;
use std::fmt;

/// Largest frame accepted, 512 MiB of RGBA8.
pub const MAX_PIXELS: usize = 1 << 27;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ResolutionError {
    InvalidSize { width: u32, height: u32 },
    TooLarge { width: u32, height: u32, max_pixels: usize },
}

impl fmt::Display for ResolutionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidSize { width, height } => {
                write!(f, "resolution must be positive: {}x{}", width, height)
            }
            Self::TooLarge {
                width,
                height,
                max_pixels,
            } => {
                write!(
                    f,
                    "resolution {}x{} exceeds {} pixels",
                    width, height, max_pixels
                )
            }
        }
    }
}

impl Error for ResolutionError {}

/// Output size in pixels. Both dimensions are at least one and the total
/// never exceeds [`MAX_PIXELS`], so RGBA byte counts cannot overflow.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Resolution {
    width: u32,
    height: u32,
}

impl Resolution {
    pub fn new(width: u32, height: u32) -> Result<Self, ResolutionError> {
        if width == 0 || height == 0 {
            return Err(ResolutionError::InvalidSize { width, height });
        }

        let pixels = (width as usize).checked_mul(height as usize);
        if !pixels.is_some_and(|count| count <= MAX_PIXELS) {
            return Err(ResolutionError::TooLarge {
                width,
                height,
                max_pixels: MAX_PIXELS,
            });
        }

        Ok(Self { width, height })
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[must_use]
    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Height over width; the imaginary half-extent is `scale * aspect`.
    #[must_use]
    pub fn aspect(&self) -> f64 {
        f64::from(self.height) / f64::from(self.width)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolution_new_valid() {
        let resolution = Resolution::new(800, 600).unwrap();

        assert_eq!(resolution.width(), 800);
        assert_eq!(resolution.height(), 600);
        assert_eq!(resolution.pixel_count(), 480_000);
        assert_eq!(resolution.aspect(), 0.75);
    }

    #[test]
    fn test_resolution_dimensions_must_be_positive() {
        assert_eq!(
            Resolution::new(0, 10),
            Err(ResolutionError::InvalidSize {
                width: 0,
                height: 10
            })
        );
        assert_eq!(
            Resolution::new(10, 0),
            Err(ResolutionError::InvalidSize {
                width: 10,
                height: 0
            })
        );
        assert!(Resolution::new(1, 1).is_ok());
    }

    #[test]
    fn test_resolution_rejects_oversized_frames() {
        for (width, height) in [(u32::MAX, u32::MAX), (100_000, 100_000), (1 << 14, (1 << 13) + 1)] {
            assert_eq!(
                Resolution::new(width, height),
                Err(ResolutionError::TooLarge {
                    width,
                    height,
                    max_pixels: MAX_PIXELS
                })
            );
        }

        let largest = Resolution::new(1 << 14, 1 << 13).unwrap();
        assert_eq!(largest.pixel_count(), MAX_PIXELS);
    }
}
