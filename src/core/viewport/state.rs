use crate::core::data::complex::Complex;
use crate::core::data::resolution::Resolution;
use crate::core::viewport::errors::ViewportError;

/// The region of the plane mapped onto the display.
///
/// `scale` is the half-width of the visible region; the half-height follows
/// from the resolution's aspect ratio so pixels stay square.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewportState {
    center: Complex,
    scale: f64,
    resolution: Resolution,
}

impl ViewportState {
    pub fn new(
        center: Complex,
        scale: f64,
        resolution: Resolution,
    ) -> Result<Self, ViewportError> {
        if !center.is_finite() {
            return Err(ViewportError::NonFiniteCenter {
                real: center.real,
                imag: center.imag,
            });
        }

        if !scale.is_finite() || scale <= 0.0 {
            return Err(ViewportError::NonPositiveScale { scale });
        }

        Ok(Self {
            center,
            scale,
            resolution,
        })
    }

    #[must_use]
    pub fn center(&self) -> Complex {
        self.center
    }

    #[must_use]
    pub fn scale(&self) -> f64 {
        self.scale
    }

    #[must_use]
    pub fn resolution(&self) -> Resolution {
        self.resolution
    }

    /// Plane distance covered by one pixel, identical on both axes.
    #[must_use]
    pub fn plane_units_per_pixel(&self) -> f64 {
        2.0 * self.scale / f64::from(self.resolution.width())
    }

    /// Maps a (possibly fractional) pixel position to the plane.
    ///
    /// `x` spans [-1, 1] across the width and `y` spans the aspect-corrected
    /// range, with screen-down mapping to negative imaginary.
    #[must_use]
    pub fn screen_to_complex(&self, px: f64, py: f64) -> Complex {
        let width = f64::from(self.resolution.width());
        let height = f64::from(self.resolution.height());

        let normalized_x = (2.0 * px / width) - 1.0;
        let normalized_y = (1.0 - 2.0 * py / height) * self.resolution.aspect();

        Complex {
            real: self.center.real + normalized_x * self.scale,
            imag: self.center.imag + normalized_y * self.scale,
        }
    }

    pub(crate) fn with_center(self, center: Complex) -> Self {
        Self { center, ..self }
    }

    pub(crate) fn with_scale(self, scale: f64) -> Self {
        Self { scale, ..self }
    }

    pub(crate) fn with_resolution(self, resolution: Resolution) -> Self {
        Self { resolution, ..self }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-12;

    fn state(width: u32, height: u32) -> ViewportState {
        ViewportState::new(
            Complex::new(-0.5, 0.25),
            1.5,
            Resolution::new(width, height).unwrap(),
        )
        .unwrap()
    }

    #[test]
    fn new_rejects_invalid_scale_and_center() {
        let resolution = Resolution::new(10, 10).unwrap();

        assert_eq!(
            ViewportState::new(Complex::ZERO, 0.0, resolution),
            Err(ViewportError::NonPositiveScale { scale: 0.0 })
        );
        assert!(ViewportState::new(Complex::ZERO, f64::INFINITY, resolution).is_err());
        assert!(ViewportState::new(Complex::new(f64::NAN, 0.0), 1.0, resolution).is_err());
    }

    #[test]
    fn screen_center_maps_to_view_center() {
        let view = state(800, 600);
        let c = view.screen_to_complex(400.0, 300.0);

        assert!((c.real - -0.5).abs() < EPSILON);
        assert!((c.imag - 0.25).abs() < EPSILON);
    }

    #[test]
    fn screen_corners_span_scale_and_aspect() {
        let view = state(800, 600);
        let top_left = view.screen_to_complex(0.0, 0.0);
        let bottom_right = view.screen_to_complex(800.0, 600.0);

        assert!((top_left.real - (-0.5 - 1.5)).abs() < EPSILON);
        assert!((top_left.imag - (0.25 + 1.5 * 0.75)).abs() < EPSILON);
        assert!((bottom_right.real - (-0.5 + 1.5)).abs() < EPSILON);
        assert!((bottom_right.imag - (0.25 - 1.5 * 0.75)).abs() < EPSILON);
    }

    #[test]
    fn pixels_are_square_in_the_plane() {
        let view = state(640, 200);
        let origin = view.screen_to_complex(10.0, 10.0);
        let right = view.screen_to_complex(11.0, 10.0);
        let down = view.screen_to_complex(10.0, 11.0);

        let step = view.plane_units_per_pixel();
        assert!(((right.real - origin.real) - step).abs() < EPSILON);
        assert!(((origin.imag - down.imag) - step).abs() < EPSILON);
    }
}
