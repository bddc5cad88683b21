use log::debug;

use crate::core::data::complex::Complex;
use crate::core::data::resolution::Resolution;
use crate::core::viewport::delta::ViewportDelta;
use crate::core::viewport::errors::ViewportError;
use crate::core::viewport::limits::ViewportLimits;
use crate::core::viewport::state::ViewportState;

/// A finite update that was refused because it would leave the limits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewportWarning {
    ScaleLimitReached,
    CenterLimitReached,
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ViewportUpdateReport {
    pub pan_rejected: Option<ViewportError>,
    pub zoom_rejected: Option<ViewportError>,
    pub warning: Option<ViewportWarning>,
    pub changed: bool,
}

/// Sole owner of the live [`ViewportState`].
///
/// Every mutation either produces a finite state inside the limits or is
/// refused with the previous state left in place. Accepted zooms therefore
/// compose multiplicatively and accepted pans are undone by their inverse.
#[derive(Debug, Clone)]
pub struct ViewportController {
    state: ViewportState,
    home: ViewportState,
    limits: ViewportLimits,
}

impl ViewportController {
    pub fn new(state: ViewportState, limits: ViewportLimits) -> Result<Self, ViewportError> {
        let limits = limits.normalized();

        if !limits.admits_scale(state.scale()) {
            return Err(ViewportError::ScaleOutsideLimits {
                scale: state.scale(),
                min_scale: limits.min_scale,
                max_scale: limits.max_scale,
            });
        }

        let center = state.center();
        if !limits.admits_center(center) {
            return Err(ViewportError::CenterOutsideLimits {
                real: center.real,
                imag: center.imag,
                max_center_abs: limits.max_center_abs,
            });
        }

        Ok(Self {
            state,
            home: state,
            limits,
        })
    }

    #[must_use]
    pub fn state(&self) -> ViewportState {
        self.state
    }

    #[must_use]
    pub fn limits(&self) -> ViewportLimits {
        self.limits
    }

    #[must_use]
    pub fn screen_to_complex(&self, px: f64, py: f64) -> Complex {
        self.state.screen_to_complex(px, py)
    }

    pub fn pan(&mut self, delta_pixels: [f64; 2]) -> Result<Option<ViewportWarning>, ViewportError> {
        let [dx, dy] = delta_pixels;
        if !dx.is_finite() || !dy.is_finite() {
            return Err(ViewportError::NonFinitePan { dx, dy });
        }

        let step = self.state.plane_units_per_pixel();
        let center = self.state.center();
        let moved = Complex {
            real: center.real + dx * step,
            imag: center.imag - dy * step,
        };

        if !moved.is_finite() {
            return Err(ViewportError::NonFiniteResult);
        }

        if !self.limits.admits_center(moved) {
            return Ok(Some(ViewportWarning::CenterLimitReached));
        }

        self.state = self.state.with_center(moved);
        Ok(None)
    }

    pub fn zoom(&mut self, factor: f64) -> Result<Option<ViewportWarning>, ViewportError> {
        if !factor.is_finite() || factor <= 0.0 {
            return Err(ViewportError::InvalidZoomFactor { factor });
        }

        let scaled = self.state.scale() * factor;
        if !scaled.is_finite() || scaled <= 0.0 {
            return Err(ViewportError::NonFiniteResult);
        }

        if !self.limits.admits_scale(scaled) {
            return Ok(Some(ViewportWarning::ScaleLimitReached));
        }

        self.state = self.state.with_scale(scaled);
        Ok(None)
    }

    pub fn resize(&mut self, resolution: Resolution) {
        self.state = self.state.with_resolution(resolution);
        self.home = self.home.with_resolution(resolution);
    }

    /// Restores the view the controller was created with, keeping the current resolution.
    pub fn reset(&mut self) {
        self.state = self.home.with_resolution(self.state.resolution());
    }

    /// Applies pan then zoom; a rejected or refused component is skipped
    /// without affecting the other.
    pub fn update(&mut self, delta: &ViewportDelta) -> ViewportUpdateReport {
        let before = self.state;
        let mut report = ViewportUpdateReport::default();

        if delta.pan_pixels != [0.0, 0.0] {
            match self.pan(delta.pan_pixels) {
                Ok(warning) => report.warning = report.warning.or(warning),
                Err(err) => {
                    debug!("pan rejected: {}", err);
                    report.pan_rejected = Some(err);
                }
            }
        }

        if delta.zoom_factor != 1.0 {
            match self.zoom(delta.zoom_factor) {
                Ok(warning) => report.warning = report.warning.or(warning),
                Err(err) => {
                    debug!("zoom rejected: {}", err);
                    report.zoom_rejected = Some(err);
                }
            }
        }

        report.changed = self.state != before;
        report
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-12;

    fn controller() -> ViewportController {
        let state = ViewportState::new(
            Complex::new(-0.5, 0.0),
            1.5,
            Resolution::new(800, 600).unwrap(),
        )
        .unwrap();

        ViewportController::new(state, ViewportLimits::default()).unwrap()
    }

    fn assert_approx_eq(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() <= EPSILON * expected.abs().max(1.0),
            "actual={} expected={}",
            actual,
            expected
        );
    }

    #[test]
    fn pan_moves_center_by_pixel_spacing() {
        let mut viewport = controller();

        viewport.pan([100.0, -50.0]).unwrap();

        let step = 2.0 * 1.5 / 800.0;
        assert_approx_eq(viewport.state().center().real, -0.5 + 100.0 * step);
        assert_approx_eq(viewport.state().center().imag, 50.0 * step);
    }

    #[test]
    fn pan_lands_on_the_point_previously_at_that_offset() {
        let mut viewport = controller();
        let target = viewport.screen_to_complex(400.0 + 37.0, 300.0 + 12.0);

        viewport.pan([37.0, 12.0]).unwrap();

        assert_approx_eq(viewport.state().center().real, target.real);
        assert_approx_eq(viewport.state().center().imag, target.imag);
    }

    #[test]
    fn pan_then_inverse_pan_restores_center() {
        let mut viewport = controller();
        let original = viewport.state().center();

        viewport.pan([123.5, -77.25]).unwrap();
        viewport.pan([-123.5, 77.25]).unwrap();

        assert_approx_eq(viewport.state().center().real, original.real);
        assert_approx_eq(viewport.state().center().imag, original.imag);
    }

    #[test]
    fn zoom_composes_multiplicatively() {
        let mut stepwise = controller();
        let mut single = controller();

        stepwise.zoom(0.8).unwrap();
        stepwise.zoom(0.3).unwrap();
        single.zoom(0.8 * 0.3).unwrap();

        assert_approx_eq(stepwise.state().scale(), single.state().scale());
    }

    #[test]
    fn zoom_rejects_non_positive_and_non_finite_factors() {
        let mut viewport = controller();
        let before = viewport.state();

        for factor in [0.0, -2.0, f64::NAN, f64::INFINITY] {
            let result = viewport.zoom(factor);
            assert!(
                matches!(result, Err(ViewportError::InvalidZoomFactor { .. })),
                "factor {factor}"
            );
        }

        assert_eq!(viewport.state(), before);
    }

    #[test]
    fn zoom_overflow_is_rejected_not_applied() {
        let mut viewport = controller();
        let before = viewport.state();

        let result = viewport.zoom(f64::MAX);

        assert_eq!(result, Err(ViewportError::NonFiniteResult));
        assert_eq!(viewport.state(), before);
    }

    #[test]
    fn zoom_beyond_scale_limits_is_refused() {
        let mut viewport = controller();
        let before = viewport.state();

        assert_eq!(viewport.zoom(1e-20), Ok(Some(ViewportWarning::ScaleLimitReached)));
        assert_eq!(viewport.zoom(1e30), Ok(Some(ViewportWarning::ScaleLimitReached)));
        assert_eq!(viewport.state(), before);
    }

    #[test]
    fn zooms_near_the_scale_limit_still_compose() {
        let mut stepwise = controller();
        let mut single = controller();

        // 1.5 * 10 = 15 fits under the default max of 20; a further x2 does not
        assert_eq!(stepwise.zoom(10.0), Ok(None));
        assert_eq!(stepwise.zoom(2.0), Ok(Some(ViewportWarning::ScaleLimitReached)));
        assert_eq!(stepwise.zoom(0.1), Ok(None));
        single.zoom(10.0 * 0.1).unwrap();

        assert_approx_eq(stepwise.state().scale(), single.state().scale());
        assert_approx_eq(stepwise.state().scale(), 1.5);
    }

    #[test]
    fn pan_rejects_non_finite_delta() {
        let mut viewport = controller();
        let before = viewport.state();

        let result = viewport.pan([f64::NAN, 0.0]);

        assert!(matches!(result, Err(ViewportError::NonFinitePan { .. })));
        assert_eq!(viewport.state(), before);
    }

    #[test]
    fn pan_beyond_center_limit_is_refused() {
        let mut viewport = controller();
        let before = viewport.state();

        let warning = viewport.pan([30_000.0, 0.0]).unwrap();

        assert_eq!(warning, Some(ViewportWarning::CenterLimitReached));
        assert_eq!(viewport.state(), before);
    }

    #[test]
    fn pans_near_the_center_limit_are_reversible() {
        let mut viewport = controller();
        let original = viewport.state().center();

        // 26000px at 3/800 per pixel lands at real 97, inside the bound of 100
        assert_eq!(viewport.pan([26_000.0, 0.0]), Ok(None));
        assert_eq!(
            viewport.pan([26_000.0, 0.0]),
            Ok(Some(ViewportWarning::CenterLimitReached))
        );
        assert_eq!(viewport.pan([-26_000.0, 0.0]), Ok(None));

        assert_approx_eq(viewport.state().center().real, original.real);
        assert_approx_eq(viewport.state().center().imag, original.imag);
    }

    #[test]
    fn new_rejects_home_view_outside_limits() {
        let resolution = Resolution::new(800, 600).unwrap();
        let wide = ViewportState::new(Complex::new(-0.5, 0.0), 50.0, resolution).unwrap();
        let far = ViewportState::new(Complex::new(0.0, 150.0), 1.5, resolution).unwrap();

        assert!(matches!(
            ViewportController::new(wide, ViewportLimits::default()),
            Err(ViewportError::ScaleOutsideLimits { scale, .. }) if scale == 50.0
        ));
        assert!(matches!(
            ViewportController::new(far, ViewportLimits::default()),
            Err(ViewportError::CenterOutsideLimits { .. })
        ));
    }

    #[test]
    fn update_applies_pan_and_zoom_independently() {
        let mut viewport = controller();
        let delta = ViewportDelta {
            pan_pixels: [10.0, 0.0],
            zoom_factor: -1.0,
            ..ViewportDelta::default()
        };

        let report = viewport.update(&delta);

        assert!(report.changed);
        assert!(report.pan_rejected.is_none());
        assert!(matches!(
            report.zoom_rejected,
            Some(ViewportError::InvalidZoomFactor { .. })
        ));
        assert_eq!(viewport.state().scale(), 1.5);
    }

    #[test]
    fn update_with_identity_delta_changes_nothing() {
        let mut viewport = controller();

        let report = viewport.update(&ViewportDelta::default());

        assert!(!report.changed);
        assert_eq!(report, ViewportUpdateReport::default());
    }

    #[test]
    fn reset_restores_home_view_at_current_resolution() {
        let mut viewport = controller();
        viewport.pan([40.0, 40.0]).unwrap();
        viewport.zoom(0.1).unwrap();
        let resized = Resolution::new(320, 200).unwrap();
        viewport.resize(resized);

        viewport.reset();

        assert_eq!(viewport.state().center(), Complex::new(-0.5, 0.0));
        assert_eq!(viewport.state().scale(), 1.5);
        assert_eq!(viewport.state().resolution(), resized);
    }
}
