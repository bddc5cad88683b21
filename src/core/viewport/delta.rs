/// One frame's worth of requested view change.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewportDelta {
    /// Screen-space pan in pixels; +x right, +y down.
    pub pan_pixels: [f64; 2],
    /// Multiplier applied to the scale; values below one zoom in.
    pub zoom_factor: f64,
    /// Manual nudge to the iteration budget.
    pub iteration_delta: i64,
    pub reset_requested: bool,
    pub quit_requested: bool,
}

impl ViewportDelta {
    #[must_use]
    pub fn is_identity(&self) -> bool {
        self.pan_pixels == [0.0, 0.0]
            && self.zoom_factor == 1.0
            && self.iteration_delta == 0
            && !self.reset_requested
            && !self.quit_requested
    }
}

impl Default for ViewportDelta {
    fn default() -> Self {
        Self {
            pan_pixels: [0.0, 0.0],
            zoom_factor: 1.0,
            iteration_delta: 0,
            reset_requested: false,
            quit_requested: false,
        }
    }
}
