use serde::{Deserialize, Serialize};

use crate::core::actions::render_frame::ports::pixel_evaluator::PixelEvaluator;
use crate::core::actions::render_frame::render_frame::{render_frame_parallel, render_frame_serial};
use crate::core::data::colour::Colour;
use crate::core::data::pixel_buffer::PixelBuffer;
use crate::core::data::point::Point;
use crate::core::fractals::escape_time::evaluator::EscapeTimeEvaluator;
use crate::core::fractals::escape_time::params::RenderParameters;
use crate::core::palette::palette::Palette;
use crate::core::viewport::state::ViewportState;

/// Everything a frame reads, copied once before any pixel is evaluated.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameSnapshot {
    pub viewport: ViewportState,
    pub params: RenderParameters,
}

/// Per-frame parameter slots for a shading backend. The palette table itself
/// is bound separately from [`Palette::to_rgba_bytes`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameUniforms {
    pub center: [f64; 2],
    pub scale: f64,
    pub max_iterations: u32,
    pub resolution: [f64; 2],
    pub palette_size: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExecutionMode {
    Serial,
    #[default]
    Parallel,
}

/// Colours pixel centres of one snapshot.
pub struct FramePixelEvaluator<'a> {
    viewport: ViewportState,
    evaluator: EscapeTimeEvaluator,
    palette: &'a Palette,
    max_iterations: u32,
    cycle_speed: f64,
}

impl<'a> FramePixelEvaluator<'a> {
    #[must_use]
    pub fn new(snapshot: &FrameSnapshot, palette: &'a Palette) -> Self {
        Self {
            viewport: snapshot.viewport,
            evaluator: EscapeTimeEvaluator::new(&snapshot.params),
            palette,
            max_iterations: snapshot.params.max_iterations,
            cycle_speed: snapshot.params.color_cycle_speed,
        }
    }
}

impl PixelEvaluator for FramePixelEvaluator<'_> {
    fn colour_at(&self, pixel: Point) -> Colour {
        let c = self
            .viewport
            .screen_to_complex(f64::from(pixel.x) + 0.5, f64::from(pixel.y) + 0.5);
        let result = self.evaluator.evaluate(c);

        self.palette.sample(result, self.max_iterations, self.cycle_speed)
    }
}

#[derive(Debug, Clone)]
pub struct FrameRenderer {
    palette: Palette,
    execution: ExecutionMode,
}

impl FrameRenderer {
    #[must_use]
    pub fn new(palette: Palette, execution: ExecutionMode) -> Self {
        Self { palette, execution }
    }

    #[must_use]
    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    pub fn set_palette(&mut self, palette: Palette) {
        self.palette = palette;
    }

    #[must_use]
    pub fn execution(&self) -> ExecutionMode {
        self.execution
    }

    #[must_use]
    pub fn render(&self, snapshot: &FrameSnapshot) -> PixelBuffer {
        let evaluator = FramePixelEvaluator::new(snapshot, &self.palette);
        let resolution = snapshot.viewport.resolution();

        match self.execution {
            ExecutionMode::Serial => render_frame_serial(resolution, &evaluator),
            ExecutionMode::Parallel => render_frame_parallel(resolution, &evaluator),
        }
    }

    #[must_use]
    pub fn uniforms(&self, snapshot: &FrameSnapshot) -> FrameUniforms {
        let viewport = snapshot.viewport;
        let center = viewport.center();
        let resolution = viewport.resolution();

        FrameUniforms {
            center: [center.real, center.imag],
            scale: viewport.scale(),
            max_iterations: snapshot.params.max_iterations,
            resolution: [
                f64::from(resolution.width()),
                f64::from(resolution.height()),
            ],
            palette_size: self.palette.len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::complex::Complex;
    use crate::core::data::resolution::Resolution;
    use crate::core::palette::kinds::PaletteStyleKind;

    fn snapshot(width: u32, height: u32) -> FrameSnapshot {
        FrameSnapshot {
            viewport: ViewportState::new(
                Complex::new(-0.5, 0.0),
                1.5,
                Resolution::new(width, height).unwrap(),
            )
            .unwrap(),
            params: RenderParameters {
                max_iterations: 64,
                ..RenderParameters::default()
            },
        }
    }

    fn renderer(execution: ExecutionMode) -> FrameRenderer {
        FrameRenderer::new(
            Palette::generate(256, PaletteStyleKind::Rainbow).unwrap(),
            execution,
        )
    }

    #[test]
    fn serial_and_parallel_frames_are_byte_identical() {
        let snapshot = snapshot(61, 47);

        let serial = renderer(ExecutionMode::Serial).render(&snapshot);
        let parallel = renderer(ExecutionMode::Parallel).render(&snapshot);

        assert_eq!(serial.buffer(), parallel.buffer());
    }

    #[test]
    fn evaluation_order_does_not_change_colours() {
        let snapshot = snapshot(24, 18);
        let renderer = renderer(ExecutionMode::Parallel);
        let frame = renderer.render(&snapshot);
        let evaluator = FramePixelEvaluator::new(&snapshot, renderer.palette());

        let count = 24 * 18;
        // 97 is coprime with 432, so this visits every pixel once out of order
        for i in 0..count {
            let index = (i * 97) % count;
            let pixel = Point {
                x: (index % 24) as u32,
                y: (index / 24) as u32,
            };
            assert_eq!(evaluator.colour_at(pixel), frame.pixel(pixel).unwrap());
        }
    }

    #[test]
    fn centre_pixel_of_interior_view_uses_background() {
        let frame = renderer(ExecutionMode::Serial).render(&snapshot(1, 1));

        assert_eq!(frame.pixel(Point { x: 0, y: 0 }).unwrap(), Colour::BLACK);
    }

    #[test]
    fn far_corner_escapes_to_palette_colour() {
        let mut snapshot = snapshot(4, 4);
        snapshot.viewport = ViewportState::new(
            Complex::new(10.0, 10.0),
            1.0,
            Resolution::new(4, 4).unwrap(),
        )
        .unwrap();
        let renderer = renderer(ExecutionMode::Serial);

        let frame = renderer.render(&snapshot);

        // every point escapes at iteration 0
        let colour = frame.pixel(Point { x: 0, y: 0 }).unwrap();
        assert_ne!(colour, Colour::BLACK);
        assert_eq!(colour.a, 255);
    }

    #[test]
    fn uniforms_mirror_snapshot() {
        let snapshot = snapshot(800, 600);
        let uniforms = renderer(ExecutionMode::Serial).uniforms(&snapshot);

        assert_eq!(uniforms.center, [-0.5, 0.0]);
        assert_eq!(uniforms.scale, 1.5);
        assert_eq!(uniforms.max_iterations, 64);
        assert_eq!(uniforms.resolution, [800.0, 600.0]);
        assert_eq!(uniforms.palette_size, 256);
    }
}
