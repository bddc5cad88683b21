use rayon::prelude::*;

use crate::core::actions::render_frame::ports::pixel_evaluator::PixelEvaluator;
use crate::core::data::pixel_buffer::{BYTES_PER_PIXEL, PixelBuffer};
use crate::core::data::point::Point;
use crate::core::data::resolution::Resolution;

fn render_row<E: PixelEvaluator>(evaluator: &E, y: u32, row: &mut [u8]) {
    for (x, rgba) in row.chunks_exact_mut(BYTES_PER_PIXEL).enumerate() {
        let colour = evaluator.colour_at(Point { x: x as u32, y });
        rgba.copy_from_slice(&colour.to_rgba());
    }
}

pub fn render_frame_serial<E: PixelEvaluator>(resolution: Resolution, evaluator: &E) -> PixelBuffer {
    let mut pixel_buffer = PixelBuffer::new(resolution);
    let row_bytes = resolution.width() as usize * BYTES_PER_PIXEL;

    for (y, row) in pixel_buffer.buffer_mut().chunks_exact_mut(row_bytes).enumerate() {
        render_row(evaluator, y as u32, row);
    }

    pixel_buffer
}

/// Renders rows in parallel on the rayon pool. Output is identical to
/// [`render_frame_serial`].
pub fn render_frame_parallel<E: PixelEvaluator>(
    resolution: Resolution,
    evaluator: &E,
) -> PixelBuffer {
    let mut pixel_buffer = PixelBuffer::new(resolution);
    let row_bytes = resolution.width() as usize * BYTES_PER_PIXEL;

    pixel_buffer
        .buffer_mut()
        .par_chunks_exact_mut(row_bytes)
        .enumerate()
        .for_each(|(y, row)| render_row(evaluator, y as u32, row));

    pixel_buffer
}
