use std::time::Duration;

use crate::core::actions::render_frame::frame_renderer::{FrameSnapshot, FrameUniforms};
use crate::core::data::pixel_buffer::PixelBuffer;

#[derive(Debug)]
pub struct FrameData {
    pub frame_index: u64,
    pub pixel_buffer: PixelBuffer,
    pub render_duration: Duration,
    pub snapshot: FrameSnapshot,
    pub uniforms: FrameUniforms,
}
