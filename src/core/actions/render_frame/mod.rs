pub mod frame_renderer;
pub mod ports;
pub mod render_frame;
