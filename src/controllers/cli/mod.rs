pub mod export_palette;
pub mod render;
