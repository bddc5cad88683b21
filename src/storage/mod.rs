pub mod palette_file;
pub mod write_ppm;
