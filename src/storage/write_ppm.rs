use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use crate::adapters::pixel_format::rgba_to_rgb;
use crate::core::data::pixel_buffer::PixelBuffer;

/// Writes a binary (P6) PPM. Alpha is dropped.
pub fn write_ppm<W: Write>(buffer: &PixelBuffer, mut writer: W) -> io::Result<()> {
    let resolution = buffer.resolution();

    // PPM header: P6 means binary RGB, then width height max_colour
    writeln!(writer, "P6")?;
    writeln!(writer, "{} {}", resolution.width(), resolution.height())?;
    writeln!(writer, "255")?;
    writer.write_all(&rgba_to_rgb(buffer.buffer()))?;
    writer.flush()
}

pub fn write_ppm_file(buffer: &PixelBuffer, filepath: impl AsRef<Path>) -> io::Result<()> {
    let file = File::create(filepath)?;

    write_ppm(buffer, BufWriter::new(file))
}
