use std::fs;
use std::path::Path;

use log::info;

use crate::core::palette::palette::Palette;
use crate::errors::ResourceError;

/// Saves the palette as a flat run of RGBA bytes.
pub fn write_palette_file(palette: &Palette, path: &Path) -> Result<(), ResourceError> {
    fs::write(path, palette.to_rgba_bytes()).map_err(|source| ResourceError::PaletteFile {
        path: path.to_path_buf(),
        source,
    })?;

    info!("wrote {} palette entries to {}", palette.len(), path.display());
    Ok(())
}

pub fn read_palette_file(path: &Path) -> Result<Palette, ResourceError> {
    let bytes = fs::read(path).map_err(|source| ResourceError::PaletteFile {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(Palette::from_rgba_bytes(&bytes)?)
}
