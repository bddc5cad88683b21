use std::path::Path;

use crate::config::explorer_config::PaletteConfig;
use crate::core::palette::palette::Palette;
use crate::errors::ResourceError;
use crate::storage::palette_file::write_palette_file;

/// Builds the configured palette and saves it as a flat RGBA file.
pub struct ExportPaletteCommand {
    config: PaletteConfig,
}

impl ExportPaletteCommand {
    #[must_use]
    pub fn new(config: PaletteConfig) -> Self {
        Self { config }
    }

    pub fn execute(&self, output: &Path) -> Result<Palette, ResourceError> {
        let palette = self.config.build()?;
        write_palette_file(&palette, output)?;

        Ok(palette)
    }
}
