use crate::core::data::colour::Colour;
use crate::core::palette::kinds::PaletteStyleKind;

/// Continuous colour function sampled when a palette table is built.
pub trait PaletteGenerator: Send + Sync {
    /// Colour at `t` in [0, 1].
    fn colour_at(&self, t: f64) -> Colour;

    fn kind(&self) -> PaletteStyleKind;

    fn display_name(&self) -> &str {
        self.kind().display_name()
    }
}
