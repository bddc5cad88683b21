use crate::core::data::colour::{Colour, unit_to_channel};
use crate::core::palette::generator::PaletteGenerator;
use crate::core::palette::kinds::PaletteStyleKind;

/// Polynomial black-body style ramp, clipped per channel.
#[derive(Debug, Default)]
pub struct FireStyle;

impl PaletteGenerator for FireStyle {
    fn colour_at(&self, t: f64) -> Colour {
        let s = 1.0 - t;

        Colour::rgb(
            unit_to_channel(9.0 * s * t * t * t),
            unit_to_channel(15.0 * s * s * t * t),
            unit_to_channel(8.5 * s * s * s * t),
        )
    }

    fn kind(&self) -> PaletteStyleKind {
        PaletteStyleKind::Fire
    }
}
