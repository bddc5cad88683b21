use crate::core::data::colour::{Colour, unit_to_channel};
use crate::core::palette::generator::PaletteGenerator;
use crate::core::palette::kinds::PaletteStyleKind;

// per-channel frequencies; the phase drift between them is what produces the hues
const FREQUENCIES: [f64; 3] = [1.0, 1.7, 2.3];
const ANGULAR: f64 = 6.28;

#[derive(Debug, Default)]
pub struct RainbowStyle;

impl PaletteGenerator for RainbowStyle {
    fn colour_at(&self, t: f64) -> Colour {
        let channel = |k: f64| unit_to_channel(0.5 + 0.5 * (ANGULAR * t * k).sin());

        Colour::rgb(
            channel(FREQUENCIES[0]),
            channel(FREQUENCIES[1]),
            channel(FREQUENCIES[2]),
        )
    }

    fn kind(&self) -> PaletteStyleKind {
        PaletteStyleKind::Rainbow
    }
}
