use crate::core::data::colour::Colour;
use crate::core::palette::generator::PaletteGenerator;
use crate::core::palette::kinds::PaletteStyleKind;

/// Piecewise black -> red -> orange -> yellow -> white ramp.
#[derive(Debug, Default)]
pub struct EmberStyle;

impl PaletteGenerator for EmberStyle {
    fn colour_at(&self, t: f64) -> Colour {
        let t = if t.is_finite() { t.clamp(0.0, 1.0) } else { 0.0 };

        if t < 0.25 {
            let local_t = t / 0.25;
            Colour::rgb((local_t * 255.0) as u8, 0, 0)
        } else if t < 0.5 {
            let local_t = (t - 0.25) / 0.25;
            Colour::rgb(255, (local_t * 165.0) as u8, 0)
        } else if t < 0.75 {
            let local_t = (t - 0.5) / 0.25;
            Colour::rgb(255, (165.0 + local_t * 90.0) as u8, 0)
        } else {
            let local_t = (t - 0.75) / 0.25;
            Colour::rgb(255, 255, (local_t * 255.0) as u8)
        }
    }

    fn kind(&self) -> PaletteStyleKind {
        PaletteStyleKind::Ember
    }
}
