use crate::core::palette::generator::PaletteGenerator;
use crate::core::palette::kinds::PaletteStyleKind;
use crate::core::palette::styles::{ember::EmberStyle, fire::FireStyle, rainbow::RainbowStyle};

#[must_use]
pub fn palette_generator_factory(kind: PaletteStyleKind) -> Box<dyn PaletteGenerator> {
    match kind {
        PaletteStyleKind::Rainbow => Box::new(RainbowStyle),
        PaletteStyleKind::Fire => Box::new(FireStyle),
        PaletteStyleKind::Ember => Box::new(EmberStyle),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_array_has_default_first() {
        assert_eq!(
            PaletteStyleKind::ALL.first(),
            Some(&PaletteStyleKind::default())
        );
    }

    #[test]
    fn factory_round_trip_for_all_kinds() {
        for &kind in PaletteStyleKind::ALL {
            let generator = palette_generator_factory(kind);
            assert_eq!(generator.kind(), kind);
            assert_eq!(generator.display_name(), kind.display_name());
        }
    }

    #[test]
    fn display_names_are_unique() {
        let names: Vec<&str> = PaletteStyleKind::ALL
            .iter()
            .map(|k| k.display_name())
            .collect();
        for (i, name) in names.iter().enumerate() {
            for (j, other) in names.iter().enumerate() {
                if i != j {
                    assert_ne!(name, other, "Duplicate display name: {}", name);
                }
            }
        }
    }
}
