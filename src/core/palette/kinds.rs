use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaletteStyleKind {
    #[default]
    Rainbow,
    Fire,
    Ember,
}

impl PaletteStyleKind {
    pub const ALL: &'static [Self] = &[Self::Rainbow, Self::Fire, Self::Ember];

    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Rainbow => "Rainbow",
            Self::Fire => "Fire",
            Self::Ember => "Ember",
        }
    }
}

impl std::fmt::Display for PaletteStyleKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str((*self).display_name())
    }
}
