use serde::{Deserialize, Serialize};

use crate::core::data::colour::Colour;
use crate::core::fractals::escape_time::result::IterationResult;
use crate::core::palette::errors::PaletteError;
use crate::core::palette::factory::palette_generator_factory;
use crate::core::palette::kinds::PaletteStyleKind;

pub const DEFAULT_PALETTE_SIZE: usize = 1024;
pub const MAX_PALETTE_SIZE: usize = 1 << 20;

const BYTES_PER_ENTRY: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Interpolation {
    Nearest,
    #[default]
    Linear,
}

/// Immutable cyclic colour table.
///
/// Lookups wrap, so position `t` and `t + 1` always sample the same colour.
#[derive(Debug, Clone, PartialEq)]
pub struct Palette {
    colours: Vec<Colour>,
    style: Option<PaletteStyleKind>,
    background: Colour,
    interpolation: Interpolation,
}

impl Palette {
    pub fn generate(size: usize, style: PaletteStyleKind) -> Result<Self, PaletteError> {
        validate_size(size)?;

        let generator = palette_generator_factory(style);
        let last = (size - 1).max(1) as f64;
        let colours = (0..size)
            .map(|i| generator.colour_at(i as f64 / last))
            .collect();

        Ok(Self {
            colours,
            style: Some(style),
            background: Colour::BLACK,
            interpolation: Interpolation::default(),
        })
    }

    pub fn from_colours(colours: Vec<Colour>) -> Result<Self, PaletteError> {
        validate_size(colours.len())?;

        Ok(Self {
            colours,
            style: None,
            background: Colour::BLACK,
            interpolation: Interpolation::default(),
        })
    }

    #[must_use]
    pub fn with_background(self, background: Colour) -> Self {
        Self { background, ..self }
    }

    #[must_use]
    pub fn with_interpolation(self, interpolation: Interpolation) -> Self {
        Self {
            interpolation,
            ..self
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.colours.len()
    }

    /// Always false; construction rejects empty tables.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.colours.is_empty()
    }

    #[must_use]
    pub fn colours(&self) -> &[Colour] {
        &self.colours
    }

    /// Style the table was generated from, `None` when loaded from raw colours.
    #[must_use]
    pub fn style(&self) -> Option<PaletteStyleKind> {
        self.style
    }

    #[must_use]
    pub fn background(&self) -> Colour {
        self.background
    }

    #[must_use]
    pub fn interpolation(&self) -> Interpolation {
        self.interpolation
    }

    /// Colour for one evaluated point.
    ///
    /// Interior points and escape counts outside the budget take the
    /// background colour. Never fails.
    #[must_use]
    pub fn sample(&self, result: IterationResult, max_iterations: u32, cycle_speed: f64) -> Colour {
        match result {
            IterationResult::Escaped {
                iteration,
                smooth_value,
            } if iteration < max_iterations => self.sample_normalized(smooth_value / cycle_speed),
            _ => self.background,
        }
    }

    /// Colour at cyclic position `t`; only the fractional part matters.
    #[must_use]
    pub fn sample_normalized(&self, t: f64) -> Colour {
        let size = self.colours.len();
        let position = wrap_unit(t) * size as f64;
        let floor = position.floor();
        let index = (floor as usize) % size;

        match self.interpolation {
            Interpolation::Nearest => self.colours[index],
            Interpolation::Linear => {
                let next = (index + 1) % size;
                self.colours[index].lerp(self.colours[next], position - floor)
            }
        }
    }

    #[must_use]
    pub fn to_rgba_bytes(&self) -> Vec<u8> {
        self.colours.iter().flat_map(|c| c.to_rgba()).collect()
    }

    pub fn from_rgba_bytes(bytes: &[u8]) -> Result<Self, PaletteError> {
        if bytes.len() % BYTES_PER_ENTRY != 0 {
            return Err(PaletteError::ByteLengthMismatch {
                length: bytes.len(),
            });
        }

        let colours = bytes
            .chunks_exact(BYTES_PER_ENTRY)
            .map(|chunk| Colour::from_rgba([chunk[0], chunk[1], chunk[2], chunk[3]]))
            .collect();

        Self::from_colours(colours)
    }
}

pub fn validate_size(size: usize) -> Result<(), PaletteError> {
    if size == 0 {
        return Err(PaletteError::EmptyPalette);
    }

    if size > MAX_PALETTE_SIZE {
        return Err(PaletteError::TooLarge {
            size,
            max_size: MAX_PALETTE_SIZE,
        });
    }

    Ok(())
}

fn wrap_unit(t: f64) -> f64 {
    let wrapped = t.rem_euclid(1.0);

    // rem_euclid can round up to exactly 1.0 for tiny negative inputs
    if wrapped.is_finite() && wrapped < 1.0 {
        wrapped
    } else {
        0.0
    }
}
