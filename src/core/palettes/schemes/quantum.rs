use crate::core::data::colour::Colour;
use crate::core::palettes::hsv::hsv_to_rgb;
use crate::core::palettes::kinds::PaletteKind;
use crate::core::palettes::scheme::{PaletteScheme, unit_position};

pub const DEFAULT_ENERGY_LEVELS: usize = 7;

/// Discrete energy levels from red to violet, blended linearly between
/// neighbouring levels.
#[derive(Debug)]
pub struct QuantumScheme {
    energy_levels: usize,
}

impl Default for QuantumScheme {
    fn default() -> Self {
        Self {
            energy_levels: DEFAULT_ENERGY_LEVELS,
        }
    }
}

impl QuantumScheme {
    /// At least two levels are always used.
    #[must_use]
    pub fn new(energy_levels: usize) -> Self {
        Self {
            energy_levels: energy_levels.max(2),
        }
    }

    fn level_colours(&self) -> Vec<Colour> {
        (0..self.energy_levels)
            .map(|level| hsv_to_rgb(unit_position(level, self.energy_levels) * 0.8, 0.8, 0.9))
            .collect()
    }
}

impl PaletteScheme for QuantumScheme {
    fn kind(&self) -> PaletteKind {
        PaletteKind::Quantum
    }

    fn colours(&self, size: usize) -> Vec<Colour> {
        let levels = self.level_colours();
        let top = levels.len() - 1;

        (0..size)
            .map(|i| {
                let position = unit_position(i, size) * top as f64;
                let level = position.floor() as usize;

                if level >= top {
                    levels[top]
                } else {
                    levels[level].lerp(levels[level + 1], position - level as f64)
                }
            })
            .collect()
    }
}
