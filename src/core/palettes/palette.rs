use crate::core::data::colour::Colour;
use crate::core::palettes::factory::palette_scheme_factory;
use crate::core::palettes::kinds::PaletteKind;
use std::error::Error;
use std::fmt;

pub const DEFAULT_PALETTE_SIZE: usize = 256;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum PaletteError {
    TooSmall { size: usize },
}

impl fmt::Display for PaletteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TooSmall { size } => {
                write!(f, "palette needs at least 2 colours, got {}", size)
            }
        }
    }
}

impl Error for PaletteError {}

/// An ordered colour ramp generated from a [`PaletteKind`].
#[derive(Debug, Clone, PartialEq)]
pub struct Palette {
    kind: PaletteKind,
    colours: Vec<Colour>,
}

impl Palette {
    /// Generates `size` colours for `kind`. The result depends only on its
    /// arguments.
    pub fn generate(kind: PaletteKind, size: usize) -> Result<Self, PaletteError> {
        if size < 2 {
            return Err(PaletteError::TooSmall { size });
        }

        Ok(Self {
            kind,
            colours: palette_scheme_factory(kind).colours(size),
        })
    }

    #[must_use]
    pub fn kind(&self) -> PaletteKind {
        self.kind
    }

    #[must_use]
    pub fn colours(&self) -> &[Colour] {
        &self.colours
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.colours.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.colours.is_empty()
    }

    /// Samples the ramp at `value`, blending the two nearest entries.
    ///
    /// `value` is clamped to `[0, 1]`; NaN samples the first entry.
    #[must_use]
    pub fn interpolate(&self, value: f64) -> Colour {
        let Some(last) = self.colours.len().checked_sub(1) else {
            return Colour::BLACK;
        };

        let value = if value.is_nan() { 0.0 } else { value.clamp(0.0, 1.0) };
        let position = value * last as f64;
        let index = position.floor() as usize;

        if index >= last {
            return self.colours[last];
        }

        self.colours[index].lerp(self.colours[index + 1], position - index as f64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generate_rejects_tiny_palettes() {
        assert_eq!(
            Palette::generate(PaletteKind::Resonant, 1),
            Err(PaletteError::TooSmall { size: 1 })
        );
        assert_eq!(
            Palette::generate(PaletteKind::Quantum, 0),
            Err(PaletteError::TooSmall { size: 0 })
        );
    }

    #[test]
    fn every_kind_generates_the_requested_size() {
        for &kind in PaletteKind::ALL {
            for size in [2, 3, 17, DEFAULT_PALETTE_SIZE] {
                let palette = Palette::generate(kind, size).unwrap();

                assert_eq!(palette.len(), size, "{kind} at size {size}");
                assert_eq!(palette.kind(), kind);
            }
        }
    }

    #[test]
    fn generation_is_pure() {
        for &kind in PaletteKind::ALL {
            assert_eq!(
                Palette::generate(kind, 64).unwrap(),
                Palette::generate(kind, 64).unwrap()
            );
        }
    }

    #[test]
    fn interpolate_endpoints_return_first_and_last() {
        for &kind in PaletteKind::ALL {
            let palette = Palette::generate(kind, DEFAULT_PALETTE_SIZE).unwrap();

            assert_eq!(palette.interpolate(0.0), palette.colours()[0]);
            assert_eq!(palette.interpolate(1.0), palette.colours()[255]);
        }
    }

    #[test]
    fn interpolate_clamps_out_of_range_values() {
        let palette = Palette::generate(PaletteKind::Spectral, 16).unwrap();

        assert_eq!(palette.interpolate(-3.0), palette.colours()[0]);
        assert_eq!(palette.interpolate(7.5), palette.colours()[15]);
        assert_eq!(palette.interpolate(f64::NAN), palette.colours()[0]);
        assert_eq!(palette.interpolate(f64::NEG_INFINITY), palette.colours()[0]);
    }

    #[test]
    fn interpolate_blends_neighbours() {
        let palette = Palette {
            kind: PaletteKind::Resonant,
            colours: vec![Colour::new(0, 0, 0), Colour::new(100, 200, 50)],
        };

        assert_eq!(palette.interpolate(0.5), Colour::new(50, 100, 25));
        assert_eq!(palette.interpolate(0.25), Colour::new(25, 50, 13));
    }

    #[test]
    fn interpolate_hits_exact_entries() {
        let palette = Palette::generate(PaletteKind::Harmonic, 5).unwrap();

        assert_eq!(palette.interpolate(0.5), palette.colours()[2]);
        assert_eq!(palette.interpolate(0.75), palette.colours()[3]);
    }
}
