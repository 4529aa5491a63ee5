use crate::core::data::colour::Colour;
use crate::core::palettes::kinds::PaletteKind;
use crate::core::palettes::scheme::{PaletteScheme, unit_position};

const SHORTEST_WAVELENGTH_NM: f64 = 380.0;
const LONGEST_WAVELENGTH_NM: f64 = 750.0;

/// Visible spectrum from 380 nm to 750 nm, dimmed towards both ends.
#[derive(Debug, Default)]
pub struct SpectralScheme;

impl PaletteScheme for SpectralScheme {
    fn kind(&self) -> PaletteKind {
        PaletteKind::Spectral
    }

    fn colours(&self, size: usize) -> Vec<Colour> {
        (0..size)
            .map(|i| {
                let t = unit_position(i, size);
                wavelength_to_rgb(
                    SHORTEST_WAVELENGTH_NM + (LONGEST_WAVELENGTH_NM - SHORTEST_WAVELENGTH_NM) * t,
                )
            })
            .collect()
    }
}

fn wavelength_to_rgb(wavelength: f64) -> Colour {
    let (r, g, b) = if wavelength < 440.0 {
        (-(wavelength - 440.0) / (440.0 - 380.0), 0.0, 1.0)
    } else if wavelength < 490.0 {
        (0.0, (wavelength - 440.0) / (490.0 - 440.0), 1.0)
    } else if wavelength < 510.0 {
        (0.0, 1.0, -(wavelength - 510.0) / (510.0 - 490.0))
    } else if wavelength < 580.0 {
        ((wavelength - 510.0) / (580.0 - 510.0), 1.0, 0.0)
    } else if wavelength < 645.0 {
        (1.0, -(wavelength - 645.0) / (645.0 - 580.0), 0.0)
    } else {
        (1.0, 0.0, 0.0)
    };

    let intensity = if wavelength < 420.0 {
        0.3 + 0.7 * (wavelength - 380.0) / (420.0 - 380.0)
    } else if wavelength < 700.0 {
        1.0
    } else {
        0.3 + 0.7 * (750.0 - wavelength) / (750.0 - 700.0)
    };

    Colour::from_unit_rgb(r * intensity, g * intensity, b * intensity)
}
