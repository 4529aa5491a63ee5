use crate::core::data::colour::Colour;
use crate::core::palettes::hsv::hsv_to_rgb;
use crate::core::palettes::kinds::PaletteKind;
use crate::core::palettes::scheme::{PHI, PaletteScheme, unit_position};
use std::f64::consts::PI;

#[derive(Debug, Default)]
pub struct HarmonicScheme;

impl PaletteScheme for HarmonicScheme {
    fn kind(&self) -> PaletteKind {
        PaletteKind::Harmonic
    }

    fn colours(&self, size: usize) -> Vec<Colour> {
        (0..size)
            .map(|i| {
                let t = unit_position(i, size);
                let h = (t * PHI) % 1.0;
                let s = 0.7 + 0.3 * (t * PHI * PI).sin();
                let v = 0.8 + 0.2 * (t * PHI * PI).cos();

                hsv_to_rgb(h, s, v)
            })
            .collect()
    }
}
