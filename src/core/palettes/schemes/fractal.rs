use crate::core::data::colour::Colour;
use crate::core::palettes::hsv::hsv_to_rgb;
use crate::core::palettes::kinds::PaletteKind;
use crate::core::palettes::scheme::{PaletteScheme, unit_position};
use std::f64::consts::PI;

/// Sine-modulated hue, saturation and value over a square-root ramp.
#[derive(Debug, Default)]
pub struct FractalScheme;

impl PaletteScheme for FractalScheme {
    fn kind(&self) -> PaletteKind {
        PaletteKind::Fractal
    }

    fn colours(&self, size: usize) -> Vec<Colour> {
        (0..size)
            .map(|i| {
                let t = unit_position(i, size).sqrt();
                let h = (0.5 + 0.5 * (t * 20.0 * PI).sin()) % 1.0;
                let s = 0.6 + 0.4 * (t * 10.0 * PI).sin();
                let v = 0.7 + 0.3 * (t * 15.0 * PI).cos();

                hsv_to_rgb(h, s, v)
            })
            .collect()
    }
}
