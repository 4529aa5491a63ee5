use crate::core::data::colour::Colour;
use crate::core::palettes::hsv::hsv_to_rgb;
use crate::core::palettes::kinds::PaletteKind;
use crate::core::palettes::scheme::{PHI, PaletteScheme, unit_position};
use std::f64::consts::PI;

#[derive(Debug, Default)]
pub struct GoldenRatioScheme {
    base_hue: f64,
}

impl GoldenRatioScheme {
    #[must_use]
    pub fn new(base_hue: f64) -> Self {
        Self { base_hue }
    }
}

impl PaletteScheme for GoldenRatioScheme {
    fn kind(&self) -> PaletteKind {
        PaletteKind::GoldenRatio
    }

    fn colours(&self, size: usize) -> Vec<Colour> {
        (0..size)
            .map(|i| {
                let t = unit_position(i, size);
                let h = (self.base_hue + t * PHI) % 1.0;
                let s = 0.5 + 0.5 * (t * PHI * 2.0 * PI).sin();
                let v = 0.5 + 0.5 * (t * PHI * 2.0 * PI).cos();

                hsv_to_rgb(h, s, v)
            })
            .collect()
    }
}
