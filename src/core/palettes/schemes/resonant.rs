use crate::core::data::colour::Colour;
use crate::core::palettes::hsv::hsv_to_rgb;
use crate::core::palettes::kinds::PaletteKind;
use crate::core::palettes::scheme::{PaletteScheme, unit_position};

/// Violet (270°) sweeping down to gold (45°).
#[derive(Debug, Default)]
pub struct ResonantScheme;

impl PaletteScheme for ResonantScheme {
    fn kind(&self) -> PaletteKind {
        PaletteKind::Resonant
    }

    fn colours(&self, size: usize) -> Vec<Colour> {
        (0..size)
            .map(|i| {
                let t = unit_position(i, size);
                hsv_to_rgb((270.0 - t * 225.0) / 360.0, 0.8, 0.9)
            })
            .collect()
    }
}
