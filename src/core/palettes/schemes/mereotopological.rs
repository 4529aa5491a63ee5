use crate::core::data::colour::Colour;
use crate::core::palettes::hsv::hsv_to_rgb;
use crate::core::palettes::kinds::PaletteKind;
use crate::core::palettes::scheme::{PaletteScheme, unit_position};

/// Two ramps: cyan towards blue for the first half, then red towards magenta.
#[derive(Debug, Default)]
pub struct MereotopologicalScheme;

impl PaletteScheme for MereotopologicalScheme {
    fn kind(&self) -> PaletteKind {
        PaletteKind::Mereotopological
    }

    fn colours(&self, size: usize) -> Vec<Colour> {
        let half = size / 2;
        let rest = size - half;

        let nodes = (0..half).map(|i| {
            let t = unit_position(i, half);
            hsv_to_rgb(0.5 + 0.2 * t, 0.7 + 0.3 * t, 0.8)
        });

        let edges = (0..rest).map(|i| {
            let t = unit_position(i, rest);
            hsv_to_rgb((0.95 + 0.15 * t) % 1.0, 0.8 - 0.2 * t, 0.9)
        });

        nodes.chain(edges).collect()
    }
}
