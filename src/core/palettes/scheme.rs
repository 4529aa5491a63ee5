use crate::core::data::colour::Colour;
use crate::core::palettes::kinds::PaletteKind;

/// The golden ratio φ.
pub const PHI: f64 = 1.618_033_988_749_895;

/// A deterministic palette generator.
pub trait PaletteScheme: Send + Sync {
    fn kind(&self) -> PaletteKind;

    /// Produces exactly `size` colours. Callers guarantee `size >= 2`.
    fn colours(&self, size: usize) -> Vec<Colour>;

    fn display_name(&self) -> &str {
        self.kind().display_name()
    }
}

/// Position of entry `index` along a ramp of `count` entries, in `[0, 1]`.
///
/// A ramp with a single entry (or none) sits at 0.
#[must_use]
pub fn unit_position(index: usize, count: usize) -> f64 {
    if count <= 1 {
        return 0.0;
    }

    index as f64 / (count - 1) as f64
}
