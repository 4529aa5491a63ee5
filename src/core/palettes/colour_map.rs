use crate::core::actions::generate_pixel_buffer::ports::colour_map::ColourMap;
use crate::core::data::colour::Colour;
use crate::core::palettes::palette::Palette;
use std::sync::Arc;

/// Colours smoothed escape counts by their fraction of the iteration budget.
///
/// Counts at or above `max_iterations` are interior points and map to black.
#[derive(Debug, Clone)]
pub struct PaletteColourMap {
    palette: Arc<Palette>,
    max_iterations: u32,
}

impl PaletteColourMap {
    #[must_use]
    pub fn new(palette: Arc<Palette>, max_iterations: u32) -> Self {
        Self {
            palette,
            max_iterations,
        }
    }
}

impl ColourMap for PaletteColourMap {
    type Value = f64;

    fn map(&self, iteration: f64) -> Colour {
        let max_iterations = f64::from(self.max_iterations);

        if iteration >= max_iterations {
            return Colour::BLACK;
        }

        self.palette.interpolate(iteration / max_iterations)
    }

    fn display_name(&self) -> &str {
        self.palette.kind().display_name()
    }
}
