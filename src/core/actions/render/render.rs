use crate::core::actions::generate_fractal::generate_fractal::generate_fractal;
use crate::core::actions::generate_pixel_buffer::generate_pixel_buffer::{
    GeneratePixelBufferError, generate_pixel_buffer,
};
use crate::core::data::fractal_params::{FractalParams, FractalParamsError};
use crate::core::data::pixel_buffer::PixelBuffer;
use crate::core::data::viewport::ViewportState;
use crate::core::fractals::factory::fractal_algorithm_factory;
use crate::core::palettes::colour_map::PaletteColourMap;
use crate::core::palettes::palette::Palette;
use std::error::Error;
use std::fmt;
use std::sync::Arc;
use std::time::Instant;

#[derive(Debug, Clone, PartialEq)]
pub enum RenderError {
    FractalParams(FractalParamsError),
    PixelBuffer(GeneratePixelBufferError),
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FractalParams(err) => write!(f, "invalid fractal parameters: {}", err),
            Self::PixelBuffer(err) => write!(f, "could not build frame: {}", err),
        }
    }
}

impl Error for RenderError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::FractalParams(err) => Some(err),
            Self::PixelBuffer(err) => Some(err),
        }
    }
}

impl From<FractalParamsError> for RenderError {
    fn from(err: FractalParamsError) -> Self {
        Self::FractalParams(err)
    }
}

impl From<GeneratePixelBufferError> for RenderError {
    fn from(err: GeneratePixelBufferError) -> Self {
        Self::PixelBuffer(err)
    }
}

/// Renders one complete frame of `params` through `viewport`.
pub fn render(
    viewport: &ViewportState,
    params: &FractalParams,
    palette: Arc<Palette>,
) -> Result<PixelBuffer, RenderError> {
    let started = Instant::now();
    let algorithm = fractal_algorithm_factory(params)?;
    let grid = generate_fractal(viewport, params.subsample(), algorithm.as_ref());
    let colour_map = PaletteColourMap::new(palette, params.max_iterations());
    let frame = generate_pixel_buffer(&grid, &colour_map, viewport.surface())?;

    let surface = viewport.surface();
    log::debug!(
        "rendered {} {}x{} (subsample {}) in {:?}",
        params.variant(),
        surface.width(),
        surface.height(),
        params.subsample(),
        started.elapsed()
    );

    Ok(frame)
}
