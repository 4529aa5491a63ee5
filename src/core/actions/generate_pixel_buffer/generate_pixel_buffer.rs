use crate::core::actions::generate_fractal::generate_fractal::SampleGrid;
use crate::core::actions::generate_pixel_buffer::ports::colour_map::ColourMap;
use crate::core::data::pixel_buffer::{PixelBuffer, PixelBufferData, PixelBufferError};
use crate::core::data::surface::SurfaceSize;
use std::error::Error;
use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum GeneratePixelBufferError {
    GridMismatch {
        columns: u32,
        rows: u32,
        block_size: u32,
        surface: SurfaceSize,
    },
    PixelBuffer(PixelBufferError),
}

impl fmt::Display for GeneratePixelBufferError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::GridMismatch {
                columns,
                rows,
                block_size,
                surface,
            } => write!(
                f,
                "{}x{} grid of {}px blocks does not tile a {}x{} surface",
                columns,
                rows,
                block_size,
                surface.width(),
                surface.height()
            ),
            Self::PixelBuffer(err) => write!(f, "pixel buffer error: {}", err),
        }
    }
}

impl Error for GeneratePixelBufferError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::GridMismatch { .. } => None,
            Self::PixelBuffer(err) => Some(err),
        }
    }
}

impl From<PixelBufferError> for GeneratePixelBufferError {
    fn from(err: PixelBufferError) -> Self {
        Self::PixelBuffer(err)
    }
}

/// Colours every sample of `grid` and spreads it over its pixel block.
pub fn generate_pixel_buffer<CMap>(
    grid: &SampleGrid,
    mapper: &CMap,
    surface: SurfaceSize,
) -> Result<PixelBuffer, GeneratePixelBufferError>
where
    CMap: ColourMap<Value = f64> + ?Sized,
{
    if !grid.covers(surface) {
        return Err(GeneratePixelBufferError::GridMismatch {
            columns: grid.columns(),
            rows: grid.rows(),
            block_size: grid.block_size(),
            surface,
        });
    }

    if grid.block_size() == 1 {
        let mut buffer: PixelBufferData = Vec::with_capacity(surface.pixel_count() * 3);

        for &sample in grid.samples() {
            let colour = mapper.map(sample);
            buffer.extend_from_slice(&[colour.r, colour.g, colour.b]);
        }

        return Ok(PixelBuffer::from_data(surface, buffer)?);
    }

    let mut pixel_buffer = PixelBuffer::new(surface);

    for (x, y, sample) in grid.blocks() {
        pixel_buffer.fill_block(x, y, grid.block_size(), mapper.map(sample))?;
    }

    Ok(pixel_buffer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::actions::generate_fractal::generate_fractal::generate_fractal;
    use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
    use crate::core::data::colour::Colour;
    use crate::core::data::complex::Complex;
    use crate::core::data::viewport::ViewportState;
    use crate::core::fractals::variant::FractalVariant;

    /// Counts pixels: the sample for the pixel at column `x` of a 1-scale
    /// viewport is `x`.
    struct ColumnAlgorithm {
        origin: f64,
        scale: f64,
    }

    impl FractalAlgorithm for ColumnAlgorithm {
        fn compute(&self, point: Complex) -> f64 {
            ((point.real - self.origin) / self.scale).round()
        }

        fn max_iterations(&self) -> u32 {
            255
        }

        fn variant(&self) -> FractalVariant {
            FractalVariant::Mandelbrot
        }
    }

    struct GreyColourMap;

    impl ColourMap for GreyColourMap {
        type Value = f64;

        fn map(&self, value: f64) -> Colour {
            let level = value as u8;
            Colour::new(level, level, level)
        }

        fn display_name(&self) -> &str {
            "Grey"
        }
    }

    fn grid(width: u32, height: u32, block_size: u32) -> SampleGrid {
        let surface = SurfaceSize::new(width, height).unwrap();
        let viewport = ViewportState::new(Complex::ZERO, 1.0, surface).unwrap();
        let algorithm = ColumnAlgorithm {
            origin: -f64::from(width) / 2.0 * viewport.scale(),
            scale: viewport.scale(),
        };

        generate_fractal(&viewport, block_size, &algorithm)
    }

    #[test]
    fn test_generates_pixel_buffer_correctly() {
        let surface = SurfaceSize::new(3, 2).unwrap();
        let results = generate_pixel_buffer(&grid(3, 2, 1), &GreyColourMap, surface).unwrap();

        assert_eq!(
            results.buffer(),
            &vec![0, 0, 0, 1, 1, 1, 2, 2, 2, 0, 0, 0, 1, 1, 1, 2, 2, 2]
        );
    }

    #[test]
    fn test_blocks_replicate_their_sample() {
        let surface = SurfaceSize::new(5, 3).unwrap();
        let results = generate_pixel_buffer(&grid(5, 3, 2), &GreyColourMap, surface).unwrap();

        let row: Vec<u8> = (0..5).map(|x| results.pixel(x, 0).unwrap().r).collect();
        assert_eq!(row, vec![0, 0, 2, 2, 4]);
        assert_eq!(results.pixel(3, 1), results.pixel(2, 0));
        assert_eq!(results.pixel(4, 2), Some(Colour::new(4, 4, 4)));
    }

    #[test]
    fn test_subsampled_buffer_matches_full_render_at_block_origins() {
        let surface = SurfaceSize::new(7, 5).unwrap();
        let full = generate_pixel_buffer(&grid(7, 5, 1), &GreyColourMap, surface).unwrap();
        let coarse = generate_pixel_buffer(&grid(7, 5, 3), &GreyColourMap, surface).unwrap();

        for (x, y) in [(0, 0), (3, 0), (6, 3), (0, 3)] {
            assert_eq!(coarse.pixel(x, y), full.pixel(x, y));
        }
    }

    #[test]
    fn test_grid_surface_mismatch_returns_err() {
        let surface = SurfaceSize::new(4, 4).unwrap();
        let results = generate_pixel_buffer(&grid(3, 2, 1), &GreyColourMap, surface);

        assert!(matches!(
            results,
            Err(GeneratePixelBufferError::GridMismatch { columns: 3, rows: 2, .. })
        ));
    }
}
