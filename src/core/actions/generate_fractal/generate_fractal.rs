use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::point::Point;
use crate::core::data::surface::SurfaceSize;
use crate::core::data::viewport::ViewportState;
use crate::core::util::pixel_to_complex_coords::pixel_to_complex;

/// Escape counts sampled on a regular grid over the surface.
///
/// Each sample stands for a `block_size`×`block_size` block of pixels and
/// was evaluated at the block's top-left pixel.
#[derive(Debug, Clone, PartialEq)]
pub struct SampleGrid {
    columns: u32,
    rows: u32,
    block_size: u32,
    samples: Vec<f64>,
}

impl SampleGrid {
    #[must_use]
    pub fn columns(&self) -> u32 {
        self.columns
    }

    #[must_use]
    pub fn rows(&self) -> u32 {
        self.rows
    }

    #[must_use]
    pub fn block_size(&self) -> u32 {
        self.block_size
    }

    #[must_use]
    pub fn samples(&self) -> &[f64] {
        &self.samples
    }

    /// Whether this grid tiles `surface` exactly.
    #[must_use]
    pub fn covers(&self, surface: SurfaceSize) -> bool {
        self.columns == surface.width().div_ceil(self.block_size)
            && self.rows == surface.height().div_ceil(self.block_size)
    }

    /// Iterates `(x, y, sample)` with `x, y` the top-left pixel of each block.
    pub fn blocks(&self) -> impl Iterator<Item = (u32, u32, f64)> + '_ {
        let columns = self.columns as usize;
        let block_size = self.block_size;

        self.samples.iter().enumerate().map(move |(i, &sample)| {
            let column = (i % columns) as u32;
            let row = (i / columns) as u32;
            (column * block_size, row * block_size, sample)
        })
    }
}

pub fn generate_fractal<Alg>(viewport: &ViewportState, block_size: u32, algorithm: &Alg) -> SampleGrid
where
    Alg: FractalAlgorithm + ?Sized,
{
    let block_size = block_size.max(1);
    let surface = viewport.surface();
    let columns = surface.width().div_ceil(block_size);
    let rows = surface.height().div_ceil(block_size);

    let samples = (0..rows)
        .flat_map(|row| (0..columns).map(move |column| (column, row)))
        .map(|(column, row)| {
            let pixel = Point::new(
                f64::from(column * block_size),
                f64::from(row * block_size),
            );
            algorithm.compute(pixel_to_complex(pixel, viewport))
        })
        .collect();

    SampleGrid {
        columns,
        rows,
        block_size,
        samples,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::complex::Complex;
    use crate::core::fractals::variant::FractalVariant;

    /// Reports the real part of the point it is asked about.
    struct StubAlgorithm;

    impl FractalAlgorithm for StubAlgorithm {
        fn compute(&self, point: Complex) -> f64 {
            point.real
        }

        fn max_iterations(&self) -> u32 {
            1
        }

        fn variant(&self) -> FractalVariant {
            FractalVariant::Mandelbrot
        }
    }

    fn viewport(width: u32, height: u32) -> ViewportState {
        ViewportState::new(Complex::ZERO, 1.0, SurfaceSize::new(width, height).unwrap()).unwrap()
    }

    #[test]
    fn test_full_resolution_samples_every_pixel() {
        let viewport = viewport(4, 3);
        let grid = generate_fractal(&viewport, 1, &StubAlgorithm);

        assert_eq!((grid.columns(), grid.rows()), (4, 3));
        assert_eq!(grid.samples().len(), 12);
        assert!(grid.covers(viewport.surface()));
    }

    #[test]
    fn test_samples_are_row_major() {
        let viewport = viewport(4, 3);
        let grid = generate_fractal(&viewport, 1, &StubAlgorithm);
        let expected = pixel_to_complex(Point::new(2.0, 0.0), &viewport).real;

        assert_eq!(grid.samples()[2], expected);
        assert_eq!(grid.samples()[6], expected);
    }

    #[test]
    fn test_block_grid_rounds_up_at_the_edges() {
        let viewport = viewport(5, 4);
        let grid = generate_fractal(&viewport, 2, &StubAlgorithm);

        assert_eq!((grid.columns(), grid.rows()), (3, 2));
        assert!(grid.covers(viewport.surface()));
        assert!(!grid.covers(SurfaceSize::new(7, 4).unwrap()));
    }

    #[test]
    fn test_blocks_are_sampled_at_their_top_left_pixel() {
        let viewport = viewport(5, 4);
        let grid = generate_fractal(&viewport, 2, &StubAlgorithm);
        let blocks: Vec<_> = grid.blocks().collect();

        assert_eq!(blocks.len(), 6);
        assert_eq!((blocks[1].0, blocks[1].1), (2, 0));
        assert_eq!((blocks[5].0, blocks[5].1), (4, 2));
        assert_eq!(
            blocks[5].2,
            pixel_to_complex(Point::new(4.0, 2.0), &viewport).real
        );
    }

    #[test]
    fn test_zero_block_size_is_treated_as_one() {
        let grid = generate_fractal(&viewport(3, 2), 0, &StubAlgorithm);

        assert_eq!(grid.block_size(), 1);
        assert_eq!(grid.samples().len(), 6);
    }
}
