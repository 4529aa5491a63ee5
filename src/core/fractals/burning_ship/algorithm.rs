use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::complex::Complex;
use crate::core::data::fractal_params::FractalParamsError;
use crate::core::fractals::escape_time::{burning_ship_step, escape_time};
use crate::core::fractals::variant::FractalVariant;

/// Mandelbrot iteration with each component folded to its absolute value
/// before squaring.
#[derive(Debug, PartialEq)]
pub struct BurningShipAlgorithm {
    max_iterations: u32,
}

impl FractalAlgorithm for BurningShipAlgorithm {
    fn compute(&self, point: Complex) -> f64 {
        escape_time(Complex::ZERO, self.max_iterations, |z| {
            burning_ship_step(z, point)
        })
    }

    fn max_iterations(&self) -> u32 {
        self.max_iterations
    }

    fn variant(&self) -> FractalVariant {
        FractalVariant::BurningShip
    }
}

impl BurningShipAlgorithm {
    pub fn new(max_iterations: u32) -> Result<Self, FractalParamsError> {
        if max_iterations == 0 {
            return Err(FractalParamsError::ZeroMaxIterations);
        }

        Ok(Self { max_iterations })
    }
}
