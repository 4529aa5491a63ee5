use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::complex::Complex;
use crate::core::data::fractal_params::FractalParamsError;
use crate::core::fractals::escape_time::{escape_time, mandelbrot_step};
use crate::core::fractals::variant::FractalVariant;

#[derive(Debug, PartialEq)]
pub struct MandelbrotAlgorithm {
    max_iterations: u32,
}

impl FractalAlgorithm for MandelbrotAlgorithm {
    fn compute(&self, point: Complex) -> f64 {
        escape_time(Complex::ZERO, self.max_iterations, |z| {
            mandelbrot_step(z, point)
        })
    }

    fn max_iterations(&self) -> u32 {
        self.max_iterations
    }

    fn variant(&self) -> FractalVariant {
        FractalVariant::Mandelbrot
    }
}

impl MandelbrotAlgorithm {
    pub fn new(max_iterations: u32) -> Result<Self, FractalParamsError> {
        if max_iterations == 0 {
            return Err(FractalParamsError::ZeroMaxIterations);
        }

        Ok(Self { max_iterations })
    }
}
