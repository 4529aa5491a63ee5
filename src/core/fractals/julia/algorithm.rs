use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::complex::Complex;
use crate::core::data::fractal_params::{FractalParamsError, JULIA_CONSTANT};
use crate::core::fractals::escape_time::{escape_time, mandelbrot_step};
use crate::core::fractals::variant::FractalVariant;

#[derive(Debug, PartialEq)]
pub struct JuliaAlgorithm {
    constant: Complex,
    max_iterations: u32,
}

impl FractalAlgorithm for JuliaAlgorithm {
    fn compute(&self, point: Complex) -> f64 {
        escape_time(point, self.max_iterations, |z| {
            mandelbrot_step(z, self.constant)
        })
    }

    fn max_iterations(&self) -> u32 {
        self.max_iterations
    }

    fn variant(&self) -> FractalVariant {
        FractalVariant::Julia
    }
}

impl JuliaAlgorithm {
    pub fn new(max_iterations: u32) -> Result<Self, FractalParamsError> {
        Self::with_constant(JULIA_CONSTANT, max_iterations)
    }

    pub fn with_constant(constant: Complex, max_iterations: u32) -> Result<Self, FractalParamsError> {
        if max_iterations == 0 {
            return Err(FractalParamsError::ZeroMaxIterations);
        }

        Ok(Self {
            constant,
            max_iterations,
        })
    }

    #[must_use]
    pub fn constant(&self) -> Complex {
        self.constant
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_constructor_uses_default_constant() {
        let algorithm = JuliaAlgorithm::new(256).unwrap();

        assert_eq!(algorithm.constant(), Complex::new(-0.7, 0.27));
        assert_eq!(algorithm.max_iterations(), 256);
    }

    #[test]
    fn test_max_iterations_must_be_greater_than_zero() {
        assert_eq!(
            JuliaAlgorithm::new(0),
            Err(FractalParamsError::ZeroMaxIterations)
        );
    }

    #[test]
    fn test_zero_constant_gives_the_unit_disc() {
        let algorithm = JuliaAlgorithm::with_constant(Complex::ZERO, 64).unwrap();

        assert_eq!(algorithm.compute(Complex::new(0.5, 0.5)), 64.0);
        assert!(algorithm.compute(Complex::new(1.5, 0.0)) < 64.0);
    }
}
