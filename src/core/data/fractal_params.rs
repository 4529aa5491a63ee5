use crate::core::data::complex::Complex;
use crate::core::fractals::variant::FractalVariant;
use std::error::Error;
use std::fmt;

/// The fixed constant `c` used by the Julia variant.
pub const JULIA_CONSTANT: Complex = Complex::new(-0.7, 0.27);

pub const DEFAULT_MAX_ITERATIONS: u32 = 100;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum FractalParamsError {
    ZeroMaxIterations,
    ZeroSubsample,
}

impl fmt::Display for FractalParamsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroMaxIterations => write!(f, "maximum iterations must be greater than zero"),
            Self::ZeroSubsample => write!(f, "sub-sampling block size must be at least one"),
        }
    }
}

impl Error for FractalParamsError {}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct FractalParams {
    variant: FractalVariant,
    max_iterations: u32,
    subsample: u32,
}

impl FractalParams {
    pub fn new(
        variant: FractalVariant,
        max_iterations: u32,
        subsample: u32,
    ) -> Result<Self, FractalParamsError> {
        if max_iterations == 0 {
            return Err(FractalParamsError::ZeroMaxIterations);
        }

        if subsample == 0 {
            return Err(FractalParamsError::ZeroSubsample);
        }

        Ok(Self {
            variant,
            max_iterations,
            subsample,
        })
    }

    #[must_use]
    pub fn variant(&self) -> FractalVariant {
        self.variant
    }

    #[must_use]
    pub fn max_iterations(&self) -> u32 {
        self.max_iterations
    }

    /// Edge length of the pixel block that shares one evaluated sample.
    #[must_use]
    pub fn subsample(&self) -> u32 {
        self.subsample
    }

    #[must_use]
    pub fn julia_constant(&self) -> Complex {
        JULIA_CONSTANT
    }
}

impl Default for FractalParams {
    fn default() -> Self {
        Self {
            variant: FractalVariant::default(),
            max_iterations: DEFAULT_MAX_ITERATIONS,
            subsample: 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let params = FractalParams::default();

        assert_eq!(params.variant(), FractalVariant::Mandelbrot);
        assert_eq!(params.max_iterations(), 100);
        assert_eq!(params.subsample(), 1);
        assert_eq!(params.julia_constant(), Complex::new(-0.7, 0.27));
    }

    #[test]
    fn test_max_iterations_must_be_greater_than_zero() {
        assert_eq!(
            FractalParams::new(FractalVariant::Julia, 0, 1),
            Err(FractalParamsError::ZeroMaxIterations)
        );
    }

    #[test]
    fn test_subsample_must_be_at_least_one() {
        assert_eq!(
            FractalParams::new(FractalVariant::Julia, 50, 0),
            Err(FractalParamsError::ZeroSubsample)
        );
    }

    #[test]
    fn test_valid_constructor() {
        let params = FractalParams::new(FractalVariant::BurningShip, 500, 4).unwrap();

        assert_eq!(params.variant(), FractalVariant::BurningShip);
        assert_eq!(params.max_iterations(), 500);
        assert_eq!(params.subsample(), 4);
    }
}
