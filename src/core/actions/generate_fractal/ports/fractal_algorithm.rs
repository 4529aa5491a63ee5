use crate::core::data::complex::Complex;
use crate::core::fractals::variant::FractalVariant;

/// An escape-time evaluator for a single point of the complex plane.
///
/// `compute` returns the smoothed escape count, or exactly
/// `max_iterations()` for points that never escape.
pub trait FractalAlgorithm {
    fn compute(&self, point: Complex) -> f64;

    fn max_iterations(&self) -> u32;

    fn variant(&self) -> FractalVariant;
}
