use crate::core::data::complex::Complex;
use crate::core::data::fractal_params::JULIA_CONSTANT;
use crate::core::fractals::variant::FractalVariant;
use std::f64::consts::LN_2;
use std::ops::ControlFlow;

/// Squared bailout radius; an orbit has escaped once `|z|² > 4`.
pub const ESCAPE_RADIUS_SQUARED: f64 = 4.0;

/// Runs `step` from `z0` until the orbit escapes or `max_iterations` steps
/// have been taken.
///
/// Escaping orbits return the smoothed count from [`smooth_iteration`];
/// bounded ones return exactly `max_iterations`. A NaN orbit never passes
/// the escape test, so it is reported as bounded.
pub fn escape_time<F>(z0: Complex, max_iterations: u32, step: F) -> f64
where
    F: Fn(Complex) -> Complex,
{
    let outcome = (0..max_iterations).try_fold(z0, |z, iteration| {
        let next = step(z);
        let magnitude_squared = next.magnitude_squared();

        if magnitude_squared > ESCAPE_RADIUS_SQUARED {
            ControlFlow::Break((iteration, magnitude_squared))
        } else {
            ControlFlow::Continue(next)
        }
    });

    match outcome {
        ControlFlow::Break((iteration, magnitude_squared)) => {
            smooth_iteration(iteration, magnitude_squared)
        }
        ControlFlow::Continue(_) => f64::from(max_iterations),
    }
}

/// Fractional escape count: `i + 1 - log2(ln|z| / ln 2)`.
#[must_use]
pub fn smooth_iteration(iteration: u32, magnitude_squared: f64) -> f64 {
    let log_modulus = 0.5 * magnitude_squared.ln();

    f64::from(iteration) + 1.0 - (log_modulus / LN_2).log2()
}

#[must_use]
pub fn mandelbrot_step(z: Complex, c: Complex) -> Complex {
    z * z + c
}

#[must_use]
pub fn burning_ship_step(z: Complex, c: Complex) -> Complex {
    let folded = z.abs_components();
    folded * folded + c
}

/// Evaluates the point `a + bi` for `variant`.
#[must_use]
pub fn iterate(
    a: f64,
    b: f64,
    variant: FractalVariant,
    max_iterations: u32,
    julia_constant: Complex,
) -> f64 {
    let point = Complex::new(a, b);

    match variant {
        FractalVariant::Mandelbrot => {
            escape_time(Complex::ZERO, max_iterations, |z| mandelbrot_step(z, point))
        }
        FractalVariant::Julia => {
            escape_time(point, max_iterations, |z| mandelbrot_step(z, julia_constant))
        }
        FractalVariant::BurningShip => {
            escape_time(Complex::ZERO, max_iterations, |z| burning_ship_step(z, point))
        }
    }
}

/// [`iterate`] with the default Julia constant.
#[must_use]
pub fn iterate_default(a: f64, b: f64, variant: FractalVariant, max_iterations: u32) -> f64 {
    iterate(a, b, variant, max_iterations, JULIA_CONSTANT)
}
