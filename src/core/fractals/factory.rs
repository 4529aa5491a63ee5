use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::fractal_params::{FractalParams, FractalParamsError};
use crate::core::fractals::burning_ship::algorithm::BurningShipAlgorithm;
use crate::core::fractals::julia::algorithm::JuliaAlgorithm;
use crate::core::fractals::mandelbrot::algorithm::MandelbrotAlgorithm;
use crate::core::fractals::variant::FractalVariant;

pub fn fractal_algorithm_factory(
    params: &FractalParams,
) -> Result<Box<dyn FractalAlgorithm>, FractalParamsError> {
    let max_iterations = params.max_iterations();

    Ok(match params.variant() {
        FractalVariant::Mandelbrot => Box::new(MandelbrotAlgorithm::new(max_iterations)?),
        FractalVariant::Julia => Box::new(JuliaAlgorithm::with_constant(
            params.julia_constant(),
            max_iterations,
        )?),
        FractalVariant::BurningShip => Box::new(BurningShipAlgorithm::new(max_iterations)?),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::fractals::escape_time::iterate_default;
    use crate::core::data::complex::Complex;

    #[test]
    fn factory_round_trip_for_all_variants() {
        for &variant in FractalVariant::ALL {
            let params = FractalParams::new(variant, 64, 1).unwrap();
            let algorithm = fractal_algorithm_factory(&params).unwrap();

            assert_eq!(algorithm.variant(), variant);
            assert_eq!(algorithm.max_iterations(), 64);
        }
    }

    #[test]
    fn algorithms_agree_with_the_free_function() {
        let point = Complex::new(-0.74, 0.18);

        for &variant in FractalVariant::ALL {
            let params = FractalParams::new(variant, 80, 1).unwrap();
            let algorithm = fractal_algorithm_factory(&params).unwrap();

            assert_eq!(
                algorithm.compute(point),
                iterate_default(point.real, point.imag, variant, 80)
            );
        }
    }
}
