use crate::core::data::complex::Complex;
use crate::core::fractals::variant::FractalVariant;

/// Partial viewport change; `None` fields keep their current value.
#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub struct ViewportUpdate {
    pub center: Option<Complex>,
    pub zoom: Option<f64>,
}

/// Partial fractal parameter change; `None` fields keep their current value.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub struct FractalParamsUpdate {
    pub variant: Option<FractalVariant>,
    pub max_iterations: Option<u32>,
    pub subsample: Option<u32>,
}

impl ViewportUpdate {
    #[must_use]
    pub fn center(center: Complex) -> Self {
        Self {
            center: Some(center),
            zoom: None,
        }
    }

    #[must_use]
    pub fn zoom(zoom: f64) -> Self {
        Self {
            center: None,
            zoom: Some(zoom),
        }
    }
}

impl FractalParamsUpdate {
    #[must_use]
    pub fn variant(variant: FractalVariant) -> Self {
        Self {
            variant: Some(variant),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn max_iterations(max_iterations: u32) -> Self {
        Self {
            max_iterations: Some(max_iterations),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn subsample(subsample: u32) -> Self {
        Self {
            subsample: Some(subsample),
            ..Self::default()
        }
    }
}
