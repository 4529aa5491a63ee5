use crate::core::data::complex::Complex;
use crate::core::data::surface::{SurfaceError, SurfaceSize};
use std::error::Error;
use std::fmt;

/// Width of the complex plane shown across the shorter surface side at zoom 1.
pub const BASE_RANGE: f64 = 3.5;

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum ViewportError {
    InvalidSurface(SurfaceError),
    InvalidZoomFactor(f64),
    NumericDegeneracy { center: Complex, zoom: f64 },
}

impl fmt::Display for ViewportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidSurface(err) => write!(f, "invalid surface: {}", err),
            Self::InvalidZoomFactor(factor) => {
                write!(f, "zoom factor must be positive and finite, got {}", factor)
            }
            Self::NumericDegeneracy { center, zoom } => {
                write!(
                    f,
                    "viewport would degenerate: center ({}, {}), zoom {}",
                    center.real, center.imag, zoom
                )
            }
        }
    }
}

impl Error for ViewportError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::InvalidSurface(err) => Some(err),
            _ => None,
        }
    }
}

impl From<SurfaceError> for ViewportError {
    fn from(err: SurfaceError) -> Self {
        Self::InvalidSurface(err)
    }
}

/// The visible window onto the complex plane.
///
/// `zoom` is always positive and finite and `center` always finite; every
/// constructor and transform checks this before handing out a new value.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ViewportState {
    center: Complex,
    zoom: f64,
    surface: SurfaceSize,
}

impl ViewportState {
    pub fn new(center: Complex, zoom: f64, surface: SurfaceSize) -> Result<Self, ViewportError> {
        let viewport = Self {
            center,
            zoom,
            surface,
        };

        if !viewport.is_well_formed() {
            return Err(ViewportError::NumericDegeneracy { center, zoom });
        }

        Ok(viewport)
    }

    #[must_use]
    pub fn center(&self) -> Complex {
        self.center
    }

    #[must_use]
    pub fn zoom(&self) -> f64 {
        self.zoom
    }

    #[must_use]
    pub fn surface(&self) -> SurfaceSize {
        self.surface
    }

    /// Complex-plane distance covered by one pixel.
    #[must_use]
    pub fn scale(&self) -> f64 {
        scale_for(self.zoom, self.surface)
    }

    pub fn with_center(&self, center: Complex) -> Result<Self, ViewportError> {
        Self::new(center, self.zoom, self.surface)
    }

    pub fn with_zoom(&self, zoom: f64) -> Result<Self, ViewportError> {
        Self::new(self.center, zoom, self.surface)
    }

    pub fn with_surface(&self, surface: SurfaceSize) -> Result<Self, ViewportError> {
        Self::new(self.center, self.zoom, surface)
    }

    fn is_well_formed(&self) -> bool {
        self.center.is_finite()
            && self.zoom.is_finite()
            && self.zoom > 0.0
            && self.scale().is_normal()
    }
}

#[must_use]
pub(crate) fn scale_for(zoom: f64, surface: SurfaceSize) -> f64 {
    (BASE_RANGE / zoom) / f64::from(surface.min_side())
}
