//! Explorer configuration loaded from TOML.
//!
//! Every field is optional; anything left out takes the default listed on
//! [`ExplorerSettings`]. Command-line flags are applied on top by writing
//! into the public section fields before calling [`ExplorerConfig::resolve`].
//!
//! ```toml
//! [surface]
//! width = 1024
//! height = 768
//!
//! [fractal]
//! variant = "julia"
//! max_iterations = 300
//! subsample = 2
//!
//! [viewport]
//! center_re = 0.0
//! center_im = 0.0
//! zoom = 1.5
//!
//! [palette]
//! kind = "golden-ratio"
//! size = 512
//! ```

use crate::core::data::complex::Complex;
use crate::core::data::fractal_params::{FractalParams, FractalParamsError};
use crate::core::data::surface::{DEFAULT_HEIGHT, DEFAULT_WIDTH, SurfaceError, SurfaceSize};
use crate::core::fractals::variant::FractalVariant;
use crate::core::palettes::kinds::PaletteKind;
use crate::core::palettes::palette::{DEFAULT_PALETTE_SIZE, PaletteError};
use serde::Deserialize;
use std::error::Error;
use std::fmt;
use std::path::{Path, PathBuf};

pub const DEFAULT_ZOOM: f64 = 1.0;

#[derive(Debug)]
pub enum ConfigError {
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
    Surface(SurfaceError),
    FractalParams(FractalParamsError),
    Palette(PaletteError),
    InvalidViewport { center: Complex, zoom: f64 },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "could not read {}: {}", path.display(), source)
            }
            Self::Parse { path, source } => {
                write!(f, "invalid TOML in {}: {}", path.display(), source)
            }
            Self::Surface(err) => write!(f, "[surface] {}", err),
            Self::FractalParams(err) => write!(f, "[fractal] {}", err),
            Self::Palette(err) => write!(f, "[palette] {}", err),
            Self::InvalidViewport { center, zoom } => write!(
                f,
                "[viewport] center ({}, {}) with zoom {} is not a usable view",
                center.real, center.imag, zoom
            ),
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Parse { source, .. } => Some(source),
            Self::Surface(err) => Some(err),
            Self::FractalParams(err) => Some(err),
            Self::Palette(err) => Some(err),
            Self::InvalidViewport { .. } => None,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ExplorerConfig {
    pub surface: SurfaceSection,
    pub fractal: FractalSection,
    pub viewport: ViewportSection,
    pub palette: PaletteSection,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SurfaceSection {
    pub width: Option<u32>,
    pub height: Option<u32>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FractalSection {
    pub variant: Option<String>,
    pub max_iterations: Option<u32>,
    pub subsample: Option<u32>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ViewportSection {
    pub center_re: Option<f64>,
    pub center_im: Option<f64>,
    pub zoom: Option<f64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PaletteSection {
    pub kind: Option<String>,
    pub size: Option<usize>,
}

/// Fully resolved start-up values for an [`Explorer`](crate::Explorer).
///
/// Defaults: 800×600 surface, Mandelbrot at 100 iterations without
/// sub-sampling, centred on the variant's default center at zoom 1, and
/// the 256-colour Resonant palette.
#[derive(Debug, Clone, PartialEq)]
pub struct ExplorerSettings {
    pub surface: SurfaceSize,
    pub params: FractalParams,
    pub center: Complex,
    pub zoom: f64,
    pub palette: PaletteKind,
    pub palette_size: usize,
}

impl Default for ExplorerSettings {
    fn default() -> Self {
        let params = FractalParams::default();

        Self {
            surface: SurfaceSize::default(),
            center: params.variant().default_center(),
            params,
            zoom: DEFAULT_ZOOM,
            palette: PaletteKind::default(),
            palette_size: DEFAULT_PALETTE_SIZE,
        }
    }
}

impl ExplorerConfig {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        Self::parse(&content, path)
    }

    /// Parses TOML text; `origin` only labels errors.
    pub fn parse(content: &str, origin: &Path) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|source| ConfigError::Parse {
            path: origin.to_path_buf(),
            source,
        })
    }

    /// Merges the configured values over the defaults and validates them.
    pub fn resolve(&self) -> Result<ExplorerSettings, ConfigError> {
        let defaults = ExplorerSettings::default();

        let surface = SurfaceSize::new(
            self.surface.width.unwrap_or(DEFAULT_WIDTH),
            self.surface.height.unwrap_or(DEFAULT_HEIGHT),
        )
        .map_err(ConfigError::Surface)?;

        let variant = self
            .fractal
            .variant
            .as_deref()
            .map_or(defaults.params.variant(), FractalVariant::from_name_or_default);

        let params = FractalParams::new(
            variant,
            self.fractal
                .max_iterations
                .unwrap_or(defaults.params.max_iterations()),
            self.fractal.subsample.unwrap_or(defaults.params.subsample()),
        )
        .map_err(ConfigError::FractalParams)?;

        let variant_center = variant.default_center();
        let center = Complex::new(
            self.viewport.center_re.unwrap_or(variant_center.real),
            self.viewport.center_im.unwrap_or(variant_center.imag),
        );
        let zoom = self.viewport.zoom.unwrap_or(defaults.zoom);

        if !center.is_finite() || !zoom.is_finite() || zoom <= 0.0 {
            return Err(ConfigError::InvalidViewport { center, zoom });
        }

        let palette = self
            .palette
            .kind
            .as_deref()
            .map_or(defaults.palette, PaletteKind::from_name_or_default);

        let palette_size = self.palette.size.unwrap_or(defaults.palette_size);

        if palette_size < 2 {
            return Err(ConfigError::Palette(PaletteError::TooSmall {
                size: palette_size,
            }));
        }

        Ok(ExplorerSettings {
            surface,
            params,
            center,
            zoom,
            palette,
            palette_size,
        })
    }
}
