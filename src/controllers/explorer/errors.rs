use crate::controllers::ports::file_presenter::ExportError;
use crate::core::actions::render::render::RenderError;
use crate::core::data::fractal_params::FractalParamsError;
use crate::core::data::surface::SurfaceError;
use crate::core::data::viewport::ViewportError;
use crate::core::palettes::palette::PaletteError;
use std::error::Error;
use std::fmt;

#[derive(Debug)]
pub enum ExplorerError {
    Surface(SurfaceError),
    Viewport(ViewportError),
    FractalParams(FractalParamsError),
    Palette(PaletteError),
    Render(RenderError),
    Export(ExportError),
}

impl fmt::Display for ExplorerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Surface(err) => write!(f, "{}", err),
            Self::Viewport(err) => write!(f, "{}", err),
            Self::FractalParams(err) => write!(f, "{}", err),
            Self::Palette(err) => write!(f, "{}", err),
            Self::Render(err) => write!(f, "render failed: {}", err),
            Self::Export(err) => write!(f, "export failed: {}", err),
        }
    }
}

impl Error for ExplorerError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Surface(err) => Some(err),
            Self::Viewport(err) => Some(err),
            Self::FractalParams(err) => Some(err),
            Self::Palette(err) => Some(err),
            Self::Render(err) => Some(err),
            Self::Export(err) => Some(err),
        }
    }
}

impl From<SurfaceError> for ExplorerError {
    fn from(err: SurfaceError) -> Self {
        Self::Surface(err)
    }
}

impl From<ViewportError> for ExplorerError {
    fn from(err: ViewportError) -> Self {
        Self::Viewport(err)
    }
}

impl From<FractalParamsError> for ExplorerError {
    fn from(err: FractalParamsError) -> Self {
        Self::FractalParams(err)
    }
}

impl From<PaletteError> for ExplorerError {
    fn from(err: PaletteError) -> Self {
        Self::Palette(err)
    }
}

impl From<RenderError> for ExplorerError {
    fn from(err: RenderError) -> Self {
        Self::Render(err)
    }
}

impl From<ExportError> for ExplorerError {
    fn from(err: ExportError) -> Self {
        Self::Export(err)
    }
}
