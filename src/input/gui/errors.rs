use crate::controllers::explorer::ExplorerError;
use std::error::Error;
use std::fmt;

#[derive(Debug)]
pub enum GuiError {
    EventLoop(winit::error::EventLoopError),
    Window(winit::error::OsError),
    Surface(pixels::Error),
    Texture(pixels::TextureError),
    Explorer(ExplorerError),
}

impl fmt::Display for GuiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EventLoop(err) => write!(f, "event loop error: {}", err),
            Self::Window(err) => write!(f, "could not create window: {}", err),
            Self::Surface(err) => write!(f, "pixels surface error: {}", err),
            Self::Texture(err) => write!(f, "pixels texture error: {}", err),
            Self::Explorer(err) => write!(f, "{}", err),
        }
    }
}

impl Error for GuiError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::EventLoop(err) => Some(err),
            Self::Window(err) => Some(err),
            Self::Surface(err) => Some(err),
            Self::Texture(err) => Some(err),
            Self::Explorer(err) => Some(err),
        }
    }
}

impl From<winit::error::EventLoopError> for GuiError {
    fn from(err: winit::error::EventLoopError) -> Self {
        Self::EventLoop(err)
    }
}

impl From<winit::error::OsError> for GuiError {
    fn from(err: winit::error::OsError) -> Self {
        Self::Window(err)
    }
}

impl From<pixels::Error> for GuiError {
    fn from(err: pixels::Error) -> Self {
        Self::Surface(err)
    }
}

impl From<pixels::TextureError> for GuiError {
    fn from(err: pixels::TextureError) -> Self {
        Self::Texture(err)
    }
}

impl From<ExplorerError> for GuiError {
    fn from(err: ExplorerError) -> Self {
        Self::Explorer(err)
    }
}
