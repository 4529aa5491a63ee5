use crate::core::data::pixel_buffer::PixelBuffer;
use std::error::Error;
use std::fmt;
use std::path::{Path, PathBuf};

#[derive(Debug)]
pub enum ExportError {
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    Encode {
        path: PathBuf,
        source: Box<dyn Error + Send + Sync>,
    },
}

impl fmt::Display for ExportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "could not write {}: {}", path.display(), source)
            }
            Self::Encode { path, source } => {
                write!(f, "could not encode {}: {}", path.display(), source)
            }
        }
    }
}

impl Error for ExportError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Encode { source, .. } => Some(source.as_ref()),
        }
    }
}

pub trait FilePresenterPort {
    fn present(&self, buffer: &PixelBuffer, filepath: &Path) -> Result<(), ExportError>;
}
