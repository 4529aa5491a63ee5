use crate::controllers::ports::file_presenter::{ExportError, FilePresenterPort};
use crate::core::data::pixel_buffer::PixelBuffer;
use image::{ImageError, RgbImage};
use std::path::Path;

/// Writes frames with the `image` crate; the format follows the file
/// extension (`.png`, `.jpg`, `.bmp`).
#[derive(Debug, Default, Clone, Copy)]
pub struct ImageFilePresenter;

impl ImageFilePresenter {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl FilePresenterPort for ImageFilePresenter {
    fn present(&self, buffer: &PixelBuffer, filepath: &Path) -> Result<(), ExportError> {
        if let Some(parent) = filepath.parent().filter(|dir| !dir.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|source| ExportError::Io {
                path: filepath.to_path_buf(),
                source,
            })?;
        }

        let surface = buffer.surface();
        let image = RgbImage::from_raw(surface.width(), surface.height(), buffer.buffer().clone())
            .ok_or_else(|| ExportError::Encode {
                path: filepath.to_path_buf(),
                source: "frame data does not match its surface".into(),
            })?;

        image.save(filepath).map_err(|err| match err {
            ImageError::IoError(source) => ExportError::Io {
                path: filepath.to_path_buf(),
                source,
            },
            other => ExportError::Encode {
                path: filepath.to_path_buf(),
                source: Box::new(other),
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::colour::Colour;
    use crate::core::data::surface::SurfaceSize;
    use std::path::PathBuf;

    fn scratch_dir(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("escape_time_explorer_{}_{}", name, std::process::id()))
    }

    fn buffer() -> PixelBuffer {
        let mut buffer = PixelBuffer::new(SurfaceSize::new(3, 2).unwrap());
        buffer.set_pixel(2, 1, Colour::new(250, 120, 10)).unwrap();
        buffer
    }

    #[test]
    fn writes_a_png_that_reads_back() {
        let dir = scratch_dir("png");
        let path = dir.join("nested").join("frame.png");

        ImageFilePresenter::new().present(&buffer(), &path).unwrap();

        let decoded = image::open(&path).unwrap().to_rgb8();
        assert_eq!(decoded.dimensions(), (3, 2));
        assert_eq!(decoded.get_pixel(2, 1).0, [250, 120, 10]);
        assert_eq!(decoded.get_pixel(0, 0).0, [0, 0, 0]);

        std::fs::remove_dir_all(dir).unwrap();
    }

    #[test]
    fn unknown_extension_is_an_encode_error() {
        let dir = scratch_dir("unknown");
        let path = dir.join("frame.nope");

        let result = ImageFilePresenter::new().present(&buffer(), &path);

        assert!(matches!(result, Err(ExportError::Encode { .. })));
        let _ = std::fs::remove_dir_all(dir);
    }
}
