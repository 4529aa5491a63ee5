use crate::core::data::colour::Colour;
use crate::core::data::surface::{BYTES_PER_PIXEL, SurfaceSize};
use std::error::Error;
use std::fmt;

fn surface_to_buffer_size(surface: SurfaceSize) -> usize {
    surface.pixel_count() * BYTES_PER_PIXEL
}

#[derive(Debug, Clone, PartialEq)]
pub enum PixelBufferError {
    PixelOutsideBounds {
        x: u32,
        y: u32,
        surface: SurfaceSize,
    },
    BoundsMismatch {
        surface_size: usize,
        buffer_size: usize,
    },
}

impl fmt::Display for PixelBufferError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BoundsMismatch {
                surface_size,
                buffer_size,
            } => {
                write!(
                    f,
                    "surface size {} does not match buffer size {}",
                    surface_size, buffer_size
                )
            }
            Self::PixelOutsideBounds { x, y, surface } => {
                write!(
                    f,
                    "pixel at x:{}, y:{} outside of {}x{} surface",
                    x,
                    y,
                    surface.width(),
                    surface.height()
                )
            }
        }
    }
}

impl Error for PixelBufferError {}

pub type PixelBufferData = Vec<u8>;

/// Packed RGB frame, row-major from the top-left pixel.
#[derive(Debug, Clone, PartialEq)]
pub struct PixelBuffer {
    surface: SurfaceSize,
    buffer: PixelBufferData,
}

impl PixelBuffer {
    #[must_use]
    pub fn new(surface: SurfaceSize) -> Self {
        Self {
            surface,
            buffer: vec![0; surface_to_buffer_size(surface)],
        }
    }

    pub fn from_data(
        surface: SurfaceSize,
        buffer: PixelBufferData,
    ) -> Result<Self, PixelBufferError> {
        let surface_size = surface_to_buffer_size(surface);

        if surface_size != buffer.len() {
            return Err(PixelBufferError::BoundsMismatch {
                surface_size,
                buffer_size: buffer.len(),
            });
        }

        Ok(Self { surface, buffer })
    }

    #[must_use]
    pub fn surface(&self) -> SurfaceSize {
        self.surface
    }

    #[must_use]
    pub fn buffer(&self) -> &PixelBufferData {
        &self.buffer
    }

    #[must_use]
    pub fn buffer_size(&self) -> usize {
        self.buffer.len()
    }

    #[must_use]
    pub fn into_data(self) -> PixelBufferData {
        self.buffer
    }

    #[must_use]
    pub fn pixel(&self, x: u32, y: u32) -> Option<Colour> {
        if !self.surface.contains(x, y) {
            return None;
        }

        let index = self.index_of(x, y);

        Some(Colour::new(
            self.buffer[index],
            self.buffer[index + 1],
            self.buffer[index + 2],
        ))
    }

    pub fn set_pixel(&mut self, x: u32, y: u32, colour: Colour) -> Result<(), PixelBufferError> {
        if !self.surface.contains(x, y) {
            return Err(PixelBufferError::PixelOutsideBounds {
                x,
                y,
                surface: self.surface,
            });
        }

        let index = self.index_of(x, y);

        self.buffer[index] = colour.r;
        self.buffer[index + 1] = colour.g;
        self.buffer[index + 2] = colour.b;

        Ok(())
    }

    /// Paints a `size`×`size` block whose top-left corner is `(x, y)`, clipped
    /// at the surface edge.
    pub fn fill_block(
        &mut self,
        x: u32,
        y: u32,
        size: u32,
        colour: Colour,
    ) -> Result<(), PixelBufferError> {
        if !self.surface.contains(x, y) {
            return Err(PixelBufferError::PixelOutsideBounds {
                x,
                y,
                surface: self.surface,
            });
        }

        let right = x.saturating_add(size).min(self.surface.width());
        let bottom = y.saturating_add(size).min(self.surface.height());

        for row in y..bottom {
            for column in x..right {
                let index = self.index_of(column, row);
                self.buffer[index..index + 3].copy_from_slice(&[colour.r, colour.g, colour.b]);
            }
        }

        Ok(())
    }

    fn index_of(&self, x: u32, y: u32) -> usize {
        (y as usize * self.surface.width() as usize + x as usize) * BYTES_PER_PIXEL
    }
}
