use std::error::Error;
use std::fmt;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum SurfaceError {
    InvalidSize { width: u32, height: u32 },
    TooLarge { width: u32, height: u32 },
}

impl fmt::Display for SurfaceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidSize { width, height } => {
                write!(f, "surface size must be positive: {}x{}", width, height)
            }
            Self::TooLarge { width, height } => {
                write!(f, "surface {}x{} does not fit in a pixel buffer", width, height)
            }
        }
    }
}

impl Error for SurfaceError {}

pub const DEFAULT_WIDTH: u32 = 800;
pub const DEFAULT_HEIGHT: u32 = 600;

/// Packed RGB.
pub const BYTES_PER_PIXEL: usize = 3;

/// Pixel dimensions of the rendering surface. Both sides are non-zero and the
/// RGB byte count fits in `usize`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct SurfaceSize {
    width: u32,
    height: u32,
}

impl SurfaceSize {
    pub fn new(width: u32, height: u32) -> Result<Self, SurfaceError> {
        if width == 0 || height == 0 {
            return Err(SurfaceError::InvalidSize { width, height });
        }

        (width as usize)
            .checked_mul(height as usize)
            .and_then(|pixels| pixels.checked_mul(BYTES_PER_PIXEL))
            .ok_or(SurfaceError::TooLarge { width, height })?;

        Ok(Self { width, height })
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[must_use]
    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// The shorter side, which the viewport scale is normalised against.
    #[must_use]
    pub fn min_side(&self) -> u32 {
        self.width.min(self.height)
    }

    #[must_use]
    pub fn contains(&self, x: u32, y: u32) -> bool {
        x < self.width && y < self.height
    }
}

impl Default for SurfaceSize {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_surface_new_valid() {
        let surface = SurfaceSize::new(800, 600).unwrap();

        assert_eq!(surface.width(), 800);
        assert_eq!(surface.height(), 600);
        assert_eq!(surface.pixel_count(), 480_000);
        assert_eq!(surface.min_side(), 600);
    }

    #[test]
    fn test_default_surface() {
        assert_eq!(SurfaceSize::default(), SurfaceSize::new(800, 600).unwrap());
    }

    #[test]
    fn test_surface_single_pixel_is_allowed() {
        assert!(SurfaceSize::new(1, 1).is_ok());
    }

    #[test]
    fn test_surface_dimensions_must_be_non_zero() {
        assert_eq!(
            SurfaceSize::new(0, 10),
            Err(SurfaceError::InvalidSize { width: 0, height: 10 })
        );
        assert_eq!(
            SurfaceSize::new(10, 0),
            Err(SurfaceError::InvalidSize { width: 10, height: 0 })
        );
        assert_eq!(
            SurfaceSize::new(0, 0),
            Err(SurfaceError::InvalidSize { width: 0, height: 0 })
        );
    }

    #[test]
    fn test_surface_byte_count_must_fit() {
        assert_eq!(
            SurfaceSize::new(u32::MAX, u32::MAX),
            Err(SurfaceError::TooLarge {
                width: u32::MAX,
                height: u32::MAX
            })
        );
    }

    #[test]
    fn test_surface_contains() {
        let surface = SurfaceSize::new(4, 3).unwrap();

        assert!(surface.contains(0, 0));
        assert!(surface.contains(3, 2));
        assert!(!surface.contains(4, 0));
        assert!(!surface.contains(0, 3));
    }
}
