use crate::core::data::complex::Complex;
use crate::core::data::point::Point;
use crate::core::data::viewport::ViewportState;

/// Maps a (possibly fractional) pixel position to the complex plane.
///
/// The surface centre maps to `viewport.center()` and one pixel spans
/// `viewport.scale()` on both axes. Pixel y grows downward with the
/// imaginary part.
#[must_use]
pub fn pixel_to_complex(pixel: Point, viewport: &ViewportState) -> Complex {
    let surface = viewport.surface();
    let scale = viewport.scale();
    let center = viewport.center();

    Complex {
        real: (pixel.x - f64::from(surface.width()) / 2.0) * scale + center.real,
        imag: (pixel.y - f64::from(surface.height()) / 2.0) * scale + center.imag,
    }
}

/// Inverse of [`pixel_to_complex`].
#[must_use]
pub fn complex_to_pixel(point: Complex, viewport: &ViewportState) -> Point {
    let surface = viewport.surface();
    let scale = viewport.scale();
    let center = viewport.center();

    Point {
        x: (point.real - center.real) / scale + f64::from(surface.width()) / 2.0,
        y: (point.imag - center.imag) / scale + f64::from(surface.height()) / 2.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::surface::SurfaceSize;

    const EPSILON: f64 = 1e-9;

    fn viewport(center: Complex, zoom: f64, width: u32, height: u32) -> ViewportState {
        ViewportState::new(center, zoom, SurfaceSize::new(width, height).unwrap()).unwrap()
    }

    #[test]
    fn test_surface_centre_maps_to_viewport_center() {
        let viewport = viewport(Complex::new(-0.5, 0.0), 1.0, 800, 600);
        let result = pixel_to_complex(Point::new(400.0, 300.0), &viewport);

        assert_eq!(result, Complex::new(-0.5, 0.0));
    }

    #[test]
    fn test_shorter_side_spans_base_range() {
        let viewport = viewport(Complex::ZERO, 1.0, 800, 600);
        let top = pixel_to_complex(Point::new(400.0, 0.0), &viewport);
        let bottom = pixel_to_complex(Point::new(400.0, 600.0), &viewport);

        assert!((top.imag + 1.75).abs() < EPSILON);
        assert!((bottom.imag - 1.75).abs() < EPSILON);
    }

    #[test]
    fn test_axes_share_one_scale() {
        let viewport = viewport(Complex::ZERO, 2.0, 800, 600);
        let origin = pixel_to_complex(Point::new(0.0, 0.0), &viewport);
        let step = pixel_to_complex(Point::new(1.0, 1.0), &viewport);

        let dx = step.real - origin.real;
        let dy = step.imag - origin.imag;
        assert!((dx - dy).abs() < EPSILON);
        assert!((dx - viewport.scale()).abs() < EPSILON);
    }

    #[test]
    fn test_zoom_shrinks_the_visible_region() {
        let wide = viewport(Complex::ZERO, 1.0, 100, 100);
        let narrow = viewport(Complex::ZERO, 4.0, 100, 100);
        let corner = Point::new(0.0, 0.0);

        let wide_corner = pixel_to_complex(corner, &wide);
        let narrow_corner = pixel_to_complex(corner, &narrow);

        assert!((wide_corner.real / narrow_corner.real - 4.0).abs() < EPSILON);
    }

    #[test]
    fn test_complex_to_pixel_inverts_pixel_to_complex() {
        let viewport = viewport(Complex::new(-0.743, 0.131), 37.5, 640, 480);

        for pixel in [
            Point::new(0.0, 0.0),
            Point::new(639.0, 479.0),
            Point::new(123.25, 400.5),
        ] {
            let back = complex_to_pixel(pixel_to_complex(pixel, &viewport), &viewport);

            assert!((back.x - pixel.x).abs() < 1e-6);
            assert!((back.y - pixel.y).abs() < 1e-6);
        }
    }
}
