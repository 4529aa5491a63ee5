use crate::core::data::point::Point;
use crate::core::data::viewport::{ViewportError, ViewportState, scale_for};
use crate::core::util::pixel_to_complex_coords::pixel_to_complex;
use crate::core::data::complex::Complex;

/// Zoom factor applied by a single zoom-in step (wheel tick or button).
pub const ZOOM_IN_FACTOR: f64 = 1.2;
/// Zoom factor applied by a single zoom-out step.
pub const ZOOM_OUT_FACTOR: f64 = 0.8;

/// Scales the zoom by `factor` while keeping the complex point under
/// `anchor` at the same screen position.
pub fn zoom_at(
    viewport: &ViewportState,
    anchor: Point,
    factor: f64,
) -> Result<ViewportState, ViewportError> {
    if !factor.is_finite() || factor <= 0.0 {
        return Err(ViewportError::InvalidZoomFactor(factor));
    }

    let surface = viewport.surface();
    let fixed = pixel_to_complex(anchor, viewport);
    let zoom = viewport.zoom() * factor;
    let scale = scale_for(zoom, surface);

    let center = Complex {
        real: fixed.real - (anchor.x - f64::from(surface.width()) / 2.0) * scale,
        imag: fixed.imag - (anchor.y - f64::from(surface.height()) / 2.0) * scale,
    };

    ViewportState::new(center, zoom, surface)
}

/// Zooms about the centre of the surface.
pub fn zoom_at_center(viewport: &ViewportState, factor: f64) -> Result<ViewportState, ViewportError> {
    let surface = viewport.surface();
    let middle = Point::new(
        f64::from(surface.width()) / 2.0,
        f64::from(surface.height()) / 2.0,
    );

    zoom_at(viewport, middle, factor)
}

/// Moves the view so that content follows a pointer drag of `(dx, dy)` pixels.
pub fn pan(viewport: &ViewportState, dx: f64, dy: f64) -> Result<ViewportState, ViewportError> {
    let scale = viewport.scale();
    let center = viewport.center();

    viewport.with_center(Complex {
        real: center.real - dx * scale,
        imag: center.imag - dy * scale,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::surface::SurfaceSize;
    use crate::core::util::pixel_to_complex_coords::complex_to_pixel;

    const EPSILON: f64 = 1e-9;

    fn viewport() -> ViewportState {
        ViewportState::new(Complex::new(-0.5, 0.0), 1.0, SurfaceSize::new(800, 600).unwrap())
            .unwrap()
    }

    fn assert_close(a: Complex, b: Complex) {
        assert!(
            (a.real - b.real).abs() < EPSILON && (a.imag - b.imag).abs() < EPSILON,
            "{a:?} != {b:?}"
        );
    }

    #[test]
    fn zoom_at_keeps_the_anchor_fixed() {
        let before = viewport();

        for anchor in [
            Point::new(0.0, 0.0),
            Point::new(123.0, 456.0),
            Point::new(799.5, 10.25),
        ] {
            for factor in [ZOOM_IN_FACTOR, ZOOM_OUT_FACTOR, 3.7] {
                let after = zoom_at(&before, anchor, factor).unwrap();

                assert_close(pixel_to_complex(anchor, &after), pixel_to_complex(anchor, &before));
                assert!((after.zoom() - before.zoom() * factor).abs() < EPSILON);
            }
        }
    }

    #[test]
    fn zoom_at_center_keeps_the_center() {
        let before = viewport();
        let after = zoom_at_center(&before, ZOOM_IN_FACTOR).unwrap();

        assert_close(after.center(), before.center());
        assert_eq!(after.zoom(), 1.2);
    }

    #[test]
    fn two_zoom_in_ticks_at_the_centre() {
        let middle = Point::new(400.0, 300.0);
        let once = zoom_at(&viewport(), middle, ZOOM_IN_FACTOR).unwrap();
        let twice = zoom_at(&once, middle, ZOOM_IN_FACTOR).unwrap();

        assert!((twice.zoom() - 1.44).abs() < EPSILON);
        assert_close(twice.center(), Complex::new(-0.5, 0.0));
    }

    #[test]
    fn zoom_rejects_bad_factors() {
        let before = viewport();

        for factor in [0.0, -1.2, f64::NAN, f64::INFINITY] {
            assert!(matches!(
                zoom_at(&before, Point::new(1.0, 1.0), factor),
                Err(ViewportError::InvalidZoomFactor(_))
            ));
        }
    }

    #[test]
    fn zoom_reports_degeneracy_instead_of_overflowing() {
        let deep = ViewportState::new(Complex::ZERO, 1e300, SurfaceSize::new(10, 10).unwrap())
            .unwrap();

        assert!(matches!(
            zoom_at(&deep, Point::new(5.0, 5.0), 1e300),
            Err(ViewportError::NumericDegeneracy { .. })
        ));
    }

    #[test]
    fn pan_content_follows_the_pointer() {
        let before = viewport();
        let grabbed = Point::new(200.0, 150.0);
        let point = pixel_to_complex(grabbed, &before);

        let after = pan(&before, 30.0, -20.0).unwrap();
        let moved_to = complex_to_pixel(point, &after);

        assert!((moved_to.x - 230.0).abs() < 1e-6);
        assert!((moved_to.y - 130.0).abs() < 1e-6);
    }

    #[test]
    fn pan_and_inverse_pan_round_trip() {
        let before = viewport();
        let there = pan(&before, 57.0, -13.5).unwrap();
        let back = pan(&there, -57.0, 13.5).unwrap();

        assert_close(back.center(), before.center());
        assert_eq!(back.zoom(), before.zoom());
    }

    #[test]
    fn pan_right_moves_the_window_left() {
        let after = pan(&viewport(), 100.0, 0.0).unwrap();

        assert!(after.center().real < -0.5);
        assert_eq!(after.center().imag, 0.0);
    }
}
