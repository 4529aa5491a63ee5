use crate::core::data::colour::Colour;

/// Converts hue, saturation and value in `[0, 1]` to an RGB colour.
///
/// Hue wraps, so `h = 1.0` and `h = -0.5` are treated as `0.0` and `0.5`.
#[must_use]
pub fn hsv_to_rgb(h: f64, s: f64, v: f64) -> Colour {
    let h = h.rem_euclid(1.0);
    let sector = (h * 6.0).floor();
    let f = h * 6.0 - sector;

    let p = v * (1.0 - s);
    let q = v * (1.0 - f * s);
    let t = v * (1.0 - (1.0 - f) * s);

    let (r, g, b) = match (sector as i64).rem_euclid(6) {
        0 => (v, t, p),
        1 => (q, v, p),
        2 => (p, v, t),
        3 => (p, q, v),
        4 => (t, p, v),
        _ => (v, p, q),
    };

    Colour::from_unit_rgb(r, g, b)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn primary_hues() {
        assert_eq!(hsv_to_rgb(0.0, 1.0, 1.0), Colour::new(255, 0, 0));
        assert_eq!(hsv_to_rgb(1.0 / 3.0, 1.0, 1.0), Colour::new(0, 255, 0));
        assert_eq!(hsv_to_rgb(2.0 / 3.0, 1.0, 1.0), Colour::new(0, 0, 255));
    }

    #[test]
    fn hue_wraps_around() {
        assert_eq!(hsv_to_rgb(1.0, 1.0, 1.0), hsv_to_rgb(0.0, 1.0, 1.0));
        assert_eq!(hsv_to_rgb(-0.5, 1.0, 1.0), hsv_to_rgb(0.5, 1.0, 1.0));
        assert_eq!(hsv_to_rgb(1.25, 0.5, 0.5), hsv_to_rgb(0.25, 0.5, 0.5));
    }

    #[test]
    fn zero_saturation_is_grey() {
        assert_eq!(hsv_to_rgb(0.42, 0.0, 0.5), Colour::new(128, 128, 128));
    }

    #[test]
    fn zero_value_is_black() {
        assert_eq!(hsv_to_rgb(0.7, 1.0, 0.0), Colour::BLACK);
    }
}
