use crate::core::data::point::Point;

/// Pointer, touch and wheel input, normalised to surface pixel coordinates.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum PointerEvent {
    Down(Point),
    Move(Point),
    Up,
    Leave,
    PinchStart(Point, Point),
    PinchMove(Point, Point),
    PinchEnd,
    /// Negative `delta_y` scrolls towards the user and zooms in.
    Wheel { position: Point, delta_y: f64 },
}
