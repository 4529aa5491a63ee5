use crate::core::data::point::Point;

#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub enum GestureState {
    #[default]
    Idle,
    Dragging {
        last: Point,
    },
    PinchZooming {
        last_distance: f64,
        anchor: Point,
    },
}
