use crate::controllers::interaction::PointerEvent;
use crate::core::data::point::Point;

/// Folds raw mouse and touch input into [`PointerEvent`]s.
///
/// One finger behaves like a mouse drag; a second finger turns the gesture
/// into a pinch between the two oldest touches. Fingers beyond the second are
/// tracked but ignored.
#[derive(Debug, Default)]
pub struct PointerTracker {
    cursor: Option<Point>,
    touches: Vec<(u64, Point)>,
}

impl PointerTracker {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn cursor(&self) -> Option<Point> {
        self.cursor
    }

    pub fn cursor_moved(&mut self, position: Point) -> Option<PointerEvent> {
        self.cursor = Some(position);
        Some(PointerEvent::Move(position))
    }

    pub fn mouse_pressed(&mut self) -> Option<PointerEvent> {
        self.cursor.map(PointerEvent::Down)
    }

    pub fn mouse_released(&mut self) -> Option<PointerEvent> {
        Some(PointerEvent::Up)
    }

    pub fn cursor_left(&mut self) -> Option<PointerEvent> {
        self.cursor = None;
        Some(PointerEvent::Leave)
    }

    /// `delta_y` follows the browser convention: negative scrolls up.
    pub fn wheel(&mut self, delta_y: f64) -> Option<PointerEvent> {
        self.cursor
            .map(|position| PointerEvent::Wheel { position, delta_y })
    }

    pub fn touch_started(&mut self, id: u64, position: Point) -> Option<PointerEvent> {
        self.touches.retain(|(touch, _)| *touch != id);
        self.touches.push((id, position));

        match self.touches.as_slice() {
            [_] => Some(PointerEvent::Down(position)),
            [(_, a), (_, b)] => Some(PointerEvent::PinchStart(*a, *b)),
            _ => None,
        }
    }

    pub fn touch_moved(&mut self, id: u64, position: Point) -> Option<PointerEvent> {
        let index = self.touches.iter().position(|(touch, _)| *touch == id)?;
        self.touches[index].1 = position;

        match self.touches.as_slice() {
            [_] => Some(PointerEvent::Move(position)),
            [(_, a), (_, b), ..] if index < 2 => Some(PointerEvent::PinchMove(*a, *b)),
            _ => None,
        }
    }

    pub fn touch_ended(&mut self, id: u64) -> Option<PointerEvent> {
        let index = self.touches.iter().position(|(touch, _)| *touch == id)?;
        let before = self.touches.len();
        self.touches.remove(index);

        match (before, self.touches.len()) {
            (_, 0) => Some(PointerEvent::Up),
            (2, 1) => Some(PointerEvent::PinchEnd),
            _ => None,
        }
    }
}
