use crate::controllers::interaction::events::PointerEvent;
use crate::controllers::interaction::state::GestureState;
use crate::core::actions::transform_viewport::{ZOOM_IN_FACTOR, ZOOM_OUT_FACTOR, pan, zoom_at};
use crate::core::data::viewport::{ViewportError, ViewportState};

/// Turns pointer gestures into viewport changes.
///
/// The gesture state always advances with the events it sees, even when the
/// resulting viewport is rejected, so a later move never replays a stale
/// delta.
#[derive(Debug, Default)]
pub struct InteractionController {
    state: GestureState,
}

impl InteractionController {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn state(&self) -> GestureState {
        self.state
    }

    /// Returns `Ok(Some(_))` when `event` moves the view.
    pub fn handle(
        &mut self,
        event: PointerEvent,
        viewport: &ViewportState,
    ) -> Result<Option<ViewportState>, ViewportError> {
        match event {
            PointerEvent::Down(position) => {
                self.state = GestureState::Dragging { last: position };
                Ok(None)
            }
            PointerEvent::Move(position) => {
                let GestureState::Dragging { last } = self.state else {
                    return Ok(None);
                };

                self.state = GestureState::Dragging { last: position };
                pan(viewport, position.x - last.x, position.y - last.y).map(Some)
            }
            PointerEvent::Up | PointerEvent::Leave | PointerEvent::PinchEnd => {
                self.state = GestureState::Idle;
                Ok(None)
            }
            PointerEvent::PinchStart(a, b) => {
                self.state = GestureState::PinchZooming {
                    last_distance: a.distance_to(b),
                    anchor: a.midpoint(b),
                };
                Ok(None)
            }
            PointerEvent::PinchMove(a, b) => {
                let GestureState::PinchZooming { last_distance, .. } = self.state else {
                    return Ok(None);
                };

                let distance = a.distance_to(b);
                let anchor = a.midpoint(b);
                self.state = GestureState::PinchZooming {
                    last_distance: distance,
                    anchor,
                };

                if last_distance == 0.0 {
                    return Ok(None);
                }

                zoom_at(viewport, anchor, distance / last_distance).map(Some)
            }
            PointerEvent::Wheel { position, delta_y } => {
                let factor = if delta_y < 0.0 {
                    ZOOM_IN_FACTOR
                } else if delta_y > 0.0 {
                    ZOOM_OUT_FACTOR
                } else {
                    return Ok(None);
                };

                zoom_at(viewport, position, factor).map(Some)
            }
        }
    }
}
