//! Gesture state machine for pointer, touch and wheel input.

pub mod controller;
pub mod events;
pub mod state;

pub use controller::InteractionController;
pub use events::PointerEvent;
pub use state::GestureState;
