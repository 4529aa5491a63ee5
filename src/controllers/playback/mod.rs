//! Scripted, timed sequences of explorer actions.

pub mod scheduler;
pub mod script;

pub use scheduler::PlaybackScheduler;
pub use script::{PlaybackAction, PlaybackCommand, PlaybackScript, ScriptError};
