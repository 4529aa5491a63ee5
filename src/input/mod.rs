//! Input adapters: the command line, the windowed GUI and the raw pointer
//! translation they share.

pub mod cli;
#[cfg(feature = "gui")]
pub mod gui;
pub mod pointer_tracker;
