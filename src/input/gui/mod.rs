//! Windowed explorer: winit for the window and input, pixels for the
//! framebuffer and egui for the control panel.

pub mod app;
pub mod commands;
pub mod errors;
pub mod panel;

pub use commands::run_gui::RunGuiCommand;
pub use errors::GuiError;
