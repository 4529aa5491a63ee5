use crate::core::data::pixel_buffer::PixelBuffer;
use crate::input::gui::errors::GuiError;
use egui::Context as EguiContext;

pub trait GuiPresenterPort {
    /// Uploads a finished frame; frames that no longer match the surface are dropped.
    fn present_frame(&mut self, frame: &PixelBuffer);
    fn render(&mut self, egui_output: egui::FullOutput, egui_ctx: &EguiContext) -> Result<(), GuiError>;
    fn resize(&mut self, width: u32, height: u32) -> Result<(), GuiError>;
}
