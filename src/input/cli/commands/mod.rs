pub mod play;
pub mod render;
