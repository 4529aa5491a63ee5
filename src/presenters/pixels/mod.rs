#[cfg(feature = "gui")]
pub mod factory;
pub mod pixel_format;
#[cfg(feature = "gui")]
pub mod presenter;
