pub mod config;
pub mod controllers;
pub mod core;
pub mod input;
pub mod presenters;

pub use config::{ConfigError, ExplorerConfig, ExplorerSettings};
pub use controllers::explorer::{Explorer, ExplorerError, FractalParamsUpdate, ViewportUpdate};
pub use controllers::interaction::{InteractionController, PointerEvent};
pub use controllers::playback::{PlaybackAction, PlaybackScheduler, PlaybackScript};
pub use crate::core::actions::render::render::render;
pub use crate::core::data::complex::Complex;
pub use crate::core::data::viewport::ViewportState;
pub use crate::core::fractals::variant::FractalVariant;
pub use crate::core::palettes::kinds::PaletteKind;
pub use input::cli::run_cli;
#[cfg(feature = "gui")]
pub use input::gui::RunGuiCommand;
#[cfg(feature = "gui")]
pub use presenters::pixels::factory::PixelsPresenterFactory;
pub use presenters::file::image::ImageFilePresenter;
