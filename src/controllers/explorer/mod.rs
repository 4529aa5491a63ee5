pub mod errors;
pub mod explorer;
pub mod updates;

pub use errors::ExplorerError;
pub use explorer::Explorer;
pub use updates::{FractalParamsUpdate, ViewportUpdate};
