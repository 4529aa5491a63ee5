pub mod cache;
pub mod colour_map;
pub mod factory;
pub mod hsv;
pub mod kinds;
pub mod palette;
pub mod scheme;
pub mod schemes;
