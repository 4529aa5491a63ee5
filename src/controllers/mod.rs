pub mod explorer;
pub mod interaction;
pub mod playback;
pub mod ports;
