pub mod burning_ship;
pub mod escape_time;
pub mod factory;
pub mod julia;
pub mod mandelbrot;
pub mod variant;
