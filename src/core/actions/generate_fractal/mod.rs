pub mod generate_fractal;
pub mod ports;
