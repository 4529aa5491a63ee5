pub mod generate_fractal;
pub mod generate_pixel_buffer;
pub mod render;
pub mod transform_viewport;
