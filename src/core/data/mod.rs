pub mod colour;
pub mod complex;
pub mod fractal_params;
pub mod pixel_buffer;
pub mod point;
pub mod surface;
pub mod viewport;
