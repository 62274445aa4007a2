pub mod colour;
pub mod complex;
pub mod fractal_params;
pub mod frame_buffer;
pub mod pixel_grid;
pub mod viewport;
