//! The four escape-time iteration functions and their kind tag.
//!
//! Each function is pure: plane coordinate and parameters in, escape count
//! in `[0, max_iterations]` out. Dispatch over the kind lives on
//! [`crate::core::data::fractal_params::FractalParams`].

pub mod burning_ship;
pub mod julia;
pub mod kinds;
pub mod mandelbox;
pub mod mandelbrot;
