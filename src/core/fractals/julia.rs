use crate::core::data::complex::Complex;
use crate::core::fractals::mandelbrot::ESCAPE_RADIUS_SQUARED;

/// The seed constant the session starts with.
pub const DEFAULT_CONSTANT: Complex = Complex {
    real: -0.4,
    imag: 0.6,
};

/// Iterations until z(n+1) = z(n)² + k leaves the escape radius, where the
/// plane coordinate seeds z(0) and `constant` is the fixed k.
#[must_use]
pub fn escape_count(seed: Complex, constant: Complex, max_iterations: u32) -> u32 {
    let mut z = seed;

    for iteration in 0..max_iterations {
        if z.magnitude_squared() >= ESCAPE_RADIUS_SQUARED {
            return iteration;
        }
        z = z * z + constant;
    }

    max_iterations
}
