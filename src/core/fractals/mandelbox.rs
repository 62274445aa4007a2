use crate::core::data::complex::Complex;
use crate::core::fractals::mandelbrot::ESCAPE_RADIUS_SQUARED;

/// Piecewise reflection keeping a folded axis near [-1, 1].
fn box_fold(v: f64) -> f64 {
    if v > 1.0 {
        2.0 - v
    } else if v < -1.0 {
        -2.0 - v
    } else {
        v
    }
}

/// The simplified 2D-slice Mandelbox: the plane coordinate seeds (x, y) and
/// z starts at 0 with no driving coordinate of its own. Each step box-folds
/// every pre-scaled axis, applies the spherical fold (r < 0.5 quadruples,
/// r < 1 divides by r²), then scales and translates; z gets no translation.
#[must_use]
pub fn escape_count(c: Complex, scale: f64, max_iterations: u32) -> u32 {
    let mut x = c.real;
    let mut y = c.imag;
    let mut z = 0.0_f64;

    for iteration in 0..max_iterations {
        if x * x + y * y + z * z >= ESCAPE_RADIUS_SQUARED {
            return iteration;
        }

        x = box_fold(x * scale);
        y = box_fold(y * scale);
        z = box_fold(z * scale);

        let r = (x * x + y * y + z * z).sqrt();
        if r < 0.5 {
            x *= 4.0;
            y *= 4.0;
            z *= 4.0;
        } else if r < 1.0 {
            let r_squared = r * r;
            x /= r_squared;
            y /= r_squared;
            z /= r_squared;
        }

        x = x * scale + c.real;
        y = y * scale + c.imag;
        z *= scale;
    }

    max_iterations
}
