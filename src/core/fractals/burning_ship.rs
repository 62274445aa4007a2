use crate::core::data::complex::Complex;
use crate::core::fractals::mandelbrot::ESCAPE_RADIUS_SQUARED;

/// The Burning Ship recurrence: like the Mandelbrot map, but the cross term
/// takes its absolute value. x(n+1) = x*x - y*y + cx, y(n+1) = |2xy| + cy.
#[must_use]
pub fn escape_count(c: Complex, max_iterations: u32) -> u32 {
    let mut z = Complex::ZERO;

    for iteration in 0..max_iterations {
        if z.magnitude_squared() >= ESCAPE_RADIUS_SQUARED {
            return iteration;
        }
        z = Complex {
            real: z.real * z.real - z.imag * z.imag + c.real,
            imag: (2.0 * z.real * z.imag).abs() + c.imag,
        };
    }

    max_iterations
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_origin_is_a_fixed_point() {
        // c = 0: x stays 0, y = |0| + 0 stays 0
        assert_eq!(escape_count(Complex::ZERO, 75), 75);
    }

    #[test]
    fn test_point_outside_radius_two_escapes_on_first_iteration() {
        let c = Complex {
            real: 0.0,
            imag: 2.5,
        };

        assert_eq!(escape_count(c, 100), 1);
    }

    #[test]
    fn test_cross_term_fold_keeps_orbit_bounded() {
        // c = (-1, -1): the folded orbit settles on the fixed point (-1, 1),
        // while the unfolded Mandelbrot map escapes from the same c in 3 steps
        let c = Complex {
            real: -1.0,
            imag: -1.0,
        };

        assert_eq!(escape_count(c, 100), 100);
        assert_eq!(crate::core::fractals::mandelbrot::escape_count(c, 100), 3);
    }

    #[test]
    fn test_count_never_exceeds_cap() {
        let c = Complex {
            real: -0.5,
            imag: -0.5,
        };

        for max_iterations in [1, 10, 100] {
            assert!(escape_count(c, max_iterations) <= max_iterations);
        }
    }
}
