use crate::core::data::complex::Complex;
use crate::core::data::pixel_grid::PixelGrid;
use crate::core::fractals::kinds::FractalKind;
use std::error::Error;
use std::fmt;

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum ViewportError {
    EmptyExtent { width: f64, height: f64 },
    NotFinite,
}

impl fmt::Display for ViewportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyExtent { width, height } => {
                write!(f, "viewport extent must be positive: {}x{}", width, height)
            }
            Self::NotFinite => {
                write!(f, "viewport extents must be finite")
            }
        }
    }
}

impl Error for ViewportError {}

/// The rectangular region of the plane currently mapped onto the pixel grid.
///
/// Zoom depth is not clamped: repeated zooming eventually exhausts f64
/// resolution and the rendered frame degrades. Construction only rejects
/// extents that are degenerate outright (non-finite, or min >= max).
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Viewport {
    x_min: f64,
    x_max: f64,
    y_min: f64,
    y_max: f64,
}

impl Viewport {
    pub fn new(x_min: f64, x_max: f64, y_min: f64, y_max: f64) -> Result<Self, ViewportError> {
        if !(x_min.is_finite() && x_max.is_finite() && y_min.is_finite() && y_max.is_finite()) {
            return Err(ViewportError::NotFinite);
        }

        let width = x_max - x_min;
        let height = y_max - y_min;

        if width <= 0.0 || height <= 0.0 {
            return Err(ViewportError::EmptyExtent { width, height });
        }

        Ok(Self {
            x_min,
            x_max,
            y_min,
            y_max,
        })
    }

    /// The reset extents for a fractal kind: ±2 for the planar fractals,
    /// ±4 for the Mandelbox.
    #[must_use]
    pub fn default_for(kind: FractalKind) -> Self {
        let extent = kind.default_extent();

        Self {
            x_min: -extent,
            x_max: extent,
            y_min: -extent,
            y_max: extent,
        }
    }

    #[must_use]
    pub fn x_min(&self) -> f64 {
        self.x_min
    }

    #[must_use]
    pub fn x_max(&self) -> f64 {
        self.x_max
    }

    #[must_use]
    pub fn y_min(&self) -> f64 {
        self.y_min
    }

    #[must_use]
    pub fn y_max(&self) -> f64 {
        self.y_max
    }

    #[must_use]
    pub fn width(&self) -> f64 {
        self.x_max - self.x_min
    }

    #[must_use]
    pub fn height(&self) -> f64 {
        self.y_max - self.y_min
    }

    #[must_use]
    pub fn center(&self) -> Complex {
        Complex {
            real: (self.x_min + self.x_max) / 2.0,
            imag: (self.y_min + self.y_max) / 2.0,
        }
    }

    /// Maps a pixel position to its plane coordinate.
    ///
    /// Linear: px = 0 lands on `x_min`; px ranges over `[0, width)` so the
    /// right/bottom edges stay exclusive.
    #[must_use]
    pub fn pixel_to_point(&self, px: u32, py: u32, grid: PixelGrid) -> Complex {
        Complex {
            real: self.x_min + (f64::from(px) / f64::from(grid.width())) * self.width(),
            imag: self.y_min + (f64::from(py) / f64::from(grid.height())) * self.height(),
        }
    }

    /// A viewport rescaled by `factor` around `center`. factor < 1 zooms in,
    /// factor > 1 zooms out. A factor that collapses or blows up the extent
    /// is rejected by construction validation.
    pub fn zoomed(&self, factor: f64, center: Complex) -> Result<Self, ViewportError> {
        let new_width = self.width() * factor;
        let new_height = self.height() * factor;

        Self::new(
            center.real - new_width / 2.0,
            center.real + new_width / 2.0,
            center.imag - new_height / 2.0,
            center.imag + new_height / 2.0,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-12;

    fn assert_approx_eq(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() <= EPSILON,
            "actual={} expected={}",
            actual,
            expected
        );
    }

    #[test]
    fn test_viewport_new_valid() {
        let viewport = Viewport::new(-2.0, 2.0, -1.0, 1.0).unwrap();

        assert_eq!(viewport.x_min(), -2.0);
        assert_eq!(viewport.x_max(), 2.0);
        assert_eq!(viewport.width(), 4.0);
        assert_eq!(viewport.height(), 2.0);
    }

    #[test]
    fn test_viewport_extent_must_be_positive() {
        let zero_width = Viewport::new(1.0, 1.0, -1.0, 1.0);
        let flipped_height = Viewport::new(-1.0, 1.0, 1.0, -1.0);

        assert_eq!(
            zero_width,
            Err(ViewportError::EmptyExtent {
                width: 0.0,
                height: 2.0
            })
        );
        assert_eq!(
            flipped_height,
            Err(ViewportError::EmptyExtent {
                width: 2.0,
                height: -2.0
            })
        );
    }

    #[test]
    fn test_viewport_rejects_non_finite_extents() {
        assert_eq!(
            Viewport::new(f64::NAN, 1.0, -1.0, 1.0),
            Err(ViewportError::NotFinite)
        );
        assert_eq!(
            Viewport::new(-1.0, f64::INFINITY, -1.0, 1.0),
            Err(ViewportError::NotFinite)
        );
    }

    #[test]
    fn test_default_extents_depend_on_fractal_kind() {
        let planar = Viewport::default_for(FractalKind::Mandelbrot);
        let boxy = Viewport::default_for(FractalKind::Mandelbox);

        assert_eq!(planar.x_min(), -2.0);
        assert_eq!(planar.x_max(), 2.0);
        assert_eq!(planar.y_min(), -2.0);
        assert_eq!(planar.y_max(), 2.0);
        assert_eq!(boxy.x_min(), -4.0);
        assert_eq!(boxy.y_max(), 4.0);
    }

    #[test]
    fn test_pixel_to_point_left_edge_is_x_min() {
        let viewport = Viewport::new(-2.0, 2.0, -2.0, 2.0).unwrap();
        let grid = PixelGrid::new(100, 100).unwrap();

        let point = viewport.pixel_to_point(0, 0, grid);

        assert_eq!(point.real, -2.0);
        assert_eq!(point.imag, -2.0);
    }

    #[test]
    fn test_pixel_to_point_center() {
        let viewport = Viewport::new(-2.0, 2.0, -2.0, 2.0).unwrap();
        let grid = PixelGrid::new(100, 100).unwrap();

        let point = viewport.pixel_to_point(50, 50, grid);

        assert_eq!(point.real, 0.0);
        assert_eq!(point.imag, 0.0);
    }

    #[test]
    fn test_pixel_to_point_last_pixel_stays_inside_right_edge() {
        let viewport = Viewport::new(-2.0, 2.0, -2.0, 2.0).unwrap();
        let grid = PixelGrid::new(100, 100).unwrap();

        let point = viewport.pixel_to_point(99, 99, grid);

        assert!(point.real < viewport.x_max());
        assert_approx_eq(point.real, -2.0 + (99.0 / 100.0) * 4.0);
    }

    #[test]
    fn test_zoom_in_halves_extent_around_center() {
        let viewport = Viewport::new(-2.0, 2.0, -2.0, 2.0).unwrap();
        let center = Complex {
            real: 1.0,
            imag: -0.5,
        };

        let zoomed = viewport.zoomed(0.5, center).unwrap();

        assert_approx_eq(zoomed.width(), 2.0);
        assert_approx_eq(zoomed.height(), 2.0);
        assert_approx_eq(zoomed.center().real, 1.0);
        assert_approx_eq(zoomed.center().imag, -0.5);
    }

    #[test]
    fn test_zoom_round_trip_restores_extents() {
        let viewport = Viewport::new(-2.0, 2.0, -2.0, 2.0).unwrap();
        let center = Complex {
            real: 0.25,
            imag: 0.75,
        };

        let round_trip = viewport
            .zoomed(0.5, center)
            .unwrap()
            .zoomed(2.0, center)
            .unwrap();

        assert_approx_eq(round_trip.width(), viewport.width());
        assert_approx_eq(round_trip.height(), viewport.height());
    }

    #[test]
    fn test_zoom_factor_zero_is_rejected() {
        let viewport = Viewport::new(-2.0, 2.0, -2.0, 2.0).unwrap();

        let result = viewport.zoomed(0.0, viewport.center());

        assert_eq!(
            result,
            Err(ViewportError::EmptyExtent {
                width: 0.0,
                height: 0.0
            })
        );
    }

    #[test]
    fn test_zoom_factor_nan_is_rejected() {
        let viewport = Viewport::new(-2.0, 2.0, -2.0, 2.0).unwrap();

        let result = viewport.zoomed(f64::NAN, viewport.center());

        assert_eq!(result, Err(ViewportError::NotFinite));
    }
}
