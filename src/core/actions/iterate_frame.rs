use rayon::prelude::*;

use crate::core::actions::cancellation::{
    CANCEL_CHECK_INTERVAL_PIXELS, CancelToken, Cancelled, NeverCancel,
};
use crate::core::data::fractal_params::FractalParams;
use crate::core::data::pixel_grid::PixelGrid;
use crate::core::data::viewport::Viewport;

/// Escape counts for every pixel of the grid, row-major.
#[must_use]
pub fn iterate_frame(grid: PixelGrid, viewport: Viewport, params: &FractalParams) -> Vec<u32> {
    match iterate_frame_cancelable(grid, viewport, params, &NeverCancel) {
        Ok(counts) => counts,
        Err(Cancelled) => unreachable!("NeverCancel token should never signal cancellation"),
    }
}

/// Like [`iterate_frame`], but aborts early when the token fires. Checks the
/// token every [`CANCEL_CHECK_INTERVAL_PIXELS`] pixels.
pub fn iterate_frame_cancelable<C: CancelToken>(
    grid: PixelGrid,
    viewport: Viewport,
    params: &FractalParams,
    cancel: &C,
) -> Result<Vec<u32>, Cancelled> {
    let mut counts = Vec::with_capacity(grid.pixel_count());

    for py in 0..grid.height() {
        for px in 0..grid.width() {
            if counts.len() % CANCEL_CHECK_INTERVAL_PIXELS == 0 && cancel.is_cancelled() {
                return Err(Cancelled);
            }

            counts.push(params.escape_count(viewport.pixel_to_point(px, py, grid)));
        }
    }

    Ok(counts)
}

/// Escape counts computed in parallel with rayon's work-stealing scheduler.
/// Pixels are independent, so the split needs no locking; the collected
/// order matches the sequential row-major layout.
#[must_use]
pub fn iterate_frame_rayon(
    grid: PixelGrid,
    viewport: Viewport,
    params: &FractalParams,
) -> Vec<u32> {
    match iterate_frame_rayon_cancelable(grid, viewport, params, &NeverCancel) {
        Ok(counts) => counts,
        Err(Cancelled) => unreachable!("NeverCancel token should never signal cancellation"),
    }
}

pub fn iterate_frame_rayon_cancelable<C: CancelToken>(
    grid: PixelGrid,
    viewport: Viewport,
    params: &FractalParams,
    cancel: &C,
) -> Result<Vec<u32>, Cancelled> {
    let width = grid.width() as usize;

    (0..grid.pixel_count())
        .into_par_iter()
        .map(|index| {
            if index % CANCEL_CHECK_INTERVAL_PIXELS == 0 && cancel.is_cancelled() {
                return Err(Cancelled);
            }

            let px = (index % width) as u32;
            let py = (index / width) as u32;

            Ok(params.escape_count(viewport.pixel_to_point(px, py, grid)))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::fractals::kinds::FractalKind;
    use std::sync::atomic::{AtomicBool, Ordering};

    fn mandelbrot_params(max_iterations: u32) -> FractalParams {
        FractalParams::new(FractalKind::Mandelbrot, max_iterations).unwrap()
    }

    #[test]
    fn test_produces_one_count_per_pixel() {
        let grid = PixelGrid::new(16, 9).unwrap();
        let viewport = Viewport::default_for(FractalKind::Mandelbrot);
        let params = mandelbrot_params(25);

        let counts = iterate_frame(grid, viewport, &params);

        assert_eq!(counts.len(), 144);
        assert!(counts.iter().all(|&count| count <= 25));
    }

    #[test]
    fn test_counts_are_row_major() {
        let grid = PixelGrid::new(8, 4).unwrap();
        let viewport = Viewport::default_for(FractalKind::Mandelbrot);
        let params = mandelbrot_params(30);

        let counts = iterate_frame(grid, viewport, &params);

        for py in 0..4 {
            for px in 0..8 {
                let expected = params.escape_count(viewport.pixel_to_point(px, py, grid));

                assert_eq!(counts[(py * 8 + px) as usize], expected);
            }
        }
    }

    #[test]
    fn test_rayon_generates_same_results_as_sequential() {
        let grid = PixelGrid::new(32, 24).unwrap();
        let params = mandelbrot_params(60);

        for kind in FractalKind::ALL {
            let params = params.with_kind(*kind);
            let viewport = Viewport::default_for(*kind);

            let sequential = iterate_frame(grid, viewport, &params);
            let parallel = iterate_frame_rayon(grid, viewport, &params);

            assert_eq!(parallel, sequential);
        }
    }

    #[test]
    fn test_sequential_returns_cancelled_when_token_is_set() {
        let grid = PixelGrid::new(10, 10).unwrap();
        let viewport = Viewport::default_for(FractalKind::Mandelbrot);
        let params = mandelbrot_params(25);
        let cancelled = AtomicBool::new(true);
        let token = || cancelled.load(Ordering::Relaxed);

        let result = iterate_frame_cancelable(grid, viewport, &params, &token);

        assert_eq!(result, Err(Cancelled));
    }

    #[test]
    fn test_rayon_returns_cancelled_when_token_is_set() {
        let grid = PixelGrid::new(10, 10).unwrap();
        let viewport = Viewport::default_for(FractalKind::Mandelbrot);
        let params = mandelbrot_params(25);
        let cancelled = AtomicBool::new(true);
        let token = || cancelled.load(Ordering::Relaxed);

        let result = iterate_frame_rayon_cancelable(grid, viewport, &params, &token);

        assert_eq!(result, Err(Cancelled));
    }

    #[test]
    fn test_centre_pixel_of_default_mandelbrot_view_is_interior() {
        let grid = PixelGrid::new(9, 9).unwrap();
        let viewport = Viewport::default_for(FractalKind::Mandelbrot);
        let params = mandelbrot_params(50);

        let counts = iterate_frame(grid, viewport, &params);

        // pixel (4, 4) doesn't land exactly on the origin (the map divides by
        // the grid dimension), but close enough to stay interior
        let centre = counts[4 * 9 + 4];
        assert_eq!(centre, 50);
    }
}
