use crate::core::actions::render_frame::{RenderFrameError, render_frame};
use crate::core::data::fractal_params::FractalParams;
use crate::core::data::frame_buffer::FrameBuffer;
use crate::core::data::pixel_grid::PixelGrid;
use crate::core::data::viewport::{Viewport, ViewportError};
use crate::core::fractals::kinds::FractalKind;

/// Click-to-zoom factor: each click halves the visible extent.
pub const CLICK_ZOOM_IN_FACTOR: f64 = 0.5;
/// Explicit zoom-out doubles the visible extent around the current centre.
pub const ZOOM_OUT_FACTOR: f64 = 2.0;

/// One exploration session: the viewport, parameters and grid a presentation
/// layer drives between frames. All state lives here, passed explicitly into
/// each render; nothing is process-global.
#[derive(Debug, Clone, PartialEq)]
pub struct ExplorerSession {
    grid: PixelGrid,
    viewport: Viewport,
    params: FractalParams,
}

impl ExplorerSession {
    #[must_use]
    pub fn new(grid: PixelGrid, params: FractalParams) -> Self {
        Self {
            grid,
            viewport: Viewport::default_for(params.kind()),
            params,
        }
    }

    #[must_use]
    pub fn grid(&self) -> PixelGrid {
        self.grid
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    #[must_use]
    pub fn params(&self) -> FractalParams {
        self.params
    }

    /// Switches fractal kind and resets the viewport to that kind's default
    /// extents, as changing the selection does in the UI.
    pub fn select_fractal(&mut self, kind: FractalKind) {
        self.params = self.params.with_kind(kind);
        self.reset();
    }

    /// Restores the default extents for the current kind.
    pub fn reset(&mut self) {
        self.viewport = Viewport::default_for(self.params.kind());
    }

    /// New raster dimensions, viewport untouched.
    pub fn resize(&mut self, grid: PixelGrid) {
        self.grid = grid;
    }

    /// Zooms in around the plane coordinate under the clicked pixel.
    pub fn zoom_in_at(&mut self, px: u32, py: u32) -> Result<(), ViewportError> {
        let centre = self.viewport.pixel_to_point(px, py, self.grid);

        self.viewport = self.viewport.zoomed(CLICK_ZOOM_IN_FACTOR, centre)?;
        Ok(())
    }

    /// Zooms out around the current viewport centre.
    pub fn zoom_out(&mut self) -> Result<(), ViewportError> {
        self.viewport = self.viewport.zoomed(ZOOM_OUT_FACTOR, self.viewport.center())?;
        Ok(())
    }

    /// Replaces the render parameters (constant, scale, iteration cap).
    pub fn set_params(&mut self, params: FractalParams) {
        self.params = params;
    }

    /// One full frame for the current state; the buffer belongs to the
    /// caller.
    pub fn render(&self) -> Result<FrameBuffer, RenderFrameError> {
        render_frame(self.grid, self.viewport, &self.params)
    }
}
