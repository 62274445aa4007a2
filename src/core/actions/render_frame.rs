use crate::core::actions::cancellation::{CancelToken, Cancelled, NeverCancel};
use crate::core::actions::iterate_frame::iterate_frame_rayon_cancelable;
use crate::core::actions::shade_frame::{ShadeFrameError, shade_frame_cancelable};
use crate::core::colour::hue_wheel::HueWheel;
use crate::core::data::fractal_params::FractalParams;
use crate::core::data::frame_buffer::{FrameBuffer, FrameBufferError};
use crate::core::data::pixel_grid::PixelGrid;
use crate::core::data::viewport::Viewport;
use std::error::Error;
use std::fmt;

#[derive(Debug)]
pub enum RenderFrameError {
    Cancelled(Cancelled),
    ColourMap(Box<dyn Error>),
    FrameBuffer(FrameBufferError),
}

impl fmt::Display for RenderFrameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Cancelled(cancelled) => write!(f, "{}", cancelled),
            Self::ColourMap(err) => write!(f, "colour map error: {}", err),
            Self::FrameBuffer(err) => write!(f, "frame buffer error: {}", err),
        }
    }
}

impl Error for RenderFrameError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Cancelled(cancelled) => Some(cancelled),
            Self::ColourMap(err) => err.source(),
            Self::FrameBuffer(err) => Some(err),
        }
    }
}

impl From<ShadeFrameError> for RenderFrameError {
    fn from(err: ShadeFrameError) -> Self {
        match err {
            ShadeFrameError::Cancelled(cancelled) => Self::Cancelled(cancelled),
            ShadeFrameError::ColourMap(err) => Self::ColourMap(err),
            ShadeFrameError::FrameBuffer(err) => Self::FrameBuffer(err),
        }
    }
}

/// Renders one full frame: every pixel's plane coordinate goes through the
/// selected iteration function and the hue-wheel colour map into an opaque
/// RGBA buffer. Deterministic for fixed inputs; iteration runs on rayon.
pub fn render_frame(
    grid: PixelGrid,
    viewport: Viewport,
    params: &FractalParams,
) -> Result<FrameBuffer, RenderFrameError> {
    render_frame_cancelable(grid, viewport, params, &NeverCancel)
}

/// Like [`render_frame`], but a fired token aborts between pixel batches and
/// surfaces as [`RenderFrameError::Cancelled`].
pub fn render_frame_cancelable<C: CancelToken>(
    grid: PixelGrid,
    viewport: Viewport,
    params: &FractalParams,
    cancel: &C,
) -> Result<FrameBuffer, RenderFrameError> {
    let counts = iterate_frame_rayon_cancelable(grid, viewport, params, cancel)
        .map_err(RenderFrameError::Cancelled)?;

    let mapper = HueWheel::new(params.max_iterations());

    Ok(shade_frame_cancelable(counts, &mapper, grid, cancel)?)
}
