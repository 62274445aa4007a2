use crate::core::actions::cancellation::{
    CANCEL_CHECK_INTERVAL_PIXELS, CancelToken, Cancelled, NeverCancel,
};
use crate::core::colour::colour_map::ColourMap;
use crate::core::data::colour::Colour;
use crate::core::data::frame_buffer::{
    BYTES_PER_PIXEL, FrameBuffer, FrameBufferData, FrameBufferError, OPAQUE_ALPHA,
};
use crate::core::data::pixel_grid::PixelGrid;
use std::error::Error;
use std::fmt;

#[derive(Debug)]
pub enum ShadeFrameError {
    /// The operation was cancelled before completion.
    Cancelled(Cancelled),
    /// A colour mapping error occurred.
    ColourMap(Box<dyn Error>),
    /// A frame buffer construction error occurred.
    FrameBuffer(FrameBufferError),
}

impl fmt::Display for ShadeFrameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Cancelled(cancelled) => write!(f, "{}", cancelled),
            Self::ColourMap(err) => write!(f, "colour map error: {}", err),
            Self::FrameBuffer(err) => write!(f, "frame buffer error: {}", err),
        }
    }
}

impl Error for ShadeFrameError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Cancelled(cancelled) => Some(cancelled),
            Self::ColourMap(err) => err.source(),
            Self::FrameBuffer(err) => Some(err),
        }
    }
}

impl From<FrameBufferError> for ShadeFrameError {
    fn from(err: FrameBufferError) -> Self {
        Self::FrameBuffer(err)
    }
}

/// Shades per-pixel values into an opaque RGBA frame through a colour map.
///
/// For cancel-aware shading, use [`shade_frame_cancelable`].
pub fn shade_frame<T, CMap: ColourMap<T>>(
    values: Vec<T>,
    mapper: &CMap,
    grid: PixelGrid,
) -> Result<FrameBuffer, ShadeFrameError> {
    shade_frame_cancelable(values, mapper, grid, &NeverCancel)
}

/// Streams RGBA bytes into a preallocated buffer, checking the cancel token
/// every [`CANCEL_CHECK_INTERVAL_PIXELS`] pixels.
pub fn shade_frame_cancelable<T, CMap, C>(
    values: Vec<T>,
    mapper: &CMap,
    grid: PixelGrid,
    cancel: &C,
) -> Result<FrameBuffer, ShadeFrameError>
where
    CMap: ColourMap<T>,
    C: CancelToken,
{
    let mut data: FrameBufferData = Vec::with_capacity(grid.pixel_count() * BYTES_PER_PIXEL);

    for (i, value) in values.into_iter().enumerate() {
        if i % CANCEL_CHECK_INTERVAL_PIXELS == 0 && cancel.is_cancelled() {
            return Err(ShadeFrameError::Cancelled(Cancelled));
        }

        let Colour { r, g, b } = mapper.map(value).map_err(ShadeFrameError::ColourMap)?;

        data.push(r);
        data.push(g);
        data.push(b);
        data.push(OPAQUE_ALPHA);
    }

    FrameBuffer::from_rgba(grid, data).map_err(ShadeFrameError::FrameBuffer)
}
