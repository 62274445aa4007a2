use crate::core::data::frame_buffer::FrameBuffer;
use std::path::Path;

/// Writes a finished frame to a file in some raster format.
pub trait FilePresenterPort {
    fn present(&self, frame: &FrameBuffer, filepath: impl AsRef<Path>) -> std::io::Result<()>;
}
