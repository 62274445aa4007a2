use crate::controllers::ports::file_presenter::FilePresenterPort;
use crate::core::data::frame_buffer::{BYTES_PER_PIXEL, FrameBuffer};
use std::io::Write;
use std::path::Path;

/// Binary PPM (P6) output. The format carries RGB only, so the frame's
/// constant alpha channel is dropped on write.
pub struct PpmFilePresenter {}

impl FilePresenterPort for PpmFilePresenter {
    fn present(&self, frame: &FrameBuffer, filepath: impl AsRef<Path>) -> std::io::Result<()> {
        let mut file = std::fs::File::create(filepath)?;
        let width = frame.grid().width();
        let height = frame.grid().height();

        // PPM header: P6 means binary RGB, then width, height and max_colour
        writeln!(file, "P6")?;
        writeln!(file, "{} {}", width, height)?;
        writeln!(file, "255")?;

        for quad in frame.data().chunks_exact(BYTES_PER_PIXEL) {
            file.write_all(&quad[..3])?;
        }

        Ok(())
    }
}

impl Default for PpmFilePresenter {
    fn default() -> Self {
        Self::new()
    }
}

impl PpmFilePresenter {
    #[must_use]
    pub fn new() -> Self {
        Self {}
    }
}
