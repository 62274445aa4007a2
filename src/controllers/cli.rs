use crate::controllers::ports::file_presenter::FilePresenterPort;
use crate::controllers::session::ExplorerSession;
use crate::core::data::frame_buffer::FrameBuffer;
use log::info;
use std::path::Path;
use std::time::Instant;

/// One-shot render-to-file driver: renders the session's current state and
/// hands the frame to a file presenter.
pub struct CliController<P: FilePresenterPort> {
    presenter: P,
    frame: Option<FrameBuffer>,
}

impl<P: FilePresenterPort> CliController<P> {
    pub fn new(presenter: P) -> Self {
        Self {
            presenter,
            frame: None,
        }
    }

    pub fn generate(&mut self, session: &ExplorerSession) -> Result<(), Box<dyn std::error::Error>> {
        let grid = session.grid();
        let params = session.params();

        info!(
            "rendering {} at {}x{}, {} iterations",
            params.kind(),
            grid.width(),
            grid.height(),
            params.max_iterations()
        );

        let start = Instant::now();
        let frame = session.render()?;
        info!("rendered in {:?}", start.elapsed());

        self.frame = Some(frame);

        Ok(())
    }

    /// Writes the last generated frame, if any.
    pub fn write(&self, filepath: impl AsRef<Path>) -> std::io::Result<()> {
        if let Some(frame) = &self.frame {
            self.presenter.present(frame, &filepath)?;
            info!("saved to {}", filepath.as_ref().display());
        }

        Ok(())
    }
}
