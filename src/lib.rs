pub mod controllers;
pub mod core;
pub mod presenters;

pub use controllers::cli::CliController;
pub use controllers::interactive::{RenderRequest, RenderWorker};
pub use controllers::session::ExplorerSession;
pub use crate::core::data::fractal_params::FractalParams;
pub use crate::core::data::pixel_grid::PixelGrid;
pub use crate::core::data::viewport::Viewport;
pub use crate::core::fractals::kinds::FractalKind;
pub use presenters::ppm::PpmFilePresenter;
