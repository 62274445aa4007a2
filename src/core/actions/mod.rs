pub mod cancellation;
pub mod iterate_frame;
pub mod render_frame;
pub mod shade_frame;
