use crate::core::data::frame_buffer::FrameBuffer;
use std::time::Duration;

/// A completed frame, tagged with the request generation that produced it.
#[derive(Debug)]
pub struct FrameData {
    pub generation: u64,
    pub frame: FrameBuffer,
    pub render_duration: Duration,
}

/// A render that failed for a reason other than being superseded.
#[derive(Debug)]
pub struct RenderFailure {
    pub generation: u64,
    pub message: String,
}

#[derive(Debug)]
pub enum RenderEvent {
    Frame(FrameData),
    Error(RenderFailure),
}

/// Where the background render worker delivers its results. Implemented by
/// the presentation layer; called from the worker thread.
pub trait FrameSink: Send + Sync {
    fn present(&self, event: RenderEvent);
}
