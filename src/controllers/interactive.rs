//! Background render worker for interactive exploration.
//!
//! A presentation layer submits [`RenderRequest`]s as the user pans, zooms
//! or resizes; each submission supersedes the in-flight render, whose cancel
//! token observes the generation mismatch. Completed frames come back
//! through the [`FrameSink`] port; stale frames are dropped.

use crate::controllers::ports::frame_sink::{FrameData, FrameSink, RenderEvent, RenderFailure};
use crate::core::actions::cancellation::CancelToken;
use crate::core::actions::render_frame::{RenderFrameError, render_frame_cancelable};
use crate::core::data::fractal_params::FractalParams;
use crate::core::data::frame_buffer::FrameBuffer;
use crate::core::data::pixel_grid::PixelGrid;
use crate::core::data::viewport::Viewport;
use log::debug;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, Condvar, Mutex};
use std::thread::{self, JoinHandle};
use std::time::Instant;

/// Everything one render needs, captured at submission time.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct RenderRequest {
    pub grid: PixelGrid,
    pub viewport: Viewport,
    pub params: FractalParams,
}

struct SharedState {
    generation: AtomicU64,
    last_completed_generation: AtomicU64,
    latest_request: Mutex<Option<(u64, RenderRequest)>>,
    wake: Condvar,
    shutdown: AtomicBool,
    sink: Arc<dyn FrameSink>,
}

pub struct RenderWorker {
    shared: Arc<SharedState>,
    worker: Option<JoinHandle<()>>,
}

impl RenderWorker {
    pub fn new(sink: Arc<dyn FrameSink>) -> Self {
        let shared = Arc::new(SharedState {
            generation: AtomicU64::new(0),
            last_completed_generation: AtomicU64::new(0),
            latest_request: Mutex::new(None),
            wake: Condvar::new(),
            shutdown: AtomicBool::new(false),
            sink,
        });

        let worker_shared = Arc::clone(&shared);

        let worker = thread::spawn(move || {
            Self::worker_loop(&worker_shared);
        });

        Self {
            shared,
            worker: Some(worker),
        }
    }

    /// Queues a request, superseding whatever is in flight. Returns the
    /// request's generation, which tags the resulting frame.
    pub fn submit(&self, request: RenderRequest) -> u64 {
        let generation = self.shared.generation.fetch_add(1, Ordering::SeqCst) + 1;

        {
            let mut guard = self.shared.latest_request.lock().unwrap();
            *guard = Some((generation, request));
        }

        self.shared.wake.notify_one();

        generation
    }

    pub fn shutdown(&mut self) {
        self.shared.shutdown.store(true, Ordering::Release);
        self.shared.wake.notify_one();

        if let Some(handle) = self.worker.take() {
            let _ = handle.join();
        }
    }

    #[must_use]
    pub fn last_completed_generation(&self) -> u64 {
        self.shared
            .last_completed_generation
            .load(Ordering::Acquire)
    }

    fn worker_loop(shared: &Arc<SharedState>) {
        loop {
            let (job_generation, request) = {
                let mut guard = shared.latest_request.lock().unwrap();
                loop {
                    if shared.shutdown.load(Ordering::Acquire) {
                        return;
                    }

                    if let Some(job) = guard.take() {
                        break job;
                    }

                    guard = shared.wake.wait(guard).unwrap();
                }
            };

            let cancel_token = || {
                shared.shutdown.load(Ordering::Relaxed)
                    || job_generation != shared.generation.load(Ordering::Relaxed)
            };

            let start = Instant::now();
            let result = Self::render(&request, &cancel_token);
            let render_duration = start.elapsed();

            match result {
                Ok(frame) => {
                    let current_generation = shared.generation.load(Ordering::Acquire);

                    if job_generation != current_generation {
                        debug!(
                            "dropping stale frame {} (latest is {})",
                            job_generation, current_generation
                        );
                        continue;
                    }

                    debug!(
                        "frame {} rendered in {:?}",
                        job_generation, render_duration
                    );

                    shared.sink.present(RenderEvent::Frame(FrameData {
                        generation: job_generation,
                        frame,
                        render_duration,
                    }));

                    shared
                        .last_completed_generation
                        .store(job_generation, Ordering::Release);
                }
                Err(RenderOutcome::Cancelled) => {
                    continue;
                }
                Err(RenderOutcome::Error(message)) => {
                    let current_generation = shared.generation.load(Ordering::Acquire);

                    if job_generation != current_generation {
                        continue;
                    }

                    shared.sink.present(RenderEvent::Error(RenderFailure {
                        generation: job_generation,
                        message,
                    }));

                    shared
                        .last_completed_generation
                        .store(job_generation, Ordering::Release);
                }
            }
        }
    }

    fn render<C: CancelToken>(
        request: &RenderRequest,
        cancel: &C,
    ) -> Result<FrameBuffer, RenderOutcome> {
        render_frame_cancelable(request.grid, request.viewport, &request.params, cancel).map_err(
            |err| match err {
                RenderFrameError::Cancelled(_) => RenderOutcome::Cancelled,
                other => RenderOutcome::Error(other.to_string()),
            },
        )
    }
}

enum RenderOutcome {
    Cancelled,
    Error(String),
}

impl Drop for RenderWorker {
    fn drop(&mut self) {
        self.shutdown();
    }
}
