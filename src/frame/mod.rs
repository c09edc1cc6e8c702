//! Frame driver: one-time setup, then a draw callback once per frame.
//!
//! [`FrameLoop`] binds a [`Canvas`] to the caller's surface, runs
//! [`Sketch::setup`] once and then calls [`Sketch::draw`] once per frame,
//! pacing frames with an injected [`FrameScheduler`]. The loop ends when its
//! [`StopHandle`] is triggered, the frame limit is reached or the scheduler
//! breaks; with none of those it runs forever.

mod scheduler;

#[cfg(test)]
mod tests;

pub use scheduler::{DEFAULT_FPS, FrameScheduler, Immediate, IntervalScheduler};

use crate::canvas::{Canvas, image_surface};
use crate::error::Result;
use crate::export::FrameExporter;
use log::{debug, info};
use std::ops::ControlFlow;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// User code driven by the frame loop.
pub trait Sketch {
    /// Called once, before the first frame, with the surface already bound.
    fn setup(&mut self, _canvas: &mut Canvas) {}

    /// Called once per frame.
    fn draw(&mut self, canvas: &mut Canvas);
}

impl<T: Sketch + ?Sized> Sketch for Box<T> {
    fn setup(&mut self, canvas: &mut Canvas) {
        (**self).setup(canvas);
    }

    fn draw(&mut self, canvas: &mut Canvas) {
        (**self).draw(canvas);
    }
}

/// [`Sketch`] built from closures.
pub struct FnSketch<S, D> {
    setup: Option<S>,
    draw: D,
}

impl<S, D> Sketch for FnSketch<S, D>
where
    S: FnOnce(&mut Canvas),
    D: FnMut(&mut Canvas),
{
    fn setup(&mut self, canvas: &mut Canvas) {
        if let Some(setup) = self.setup.take() {
            setup(canvas);
        }
    }

    fn draw(&mut self, canvas: &mut Canvas) {
        (self.draw)(canvas);
    }
}

/// Wraps a draw closure as a sketch with no setup.
pub fn sketch_fn<D>(draw: D) -> FnSketch<fn(&mut Canvas), D>
where
    D: FnMut(&mut Canvas),
{
    FnSketch { setup: None, draw }
}

/// Wraps setup and draw closures as a sketch.
pub fn sketch_fn_with_setup<S, D>(setup: S, draw: D) -> FnSketch<S, D>
where
    S: FnOnce(&mut Canvas),
    D: FnMut(&mut Canvas),
{
    FnSketch {
        setup: Some(setup),
        draw,
    }
}

/// Cloneable flag that ends a running frame loop after the current frame.
#[derive(Debug, Clone, Default)]
pub struct StopHandle {
    flag: Arc<AtomicBool>,
}

impl StopHandle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn stop(&self) {
        self.flag.store(true, Ordering::SeqCst);
    }

    pub fn is_stopped(&self) -> bool {
        self.flag.load(Ordering::SeqCst)
    }

    /// The underlying flag, for registering with signal handlers.
    pub fn flag(&self) -> Arc<AtomicBool> {
        Arc::clone(&self.flag)
    }
}

/// Why a frame loop returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    Stopped,
    FrameLimit,
    Scheduler,
}

/// Outcome of a finished run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub frames: u64,
    pub exported: usize,
    pub reason: StopReason,
}

/// Configurable frame loop.
pub struct FrameLoop<S = IntervalScheduler> {
    scheduler: S,
    max_frames: Option<u64>,
    stop: StopHandle,
    exporter: Option<FrameExporter>,
}

impl Default for FrameLoop<IntervalScheduler> {
    fn default() -> Self {
        Self::new(IntervalScheduler::default())
    }
}

impl<S: FrameScheduler> FrameLoop<S> {
    pub fn new(scheduler: S) -> Self {
        Self {
            scheduler,
            max_frames: None,
            stop: StopHandle::new(),
            exporter: None,
        }
    }

    /// Stops after `frames` frames; `0` means unlimited.
    pub fn max_frames(mut self, frames: u64) -> Self {
        self.max_frames = (frames > 0).then_some(frames);
        self
    }

    pub fn with_exporter(mut self, exporter: FrameExporter) -> Self {
        self.exporter = Some(exporter);
        self
    }

    pub fn with_stop_handle(mut self, stop: StopHandle) -> Self {
        self.stop = stop;
        self
    }

    pub fn stop_handle(&self) -> StopHandle {
        self.stop.clone()
    }

    pub fn exporter(&self) -> Option<&FrameExporter> {
        self.exporter.as_ref()
    }

    /// Runs `sketch` against `surface` until the loop is stopped.
    ///
    /// Fails with [`crate::SketchError::InvalidArgument`] before calling the
    /// sketch if `surface` is not a usable image surface.
    pub fn run(&mut self, surface: &cairo::Surface, sketch: &mut impl Sketch) -> Result<RunSummary> {
        let mut surface = image_surface(surface)?;
        let mut canvas = Canvas::new(&surface)?;
        let mut exported = 0;

        info!(
            "Starting frame loop on {}x{} surface",
            canvas.width(),
            canvas.height()
        );
        sketch.setup(&mut canvas);

        let reason = loop {
            if self.stop.is_stopped() {
                break StopReason::Stopped;
            }

            // Follow surfaces swapped in by set_size.
            surface = canvas.surface().clone();
            canvas.bind(&surface)?;
            sketch.draw(&mut canvas);

            if let Some(exporter) = self.exporter.as_mut()
                && exporter
                    .export(canvas.surface(), canvas.frame_count())?
                    .is_some()
            {
                exported += 1;
            }
            canvas.advance_frame();

            if self
                .max_frames
                .is_some_and(|max| canvas.frame_count() >= max)
            {
                break StopReason::FrameLimit;
            }
            if self.stop.is_stopped() {
                break StopReason::Stopped;
            }
            if let ControlFlow::Break(()) = self.scheduler.next_frame() {
                break StopReason::Scheduler;
            }
            debug!("Frame {} done", canvas.frame_count());
        };

        info!(
            "Frame loop finished after {} frames ({:?})",
            canvas.frame_count(),
            reason
        );
        Ok(RunSummary {
            frames: canvas.frame_count(),
            exported,
            reason,
        })
    }
}

/// Runs `sketch` on `surface` at the default frame rate, forever.
pub fn run(surface: &cairo::Surface, sketch: &mut impl Sketch) -> Result<RunSummary> {
    FrameLoop::default().run(surface, sketch)
}
