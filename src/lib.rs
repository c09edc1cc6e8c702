//! Frame-loop driven 2D sketching on top of cairo.
//!
//! A sketch gets a [`Canvas`] bound to an image surface and draws into it with
//! immediate-mode primitives (background, transforms, colors, paths, shapes).
//! The [`frame`] module drives the sketch: `setup` once, then `draw` once per
//! frame until the loop is stopped.
//!
//! ```no_run
//! use sketchloop::{Canvas, FrameLoop, Immediate, sketch_fn};
//!
//! let surface = cairo::ImageSurface::create(cairo::Format::ARgb32, 200, 200)?;
//! let mut sketch = sketch_fn(|canvas: &mut Canvas| {
//!     canvas.background("white");
//!     canvas.fill_color("#ff8800");
//!     canvas.circle(100.0, 100.0, 50.0);
//! });
//! FrameLoop::new(Immediate).max_frames(1).run(&surface, &mut sketch)?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod canvas;
pub mod config;
pub mod demo;
pub mod draw;
pub mod error;
pub mod export;
pub mod frame;
pub mod util;

pub use canvas::{Canvas, PaintRecord, StyleState};
pub use config::Config;
pub use draw::{Color, ColorParseError, ColorValue, Path, PathSegment};
pub use error::SketchError;
pub use export::FrameExporter;
pub use frame::{
    FrameLoop, FrameScheduler, Immediate, IntervalScheduler, RunSummary, Sketch, StopHandle,
    StopReason, run, sketch_fn, sketch_fn_with_setup,
};
