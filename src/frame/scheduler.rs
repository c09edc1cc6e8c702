//! Host-side frame pacing for the frame loop.

use log::warn;
use std::ops::ControlFlow;
use std::thread;
use std::time::{Duration, Instant};

/// Default frame rate, matching a typical display refresh.
pub const DEFAULT_FPS: f64 = 60.0;

/// Decides when the next frame may start.
///
/// This is the `requestAnimationFrame` seam: the frame loop calls
/// [`FrameScheduler::next_frame`] after every frame and blocks until it
/// returns. Returning `ControlFlow::Break(())` ends the loop.
pub trait FrameScheduler {
    fn next_frame(&mut self) -> ControlFlow<()>;
}

/// Paces frames at a fixed rate by sleeping out the rest of each interval.
///
/// A frame that overruns its interval is not made up; the next one starts
/// immediately.
#[derive(Debug, Clone)]
pub struct IntervalScheduler {
    interval: Duration,
    last_frame: Option<Instant>,
}

impl IntervalScheduler {
    /// Creates a scheduler targeting `fps` frames per second.
    ///
    /// Rates whose interval is not a representable [`Duration`] (zero,
    /// negative, non-finite or vanishingly small) fall back to [`DEFAULT_FPS`].
    pub fn new(fps: f64) -> Self {
        let interval = match Duration::try_from_secs_f64(1.0 / fps) {
            Ok(interval) if fps.is_finite() && fps > 0.0 => interval,
            _ => {
                warn!("Invalid frame rate {}, using {}", fps, DEFAULT_FPS);
                Duration::from_secs_f64(1.0 / DEFAULT_FPS)
            }
        };
        Self {
            interval,
            last_frame: None,
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }
}

impl Default for IntervalScheduler {
    fn default() -> Self {
        Self::new(DEFAULT_FPS)
    }
}

impl FrameScheduler for IntervalScheduler {
    fn next_frame(&mut self) -> ControlFlow<()> {
        if let Some(last) = self.last_frame {
            let elapsed = last.elapsed();
            if elapsed < self.interval {
                thread::sleep(self.interval - elapsed);
            }
        }
        self.last_frame = Some(Instant::now());
        ControlFlow::Continue(())
    }
}

/// Starts every frame as soon as the previous one finishes.
///
/// Used for headless rendering where there is no display to keep up with.
#[derive(Debug, Clone, Copy, Default)]
pub struct Immediate;

impl FrameScheduler for Immediate {
    fn next_frame(&mut self) -> ControlFlow<()> {
        ControlFlow::Continue(())
    }
}
