use super::*;
use crate::error::SketchError;
use std::cell::RefCell;
use std::rc::Rc;
use tempfile::TempDir;

fn image(width: i32, height: i32) -> cairo::ImageSurface {
    cairo::ImageSurface::create(cairo::Format::ARgb32, width, height).unwrap()
}

/// Allows a fixed number of frames, then breaks.
struct Budget(u32);

impl FrameScheduler for Budget {
    fn next_frame(&mut self) -> ControlFlow<()> {
        if self.0 == 0 {
            return ControlFlow::Break(());
        }
        self.0 -= 1;
        ControlFlow::Continue(())
    }
}

#[test]
fn setup_runs_once_before_first_draw() {
    let events = Rc::new(RefCell::new(Vec::new()));
    let setup_events = Rc::clone(&events);
    let draw_events = Rc::clone(&events);

    let mut sketch = sketch_fn_with_setup(
        move |_canvas: &mut Canvas| setup_events.borrow_mut().push("setup"),
        move |_canvas: &mut Canvas| draw_events.borrow_mut().push("draw"),
    );

    let summary = FrameLoop::new(Immediate)
        .max_frames(3)
        .run(&image(10, 10), &mut sketch)
        .unwrap();

    assert_eq!(summary.frames, 3);
    assert_eq!(summary.reason, StopReason::FrameLimit);
    assert_eq!(*events.borrow(), vec!["setup", "draw", "draw", "draw"]);
}

#[test]
fn draw_runs_once_per_scheduled_frame() {
    let mut draws = 0;
    let mut sketch = sketch_fn(|_canvas: &mut Canvas| draws += 1);

    let summary = FrameLoop::new(Budget(4))
        .run(&image(10, 10), &mut sketch)
        .unwrap();

    // the first frame runs before the scheduler is consulted
    assert_eq!(summary.frames, 5);
    assert_eq!(summary.reason, StopReason::Scheduler);
    drop(sketch);
    assert_eq!(draws, 5);
}

#[test]
fn non_image_surface_is_rejected_before_callbacks() {
    let called = Rc::new(RefCell::new(false));
    let setup_called = Rc::clone(&called);
    let draw_called = Rc::clone(&called);
    let mut sketch = sketch_fn_with_setup(
        move |_canvas: &mut Canvas| *setup_called.borrow_mut() = true,
        move |_canvas: &mut Canvas| *draw_called.borrow_mut() = true,
    );

    let recording = cairo::RecordingSurface::create(cairo::Content::ColorAlpha, None).unwrap();
    let result = FrameLoop::new(Immediate)
        .max_frames(1)
        .run(&recording, &mut sketch);

    assert!(matches!(result, Err(SketchError::InvalidArgument(_))));
    assert!(!*called.borrow());
}

#[test]
fn stop_handle_ends_loop_from_inside_draw() {
    let frame_loop = FrameLoop::new(Immediate);
    let stop = frame_loop.stop_handle();
    let mut frame_loop = frame_loop;

    let mut sketch = sketch_fn(move |canvas: &mut Canvas| {
        if canvas.frame_count() == 2 {
            stop.stop();
        }
    });

    let summary = frame_loop.run(&image(10, 10), &mut sketch).unwrap();
    assert_eq!(summary.frames, 3);
    assert_eq!(summary.reason, StopReason::Stopped);
}

#[test]
fn pre_stopped_handle_skips_all_frames() {
    let stop = StopHandle::new();
    stop.stop();
    let mut draws = 0;
    let mut sketch = sketch_fn(|_canvas: &mut Canvas| draws += 1);

    let summary = FrameLoop::new(Immediate)
        .with_stop_handle(stop)
        .run(&image(10, 10), &mut sketch)
        .unwrap();

    assert_eq!(summary.frames, 0);
    drop(sketch);
    assert_eq!(draws, 0);
}

#[test]
fn canvas_state_persists_between_frames() {
    struct Drift {
        offsets: Vec<f64>,
    }

    impl Sketch for Drift {
        fn setup(&mut self, canvas: &mut Canvas) {
            canvas.fill_color("red");
        }

        fn draw(&mut self, canvas: &mut Canvas) {
            canvas.translate(1.0, 0.0);
            self.offsets.push(canvas.transform().x0());
            assert_eq!(canvas.fill_style(), crate::draw::RED);
        }
    }

    let mut sketch = Drift { offsets: Vec::new() };
    FrameLoop::new(Immediate)
        .max_frames(3)
        .run(&image(10, 10), &mut sketch)
        .unwrap();

    assert_eq!(sketch.offsets, vec![1.0, 2.0, 3.0]);
}

#[test]
fn loop_follows_surface_resized_in_setup() {
    let sizes = Rc::new(RefCell::new(Vec::new()));
    let seen = Rc::clone(&sizes);
    let mut sketch = sketch_fn_with_setup(
        |canvas: &mut Canvas| canvas.set_size(32, 16).unwrap(),
        move |canvas: &mut Canvas| seen.borrow_mut().push((canvas.width(), canvas.height())),
    );

    FrameLoop::new(Immediate)
        .max_frames(2)
        .run(&image(10, 10), &mut sketch)
        .unwrap();

    assert_eq!(*sizes.borrow(), vec![(32, 16), (32, 16)]);
}

#[test]
fn exporter_writes_rendered_frames() {
    let temp = TempDir::new().unwrap();
    let exporter = FrameExporter::new(temp.path(), "sketch", 1).unwrap();
    let mut sketch = sketch_fn(|canvas: &mut Canvas| canvas.background("navy"));

    let mut frame_loop = FrameLoop::new(Immediate)
        .max_frames(2)
        .with_exporter(exporter);
    let summary = frame_loop.run(&image(8, 8), &mut sketch).unwrap();

    assert_eq!(summary.exported, 2);
    let exporter = frame_loop.exporter().unwrap();
    assert_eq!(exporter.written(), 2);
    assert!(exporter.last_written().unwrap().ends_with("sketch_00001.png"));
    assert!(temp.path().join("sketch_00000.png").exists());
    assert!(temp.path().join("sketch_00001.png").exists());
}

#[test]
fn draws_reach_the_callers_surface() {
    let surface = image(20, 20);
    let mut sketch = sketch_fn(|canvas: &mut Canvas| canvas.background("white"));

    FrameLoop::new(Immediate)
        .max_frames(1)
        .run(&surface, &mut sketch)
        .unwrap();

    let canvas = Canvas::new(&surface).unwrap();
    assert_eq!(canvas.pixel(10, 10), Some([255, 255, 255, 255]));
}
