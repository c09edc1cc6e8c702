//! Built-in sketches the command line runner can render.

use crate::canvas::Canvas;
use crate::draw::ColorValue;
use crate::frame::Sketch;

/// Names and one-line descriptions of the built-in sketches.
pub const DEMOS: &[(&str, &str)] = &[
    ("spinner", "A square rotating about the centre"),
    ("orbits", "Circles orbiting the centre at different speeds"),
    ("grid", "A line grid that slides diagonally"),
];

/// Looks up a built-in sketch by name (case-insensitive).
pub fn by_name(name: &str, background: ColorValue) -> Option<Box<dyn Sketch>> {
    match name.trim().to_lowercase().as_str() {
        "spinner" => Some(Box::new(Spinner { background })),
        "orbits" => Some(Box::new(Orbits { background })),
        "grid" => Some(Box::new(Grid { background })),
        _ => None,
    }
}

struct Spinner {
    background: ColorValue,
}

impl Sketch for Spinner {
    fn setup(&mut self, canvas: &mut Canvas) {
        canvas.stroke_color("black");
        canvas.stroke_weight(3.0);
    }

    fn draw(&mut self, canvas: &mut Canvas) {
        canvas.background(self.background.clone());

        let size = canvas.width().min(canvas.height()) as f64 / 3.0;
        canvas.push();
        canvas.translate(canvas.width() as f64 / 2.0, canvas.height() as f64 / 2.0);
        canvas.rotate(canvas.frame_count() as f64 * 3.0);
        canvas.fill_color("tomato");
        canvas.rectangle(-size / 2.0, -size / 2.0, size, size);
        canvas.pop();
    }
}

struct Orbits {
    background: ColorValue,
}

impl Sketch for Orbits {
    fn setup(&mut self, canvas: &mut Canvas) {
        canvas.no_stroke();
    }

    fn draw(&mut self, canvas: &mut Canvas) {
        canvas.background(self.background.clone());

        let radius = canvas.width().min(canvas.height()) as f64 / 3.0;
        let colors = ["gold", "teal", "crimson", "indigo"];
        canvas.push();
        canvas.translate(canvas.width() as f64 / 2.0, canvas.height() as f64 / 2.0);
        for (i, color) in colors.iter().enumerate() {
            let speed = (i + 1) as f64;
            let distance = radius * (i + 1) as f64 / colors.len() as f64;
            canvas.push();
            canvas.rotate(canvas.frame_count() as f64 * speed);
            canvas.fill_color(*color);
            canvas.circle(distance, 0.0, 12.0);
            // ellipses stay in the path until it is closed
            canvas.close_path();
            canvas.pop();
        }
        canvas.pop();
    }
}

struct Grid {
    background: ColorValue,
}

impl Sketch for Grid {
    fn setup(&mut self, canvas: &mut Canvas) {
        canvas.stroke_color(ColorValue::Rgba(40, 40, 40, 0.8));
        canvas.stroke_weight(1.5);
    }

    fn draw(&mut self, canvas: &mut Canvas) {
        canvas.background(self.background.clone());

        let spacing = 20.0;
        let offset = (canvas.frame_count() as f64) % spacing;
        let (width, height) = (canvas.width() as f64, canvas.height() as f64);

        let mut x = offset - spacing;
        while x <= width {
            canvas.line(x, 0.0, x, height);
            x += spacing;
        }
        let mut y = offset - spacing;
        while y <= height {
            canvas.line(0.0, y, width, y);
            y += spacing;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frame::{FrameLoop, Immediate};

    #[test]
    fn every_listed_demo_resolves() {
        for (name, _) in DEMOS {
            assert!(by_name(name, "white".into()).is_some(), "{name}");
        }
        assert!(by_name("SPINNER", "white".into()).is_some());
        assert!(by_name("nope", "white".into()).is_none());
    }

    #[test]
    fn demos_render_frames() {
        for (name, _) in DEMOS {
            let surface = cairo::ImageSurface::create(cairo::Format::ARgb32, 64, 48).unwrap();
            let mut sketch = by_name(name, "white".into()).unwrap();
            let summary = FrameLoop::new(Immediate)
                .max_frames(2)
                .run(&surface, &mut sketch)
                .unwrap();
            assert_eq!(summary.frames, 2);

            let canvas = Canvas::new(&surface).unwrap();
            assert_eq!(canvas.pixel(0, 47).map(|p| p[3]), Some(255), "{name}");
        }
    }
}
