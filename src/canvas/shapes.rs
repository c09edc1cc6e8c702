//! Shape helpers built on the path primitives.

use super::Canvas;
use crate::draw::ColorValue;

impl Canvas {
    /// Fills the whole surface with `color`, leaving styles and transform untouched.
    pub fn background(&mut self, color: impl Into<ColorValue>) {
        self.push();
        self.fill_color(color);
        self.no_stroke();
        let (width, height) = (self.width() as f64, self.height() as f64);
        self.rectangle(0.0, 0.0, width, height);
        self.pop();
    }

    /// Draws a rectangle clockwise from (`x`, `y`), then resets the path.
    ///
    /// Every edge paints as it is added, so the fill/stroke is applied three
    /// times before the final closed pass.
    pub fn rectangle(&mut self, x: f64, y: f64, width: f64, height: f64) {
        let corners = [
            (x + width, y),
            (x + width, y + height),
            (x, y + height),
        ];

        self.begin_path();
        self.move_to(x, y);
        for (end_x, end_y) in corners {
            self.line_to(end_x, end_y);
        }
        self.close_path();
    }

    /// Draws a circle centred on (`x`, `y`).
    pub fn circle(&mut self, x: f64, y: f64, diameter: f64) {
        self.ellipse(x, y, diameter, diameter);
    }

    /// Adds an ellipse centred on (`x`, `y`) to the current path and paints it.
    ///
    /// The path is not reset, so later paints in the same path repaint it.
    pub fn ellipse(&mut self, x: f64, y: f64, width: f64, height: f64) {
        self.current_path.ellipse(x, y, width / 2.0, height / 2.0);
        self.fill_and_stroke();
    }

    /// Draws a straight segment, then resets the path.
    pub fn line(&mut self, start_x: f64, start_y: f64, end_x: f64, end_y: f64) {
        self.begin_path();
        self.move_to(start_x, start_y);
        self.line_to(end_x, end_y);
        self.close_path();
    }
}
