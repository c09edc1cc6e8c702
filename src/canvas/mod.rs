//! Drawing session bound to a cairo image surface.
//!
//! A [`Canvas`] owns the state an immediate-mode sketch needs between calls:
//! - the bound surface and its cairo context (always replaced together)
//! - the current [`Path`] that path primitives accumulate into
//! - fill/stroke styles, saved and restored alongside the cairo state
//!
//! Only one canvas is meant to draw into a surface at a time. Sketch callbacks
//! receive it by `&mut`, so primitives never run re-entrantly.

mod shapes;


use crate::draw::{BLACK, Color, ColorValue, Path};
use crate::error::{Result, SketchError};
use crate::util::degrees_to_radians;
use log::{debug, trace, warn};

/// Fill/stroke appearance applied at paint time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StyleState {
    pub fill: Color,
    pub stroke: Color,
    pub line_width: f64,
}

impl Default for StyleState {
    fn default() -> Self {
        Self {
            fill: BLACK,
            stroke: BLACK,
            line_width: 1.0,
        }
    }
}

/// What the most recent fill+stroke painted.
#[derive(Debug, Clone, PartialEq)]
pub struct PaintRecord {
    pub path: Path,
    pub fill: Color,
    pub stroke: Color,
    pub line_width: f64,
}

/// Surface handle and the context derived from it.
struct SurfaceBinding {
    surface: cairo::ImageSurface,
    context: cairo::Context,
}

impl SurfaceBinding {
    fn new(surface: cairo::ImageSurface) -> Result<Self> {
        let context = cairo::Context::new(&surface)?;
        Ok(Self { surface, context })
    }

    fn is_bound_to(&self, surface: &cairo::ImageSurface) -> bool {
        self.surface.to_raw_none() == surface.to_raw_none()
    }
}

/// Active drawing session: surface, context, current path and styles.
pub struct Canvas {
    binding: SurfaceBinding,
    current_path: Path,
    style: StyleState,
    saved_styles: Vec<StyleState>,
    last_paint: Option<PaintRecord>,
    paint_count: u64,
    frame_count: u64,
}

impl Canvas {
    /// Binds a new canvas to `surface`.
    pub fn new(surface: &cairo::ImageSurface) -> Result<Self> {
        Ok(Self {
            binding: SurfaceBinding::new(surface.clone())?,
            current_path: Path::new(),
            style: StyleState::default(),
            saved_styles: Vec::new(),
            last_paint: None,
            paint_count: 0,
            frame_count: 0,
        })
    }

    /// Validates a generic cairo surface and binds a canvas to it.
    ///
    /// Fails with [`SketchError::InvalidArgument`] unless `surface` is an image
    /// surface in a usable state.
    pub fn from_surface(surface: &cairo::Surface) -> Result<Self> {
        let image = image_surface(surface)?;
        Self::new(&image)
    }

    /// Re-binds the canvas to `surface`.
    ///
    /// Binding the surface that is already bound keeps the existing context,
    /// so transforms and styles carry over between frames. A different
    /// surface gets a fresh context and default styles.
    pub fn bind(&mut self, surface: &cairo::ImageSurface) -> Result<()> {
        if self.binding.is_bound_to(surface) {
            return Ok(());
        }
        debug!(
            "Binding canvas to new {}x{} surface",
            surface.width(),
            surface.height()
        );
        self.binding = SurfaceBinding::new(surface.clone())?;
        self.reset_styles();
        Ok(())
    }

    /// The currently bound surface.
    pub fn surface(&self) -> &cairo::ImageSurface {
        &self.binding.surface
    }

    /// The cairo context for drawing beyond what the primitives cover.
    pub fn context(&self) -> &cairo::Context {
        &self.binding.context
    }

    pub fn width(&self) -> i32 {
        self.binding.surface.width()
    }

    pub fn height(&self) -> i32 {
        self.binding.surface.height()
    }

    /// Number of frames the frame loop has completed on this canvas.
    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    pub(crate) fn advance_frame(&mut self) {
        self.frame_count += 1;
    }

    // ------------------------------------------------------------------------
    // Surface & context configuration
    // ------------------------------------------------------------------------

    /// Replaces the surface with a new, cleared one of the given size.
    ///
    /// Like resizing an HTML canvas, this drops all contents and resets the
    /// transform and styles.
    pub fn set_size(&mut self, width: i32, height: i32) -> Result<()> {
        let surface = cairo::ImageSurface::create(cairo::Format::ARgb32, width, height)?;
        debug!("Resizing canvas to {}x{}", width, height);
        self.binding = SurfaceBinding::new(surface)?;
        self.reset_styles();
        Ok(())
    }

    /// Clears the whole surface to transparent.
    pub fn clear(&mut self) {
        let (width, height) = (self.width() as f64, self.height() as f64);
        self.clear_region(0.0, 0.0, width, height);
    }

    /// Clears a rectangle (under the current transform) to transparent.
    pub fn clear_region(&mut self, x: f64, y: f64, width: f64, height: f64) {
        let ctx = &self.binding.context;
        if let Err(err) = ctx.save() {
            debug!("clear_region save failed: {}", err);
            return;
        }
        ctx.set_operator(cairo::Operator::Clear);
        ctx.new_path();
        ctx.rectangle(x, y, width, height);
        if let Err(err) = ctx.fill() {
            debug!("clear_region failed: {}", err);
        }
        if let Err(err) = ctx.restore() {
            debug!("clear_region restore failed: {}", err);
        }
    }

    /// Saves the transform and styles.
    pub fn push(&mut self) {
        if let Err(err) = self.binding.context.save() {
            debug!("push failed: {}", err);
            return;
        }
        self.saved_styles.push(self.style);
    }

    /// Restores the state saved by the matching [`Canvas::push`].
    ///
    /// An unmatched `pop` does nothing.
    pub fn pop(&mut self) {
        let Some(style) = self.saved_styles.pop() else {
            warn!("pop() called without a matching push(); ignoring");
            return;
        };
        self.style = style;
        if let Err(err) = self.binding.context.restore() {
            debug!("pop failed: {}", err);
        }
    }

    fn reset_styles(&mut self) {
        self.style = StyleState::default();
        self.saved_styles.clear();
    }

    // ------------------------------------------------------------------------
    // Style & transform primitives
    // ------------------------------------------------------------------------

    /// Sets the fill style. Malformed colors are logged and ignored.
    pub fn fill_color(&mut self, color: impl Into<ColorValue>) {
        if let Some(color) = normalize(color.into()) {
            self.style.fill = color;
        }
    }

    /// Sets the stroke style. Malformed colors are logged and ignored.
    pub fn stroke_color(&mut self, color: impl Into<ColorValue>) {
        if let Some(color) = normalize(color.into()) {
            self.style.stroke = color;
        }
    }

    pub fn no_stroke(&mut self) {
        self.stroke_color("transparent");
    }

    pub fn no_fill(&mut self) {
        self.fill_color("transparent");
    }

    /// Sets the line width used by strokes.
    pub fn stroke_weight(&mut self, width: f64) {
        self.style.line_width = width;
    }

    pub fn fill_style(&self) -> Color {
        self.style.fill
    }

    pub fn stroke_style(&self) -> Color {
        self.style.stroke
    }

    pub fn line_width(&self) -> f64 {
        self.style.line_width
    }

    /// Rotates the current transform by `angle` degrees (cumulative).
    pub fn rotate(&mut self, angle: f64) {
        self.binding.context.rotate(degrees_to_radians(angle));
    }

    /// Moves the origin by (`x`, `y`) (cumulative).
    pub fn translate(&mut self, x: f64, y: f64) {
        self.binding.context.translate(x, y);
    }

    /// The current user-to-device transform.
    pub fn transform(&self) -> cairo::Matrix {
        self.binding.context.matrix()
    }

    // ------------------------------------------------------------------------
    // Path construction
    // ------------------------------------------------------------------------

    /// Starts a path. The current path is never absent, so an open path is
    /// left untouched.
    pub fn begin_path(&mut self) {
        trace!(
            "begin_path with {} pending segments",
            self.current_path.segments().len()
        );
    }

    /// Moves the pen without painting.
    pub fn move_to(&mut self, x: f64, y: f64) {
        self.current_path.move_to(x, y);
    }

    /// Adds a line and immediately fills and strokes the path so far.
    pub fn line_to(&mut self, x: f64, y: f64) {
        self.current_path.line_to(x, y);
        self.fill_and_stroke();
    }

    /// Closes, paints and then discards the current path.
    pub fn close_path(&mut self) {
        self.current_path.close();
        self.fill_and_stroke();
        self.current_path = Path::new();
    }

    pub fn current_path(&self) -> &Path {
        &self.current_path
    }

    /// The most recent fill+stroke, if anything has been painted.
    pub fn last_paint(&self) -> Option<&PaintRecord> {
        self.last_paint.as_ref()
    }

    /// Number of fill+stroke passes issued so far.
    pub fn paint_count(&self) -> u64 {
        self.paint_count
    }

    fn fill_and_stroke(&mut self) {
        let ctx = &self.binding.context;
        let style = self.style;

        self.current_path.replay(ctx);
        style.fill.apply_source(ctx);
        if let Err(err) = ctx.fill_preserve() {
            debug!("fill failed: {}", err);
        }
        style.stroke.apply_source(ctx);
        ctx.set_line_width(style.line_width);
        if let Err(err) = ctx.stroke() {
            debug!("stroke failed: {}", err);
        }

        self.paint_count += 1;
        self.last_paint = Some(PaintRecord {
            path: self.current_path.clone(),
            fill: style.fill,
            stroke: style.stroke,
            line_width: style.line_width,
        });
    }

    // ------------------------------------------------------------------------
    // Inspection
    // ------------------------------------------------------------------------

    /// Reads one pixel as premultiplied `[r, g, b, a]` bytes.
    ///
    /// Returns `None` outside the surface or if the data cannot be borrowed.
    pub fn pixel(&self, x: i32, y: i32) -> Option<[u8; 4]> {
        if x < 0 || y < 0 || x >= self.width() || y >= self.height() {
            return None;
        }
        let surface = &self.binding.surface;
        surface.flush();
        let stride = surface.stride() as usize;
        let offset = y as usize * stride + x as usize * 4;

        let mut pixel = None;
        surface
            .with_data(|data| {
                if let Some(bytes) = data.get(offset..offset + 4) {
                    // ARGB32 is stored as a native-endian u32.
                    let argb = u32::from_ne_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]);
                    pixel = Some([
                        (argb >> 16) as u8,
                        (argb >> 8) as u8,
                        argb as u8,
                        (argb >> 24) as u8,
                    ]);
                }
            })
            .ok()?;
        pixel
    }
}

fn normalize(value: ColorValue) -> Option<Color> {
    match value.to_color() {
        Ok(color) => Some(color),
        Err(err) => {
            warn!("Ignoring color {:?}: {}", value, err);
            None
        }
    }
}

/// Checks that a generic surface is a usable image surface.
pub(crate) fn image_surface(surface: &cairo::Surface) -> Result<cairo::ImageSurface> {
    if let Err(err) = surface.status() {
        return Err(SketchError::InvalidArgument(format!(
            "surface is in an error state: {}",
            err
        )));
    }
    cairo::ImageSurface::try_from(surface.clone()).map_err(|other| {
        SketchError::InvalidArgument(format!(
            "expected an image surface, got {:?}",
            other.type_()
        ))
    })
}
